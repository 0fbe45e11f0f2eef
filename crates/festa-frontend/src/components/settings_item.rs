use gpui::{App, IntoElement, ParentElement, Styled, Window, div, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};

/// A labeled settings row with the control aligned to the right and an
/// optional muted description under the label.
#[derive(Default, IntoElement)]
pub struct SettingsItem {
    label: &'static str,
    description: Option<&'static str>,
    child: Option<gpui::AnyElement>,
}

impl SettingsItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl gpui::RenderOnce for SettingsItem {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(div().child(self.label).font_semibold())
                    .when(self.description.is_some(), |this| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(self.description.unwrap()),
                        )
                    }),
            )
            .when(self.child.is_some(), |this| this.child(self.child.unwrap()))
    }
}
