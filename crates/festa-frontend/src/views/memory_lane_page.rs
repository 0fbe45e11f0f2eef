use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{
    data,
    entities::DataEntities,
    views::{StageRequest, StageUi},
};

/// A wall of captioned moments from the last few years. Pure display.
pub struct MemoryLanePage {
    data: DataEntities,
}

impl MemoryLanePage {
    pub fn new(data: &DataEntities, _: &mut Window, _: &mut Context<Self>) -> Self {
        Self { data: data.clone() }
    }
}

impl gpui::EventEmitter<StageRequest> for MemoryLanePage {}

impl Render for MemoryLanePage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let name = {
            let settings = self.data.settings.read(cx);
            settings.config.celebration.celebrant_name.clone()
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Memory lane").text_2xl().font_bold())
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("A few of our favourite {name} moments.")),
            )
            .children(data::MEMORIES.iter().map(|memory| {
                GroupBox::new()
                    .outline()
                    .child(div().child(memory.year).font_bold())
                    .child(div().child(memory.caption))
            }))
            .child(
                Button::new("back-to-party")
                    .outline()
                    .label("Back to the party")
                    .on_click(cx.listener(|_, _, _, cx| {
                        cx.emit(StageRequest(StageUi::PartyRoom));
                    })),
            )
    }
}
