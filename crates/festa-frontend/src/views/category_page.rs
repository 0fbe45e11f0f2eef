use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    data,
    entities::DataEntities,
    views::{StageRequest, StageUi},
};

/// The celebrant picks a dinner direction; the concrete dish and place are
/// drawn at random from that category's tables.
pub struct CategoryPage {
    data: DataEntities,
}

impl CategoryPage {
    pub fn new(data: &DataEntities, _: &mut Window, _: &mut Context<Self>) -> Self {
        Self { data: data.clone() }
    }

    fn choose(&mut self, index: usize, cx: &mut Context<Self>) {
        let Some(category) = data::category(index) else {
            return;
        };

        let mut rng = rand::thread_rng();
        let pick = category.pick_spread(&mut rng);
        self.data.party.update(cx, |party, cx| {
            party.choose_category(index, pick);
            cx.notify();
        });
        cx.emit(StageRequest(StageUi::Result));
    }
}

impl gpui::EventEmitter<StageRequest> for CategoryPage {}

impl Render for CategoryPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .child(
                div()
                    .child("What are we feasting on tonight?")
                    .text_2xl()
                    .font_bold(),
            )
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child("Pick a direction. The menu and the place draw themselves."),
            )
            .child(
                div().flex().flex_col().gap_3().min_w_72().children(
                    data::CATEGORIES.iter().enumerate().map(|(index, category)| {
                        Button::new(("category", index))
                            .outline()
                            .label(format!("{} {}", category.emoji, category.name))
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.choose(index, cx);
                            }))
                    }),
                ),
            )
    }
}
