use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{
    components::settings_item::SettingsItem,
    entities::DataEntities,
    views::{StageRequest, StageUi},
};

/// Reveals what the category spin landed on. Without a chosen category this
/// page only offers the way back; it never fabricates a pick itself.
pub struct ResultPage {
    data: DataEntities,
}

impl ResultPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.party, window, |_, _, _, cx| cx.notify())
            .detach();
        Self { data: data.clone() }
    }

    fn spin_again(&mut self, cx: &mut Context<Self>) {
        let Some(category) = self.data.party.read(cx).category() else {
            return;
        };

        let mut rng = rand::thread_rng();
        let pick = category.pick_spread(&mut rng);
        self.data.party.update(cx, |party, cx| {
            party.repick(pick);
            cx.notify();
        });
    }
}

impl gpui::EventEmitter<StageRequest> for ResultPage {}

impl Render for ResultPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (category, pick) = {
            let party = self.data.party.read(cx);
            (party.category(), party.pick())
        };
        let spin_again = cx.listener(|this: &mut Self, _, _, cx| {
            this.spin_again(cx);
        });
        let to_party_room = cx.listener(|_, _, _, cx| {
            cx.emit(StageRequest(StageUi::PartyRoom));
        });
        let back_to_categories = cx.listener(|_, _, _, cx| {
            cx.emit(StageRequest(StageUi::CategoryPick));
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .when_else(
                pick.is_some(),
                |this| {
                    let pick = pick.unwrap();
                    this.child(div().child("Tonight's plan").text_2xl().font_bold())
                        .when(category.is_some(), |this| {
                            let category = category.unwrap();
                            this.child(
                                div()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("{} {}", category.emoji, category.name)),
                            )
                        })
                        .child(
                            GroupBox::new()
                                .outline()
                                .child(SettingsItem::new().label("On the menu").child(pick.dish))
                                .child(SettingsItem::new().label("Where").child(pick.place)),
                        )
                        .child(
                            div()
                                .flex()
                                .gap_3()
                                .child(
                                    Button::new("spin-again")
                                        .outline()
                                        .label("Spin again")
                                        .on_click(spin_again),
                                )
                                .child(
                                    Button::new("to-party-room")
                                        .primary()
                                        .label("Take me to the party")
                                        .on_click(to_party_room),
                                ),
                        )
                },
                |this| {
                    this.child(div().child("Nothing on the menu yet").text_xl().font_bold())
                        .child(
                            Button::new("back-to-categories")
                                .outline()
                                .label("Choose a category first")
                                .on_click(back_to_categories),
                        )
                },
            )
    }
}
