use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    BackendBridge,
    entities::DataEntities,
    views::{StageRequest, StageUi},
};

/// The gate of the whole experience: nothing else is reachable until the
/// countdown the backend ticks here reaches zero.
pub struct CountdownPage {
    data: DataEntities,
}

impl CountdownPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.countdown, window, |_, _, _, cx| cx.notify())
            .detach();
        cx.observe_in(&data.settings, window, |_, _, _, cx| cx.notify())
            .detach();
        Self { data: data.clone() }
    }
}

impl gpui::EventEmitter<StageRequest> for CountdownPage {}

impl Render for CountdownPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.data.countdown.read(cx).state.clone();
        let name = {
            let settings = self.data.settings.read(cx);
            settings.config.celebration.celebrant_name.clone()
        };
        let enter_party = cx.listener(|_, _, _, cx| {
            cx.emit(StageRequest(StageUi::Greeting));
        });
        let open_settings = cx.listener(|_, _, _, cx| {
            cx.emit(StageRequest(StageUi::Settings));
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .child(
                div()
                    .child("Something special is on the way...")
                    .text_xl()
                    .font_semibold()
                    .text_color(cx.theme().muted_foreground),
            )
            .when_else(
                state.is_some(),
                |this| {
                    let state = state.unwrap();
                    this.child(div().child(state.remaining.format()).text_2xl().font_bold())
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!(
                                    "Counting down to {}",
                                    state.target.format("%B %d, %Y")
                                )),
                        )
                        .when(state.ended, |this| {
                            this.child(
                                Button::new("enter-party")
                                    .primary()
                                    .label(format!("It's time! Come in, {name}"))
                                    .on_click(enter_party),
                            )
                        })
                        .child(
                            Button::new("reset-countdown")
                                .outline()
                                .small()
                                .label("Reset the countdown")
                                .on_click(|_, _, cx| {
                                    let bridge = cx.global::<BackendBridge>().clone();
                                    cx.spawn(async move |_| {
                                        bridge.reset_countdown(None).await;
                                    })
                                    .detach();
                                }),
                        )
                },
                |this| {
                    this.child(div().child("The countdown is not armed yet."))
                        .child(
                            Button::new("open-settings")
                                .outline()
                                .label("Check the birthday in settings")
                                .on_click(open_settings),
                        )
                },
            )
    }
}
