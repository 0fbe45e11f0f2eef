use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    BackendBridge,
    entities::DataEntities,
    views::{StageRequest, StageUi},
};

/// The first thing the celebrant sees after the countdown falls. Arms the
/// opening song when autoplay is enabled.
pub struct GreetingPage {
    data: DataEntities,
}

impl GreetingPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.settings, window, |_, _, _, cx| cx.notify())
            .detach();

        let autoplay = data.settings.read(cx).config.playback.autoplay;
        let session = data.playback.read(cx).session.clone();
        if autoplay && session.source_url.is_none() && !session.is_loading {
            if let Some(song) = festa_bridge::playlist::song(0) {
                let bridge = cx.global::<BackendBridge>().clone();
                let url = song.url.to_string();
                cx.spawn(async move |_, _| {
                    bridge.change_song(url).await;
                    bridge.play().await;
                })
                .detach();
            }
        }

        Self { data: data.clone() }
    }
}

impl gpui::EventEmitter<StageRequest> for GreetingPage {}

impl Render for GreetingPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let name = {
            let settings = self.data.settings.read(cx);
            settings.config.celebration.celebrant_name.clone()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .child(div().child("🎉🎂🎈").text_2xl())
            .child(
                div()
                    .child(format!("Happy birthday, {name}!"))
                    .text_2xl()
                    .font_bold(),
            )
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child("Today is all yours. We prepared a few surprises."),
            )
            .child(
                Button::new("to-video-message")
                    .primary()
                    .label("There is a message waiting for you")
                    .on_click(cx.listener(|_, _, _, cx| {
                        cx.emit(StageRequest(StageUi::VideoMessage));
                    })),
            )
    }
}
