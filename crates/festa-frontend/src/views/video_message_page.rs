use festa_bridge::playlist::MESSAGE_TRACK;
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
    BackendBridge,
    entities::DataEntities,
    formatting::format_time,
    views::{StageRequest, StageUi},
};

/// Plays the recorded message from everyone. The track is deliberately not
/// part of the party playlist, so this stage is the only way to hear it.
pub struct VideoMessagePage {
    data: DataEntities,
}

impl VideoMessagePage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.playback, window, |_, _, _, cx| cx.notify())
            .detach();

        // Entering the stage is the explicit request to hear the message.
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.change_song(MESSAGE_TRACK.url.to_string()).await;
            bridge.play().await;
        })
        .detach();

        Self { data: data.clone() }
    }
}

impl gpui::EventEmitter<StageRequest> for VideoMessagePage {}

impl Render for VideoMessagePage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.data.playback.read(cx).session.clone();
        let playing_message = session.source_url.as_deref() == Some(MESSAGE_TRACK.url);
        let message_over = playing_message
            && !session.is_playing
            && session.duration > 0.0
            && session.current_time >= session.duration;

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .child(div().child(MESSAGE_TRACK.title).text_2xl().font_bold())
            .child(
                GroupBox::new().outline().child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_3()
                        .items_center()
                        .child(div().child("📼").text_2xl())
                        .child(div().child(format!("From: {}", MESSAGE_TRACK.artist)))
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .when_else(
                                    playing_message && !session.is_loading,
                                    |this| {
                                        this.child(format!(
                                            "{} / {}",
                                            format_time(session.current_time),
                                            format_time(session.duration),
                                        ))
                                    },
                                    |this| this.child("Rewinding the tape..."),
                                ),
                        ),
                ),
            )
            .child({
                let button = Button::new("to-category-pick")
                    .label(if message_over {
                        "That was lovely. What's next?"
                    } else {
                        "Skip ahead"
                    })
                    .on_click(cx.listener(|_, _, _, cx| {
                        cx.emit(StageRequest(StageUi::CategoryPick));
                    }));
                if message_over {
                    button.primary()
                } else {
                    button.outline()
                }
            })
    }
}
