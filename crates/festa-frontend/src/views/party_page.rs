use festa_bridge::playlist::{self, MESSAGE_TRACK, SONGS};
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, IndexPath, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    select::{Select, SelectEvent, SelectItem, SelectState},
    slider::{Slider, SliderEvent, SliderState},
};

use crate::{
    BackendBridge,
    components::{download_indicator::DownloadIndicator, settings_item::SettingsItem},
    entities::DataEntities,
    formatting::format_time,
};

/// One row of the song menu.
#[derive(Debug, Clone)]
struct TrackChoice {
    label: SharedString,
    url: SharedString,
}

impl SelectItem for TrackChoice {
    type Value = SharedString;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.url
    }
}

/// The player hub. Everything here is a thin remote control; the backend owns
/// the session and this page only renders its latest snapshot.
pub struct PartyPage {
    data: DataEntities,
    song_select: Entity<SelectState<Vec<TrackChoice>>>,
    volume_state: Entity<SliderState>,
    indicator: Entity<DownloadIndicator>,
    synced_song: Option<usize>,
}

impl PartyPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session = data.playback.read(cx).session.clone();
        let selected_song = session
            .source_url
            .as_deref()
            .and_then(playlist::index_for_url);

        let song_select = cx.new(|cx| {
            let tracks: Vec<TrackChoice> = SONGS
                .iter()
                .map(|song| TrackChoice {
                    label: format!("{} ({})", song.title, song.artist).into(),
                    url: song.url.into(),
                })
                .collect();

            SelectState::new(tracks, selected_song.map(IndexPath::new), window, cx)
        });

        cx.subscribe_in(&song_select, window, |_, _, event, _, cx| match event {
            SelectEvent::Confirm(value) => {
                let Some(url) = value.clone() else {
                    return;
                };

                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| {
                    bridge.change_song(url.to_string()).await;
                })
                .detach();
            }
        })
        .detach();

        let volume_state = cx.new(|_| {
            SliderState::new()
                .min(0.0)
                .default_value(session.volume)
                .max(1.0)
        });
        cx.subscribe(&volume_state, |_, _, event: &SliderEvent, cx| match event {
            SliderEvent::Change(value) => {
                let volume = value.start();
                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| {
                    bridge.set_volume(volume).await;
                })
                .detach();
            }
        })
        .detach();

        // Keep the song menu in line with whatever the backend says is armed,
        // e.g. the opening song autoplay picked on the greeting screen.
        let playback = data.playback.clone();
        cx.observe_in(&playback.clone(), window, move |this, _, window, cx| {
            let source_url = {
                let state = playback.read(cx);
                state.session.source_url.clone()
            };

            let index = source_url.as_deref().and_then(playlist::index_for_url);
            if index != this.synced_song {
                this.song_select.update(cx, |state, cx| {
                    state.set_selected_index(index.map(IndexPath::new), window, cx);
                });
                this.synced_song = index;
            }

            cx.notify();
        })
        .detach();

        let indicator = cx.new(|cx| DownloadIndicator::new(data, cx));

        Self {
            data: data.clone(),
            song_select,
            volume_state,
            indicator,
            synced_song: selected_song,
        }
    }
}

impl gpui::EventEmitter<crate::views::StageRequest> for PartyPage {}

impl Render for PartyPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.data.playback.read(cx).session.clone();
        let pick = self.data.party.read(cx).pick();

        let now_playing = session.source_url.as_deref().map(|url| {
            playlist::index_for_url(url)
                .and_then(playlist::song)
                .map(|song| format!("{} ({})", song.title, song.artist))
                .unwrap_or_else(|| {
                    if url == MESSAGE_TRACK.url {
                        format!("{} ({})", MESSAGE_TRACK.title, MESSAGE_TRACK.artist)
                    } else {
                        url.to_string()
                    }
                })
        });

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Party room").text_2xl().font_bold())
            .when(pick.is_some(), |this| {
                let pick = pick.unwrap();
                this.child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child(format!("Tonight: {} at {}", pick.dish, pick.place)),
                )
            })
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Music").text_xl().font_bold())
                    .child(Select::new(&self.song_select).placeholder("Pick a song..."))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(now_playing.unwrap_or_else(|| {
                                        "Nothing is playing yet.".to_string()
                                    })),
                            )
                            .child(div().text_sm().child(format!(
                                "{} / {}",
                                format_time(session.current_time),
                                format_time(session.duration),
                            ))),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_3()
                            .child(
                                Button::new("toggle-play")
                                    .primary()
                                    .loading(session.is_loading)
                                    .label(if session.is_playing { "Pause" } else { "Play" })
                                    .on_click(|_, _, cx| {
                                        let bridge = cx.global::<BackendBridge>().clone();
                                        cx.spawn(async move |_| {
                                            bridge.toggle_play().await;
                                        })
                                        .detach();
                                    }),
                            )
                            .child(
                                Button::new("seek-back")
                                    .outline()
                                    .label("Back 10s")
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        let session = this.data.playback.read(cx).session.clone();
                                        let bridge = cx.global::<BackendBridge>().clone();
                                        cx.spawn(async move |_, _| {
                                            bridge.seek_to(session.current_time - 10.0).await;
                                        })
                                        .detach();
                                    })),
                            )
                            .child(
                                Button::new("seek-forward")
                                    .outline()
                                    .label("Forward 10s")
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        let session = this.data.playback.read(cx).session.clone();
                                        let bridge = cx.global::<BackendBridge>().clone();
                                        cx.spawn(async move |_, _| {
                                            bridge.seek_to(session.current_time + 10.0).await;
                                        })
                                        .detach();
                                    })),
                            )
                            .child(
                                Button::new("toggle-mute")
                                    .outline()
                                    .label(if session.is_muted { "Unmute" } else { "Mute" })
                                    .on_click(|_, _, cx| {
                                        let bridge = cx.global::<BackendBridge>().clone();
                                        cx.spawn(async move |_| {
                                            bridge.toggle_mute().await;
                                        })
                                        .detach();
                                    }),
                            ),
                    )
                    .child(
                        SettingsItem::new()
                            .label("Volume")
                            .description("Does not touch the saved default.")
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(Slider::new(&self.volume_state).min_w_72())
                                    .child(div().text_sm().child(if session.is_muted {
                                        "muted".to_string()
                                    } else {
                                        format!("{:.0}%", session.volume * 100.0)
                                    })),
                            ),
                    )
                    .when(session.last_error.is_some(), |this| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!("Playback hiccup: {}", session.last_error.unwrap())),
                        )
                    })
                    .child(self.indicator.clone()),
            )
    }
}
