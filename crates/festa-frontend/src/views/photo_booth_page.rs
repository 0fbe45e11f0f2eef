use chrono::Local;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    select::{Select, SelectState},
};

use crate::{data, entities::DataEntities, views::TextChoice};

/// Fake a booth strip: pick a frame, press the shutter, admire the result.
/// The "photo" is just the frame reference kept on the party state.
pub struct PhotoBoothPage {
    data: DataEntities,
    frame_select: Entity<SelectState<Vec<TextChoice>>>,
}

impl PhotoBoothPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.party, window, |_, _, _, cx| cx.notify())
            .detach();

        let captured = data.party.read(cx).captured_frame;
        let frame_select = cx.new(|cx| {
            let frames: Vec<TextChoice> = data::PHOTO_FRAMES
                .iter()
                .map(|frame| TextChoice::new(*frame))
                .collect();

            let selected = captured
                .and_then(|frame| data::PHOTO_FRAMES.iter().position(|other| *other == frame));
            SelectState::new(
                frames,
                selected.map(gpui_component::IndexPath::new),
                window,
                cx,
            )
        });

        Self {
            data: data.clone(),
            frame_select,
        }
    }

    fn capture(&mut self, cx: &mut Context<Self>) {
        let selected = self.frame_select.read(cx).selected_value().cloned();
        let Some(selected) = selected else {
            return;
        };

        // The select values are borrowed straight from the table, so the
        // match below always finds the static reference to keep.
        let frame = data::PHOTO_FRAMES
            .iter()
            .find(|frame| **frame == selected.as_ref())
            .copied();
        self.data.party.update(cx, |party, cx| {
            party.captured_frame = frame;
            cx.notify();
        });
    }

    fn retake(&mut self, cx: &mut Context<Self>) {
        self.data.party.update(cx, |party, cx| {
            party.captured_frame = None;
            cx.notify();
        });
    }
}

impl gpui::EventEmitter<crate::views::StageRequest> for PhotoBoothPage {}

impl Render for PhotoBoothPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let captured = self.data.party.read(cx).captured_frame;
        let name = {
            let settings = self.data.settings.read(cx);
            settings.config.celebration.celebrant_name.clone()
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Photo booth").text_2xl().font_bold())
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child("Choose a frame and strike a pose."),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(Select::new(&self.frame_select).placeholder("Pick a frame..."))
                    .child(
                        div()
                            .flex()
                            .gap_3()
                            .child(
                                Button::new("capture-photo")
                                    .primary()
                                    .label("📸 Capture")
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        this.capture(cx);
                                    })),
                            )
                            .when(captured.is_some(), |this| {
                                this.child(
                                    Button::new("retake-photo")
                                        .outline()
                                        .label("Retake")
                                        .on_click(cx.listener(|this, _, _, cx| {
                                            this.retake(cx);
                                        })),
                                )
                            }),
                    ),
            )
            .when(captured.is_some(), |this| {
                let frame = captured.unwrap();
                this.child(
                    GroupBox::new()
                        .outline()
                        .child(div().child(frame).text_xl().font_bold().text_center())
                        .child(div().text_center().child(format!("{name} and friends")))
                        .child(
                            div()
                                .text_sm()
                                .text_center()
                                .text_color(cx.theme().muted_foreground)
                                .child(Local::now().format("%B %d, %Y").to_string()),
                        ),
                )
            })
    }
}
