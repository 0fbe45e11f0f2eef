use chrono::Local;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, IndexPath, StyledExt, WindowExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    notification::{Notification, NotificationType},
    select::{Select, SelectState},
};
use rand::Rng;

use crate::{
    data,
    entities::{DataEntities, party_entity::GuestbookEntry},
    views::TextChoice,
};

/// The wall everyone signs. Entries only live for the evening; there is no
/// storage behind this on purpose.
pub struct GuestbookPage {
    data: DataEntities,
    wish_select: Entity<SelectState<Vec<TextChoice>>>,
    signer_select: Entity<SelectState<Vec<TextChoice>>>,
}

impl GuestbookPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.party, window, |_, _, _, cx| cx.notify())
            .detach();

        let wish_select = cx.new(|cx| {
            let wishes: Vec<TextChoice> = data::WISH_TEMPLATES
                .iter()
                .map(|wish| TextChoice::new(*wish))
                .collect();
            SelectState::new(wishes, None, window, cx)
        });
        let signer_select = cx.new(|cx| {
            let signers: Vec<TextChoice> = data::SIGNERS
                .iter()
                .map(|signer| TextChoice::new(*signer))
                .collect();
            SelectState::new(signers, None, window, cx)
        });

        Self {
            data: data.clone(),
            wish_select,
            signer_select,
        }
    }

    fn surprise_me(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let mut rng = rand::thread_rng();
        let wish_index = rng.gen_range(0..data::WISH_TEMPLATES.len());
        let signer_index = rng.gen_range(0..data::SIGNERS.len());

        self.wish_select.update(cx, |state, cx| {
            state.set_selected_index(Some(IndexPath::new(wish_index)), window, cx);
        });
        self.signer_select.update(cx, |state, cx| {
            state.set_selected_index(Some(IndexPath::new(signer_index)), window, cx);
        });
    }

    fn sign(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let wish = self.wish_select.read(cx).selected_value().cloned();
        let signer = self.signer_select.read(cx).selected_value().cloned();

        let (Some(wish), Some(signer)) = (wish, signer) else {
            let notification = Notification::new()
                .message("Pick a wish and a signer first.")
                .with_type(NotificationType::Warning);
            window.push_notification(notification, cx);
            return;
        };

        self.data.party.update(cx, |party, cx| {
            party.guestbook.insert(
                0,
                GuestbookEntry {
                    message: wish.to_string(),
                    signer: signer.to_string(),
                    left_at: Local::now(),
                },
            );
            cx.notify();
        });
    }
}

impl gpui::EventEmitter<crate::views::StageRequest> for GuestbookPage {}

impl Render for GuestbookPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entries = self.data.party.read(cx).guestbook.clone();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Guestbook").text_2xl().font_bold())
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child("Leave a wish on the wall. Nothing is saved, just like a real party."),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(Select::new(&self.wish_select).placeholder("Pick a wish..."))
                    .child(Select::new(&self.signer_select).placeholder("Who is signing?"))
                    .child(
                        div()
                            .flex()
                            .gap_3()
                            .child(
                                Button::new("surprise-me")
                                    .outline()
                                    .label("Surprise me")
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.surprise_me(window, cx);
                                    })),
                            )
                            .child(
                                Button::new("sign-the-book")
                                    .primary()
                                    .label("Sign the book")
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.sign(window, cx);
                                    })),
                            ),
                    ),
            )
            .children(entries.into_iter().map(|entry| {
                GroupBox::new()
                    .outline()
                    .child(div().child(entry.message))
                    .child(div().text_sm().text_color(cx.theme().muted_foreground).child(
                        format!("{}, {}", entry.signer, entry.left_at.format("%H:%M")),
                    ))
            }))
    }
}
