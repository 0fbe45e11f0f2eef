//! The stage flow. `FrontendUi` owns the active stage and swaps the page
//! view whenever a stage view asks to move on by emitting [`StageRequest`].

mod category_page;
mod countdown_page;
mod greeting_page;
mod guestbook_page;
mod memory_lane_page;
mod party_page;
mod photo_booth_page;
mod result_page;
mod settings_page;
mod video_message_page;

use gpui::{
    AnyView, AppContext, Context, Entity, EventEmitter, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    IconName, Root, Side,
    select::SelectItem,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    entities::DataEntities,
    views::{
        category_page::CategoryPage, countdown_page::CountdownPage, greeting_page::GreetingPage,
        guestbook_page::GuestbookPage, memory_lane_page::MemoryLanePage, party_page::PartyPage,
        photo_booth_page::PhotoBoothPage, result_page::ResultPage, settings_page::SettingsPage,
        video_message_page::VideoMessagePage,
    },
};

/// The named screens of the experience, in story order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StageUi {
    Countdown,
    Greeting,
    VideoMessage,
    CategoryPick,
    Result,
    PartyRoom,
    Guestbook,
    MemoryLane,
    PhotoBooth,
    Settings,
}

/// Emitted by a stage view when the flow should move somewhere else.
#[derive(Clone, Copy)]
pub struct StageRequest(pub StageUi);

/// A plain string entry for the preset menus (signers, wishes, frames).
#[derive(Debug, Clone)]
pub(crate) struct TextChoice {
    text: SharedString,
}

impl TextChoice {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl SelectItem for TextChoice {
    type Value = SharedString;

    fn title(&self) -> SharedString {
        self.text.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.text
    }
}

pub struct FrontendUi {
    data: DataEntities,
    active_stage: StageUi,
    active_stage_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let initial_view = build_stage_view(data, StageUi::Countdown, window, cx);
        Self {
            data: data.clone(),
            active_stage: StageUi::Countdown,
            active_stage_view: initial_view,
        }
    }

    pub fn change_stage(&mut self, stage: StageUi, window: &mut Window, cx: &mut Context<Self>) {
        if self.active_stage == stage {
            return;
        }
        self.active_stage_view = build_stage_view(&self.data, stage, window, cx);
        self.active_stage = stage;
        cx.notify();
    }

    /// The sidebar only exists once the surprise part of the flow is over.
    fn in_party(&self) -> bool {
        matches!(
            self.active_stage,
            StageUi::PartyRoom
                | StageUi::Guestbook
                | StageUi::MemoryLane
                | StageUi::PhotoBooth
                | StageUi::Settings
        )
    }
}

fn build_stage_view(
    data: &DataEntities,
    stage: StageUi,
    window: &mut Window,
    cx: &mut Context<FrontendUi>,
) -> AnyView {
    match stage {
        StageUi::Countdown => {
            attach_stage_view(cx.new(|cx| CountdownPage::new(data, window, cx)), window, cx)
        }
        StageUi::Greeting => {
            attach_stage_view(cx.new(|cx| GreetingPage::new(data, window, cx)), window, cx)
        }
        StageUi::VideoMessage => attach_stage_view(
            cx.new(|cx| VideoMessagePage::new(data, window, cx)),
            window,
            cx,
        ),
        StageUi::CategoryPick => {
            attach_stage_view(cx.new(|cx| CategoryPage::new(data, window, cx)), window, cx)
        }
        StageUi::Result => {
            attach_stage_view(cx.new(|cx| ResultPage::new(data, window, cx)), window, cx)
        }
        StageUi::PartyRoom => {
            attach_stage_view(cx.new(|cx| PartyPage::new(data, window, cx)), window, cx)
        }
        StageUi::Guestbook => {
            attach_stage_view(cx.new(|cx| GuestbookPage::new(data, window, cx)), window, cx)
        }
        StageUi::MemoryLane => attach_stage_view(
            cx.new(|cx| MemoryLanePage::new(data, window, cx)),
            window,
            cx,
        ),
        StageUi::PhotoBooth => attach_stage_view(
            cx.new(|cx| PhotoBoothPage::new(data, window, cx)),
            window,
            cx,
        ),
        StageUi::Settings => {
            attach_stage_view(cx.new(|cx| SettingsPage::new(data, window, cx)), window, cx)
        }
    }
}

fn attach_stage_view<V>(
    view: Entity<V>,
    window: &mut Window,
    cx: &mut Context<FrontendUi>,
) -> AnyView
where
    V: Render + EventEmitter<StageRequest>,
{
    cx.subscribe_in(
        &view,
        window,
        |this, _, request: &StageRequest, window, cx| {
            this.change_stage(request.0, window, cx);
        },
    )
    .detach();
    view.into()
}

impl Render for FrontendUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let on_stage_change = |stage| {
            cx.listener(move |this: &mut Self, _, window, cx| {
                this.change_stage(stage, window, cx);
            })
        };

        div()
            .flex()
            .size_full()
            .when(self.in_party(), |this| {
                this.child(
                    Sidebar::new(Side::Left)
                        .header(SidebarHeader::new().child("festa 🎈"))
                        .child(
                            SidebarGroup::new("The party").child(
                                SidebarMenu::new()
                                    .child(
                                        SidebarMenuItem::new("Party room")
                                            .active(self.active_stage == StageUi::PartyRoom)
                                            .icon(IconName::LayoutDashboard)
                                            .on_click(on_stage_change(StageUi::PartyRoom)),
                                    )
                                    .child(
                                        SidebarMenuItem::new("Guestbook")
                                            .active(self.active_stage == StageUi::Guestbook)
                                            .on_click(on_stage_change(StageUi::Guestbook)),
                                    )
                                    .child(
                                        SidebarMenuItem::new("Memory lane")
                                            .active(self.active_stage == StageUi::MemoryLane)
                                            .on_click(on_stage_change(StageUi::MemoryLane)),
                                    )
                                    .child(
                                        SidebarMenuItem::new("Photo booth")
                                            .active(self.active_stage == StageUi::PhotoBooth)
                                            .on_click(on_stage_change(StageUi::PhotoBooth)),
                                    )
                                    .child(
                                        SidebarMenuItem::new("Settings")
                                            .active(self.active_stage == StageUi::Settings)
                                            .icon(IconName::Settings)
                                            .on_click(on_stage_change(StageUi::Settings)),
                                    ),
                            ),
                        ),
                )
            })
            .child(div().p_5().size_full().child(self.active_stage_view.clone()))
            .children(notification_layer)
    }
}
