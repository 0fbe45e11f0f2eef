use festa_bridge::audio::OutputDevice;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div,
};
use gpui_component::{
    IndexPath, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    select::{Select, SelectEvent, SelectItem, SelectState},
    slider::{Slider, SliderEvent, SliderState},
    switch::Switch,
};

use crate::{
    BackendBridge, components::settings_item::SettingsItem, entities::DataEntities,
    views::TextChoice,
};

/// Menu entry that routes playback back to whatever the host considers the
/// default output.
const SYSTEM_DEFAULT: &str = "System default";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone)]
struct MonthChoice {
    label: SharedString,
    number: u32,
}

impl SelectItem for MonthChoice {
    type Value = u32;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.number
    }
}

#[derive(Debug, Clone)]
struct DayChoice {
    label: SharedString,
    number: u32,
}

impl SelectItem for DayChoice {
    type Value = u32;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.number
    }
}

fn device_choices(devices: &[OutputDevice]) -> Vec<TextChoice> {
    let mut choices = vec![TextChoice::new(SYSTEM_DEFAULT)];
    choices.extend(
        devices
            .iter()
            .map(|device| TextChoice::new(device.name.clone())),
    );
    choices
}

/// The first entry is the synthetic system default, so host devices start at
/// index one.
fn selected_device_index(devices: &[OutputDevice]) -> usize {
    devices
        .iter()
        .position(|device| device.selected)
        .map(|index| index + 1)
        .unwrap_or(0)
}

pub struct SettingsPage {
    data: DataEntities,
    device_select: Entity<SelectState<Vec<TextChoice>>>,
    month_select: Entity<SelectState<Vec<MonthChoice>>>,
    day_select: Entity<SelectState<Vec<DayChoice>>>,
    volume_state: Entity<SliderState>,
    staged_volume: f32,
    staged_autoplay: bool,
}

impl SettingsPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let config = data.settings.read(cx).config.clone();

        let device_select = cx.new(|cx| {
            let devices_entity = data.devices.read(cx);
            SelectState::new(
                device_choices(&devices_entity.devices),
                Some(IndexPath::new(selected_device_index(
                    &devices_entity.devices,
                ))),
                window,
                cx,
            )
        });

        let month_select = cx.new(|cx| {
            let months: Vec<MonthChoice> = MONTH_NAMES
                .iter()
                .enumerate()
                .map(|(index, name)| MonthChoice {
                    label: (*name).into(),
                    number: index as u32 + 1,
                })
                .collect();
            let selected = (config.celebration.birthday_month as usize)
                .checked_sub(1)
                .filter(|index| *index < MONTH_NAMES.len());
            SelectState::new(months, selected.map(IndexPath::new), window, cx)
        });

        let day_select = cx.new(|cx| {
            let days: Vec<DayChoice> = (1..=31)
                .map(|number| DayChoice {
                    label: number.to_string().into(),
                    number,
                })
                .collect();
            let selected = (config.celebration.birthday_day as usize)
                .checked_sub(1)
                .filter(|index| *index < 31);
            SelectState::new(days, selected.map(IndexPath::new), window, cx)
        });

        let volume_state = cx.new(|_| {
            SliderState::new()
                .min(0.0)
                .default_value(config.playback.default_volume)
                .max(1.0)
        });
        cx.subscribe(&volume_state, |this, _, event: &SliderEvent, cx| {
            match event {
                SliderEvent::Change(value) => {
                    this.staged_volume = value.start();
                    cx.notify();
                }
            }
        })
        .detach();

        cx.subscribe_in(&device_select, window, |_, _, event, _, cx| match event {
            SelectEvent::Confirm(value) => {
                let Some(value) = value.clone() else {
                    return;
                };

                let device_name = if value.as_ref() == SYSTEM_DEFAULT {
                    None
                } else {
                    Some(value.to_string())
                };
                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| {
                    bridge.select_output_device(device_name).await;
                })
                .detach();
            }
        })
        .detach();

        // The device list and the config both arrive asynchronously; follow
        // them the same way the selects were seeded.
        let devices = data.devices.clone();
        cx.observe_in(&devices.clone(), window, move |this, _, window, cx| {
            let devices = {
                let state = devices.read(cx);
                state.devices.clone()
            };

            this.device_select.update(cx, |state, cx| {
                state.set_items(device_choices(&devices), window, cx);
                state.set_selected_index(
                    Some(IndexPath::new(selected_device_index(&devices))),
                    window,
                    cx,
                );
            });
        })
        .detach();

        let settings = data.settings.clone();
        cx.observe_in(&settings.clone(), window, move |this, _, window, cx| {
            let config = {
                let state = settings.read(cx);
                state.config.clone()
            };

            this.staged_autoplay = config.playback.autoplay;
            this.staged_volume = config.playback.default_volume;

            let month = (config.celebration.birthday_month as usize)
                .checked_sub(1)
                .filter(|index| *index < MONTH_NAMES.len());
            this.month_select.update(cx, |state, cx| {
                state.set_selected_index(month.map(IndexPath::new), window, cx);
            });

            let day = (config.celebration.birthday_day as usize)
                .checked_sub(1)
                .filter(|index| *index < 31);
            this.day_select.update(cx, |state, cx| {
                state.set_selected_index(day.map(IndexPath::new), window, cx);
            });

            cx.notify();
        })
        .detach();

        Self {
            data: data.clone(),
            device_select,
            month_select,
            day_select,
            volume_state,
            staged_volume: config.playback.default_volume,
            staged_autoplay: config.playback.autoplay,
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        let mut config = self.data.settings.read(cx).config.clone();

        if let Some(month) = self.month_select.read(cx).selected_value().copied() {
            config.celebration.birthday_month = month;
        }
        if let Some(day) = self.day_select.read(cx).selected_value().copied() {
            config.celebration.birthday_day = day;
        }
        config.playback.default_volume = self.staged_volume;
        config.playback.autoplay = self.staged_autoplay;

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.update_config(config).await;
        })
        .detach();
    }
}

impl gpui::EventEmitter<crate::views::StageRequest> for SettingsPage {}

impl Render for SettingsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let name = {
            let settings = self.data.settings.read(cx);
            settings.config.celebration.celebrant_name.clone()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(div().child("Settings").text_2xl().font_bold())
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Celebration").text_xl().font_bold())
                    .child(
                        SettingsItem::new()
                            .label("Celebrant")
                            .description("Who the confetti is for.")
                            .child(name),
                    )
                    .child(
                        SettingsItem::new()
                            .label("Birthday month")
                            .child(Select::new(&self.month_select).min_w_72()),
                    )
                    .child(
                        SettingsItem::new()
                            .label("Birthday day")
                            .child(Select::new(&self.day_select).min_w_72()),
                    ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Playback").text_xl().font_bold())
                    .child(
                        SettingsItem::new()
                            .label("Autoplay")
                            .description("Arm the first song on the greeting screen.")
                            .child(Switch::new("autoplay").checked(self.staged_autoplay).on_click(
                                cx.listener(|this, checked: &bool, _, cx| {
                                    this.staged_autoplay = *checked;
                                    cx.notify();
                                }),
                            )),
                    )
                    .child(
                        SettingsItem::new()
                            .label("Default volume")
                            .description("Applied to the session at startup.")
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(Slider::new(&self.volume_state).min_w_72())
                                    .child(
                                        div()
                                            .text_sm()
                                            .child(format!("{:.0}%", self.staged_volume * 100.0)),
                                    ),
                            ),
                    ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Audio output").text_xl().font_bold())
                    .child(
                        SettingsItem::new()
                            .label("Output device")
                            .description("Takes effect right away and is remembered.")
                            .child(Select::new(&self.device_select).min_w_72()),
                    ),
            )
            .child(
                div().flex().child(
                    Button::new("save-settings")
                        .primary()
                        .label("Save settings")
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.save(cx);
                        })),
                ),
            )
    }
}
