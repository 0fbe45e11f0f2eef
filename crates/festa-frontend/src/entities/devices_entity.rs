use festa_bridge::audio::OutputDevice;
use gpui::{AppContext, Entity};

/// Output devices the backend last enumerated, in host order.
#[derive(Debug, Clone, Default)]
pub struct OutputDevicesEntity {
    pub devices: Vec<OutputDevice>,
}

impl OutputDevicesEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, devices: Vec<OutputDevice>, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.devices = devices;
            cx.notify();
        });
    }
}
