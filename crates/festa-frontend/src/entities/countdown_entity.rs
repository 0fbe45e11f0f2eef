use festa_bridge::countdown::CountdownState;
use gpui::{AppContext, Entity};

/// The last countdown tick the backend pushed. `None` until the backend arms
/// the countdown for the first time.
#[derive(Debug, Clone, Default)]
pub struct CountdownEntity {
    pub state: Option<CountdownState>,
}

impl CountdownEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, state: CountdownState, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.state = Some(state);
            cx.notify();
        });
    }
}
