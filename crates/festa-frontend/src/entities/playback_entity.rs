use festa_bridge::playback::PlaybackSession;
use gpui::{AppContext, Entity};

/// The last playback snapshot the backend pushed. The backend is the single
/// writer; views only ever read this.
#[derive(Debug, Clone, Default)]
pub struct PlaybackEntity {
    pub session: PlaybackSession,
}

impl PlaybackEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, session: PlaybackSession, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.session = session;
            cx.notify();
        });
    }
}
