/// The core application state that holds configuration, caching, and other
/// shared resources.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
pub struct State {
    /// The loaded application configuration.
    pub config: festa_bridge::config::Config,
    /// Path to the directory where downloaded songs are cached across runs.
    pub cache_path: std::path::PathBuf,
    /// Shared HTTP client for making efficient, pooled requests.
    pub request_client: reqwest::Client,
    /// Handle to the playback session worker. The worker thread owns the
    /// actual audio output; this handle only queues commands for it.
    pub session: festa_audio::session::SessionHandle,
    /// The running countdown ticker task, if one is armed. Replaced on
    /// re-arm and aborted on reset.
    pub countdown: Option<tokio::task::JoinHandle<()>>,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
