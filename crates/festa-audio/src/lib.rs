//! Audio playback building blocks for the celebration.
//!
//! This crate wraps `rodio` into a small set of helpers oriented toward
//! playing one shared music source at a time. It focuses on:
//! - Enumerating output devices and resolving them by name.
//! - Owning the single playback session on a dedicated worker thread.
//! - Reporting session snapshots and failures through an event callback.
//!
//! # Threading
//! The output stream and sink are not sendable across threads on every
//! platform, so the session worker creates and keeps them on its own thread.
//! Everything else talks to the session through [`session::SessionHandle`].

pub mod device;
pub mod session;
