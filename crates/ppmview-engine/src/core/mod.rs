//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the viewer
//! application: the `App` trait and the per-frame context it receives.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
