//! Demo harness for small GPU examples.
//!
//! A demo implements the [`Demo`] lifecycle — `init` once, then `update` and
//! `draw` every frame, then `quit` once — and hands itself to [`run`], which
//! owns the window, the event loop, and the GPU device for the lifetime of
//! the program. The [`Context`] passed to every lifecycle call bundles the
//! device, the presentation surface, the per-frame input edges, and the
//! demo's shader/asset directories.

pub mod app;
pub mod context;
pub mod input;
pub mod runner;

// Re-export primary types at crate root for convenience.
pub use app::Demo;
pub use context::Context;
pub use input::InputState;
pub use runner::{run, RunOptions};
