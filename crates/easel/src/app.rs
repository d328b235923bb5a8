//! The [`Demo`] trait — the lifecycle a demo implements.
//!
//! The harness calls `init` once after the device and surface exist, then
//! `update` and `draw` in strict alternation every frame, then `quit` once
//! when the loop ends. Everything runs on the event-loop thread; there is no
//! concurrency in this contract.

use anyhow::Result;

use crate::context::Context;

/// Lifecycle for a harness-driven demo.
///
/// `init` failures are fatal: the harness logs the error and exits without
/// entering the frame loop. `update`/`draw` failures terminate the loop the
/// same way. A dropped frame (no surface texture) is not a failure — demos
/// report it as success and the harness simply moves on.
pub trait Demo {
    /// Create GPU resources and perform one-time uploads.
    fn init(&mut self, ctx: &mut Context) -> Result<()>;

    /// Advance demo state from this frame's input edges. No GPU work.
    fn update(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Record and submit this frame's GPU work.
    fn draw(&mut self, ctx: &mut Context) -> Result<()>;

    /// Release resources. Called exactly once, after the last frame.
    fn quit(&mut self, _ctx: &mut Context) {}
}
