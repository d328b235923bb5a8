//! The [`Context`] handed to every demo lifecycle call.

use std::path::PathBuf;
use std::sync::Arc;

use easel_gpu::{GpuDevice, RenderSurface, ShaderLibrary};
use winit::window::Window;

use crate::input::InputState;

/// Everything a demo needs to talk to the GPU and the host window.
///
/// Fields are public; the demo is the only code touching the context
/// between harness callbacks.
pub struct Context {
    /// Device, queue, and adapter.
    pub gpu: GpuDevice,
    /// The presentation surface for the demo window.
    pub surface: RenderSurface,
    /// The host window.
    pub window: Arc<Window>,
    /// This frame's input edges.
    pub input: InputState,
    /// WGSL shaders resolved by name.
    pub shaders: ShaderLibrary,
    /// Root directory for the demo's non-shader assets.
    pub asset_dir: PathBuf,
}

impl Context {
    /// Resolve an asset file name against the demo's asset directory.
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }
}
