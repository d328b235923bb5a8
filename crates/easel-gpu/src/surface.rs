//! Presentation surface management.
//!
//! Owns the window surface and its configuration, and handles the per-frame
//! swapchain texture acquisition including the lost/outdated recovery dance.

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::device::GpuDevice;

/// A configured presentation surface.
pub struct RenderSurface {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl RenderSurface {
    /// Configure `surface` for presentation at the given pixel size.
    ///
    /// Picks the first surface format the adapter reports, which is the
    /// preferred one.
    pub fn new(
        surface: wgpu::Surface<'static>,
        gpu: &GpuDevice,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(gpu.adapter());
        let format = *caps
            .formats
            .first()
            .ok_or_else(|| anyhow!("surface reports no supported formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(gpu.device(), &config);

        debug!(?format, width, height, "configured surface");
        Ok(Self { surface, config })
    }

    /// The texture format draws against this surface must target.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Reconfigure for a new window size. Zero dimensions (minimized window)
    /// are clamped to 1; acquisition failures cover the rest.
    pub fn resize(&mut self, gpu: &GpuDevice, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(gpu.device(), &self.config);
    }

    /// Acquire the swapchain texture for this frame.
    ///
    /// Returns `None` when no frame is available — the caller is expected to
    /// skip rendering and try again next frame. Lost or outdated surfaces are
    /// reconfigured on the spot. Out-of-memory is the one fatal case.
    pub fn acquire(&mut self, gpu: &GpuDevice) -> Result<Option<wgpu::SurfaceTexture>> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(Some(frame)),
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("surface acquire timed out, dropping frame");
                Ok(None)
            }
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                self.surface.configure(gpu.device(), &self.config);
                Ok(None)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(anyhow!("surface acquire failed: out of GPU memory"))
            }
        }
    }
}
