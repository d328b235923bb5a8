//! The window + event loop driver.
//!
//! [`run`] owns the whole program lifetime: it creates the window, acquires
//! the GPU device, calls the demo's `init`, then drives `update`/`draw` from
//! the winit event loop until the window closes or a frame fails. Input
//! edges are latched from key-down events and cleared after every frame.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use easel_gpu::{GpuDevice, RenderSurface, ShaderLibrary};
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::app::Demo;
use crate::context::Context;
use crate::input::InputState;

/// Window and asset configuration for a demo run.
pub struct RunOptions {
    /// Window title, also used in log lines.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Directory holding the demo's WGSL shaders.
    pub shader_dir: PathBuf,
    /// Directory holding the demo's other assets.
    pub asset_dir: PathBuf,
}

/// Run a demo to completion.
///
/// Blocks until the window closes, the user presses Escape, or a lifecycle
/// call fails. Initialization failures (window, device, demo `init`) return
/// before the frame loop starts.
pub fn run<D: Demo>(options: RunOptions, mut demo: D) -> Result<()> {
    init_tracing();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(options.width, options.height))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let surface = instance
        .create_surface(window.clone())
        .context("failed to create surface")?;
    let gpu = pollster::block_on(GpuDevice::new(instance, &surface))?;

    let size = window.inner_size();
    let surface = RenderSurface::new(surface, &gpu, size.width, size.height)?;

    let mut ctx = Context {
        gpu,
        surface,
        window: window.clone(),
        input: InputState::default(),
        shaders: ShaderLibrary::new(options.shader_dir),
        asset_dir: options.asset_dir,
    };

    info!(title = %options.title, "starting demo");
    if let Err(err) = demo.init(&mut ctx) {
        error!("demo init failed: {err:#}");
        return Err(err);
    }

    let mut frame_error: Option<anyhow::Error> = None;
    let mut quit_called = false;

    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(new_size) => {
                    ctx.surface.resize(&ctx.gpu, new_size.width, new_size.height);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed && !event.repeat {
                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::ArrowLeft) => {
                                ctx.input.previous_pressed = true;
                            }
                            PhysicalKey::Code(KeyCode::ArrowRight) => {
                                ctx.input.next_pressed = true;
                            }
                            PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                            _ => {}
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    let frame = demo.update(&mut ctx).and_then(|()| demo.draw(&mut ctx));
                    ctx.input.clear_edges();
                    if let Err(err) = frame {
                        error!("frame failed: {err:#}");
                        frame_error = Some(err);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            // Continuous rendering: ask for the next frame as soon as the
            // queue drains.
            Event::AboutToWait => window.request_redraw(),
            Event::LoopExiting => {
                if !quit_called {
                    quit_called = true;
                    demo.quit(&mut ctx);
                }
            }
            _ => {}
        })
        .context("event loop terminated abnormally")?;

    match frame_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // Ignore the error if a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
