//! Thin wgpu plumbing shared by easel demos.
//!
//! This crate owns the boring parts of talking to the GPU so that demo code
//! can be a straight sequence of resource creation and draw calls:
//!
//! - [`GpuDevice`] acquires the adapter, device, and queue.
//! - [`RenderSurface`] manages the presentation surface and per-frame
//!   swapchain acquisition.
//! - [`ShaderLibrary`] loads WGSL shader modules by name from a directory.
//! - [`load_rgba8`] decodes an image file into raw RGBA8 bytes.
//! - [`StagingWriter`] packs one-shot upload payloads into a single transfer
//!   buffer and records their byte offsets.
//! - [`SampledTexture`] is a 2D RGBA8 texture with sampler-read usage.

pub mod device;
pub mod images;
pub mod shader;
pub mod staging;
pub mod surface;
pub mod texture;

// Re-export primary types at crate root for convenience.
pub use device::GpuDevice;
pub use images::{load_rgba8, RgbaBytes};
pub use shader::ShaderLibrary;
pub use staging::StagingWriter;
pub use surface::RenderSurface;
pub use texture::SampledTexture;
