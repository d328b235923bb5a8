//! Textured quad demo.
//!
//! Draws a tiled texture on a fullscreen quad and cycles through six sampler
//! presets (point/linear/anisotropic × clamp/wrap) with the Left/Right arrow
//! keys.

mod geometry;
mod quad;
mod samplers;

use std::path::Path;

use anyhow::Result;
use easel::RunOptions;

use crate::quad::TexturedQuad;

fn main() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    easel::run(
        RunOptions {
            title: "textured-quad".to_string(),
            width: 640,
            height: 480,
            shader_dir: root.join("shaders"),
            asset_dir: root.join("assets"),
        },
        TexturedQuad::new(),
    )
}
