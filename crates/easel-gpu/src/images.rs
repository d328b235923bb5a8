//! Image decoding to raw RGBA8 bytes.

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

/// A decoded image: tightly packed RGBA8 rows, no padding.
#[derive(Debug)]
pub struct RgbaBytes {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaBytes {
    /// Byte length of one row.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Decode the image at `path`, converting to RGBA8 if needed.
pub fn load_rgba8(path: &Path) -> Result<RgbaBytes> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image {path:?}"))?
        .into_rgba8();

    let (width, height) = decoded.dimensions();
    debug!(?path, width, height, "decoded image");
    Ok(RgbaBytes {
        width,
        height,
        data: decoded.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_reports_path() {
        let err = load_rgba8(Path::new("/nonexistent/pic.png")).unwrap_err();
        assert!(format!("{err:#}").contains("pic.png"));
    }
}
