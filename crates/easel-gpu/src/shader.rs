//! Shader loading by name from a shader directory.
//!
//! Demos keep their WGSL sources next to their manifest and load them by
//! logical name at startup. A missing or unreadable shader is a hard error
//! carrying the resolved path, so a bad install fails at init rather than at
//! first draw.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

/// A directory of WGSL shader sources, loaded by name.
pub struct ShaderLibrary {
    dir: PathBuf,
}

impl ShaderLibrary {
    /// A library rooted at `dir`. The directory is not validated up front;
    /// each load resolves and reads on demand.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory shaders are resolved against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the on-disk path for a shader name.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.wgsl"))
    }

    /// Load `<dir>/<name>.wgsl` and create a shader module from it.
    pub fn load(&self, device: &wgpu::Device, name: &str) -> Result<wgpu::ShaderModule> {
        let path = self.path_for(name);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read shader {path:?}"))?;

        debug!(name, ?path, "loaded shader source");
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(name),
            source: wgpu::ShaderSource::Wgsl(Cow::Owned(source)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_to_wgsl_paths() {
        let lib = ShaderLibrary::new("/tmp/shaders");
        assert_eq!(
            lib.path_for("quad.vert"),
            PathBuf::from("/tmp/shaders/quad.vert.wgsl")
        );
    }

    #[test]
    fn missing_shader_reports_path() {
        let lib = ShaderLibrary::new("/nonexistent");
        let gpu = match pollster::block_on(crate::GpuDevice::new_headless()) {
            Ok(gpu) => gpu,
            Err(_) => {
                eprintln!("no GPU adapter available, skipping");
                return;
            }
        };
        let err = lib.load(gpu.device(), "absent").unwrap_err();
        assert!(format!("{err:#}").contains("absent.wgsl"));
    }
}
