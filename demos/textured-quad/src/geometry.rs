//! Quad geometry: a unit quad in clip space with tiled texture coordinates.

use bytemuck::{Pod, Zeroable};

/// Texture coordinates run 0..TILING across the quad, so the image repeats
/// TILING times per axis under the wrap address modes.
pub const TILING: f32 = 4.0;

/// One quad vertex: clip-space position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// The vertex buffer layout the pipeline declares for this type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The four corners, clockwise from top-left.
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex {
        position: [-1.0, 1.0, 0.0],
        tex_coord: [0.0, 0.0],
    },
    Vertex {
        position: [1.0, 1.0, 0.0],
        tex_coord: [TILING, 0.0],
    },
    Vertex {
        position: [1.0, -1.0, 0.0],
        tex_coord: [TILING, TILING],
    },
    Vertex {
        position: [-1.0, -1.0, 0.0],
        tex_coord: [0.0, TILING],
    },
];

/// Two triangles covering the quad.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_and_offsets_match_pipeline_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn quad_spans_full_clip_space() {
        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        for v in &QUAD_VERTICES {
            assert_eq!(v.position[2], 0.0);
        }
    }

    #[test]
    fn tex_coords_cover_tiled_corners() {
        let coords: Vec<[f32; 2]> = QUAD_VERTICES.iter().map(|v| v.tex_coord).collect();
        assert!(coords.contains(&[0.0, 0.0]));
        assert!(coords.contains(&[TILING, 0.0]));
        assert!(coords.contains(&[TILING, TILING]));
        assert!(coords.contains(&[0.0, TILING]));
    }

    #[test]
    fn indices_are_two_triangles_over_four_vertices() {
        assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
    }
}
