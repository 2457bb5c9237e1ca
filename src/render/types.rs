//! GPU-compatible data types for the triangle pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex with 3D position and color
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

/// Uniforms for the vertex stage
///
/// Holds the single 4x4 transform applied to every vertex.
/// Layout: 64 bytes total (must match triangle.wgsl TransformUniforms).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TransformUniforms {
    /// Transform matrix (column-major)
    pub transform: [[f32; 4]; 4],
}

impl Default for TransformUniforms {
    fn default() -> Self {
        Self {
            transform: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

/// The one triangle this demo draws: red top, green right, blue left
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5, 0.0], color: [1.0, 0.0, 0.0, 1.0] },
    Vertex { position: [0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0, 1.0] },
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0, 1.0] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_size() {
        // 3 floats position + 4 floats color = 28 bytes
        assert_eq!(size_of::<Vertex>(), 28);
    }

    #[test]
    fn test_transform_uniforms_size() {
        // 16 floats matrix = 64 bytes
        assert_eq!(size_of::<TransformUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        // All types should be 4-byte aligned (f32 alignment)
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
        assert_eq!(std::mem::align_of::<TransformUniforms>(), 4);
    }

    #[test]
    fn test_triangle_winding_is_clockwise() {
        // The vertex order is clockwise in the XY plane (negative signed area).
        // The pipeline disables culling, so this order renders either way,
        // but the spin flips the apparent winding every half turn.
        let [a, b, c] = TRIANGLE_VERTICES;
        let area = (b.position[0] - a.position[0]) * (c.position[1] - a.position[1])
            - (c.position[0] - a.position[0]) * (b.position[1] - a.position[1]);
        assert!(area < 0.0, "unexpected winding, area = {}", area);
    }
}
