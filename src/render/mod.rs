//! wgpu-based rendering for the triangle demo
//!
//! ## Key components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::TrianglePipeline`] - shader, vertex buffer, and transform uniform
//! - [`types`] - GPU-uploadable vertex and uniform structs

pub mod context;
pub mod pipeline;
pub mod types;

pub use context::RenderContext;
pub use pipeline::TrianglePipeline;
pub use types::{TransformUniforms, Vertex, TRIANGLE_VERTICES};
