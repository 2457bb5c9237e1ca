//! Render pipeline for the rotating triangle
//!
//! Owns the shader module, the three-vertex buffer, and the uniform buffer
//! holding the per-frame transform matrix.

use wgpu::util::DeviceExt;

use super::types::{TransformUniforms, Vertex, TRIANGLE_VERTICES};

/// Render pipeline drawing a single colored triangle
#[allow(dead_code)] // bind_group_layout needed for potential future bind group recreation
pub struct TrianglePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Bind group layout for uniforms
    bind_group_layout: wgpu::BindGroupLayout,
    /// Uniform buffer holding the transform matrix
    uniform_buffer: wgpu::Buffer,
    /// Bind group for uniforms
    bind_group: wgpu::BindGroup,
    /// Vertex buffer with the triangle, written once at creation
    vertex_buffer: wgpu::Buffer,
}

impl TrianglePipeline {
    /// Create the pipeline and upload the triangle geometry
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        // Create bind group layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Triangle Bind Group Layout"),
            entries: &[
                // Transform uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        // Create pipeline layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Triangle Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Load shader
        let shader_source = include_str!("shaders/triangle.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Triangle Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // Create render pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Triangle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The triangle's winding flips as it spins; never cull
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Create uniform buffer
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Transform Uniform Buffer"),
            contents: bytemuck::bytes_of(&TransformUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Create bind group
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Triangle Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        });

        // Create vertex buffer
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
            bind_group,
            vertex_buffer,
        }
    }

    /// Get the vertex buffer layout for Vertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Update the transform uniform
    pub fn update_transform(&self, queue: &wgpu::Queue, uniforms: &TransformUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the clear-and-draw pass for one frame
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Triangle Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..3, 0..1);
    }
}

/// Create a rotation matrix about the Z axis (column-major)
pub fn rotation_z_matrix(angle: f32) -> [[f32; 4]; 4] {
    let cs = angle.cos();
    let sn = angle.sin();

    [
        [cs, sn, 0.0, 0.0],
        [-sn, cs, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn transform(m: [[f32; 4]; 4], v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for row in 0..4 {
            for col in 0..4 {
                out[row] += m[col][row] * v[col];
            }
        }
        out
    }

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = TrianglePipeline::vertex_buffer_layout();
        assert_eq!(
            layout.array_stride,
            std::mem::size_of::<Vertex>() as u64
        );
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let m = rotation_z_matrix(0.0);
        let v = [1.0, 2.0, 3.0, 1.0];
        let result = transform(m, v);
        for i in 0..4 {
            assert!(approx_eq(result[i], v[i]), "component {} was {}", i, result[i]);
        }
    }

    #[test]
    fn test_rotation_quarter_turn_maps_x_to_y() {
        use std::f32::consts::FRAC_PI_2;

        let m = rotation_z_matrix(FRAC_PI_2);
        let result = transform(m, [1.0, 0.0, 0.0, 1.0]);
        assert!(approx_eq(result[0], 0.0), "x was {}", result[0]);
        assert!(approx_eq(result[1], 1.0), "y was {}", result[1]);
        assert!(approx_eq(result[2], 0.0), "z was {}", result[2]);
    }

    #[test]
    fn test_rotation_preserves_z() {
        let m = rotation_z_matrix(1.2345);
        let result = transform(m, [0.0, 0.0, 7.0, 1.0]);
        assert!(approx_eq(result[2], 7.0), "z was {}", result[2]);
    }

    #[test]
    fn test_rotation_half_turn_negates_xy() {
        use std::f32::consts::PI;

        let m = rotation_z_matrix(PI);
        let result = transform(m, [0.5, -0.5, 0.0, 1.0]);
        assert!(approx_eq(result[0], -0.5), "x was {}", result[0]);
        assert!(approx_eq(result[1], 0.5), "y was {}", result[1]);
    }
}
