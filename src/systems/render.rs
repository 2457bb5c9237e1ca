//! GPU rendering system
//!
//! Manages the render context, the triangle pipeline, and per-frame
//! update-and-draw: advance the rotation, upload the transform, clear,
//! draw, present.

use std::sync::Arc;
use winit::window::Window;
use crate::config::RenderingConfig;
use crate::render::{
    context::{ContextError, RenderContext},
    pipeline::{rotation_z_matrix, TrianglePipeline},
    types::TransformUniforms,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context creation failed at startup
    ContextCreation(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::ContextCreation(e) => write!(f, "Context creation failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::ContextCreation(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: TrianglePipeline,
    render_config: RenderingConfig,
    /// Rotation angle in radians, advanced each frame
    angle: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = TrianglePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            render_config,
            angle: 0.0,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame
    ///
    /// Advances the rotation, uploads the transform, then clears and draws.
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.angle += self.render_config.spin_speed;

        let uniforms = TransformUniforms {
            transform: rotation_z_matrix(self.angle),
        };
        self.pipeline.update_transform(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.clear_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_context_error_wrapping() {
        let err: RenderError = ContextError::NoAdapter.into();
        assert!(format!("{}", err).contains("No compatible GPU adapter"));
    }
}
