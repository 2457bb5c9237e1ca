//! spintri - fullscreen rotating-triangle demo
//!
//! Opens a fullscreen window, brings up a wgpu device, and renders a
//! single rotating triangle every frame. F11 toggles fullscreen.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use spintri::config::AppConfig;
use spintri::systems::{RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        Self {
            config,
            window_system: None,
            render_system: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(ws) => ws,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(rs) => rs,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(rs) = &mut self.render_system {
                    rs.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::F11) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        if let Some(ws) = &self.window_system {
                            ws.toggle_fullscreen();
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(rs) = &mut self.render_system {
                    match rs.render_frame() {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            // Reconfigure at the current size and try again next frame
                            let (width, height) = rs.size();
                            rs.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Frame skipped: {}", e);
                        }
                    }
                }

                // Continuous rendering: request the next frame immediately
                if let Some(ws) = &self.window_system {
                    ws.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting spintri");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
