//! spintri - fullscreen rotating-triangle demo
//!
//! A minimal wgpu program: one-time window/device/pipeline setup followed
//! by a per-frame clear/update/draw/present loop.

pub mod config;
pub mod render;
pub mod systems;
