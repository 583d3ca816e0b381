//! HTTP handlers for pages, assets, bundles, and health.

pub mod assets;
pub mod bundles;
pub mod health;
pub mod pages;

// Re-export handlers for easier access
pub use assets::fallback;
pub use health::healthz;
pub use pages::{index, opengl, vulkan, webgl, webgpu};
