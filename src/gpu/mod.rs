//! GPU resource ownership.

/// wgpu device, queue, surface, and configuration.
pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
