//! The render engine: composes the GPU context, camera, lighting, cube
//! renderer, and the drag interaction state.
//!
//! The engine is driven entirely by its host's event loop: pointer events
//! go through [`RenderEngine::handle_pointer`], size changes through
//! [`RenderEngine::resize`], and each frame-clock tick through
//! [`RenderEngine::render`]. All GPU resources are acquired in
//! [`RenderEngine::new`] and released when the engine is dropped.

use crate::camera::CameraController;
use crate::cube_renderer::CubeRenderer;
use crate::error::SpinviewError;
use crate::gpu::render_context::RenderContext;
use crate::input::{DragTracker, PointerEvent};
use crate::lighting::Lighting;
use crate::options::Options;
use crate::orientation::Orientation;

/// Engine rendering one drag-rotatable object.
pub struct RenderEngine {
    context: RenderContext,
    camera: CameraController,
    lighting: Lighting,
    cube: CubeRenderer,
    tracker: DragTracker,
    orientation: Orientation,
    options: Options,
    depth_view: wgpu::TextureView,
}

impl RenderEngine {
    /// Set up the GPU context and scene for the given surface target.
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::Gpu`] if GPU context initialization fails;
    /// recovery is the host's concern.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, SpinviewError> {
        let context = RenderContext::new(window, size).await?;

        let camera = CameraController::new(&context, &options.camera);
        let lighting = Lighting::new(&context.device);
        let cube = CubeRenderer::new(
            &context,
            &camera.layout,
            &lighting.layout,
            options.colors.object,
        );
        let depth_view = Self::create_depth_texture(&context);

        Ok(Self {
            context,
            camera,
            lighting,
            cube,
            tracker: DragTracker::new(),
            orientation: Orientation::new(),
            options,
            depth_view,
        })
    }

    /// The current object orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The options the engine was constructed with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Feed a pointer event through the drag tracker; moves inside an
    /// active drag rotate the object. Everything else is a silent no-op.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some(delta) = self.tracker.handle_event(event) {
            self.orientation.apply_drag(delta);
        }
    }

    /// Resize the surface and recompute the projection.
    ///
    /// Idempotent: repeated calls with the current dimensions return
    /// immediately, and zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.context.config.width && height == self.context.config.height {
            return;
        }
        self.context.resize(width, height);
        self.camera.resize(width, height);
        self.depth_view = Self::create_depth_texture(&self.context);
    }

    /// Draw one frame with the current orientation and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; `Outdated`/`Lost` are recoverable via [`Self::resize`].
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera.update_gpu(&self.context.queue);
        self.cube
            .set_rotation(&self.context.queue, self.orientation.quat());

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            self.cube
                .draw(&mut rp, &self.camera.bind_group, &self.lighting.bind_group);
        }

        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// The background clear color, converted from the options' sRGB triple
    /// to the linear values the surface expects.
    fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.options.colors.background;
        wgpu::Color {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a: 1.0,
        }
    }

    fn create_depth_texture(context: &RenderContext) -> wgpu::TextureView {
        let size = wgpu::Extent3d {
            width: context.config.width,
            height: context.config.height,
            depth_or_array_layers: 1,
        };

        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

/// Convert one sRGB channel in `[0, 1]` to linear.
fn srgb_to_linear(c: f32) -> f64 {
    let c = f64::from(c);
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_conversion_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < 1e-9);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-9);
        // 0xf0 background lands near 0.87 linear
        let bg = srgb_to_linear(0.941);
        assert!(bg > 0.86 && bg < 0.88);
    }
}
