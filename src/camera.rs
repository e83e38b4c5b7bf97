//! Fixed perspective camera and its GPU uniform resources.
//!
//! The camera never orbits or zooms; interaction rotates the object, not
//! the view. The only mutation after construction is the aspect ratio,
//! updated on viewport resize so frames render undistorted.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

/// GPU uniform buffer holding the view-projection matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Update the uniform from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the [`Camera`] plus its GPU buffer and bind group.
pub struct CameraController {
    /// The camera state.
    pub camera: Camera,
    /// CPU-side copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for pipeline construction.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for draw calls.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the camera on the +Z axis looking at the origin, with the
    /// aspect ratio taken from the current surface configuration.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, options.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Recompute the aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Upload the current view-projection matrix to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn test_resize_recomputes_aspect() {
        let mut camera = test_camera();
        camera.aspect = 800.0 / 600.0;
        let before = camera.build_matrix();

        camera.aspect = 1024.0 / 768.0;
        // Same ratio, so the projection is unchanged
        assert_eq!(camera.build_matrix(), before);

        camera.aspect = 1920.0 / 600.0;
        assert_ne!(camera.build_matrix(), before);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut camera = test_camera();
        camera.aspect = 640.0 / 480.0;
        let first = camera.build_matrix();
        camera.aspect = 640.0 / 480.0;
        assert_eq!(camera.build_matrix(), first);
    }

    #[test]
    fn test_view_matrix_looks_down_negative_z() {
        let camera = test_camera();
        let vp = camera.build_matrix();
        // The origin sits 5 units in front of the eye; it must project to
        // the center of the viewport with positive depth.
        let clip = vp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
