//! Renders the interactive cube: mesh buffers, pipeline, and the
//! per-frame model transform.

use glam::{Mat4, Quat};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;

/// Cube edge length in world units.
const CUBE_SIZE: f32 = 1.0;

/// Vertex for the cube mesh.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Per-instance data: the model matrix and base color.
///
/// There is exactly one instance; keeping the transform in an instance
/// buffer lets the render loop rewrite it each frame without touching the
/// mesh.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeInstance {
    model: [[f32; 4]; 4],
    color: [f32; 3],
    _pad: f32,
}

/// Owns the cube mesh, instance buffer, and render pipeline.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    index_count: u32,
    color: [f32; 3],
}

impl CubeRenderer {
    /// Build the mesh, buffers, and pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        color: [f32; 3],
    ) -> Self {
        let (vertices, indices) = Self::generate_cube();

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let instance = CubeInstance {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color,
            _pad: 0.0,
        };
        let instance_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&[instance]),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        let pipeline = Self::create_pipeline(context, camera_layout, lighting_layout);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            index_count: indices.len() as u32,
            color,
        }
    }

    /// Rewrite the instance transform from the given rotation.
    pub fn set_rotation(&self, queue: &wgpu::Queue, rotation: Quat) {
        let instance = CubeInstance {
            model: Mat4::from_quat(rotation).to_cols_array_2d(),
            color: self.color,
            _pad: 0.0,
        };
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[instance]),
        );
    }

    /// Record the draw call into an open render pass.
    pub fn draw(
        &self,
        rp: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
        lighting_bind_group: &wgpu::BindGroup,
    ) {
        rp.set_pipeline(&self.pipeline);
        rp.set_bind_group(0, camera_bind_group, &[]);
        rp.set_bind_group(1, lighting_bind_group, &[]);
        rp.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rp.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rp.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rp.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context
            .device
            .create_shader_module(wgpu::include_wgsl!("../assets/shaders/cube.wgsl"));

        let pipeline_layout =
            context
                .device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Cube Pipeline Layout"),
                    bind_group_layouts: &[camera_layout, lighting_layout],
                    push_constant_ranges: &[],
                });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1, // normal
                },
            ],
        };

        // Instance layout (4x4 matrix as 4 vec4s + color)
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<CubeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 2, // model matrix col 0
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3, // model matrix col 1
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4, // model matrix col 2
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 5, // model matrix col 3
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 64,
                    shader_location: 6, // color
                },
            ],
        };

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Cube Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout, instance_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Generate the cube mesh: four vertices per face so each face carries
    /// its own flat normal, CCW winding for outward faces.
    fn generate_cube() -> (Vec<CubeVertex>, Vec<u32>) {
        let h = CUBE_SIZE / 2.0;

        // (normal, four corners in CCW order seen from outside)
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            (
                [0.0, 0.0, 1.0],
                [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
            ),
            (
                [0.0, 0.0, -1.0],
                [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
            ),
            (
                [1.0, 0.0, 0.0],
                [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
            ),
            (
                [-1.0, 0.0, 0.0],
                [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
            ),
            (
                [0.0, 1.0, 0.0],
                [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
            ),
            (
                [0.0, -1.0, 0.0],
                [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
            ),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u32;
            for position in corners {
                vertices.push(CubeVertex { position, normal });
            }
            indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }
        (vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_mesh_counts() {
        let (vertices, indices) = CubeRenderer::generate_cube();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_face_normals_point_away_from_center() {
        let (vertices, _) = CubeRenderer::generate_cube();
        for vertex in vertices {
            let p = glam::Vec3::from_array(vertex.position);
            let n = glam::Vec3::from_array(vertex.normal);
            // Every corner of a face lies on the normal's side of the center
            assert!(p.dot(n) > 0.0);
        }
    }
}
