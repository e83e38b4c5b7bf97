//! Directional lighting uniform shared with the cube shader.

use wgpu::util::DeviceExt;

/// Lighting configuration.
/// NOTE: Must match the WGSL struct layout exactly (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Direction from surface toward the light (normalized).
    pub light_dir: [f32; 3],
    /// Directional light intensity.
    pub intensity: f32,
    /// Ambient light intensity.
    pub ambient: f32,
    /// Padding for GPU alignment.
    pub _pad: [f32; 3],
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self {
            // Key light from the upper-right-front
            light_dir: normalize([5.0, 5.0, 5.0]),
            intensity: 1.0,
            // Small ambient term so the unlit faces stay readable
            ambient: 0.15,
            _pad: [0.0; 3],
        }
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Owns the lighting uniform buffer and its bind group.
pub struct Lighting {
    /// CPU-side copy of the lighting uniform.
    pub uniform: LightingUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for pipeline construction.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for draw calls.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the default lighting rig and upload it.
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform = LightingUniform::default();

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Lighting Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Lighting Bind Group"),
        });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light_dir_is_normalized() {
        let uniform = LightingUniform::default();
        let [x, y, z] = uniform.light_dir;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-6);
    }
}
