use crate::constants::INSTANCE_CHUNK;
use crate::core::{Material, MeshPrimitive, ModelTemplate, Vertex};
use glam::Mat4;
use std::mem::{offset_of, size_of};
use wgpu::util::DeviceExt;

/// Per-clone data streamed every frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    base_color: [f32; 4],
    emissive_rough: [f32; 4],
    params: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn new(model: Mat4, material: &Material) -> Self {
        let e = material.emissive;
        Self {
            model: model.to_cols_array_2d(),
            base_color: material.base_color,
            emissive_rough: [e[0], e[1], e[2], material.roughness],
            params: [material.metalness, 0.0, 0.0, 0.0],
        }
    }
}

pub(crate) const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, position) as wgpu::BufferAddress,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, normal) as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
    ],
};

pub(crate) const INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: size_of::<InstanceRaw>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
    ],
};

pub(crate) const GROUND_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
};

/// One uploaded mesh primitive plus the instance buffer its clones use.
pub(crate) struct GpuPrimitive {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
    local: Mat4,
    material: Material,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl GpuPrimitive {
    fn new(device: &wgpu::Device, name: &str, index: usize, p: &MeshPrimitive) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("vertices ({name}, primitive {index})")),
            contents: bytemuck::cast_slice(&p.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("indices ({name}, primitive {index})")),
            contents: bytemuck::cast_slice(&p.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_indices: p.indices.len() as u32,
            local: p.local,
            material: p.material,
            instance_buffer: create_instance_buffer(device, INSTANCE_CHUNK),
            instance_capacity: INSTANCE_CHUNK,
            instance_count: 0,
        }
    }

    /// Write this frame's clone matrices, growing the buffer if needed.
    fn write_instances(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, worlds: &[Mat4]) {
        let raw: Vec<InstanceRaw> = worlds
            .iter()
            .map(|w| InstanceRaw::new(*w * self.local, &self.material))
            .collect();
        if raw.len() > self.instance_capacity {
            let chunks = raw.len().div_ceil(INSTANCE_CHUNK);
            self.instance_capacity = chunks * INSTANCE_CHUNK;
            self.instance_buffer = create_instance_buffer(device, self.instance_capacity);
        }
        if !raw.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raw));
        }
        self.instance_count = raw.len() as u32;
    }

    pub(crate) fn draw<'p>(&self, pass: &mut wgpu::RenderPass<'p>) {
        if self.instance_count == 0 || self.num_indices == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.num_indices, 0, 0..self.instance_count);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity * size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// GPU copy of a template model.
pub(crate) struct GpuModel {
    pub(crate) cast_shadow: bool,
    primitives: Vec<GpuPrimitive>,
}

impl GpuModel {
    pub(crate) fn upload(device: &wgpu::Device, template: &ModelTemplate) -> Self {
        let primitives = template
            .primitives
            .iter()
            .enumerate()
            .map(|(i, p)| GpuPrimitive::new(device, &template.name, i, p))
            .collect();
        Self {
            cast_shadow: template.cast_shadow,
            primitives,
        }
    }

    pub(crate) fn write_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        worlds: &[Mat4],
    ) {
        for p in &mut self.primitives {
            p.write_instances(device, queue, worlds);
        }
    }

    pub(crate) fn draw<'p>(&self, pass: &mut wgpu::RenderPass<'p>) {
        for p in &self.primitives {
            p.draw(pass);
        }
    }
}

/// Flat quad on the XZ plane, two triangles.
pub(crate) struct GroundMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl GroundMesh {
    pub(crate) fn new(device: &wgpu::Device, size: f32, y: f32) -> Self {
        let h = size / 2.0;
        let vertices: [[f32; 3]; 4] = [[-h, y, -h], [h, y, -h], [h, y, h], [-h, y, h]];
        let indices: [u32; 6] = [0, 2, 1, 0, 3, 2];
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ground_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ground_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
        }
    }

    pub(crate) fn draw<'p>(&self, pass: &mut wgpu::RenderPass<'p>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..6, 0, 0..1);
    }
}
