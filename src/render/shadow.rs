use super::helpers;
use crate::constants::{SHADOW_EXTENT, SHADOW_FAR, SHADOW_MAP_SIZE, SHADOW_NEAR};
use glam::{Mat4, Vec3};

/// Directional-light shadow map and the bind group the ground samples it with.
pub(crate) struct ShadowResources {
    #[allow(dead_code)]
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_shadow_resources(device: &wgpu::Device) -> ShadowResources {
    let (tex, view) = helpers::create_depth_texture(
        device,
        "shadow_map",
        SHADOW_MAP_SIZE,
        SHADOW_MAP_SIZE,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("shadow_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        compare: Some(wgpu::CompareFunction::LessEqual),
        ..Default::default()
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("shadow_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Depth,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                count: None,
            },
        ],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("shadow_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    ShadowResources {
        tex,
        view,
        bgl,
        bind_group,
    }
}

/// Orthographic view-projection of a directional light at `light_pos`
/// aimed at the origin.
pub(crate) fn light_view_proj(light_pos: Vec3) -> Mat4 {
    let proj = Mat4::orthographic_rh(
        -SHADOW_EXTENT,
        SHADOW_EXTENT,
        -SHADOW_EXTENT,
        SHADOW_EXTENT,
        SHADOW_NEAR,
        SHADOW_FAR,
    );
    let view = Mat4::look_at_rh(light_pos, Vec3::ZERO, Vec3::Y);
    proj * view
}
