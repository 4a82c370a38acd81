use crate::constants::*;
use crate::core::{Camera, ModelKind, ModelTemplate, Scene};
use bytemuck::Zeroable;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

mod helpers;
mod mesh;
mod shadow;
mod targets;
use mesh::{GpuModel, GroundMesh, GROUND_LAYOUT, INSTANCE_LAYOUT, VERTEX_LAYOUT};
use shadow::ShadowResources;
use targets::DepthTarget;

// Groups smaller than this are skipped entirely rather than drawn as specks.
const MIN_VISIBLE_SCALE: f32 = 1e-4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    ambient: [f32; 4],
    shadow: [f32; 4],
}

fn scaled(color: [f32; 3], intensity: f32) -> [f32; 4] {
    [
        color[0] * intensity,
        color[1] * intensity,
        color[2] * intensity,
        1.0,
    ]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth: DepthTarget,
    shadow: ShadowResources,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    mesh_pipeline: wgpu::RenderPipeline,
    shadow_pipeline: wgpu::RenderPipeline,
    ground_pipeline: wgpu::RenderPipeline,
    ground: GroundMesh,

    models: FnvHashMap<ModelKind, GpuModel>,
    // Reused per frame to bucket clone matrices by model
    instance_scratch: FnvHashMap<ModelKind, Vec<Mat4>>,

    width: u32,
    height: u32,
    camera: Camera,
    light_view_proj: Mat4,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas so the page shows through
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let depth = DepthTarget::new(&device, width, height);
        let shadow = shadow::create_shadow_resources(&device);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let mesh_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let ground_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ground_pl"),
            bind_group_layouts: &[&globals_bgl, &shadow.bgl],
            push_constant_ranges: &[],
        });

        let mesh_pipeline = helpers::make_pipeline(
            &device,
            "mesh_pipeline",
            &mesh_pl,
            &shader,
            "vs_mesh",
            &[VERTEX_LAYOUT, INSTANCE_LAYOUT],
            Some(("fs_mesh", format, Some(wgpu::BlendState::REPLACE))),
            true,
            wgpu::DepthBiasState::default(),
            None,
        );
        let shadow_pipeline = helpers::make_pipeline(
            &device,
            "shadow_pipeline",
            &mesh_pl,
            &shader,
            "vs_shadow",
            &[VERTEX_LAYOUT, INSTANCE_LAYOUT],
            None,
            true,
            wgpu::DepthBiasState {
                constant: 2,
                slope_scale: 2.0,
                clamp: 0.0,
            },
            None,
        );
        let ground_pipeline = helpers::make_pipeline(
            &device,
            "ground_pipeline",
            &ground_pl,
            &shader,
            "vs_ground",
            &[GROUND_LAYOUT],
            Some((
                "fs_ground",
                format,
                Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            )),
            false,
            wgpu::DepthBiasState::default(),
            None,
        );
        let ground = GroundMesh::new(&device, GROUND_SIZE, GROUND_Y);

        let mut camera = Camera::default();
        camera.set_viewport(width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            shadow,
            globals_buffer,
            globals_bg,
            mesh_pipeline,
            shadow_pipeline,
            ground_pipeline,
            ground,
            models: FnvHashMap::default(),
            instance_scratch: FnvHashMap::default(),
            width,
            height,
            camera,
            light_view_proj: shadow::light_view_proj(Vec3::from_array(SUN_POSITION)),
        })
    }

    /// Upload a template so its clones can be drawn. Uploading the same kind
    /// twice replaces the earlier copy.
    pub fn upload_model(&mut self, kind: ModelKind, template: &ModelTemplate) {
        let model = GpuModel::upload(&self.device, template);
        self.models.insert(kind, model);
        log::info!("[gpu] uploaded {}", template.name);
    }

    /// Camera position; the camera always aims at `target`.
    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.camera.eye = eye;
        self.camera.target = target;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    fn write_globals(&self) {
        let sun_dir = Vec3::from_array(SUN_POSITION).normalize();
        let g = Globals {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            light_view_proj: self.light_view_proj.to_cols_array_2d(),
            camera_pos: self.camera.eye.extend(1.0).to_array(),
            sun_dir: sun_dir.extend(0.0).to_array(),
            sun_color: scaled(SUN_COLOR, SUN_INTENSITY),
            ambient: scaled(AMBIENT_COLOR, AMBIENT_INTENSITY),
            shadow: [
                GROUND_SHADOW_OPACITY,
                SHADOW_DEPTH_BIAS,
                1.0 / SHADOW_MAP_SIZE as f32,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    /// Bucket the scene's clones by model and stream them to the GPU.
    fn write_instances(&mut self, scene: &Scene) {
        for v in self.instance_scratch.values_mut() {
            v.clear();
        }
        for (kind, world) in scene.instances(MIN_VISIBLE_SCALE) {
            if self.models.contains_key(&kind) {
                self.instance_scratch.entry(kind).or_default().push(world);
            }
        }
        for (kind, model) in self.models.iter_mut() {
            let worlds = self
                .instance_scratch
                .get(kind)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            model.write_instances(&self.device, &self.queue, worlds);
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        self.write_globals();
        self.write_instances(scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: shadow casters into the light's depth map
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.shadow_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for model in self.models.values().filter(|m| m.cast_shadow) {
                model.draw(&mut rpass);
            }
        }

        // Pass 2: lit models, then the shadow-catching ground
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for model in self.models.values() {
                model.draw(&mut rpass);
            }

            rpass.set_pipeline(&self.ground_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(1, &self.shadow.bind_group, &[]);
            self.ground.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after the surface was lost or became outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
