//! WebGPU renderer: gradient background, glTF meshes, and the snow layer.
//!
//! Geometry buffers are cached per mesh id, so corner replicas cloned from
//! one asset share GPU memory. Per-draw uniforms go through one dynamic-
//! offset uniform buffer sized to the frame's draw count; particle positions
//! stream into a single instance buffer every frame.

use crate::camera::OrbitCamera;
use crate::constants::PARTICLE_SIZE;
use crate::core::backdrop::{fit_plane_size, BACKDROP_PLANE_Z};
use crate::core::{MeshId, ParticleField, Scene};
use crate::loader::DecodedImage;
use fnv::FnvHashMap;
use glam::{Mat4, Vec4};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;
// Dynamic-offset stride; also the WebGPU minimum uniform offset alignment.
const MESH_UNIFORM_STRIDE: u64 = 256;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlobalsUniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    // x: particle sprite size, rest unused
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshUniforms {
    model: [[f32; 4]; 4],
    // rgb: base color, a: opacity
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BackdropUniforms {
    // xy: plane half-size in world units, z: plane z, w unused
    size: [f32; 4],
}

/// Texture plane behind the scene; present once the image decodes.
struct BackdropLayer {
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    image_size: (f32, f32),
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

struct DrawItem {
    mesh: MeshId,
    model: Mat4,
    color: Vec4,
    transparent: bool,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,

    background_pipeline: wgpu::RenderPipeline,

    backdrop_pipeline: wgpu::RenderPipeline,
    backdrop_bgl: wgpu::BindGroupLayout,
    backdrop: Option<BackdropLayer>,

    mesh_pipeline: wgpu::RenderPipeline,
    mesh_cache: FnvHashMap<MeshId, MeshBuffers>,
    mesh_uniform_buffer: wgpu::Buffer,
    mesh_uniform_capacity: u32,
    mesh_bgl: wgpu::BindGroupLayout,
    mesh_bind_group: wgpu::BindGroup,

    points_pipeline: wgpu::RenderPipeline,
    points_buffer: wgpu::Buffer,
    points_capacity: usize,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = helpers::create_depth_texture(&device, width, height, DEPTH_FORMAT);

        // Shared globals (camera + particle params)
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalsUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Background gradient (fullscreen triangle, no bindings)
        let background_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BACKGROUND_WGSL.into()),
        });
        let background_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("background_pl"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });
        let background_pipeline = helpers::make_scene_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "background_pipeline",
                layout: &background_layout,
                shader: &background_shader,
                vs_entry: "vs_fullscreen",
                fs_entry: "fs_gradient",
                vertex_buffers: &[],
                color_format: format,
                blend: None,
                depth_format: DEPTH_FORMAT,
                depth_write: false,
                depth_compare: wgpu::CompareFunction::Always,
            },
        );

        // Image backdrop: textured plane far behind the scene, quad expanded
        // in the shader from a plane-size uniform
        let backdrop_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BACKDROP_WGSL.into()),
        });
        let backdrop_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("backdrop_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let backdrop_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("backdrop_pl"),
            bind_group_layouts: &[&globals_bgl, &backdrop_bgl],
            push_constant_ranges: &[],
        });
        let backdrop_pipeline = helpers::make_scene_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "backdrop_pipeline",
                layout: &backdrop_layout,
                shader: &backdrop_shader,
                vs_entry: "vs_backdrop",
                fs_entry: "fs_backdrop",
                vertex_buffers: &[],
                color_format: format,
                blend: None,
                depth_format: DEPTH_FORMAT,
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );

        // Mesh pipeline: globals at group 0, per-draw uniforms at group 1
        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
        });
        let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<MeshUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });
        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&globals_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let mesh_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: 6 * 4,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        };
        let mesh_pipeline = helpers::make_scene_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "mesh_pipeline",
                layout: &mesh_layout,
                shader: &mesh_shader,
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                vertex_buffers: &[mesh_vertex_layout],
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_format: DEPTH_FORMAT,
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );
        let mesh_uniform_capacity = 64u32;
        let mesh_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_uniforms"),
            size: mesh_uniform_capacity as u64 * MESH_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let mesh_bind_group =
            Self::build_mesh_bind_group(&device, &mesh_bgl, &mesh_uniform_buffer);

        // Particle sprites: one instance per particle, quad expanded in the shader
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
        });
        let points_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let points_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: 3 * 4,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        };
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "points_pipeline",
                layout: &points_layout,
                shader: &points_shader,
                vs_entry: "vs_point",
                fs_entry: "fs_point",
                vertex_buffers: &[points_vertex_layout],
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_format: DEPTH_FORMAT,
                depth_write: false,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );
        let points_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points"),
            size: (particle_capacity.max(1) * 3 * 4) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            background_pipeline,
            backdrop_pipeline,
            backdrop_bgl,
            backdrop: None,
            mesh_pipeline,
            mesh_cache: FnvHashMap::default(),
            mesh_uniform_buffer,
            mesh_uniform_capacity,
            mesh_bgl,
            mesh_bind_group,
            points_pipeline,
            points_buffer,
            points_capacity: particle_capacity.max(1),
            globals_buffer,
            globals_bind_group,
            width,
            height,
        })
    }

    fn build_mesh_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh_bg"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<MeshUniforms>() as u64),
                }),
            }],
        })
    }

    /// Install the decoded backdrop image; the plane shows up next frame.
    pub fn set_backdrop_image(&mut self, img: &DecodedImage) {
        let size = wgpu::Extent3d {
            width: img.width.max(1),
            height: img.height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("backdrop_tex"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &img.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.width),
                rows_per_image: Some(size.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("backdrop_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("backdrop_uniforms"),
            size: std::mem::size_of::<BackdropUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("backdrop_bg"),
            layout: &self.backdrop_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });
        self.backdrop = Some(BackdropLayer {
            bind_group,
            uniform_buffer,
            image_size: (img.width as f32, img.height as f32),
        });
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
            self.depth_view =
                helpers::create_depth_texture(&self.device, width, height, DEPTH_FORMAT);
        }
    }

    /// Upload any mesh geometry the cache has not seen yet and drop buffers
    /// for meshes that left the scene (the outgoing model after a swap).
    fn sync_mesh_cache(&mut self, scene: &Scene) {
        let live = scene.live_mesh_ids();
        let device = &self.device;
        let cache = &mut self.mesh_cache;
        cache.retain(|id, _| live.contains(id));
        scene.for_each_mesh(&mut |mesh, _world| {
            cache.entry(mesh.id).or_insert_with(|| {
                let mut interleaved = Vec::with_capacity(mesh.positions.len() * 6);
                for (p, n) in mesh.positions.iter().zip(mesh.normals.iter()) {
                    interleaved.extend_from_slice(p);
                    interleaved.extend_from_slice(n);
                }
                let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vertices"),
                    contents: bytemuck::cast_slice(&interleaved),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_indices"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                MeshBuffers {
                    vertex,
                    index,
                    index_count: mesh.indices.len() as u32,
                }
            });
        });
    }

    fn ensure_mesh_uniform_capacity(&mut self, draw_count: u32) {
        if draw_count <= self.mesh_uniform_capacity {
            return;
        }
        self.mesh_uniform_capacity = draw_count.next_power_of_two();
        self.mesh_uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_uniforms"),
            size: self.mesh_uniform_capacity as u64 * MESH_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        self.mesh_bind_group =
            Self::build_mesh_bind_group(&self.device, &self.mesh_bgl, &self.mesh_uniform_buffer);
    }

    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &OrbitCamera,
        particles: &ParticleField,
    ) -> Result<(), wgpu::SurfaceError> {
        self.sync_mesh_cache(scene);

        // Opaque first, fading assets after, so the cross-fade blends over
        // whatever is behind it.
        let mut draws: Vec<DrawItem> = Vec::new();
        scene.for_each_mesh(&mut |mesh, world| {
            let m = &mesh.material;
            draws.push(DrawItem {
                mesh: mesh.id,
                model: world,
                color: Vec4::new(
                    m.base_color.x,
                    m.base_color.y,
                    m.base_color.z,
                    m.base_color.w * m.opacity,
                ),
                transparent: m.transparent,
            });
        });
        draws.sort_by_key(|d| d.transparent);
        self.ensure_mesh_uniform_capacity(draws.len() as u32);

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view_mat = camera.view_matrix();
        // Camera basis vectors for billboarded particle quads
        let right = glam::Vec3::new(view_mat.x_axis.x, view_mat.y_axis.x, view_mat.z_axis.x);
        let up = glam::Vec3::new(view_mat.x_axis.y, view_mat.y_axis.y, view_mat.z_axis.y);
        let globals = GlobalsUniforms {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        if let Some(b) = &self.backdrop {
            let (img_w, img_h) = b.image_size;
            let (plane_w, plane_h) =
                fit_plane_size(img_w, img_h, self.width as f32, self.height as f32);
            let u = BackdropUniforms {
                size: [plane_w * 0.5, plane_h * 0.5, BACKDROP_PLANE_Z, 0.0],
            };
            self.queue
                .write_buffer(&b.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        for (i, d) in draws.iter().enumerate() {
            let u = MeshUniforms {
                model: d.model.to_cols_array_2d(),
                color: d.color.to_array(),
            };
            self.queue.write_buffer(
                &self.mesh_uniform_buffer,
                i as u64 * MESH_UNIFORM_STRIDE,
                bytemuck::bytes_of(&u),
            );
        }

        let count = particles.len().min(self.points_capacity);
        self.queue.write_buffer(
            &self.points_buffer,
            0,
            bytemuck::cast_slice(&particles.positions()[..count * 3]),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.background_pipeline);
            rpass.draw(0..3, 0..1);

            if let Some(b) = &self.backdrop {
                rpass.set_pipeline(&self.backdrop_pipeline);
                rpass.set_bind_group(0, &self.globals_bind_group, &[]);
                rpass.set_bind_group(1, &b.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for (i, d) in draws.iter().enumerate() {
                let Some(buffers) = self.mesh_cache.get(&d.mesh) else {
                    continue;
                };
                rpass.set_bind_group(
                    1,
                    &self.mesh_bind_group,
                    &[(i as u64 * MESH_UNIFORM_STRIDE) as u32],
                );
                rpass.set_vertex_buffer(0, buffers.vertex.slice(..));
                rpass.set_index_buffer(buffers.index.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..buffers.index_count, 0, 0..1);
            }

            if count > 0 {
                rpass.set_pipeline(&self.points_pipeline);
                rpass.set_bind_group(0, &self.globals_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.points_buffer.slice(..));
                rpass.draw(0..6, 0..count as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
