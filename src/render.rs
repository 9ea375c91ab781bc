use crate::constants::{
    rgb, ANCHOR_ALPHA, BACKGROUND_RGB, FORWARD_AXIS_RGB, REFERENCE_LINE_LENGTH, RIGHT_AXIS_RGB,
    UP_AXIS_RGB,
};
use crate::geometry::{self, Vertex};
use glam::Vec3;
use irc_core::{forward_vec3, right_vec3, up_vec3, AnchorSet, Facing, FrameRenderer, FrameView};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_rgb(hex: u32) -> [f32; 3] {
    rgb(hex).map(srgb_to_linear)
}

fn facing_color(facing: Facing) -> [f32; 3] {
    match facing {
        Facing::Front | Facing::Back => linear_rgb(FORWARD_AXIS_RGB),
        Facing::Left | Facing::Right => linear_rgb(RIGHT_AXIS_RGB),
        Facing::Up | Facing::Down => linear_rgb(UP_AXIS_RGB),
    }
}

fn anchor_vertices(anchors: &AnchorSet) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(anchors.anchors().len() * 36);
    for a in anchors.anchors() {
        let color = geometry::with_alpha(facing_color(a.facing), ANCHOR_ALPHA);
        geometry::push_cube(&mut out, a.center, a.half_extent, color);
    }
    out
}

fn reference_line_vertices() -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6);
    for (axis, hex) in [
        (forward_vec3(), FORWARD_AXIS_RGB),
        (right_vec3(), RIGHT_AXIS_RGB),
        (up_vec3(), UP_AXIS_RGB),
    ] {
        let color = geometry::with_alpha(linear_rgb(hex), 1.0);
        geometry::push_line(&mut out, Vec3::ZERO, axis * REFERENCE_LINE_LENGTH, color);
    }
    out
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    anchor_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    anchor_vb: wgpu::Buffer,
    anchor_vertex_count: u32,
    line_vb: wgpu::Buffer,
    line_vertex_count: u32,
}

impl<'a> GpuState<'a> {
    /// Anchors never move, so their geometry is uploaded once here.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        anchors: &AnchorSet,
    ) -> anyhow::Result<Self> {
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
                    // default limits; older WebGPU impls reject unknown fields
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(irc_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let make_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &VERTEX_ATTRIBUTES,
                    }],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    // the camera usually sits inside the anchor behind it
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let anchor_pipeline =
            make_pipeline("anchor_pipeline", wgpu::PrimitiveTopology::TriangleList);
        let line_pipeline = make_pipeline("line_pipeline", wgpu::PrimitiveTopology::LineList);

        let anchor_vertices = anchor_vertices(anchors);
        let anchor_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("anchor_vb"),
            contents: bytemuck::cast_slice(&anchor_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let line_vertices = reference_line_vertices();
        let line_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line_vb"),
            contents: bytemuck::cast_slice(&line_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let [r, g, b] = linear_rgb(BACKGROUND_RGB);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            uniform_buffer,
            bind_group,
            anchor_pipeline,
            line_pipeline,
            anchor_vb,
            anchor_vertex_count: anchor_vertices.len() as u32,
            line_vb,
            line_vertex_count: line_vertices.len() as u32,
        })
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
        }
    }

    pub fn draw(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let uniforms = Uniforms {
            view_proj: frame.camera.view_projection().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
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
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if frame.show_reference_lines && self.line_vertex_count > 0 {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_vertex_buffer(0, self.line_vb.slice(..));
                rpass.draw(0..self.line_vertex_count, 0..1);
            }
            if frame.anchors.visible && self.anchor_vertex_count > 0 {
                rpass.set_pipeline(&self.anchor_pipeline);
                rpass.set_vertex_buffer(0, self.anchor_vb.slice(..));
                rpass.draw(0..self.anchor_vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

impl FrameRenderer for GpuState<'_> {
    fn render(&mut self, frame: &FrameView<'_>) {
        match self.draw(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
            }
            Err(e) => log::warn!("[render] frame skipped: {:?}", e),
        }
    }
}

/// Used until (or instead of) a WebGPU device; frames are classified but not drawn.
#[derive(Default)]
pub struct NoRenderer;

impl FrameRenderer for NoRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}
