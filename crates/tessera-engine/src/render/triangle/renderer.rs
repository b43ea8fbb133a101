use wgpu::util::DeviceExt;

use crate::core::{FrameCtx, FrameStatus};
use crate::device::Gpu;
use crate::error::RenderError;
use crate::render::{BufferSpec, PipelineSpec};
use crate::report::Failure;

use super::{
    CubeArrayProbe, FrameLoop, FrameOutcome, TriangleConfig, UniformBlock, Variant, VertexLayout,
};

struct UniformBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Owns the triangle's device resources and draws one frame per call.
///
/// Everything is created once in [`new`](Self::new); per frame only the
/// uniform buffer is rewritten.
pub struct FrameRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniforms: Option<UniformBinding>,
    frame_loop: FrameLoop,
    _probe: Option<CubeArrayProbe>,
}

impl FrameRenderer {
    /// Uploads the mesh, compiles the shader and builds the pipeline.
    ///
    /// Errors are returned unreported; the caller owns the single report.
    pub fn new(gpu: &Gpu<'_>, config: TriangleConfig, failure: Failure) -> Result<Self, RenderError> {
        let device = gpu.device();
        let animated = config.variant.is_animated();

        let vertex_spec = BufferSpec::vertex(config.layout);
        let vertices = config.layout.triangle_bytes();
        vertex_spec.validate(Some(vertices))?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(vertex_spec.label),
            contents: vertices,
            usage: vertex_spec.usage,
        });

        let pipeline_spec =
            PipelineSpec::new(config.layout, gpu.surface_format()).with_uniforms(animated);
        pipeline_spec.validate()?;

        let bind_group_layout = animated.then(|| {
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera triangle bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(UniformBlock::SIZE),
                    },
                    count: None,
                }],
            })
        });

        let pipeline = create_pipeline(device, &pipeline_spec, bind_group_layout.as_ref());

        let uniforms = match bind_group_layout.as_ref() {
            Some(bgl) => Some(create_uniform_binding(device, bgl)?),
            None => None,
        };

        let probe = (config.variant == Variant::CompatProbe).then(|| {
            let supported = gpu
                .downlevel_flags()
                .contains(wgpu::DownlevelFlags::CUBE_ARRAY_TEXTURES);
            CubeArrayProbe::create(device, supported)
        });

        log::info!(
            "triangle renderer ready: {:?}, {:?}, {:?}, alpha {:?}",
            config.variant,
            config.layout,
            gpu.surface_format(),
            gpu.alpha_mode()
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            uniforms,
            frame_loop: FrameLoop::new(&config, failure),
            _probe: probe,
        })
    }

    /// Draws one frame and advances the animation.
    ///
    /// Once halted, returns [`FrameOutcome::Halted`] without touching the GPU.
    pub fn advance_and_draw(&mut self, ctx: &mut FrameCtx<'_, '_>) -> FrameOutcome {
        let Some(plan) = self.frame_loop.plan() else {
            return FrameOutcome::Halted;
        };

        if let (Some(block), Some(binding)) = (plan.uniforms, self.uniforms.as_ref()) {
            ctx.gpu
                .queue()
                .write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&block));
        }

        let pipeline = &self.pipeline;
        let vertex_buffer = &self.vertex_buffer;
        let bind_group = self.uniforms.as_ref().map(|u| &u.bind_group);
        let draw = plan.draw;

        let status = ctx.render(&plan.pass, |rpass| {
            rpass.set_pipeline(pipeline);
            rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
            if let Some(bg) = bind_group {
                rpass.set_bind_group(0, bg, &[]);
            }
            rpass.draw(draw.vertices(), draw.instances());
        });

        match status {
            Ok(FrameStatus::Presented) => {
                self.frame_loop.advance(ctx.time.wall_seconds);
                FrameOutcome::Drawn
            }
            Ok(FrameStatus::Skipped) => {
                self.frame_loop.advance(ctx.time.wall_seconds);
                FrameOutcome::Skipped
            }
            Err(err) => {
                let _ = self.frame_loop.fail(err);
                FrameOutcome::Halted
            }
        }
    }
}

fn create_uniform_binding(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
) -> Result<UniformBinding, RenderError> {
    let spec = BufferSpec::uniform();
    spec.validate(None)?;

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(spec.label),
        contents: bytemuck::bytes_of(&UniformBlock::IDENTITY),
        usage: spec.usage,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("tessera triangle bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });

    Ok(UniformBinding { buffer, bind_group })
}

fn create_pipeline(
    device: &wgpu::Device,
    spec: &PipelineSpec,
    bind_group_layout: Option<&wgpu::BindGroupLayout>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tessera triangle shader"),
        source: wgpu::ShaderSource::Wgsl(shader_source(spec.layout, spec.uniforms).into()),
    });

    let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = bind_group_layout.into_iter().collect();
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tessera triangle pipeline layout"),
        bind_group_layouts: &bind_group_layouts,
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(spec.vertex_entry),
            compilation_options: Default::default(),
            buffers: &[spec.layout.buffer_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(spec.fragment_entry),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: spec.target_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn shader_source(layout: VertexLayout, animated: bool) -> &'static str {
    match (layout, animated) {
        (VertexLayout::Pos2Color3, false) => include_str!("shaders/pos2.wgsl"),
        (VertexLayout::Pos2Color3, true) => include_str!("shaders/pos2_uniform.wgsl"),
        (VertexLayout::Pos4Color4, false) => include_str!("shaders/pos4.wgsl"),
        (VertexLayout::Pos4Color4, true) => include_str!("shaders/pos4_uniform.wgsl"),
    }
}
