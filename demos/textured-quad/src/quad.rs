//! The textured-quad demo: one quad, one texture, six switchable samplers.

use anyhow::{Context as _, Result};
use easel::{Context, Demo};
use easel_gpu::{load_rgba8, SampledTexture, StagingWriter};
use tracing::info;

use crate::geometry::{Vertex, QUAD_INDICES, QUAD_VERTICES};
use crate::samplers::{SamplerCycle, SamplerPreset, PRESET_COUNT};

const IMAGE_ASSET: &str = "checkerboard.png";

/// GPU resources created by `init` and released by `quit`.
///
/// Field order matches the release order: pipeline, vertex buffer, index
/// buffer, texture, samplers (bind groups go first, since they reference
/// the texture and samplers).
#[allow(dead_code)]
struct QuadResources {
    bind_groups: [wgpu::BindGroup; PRESET_COUNT],
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    texture: SampledTexture,
    samplers: [wgpu::Sampler; PRESET_COUNT],
}

/// Renders a tiled texture on a fullscreen quad and cycles through the
/// sampler presets on Left/Right.
pub struct TexturedQuad {
    resources: Option<QuadResources>,
    cycle: SamplerCycle,
}

impl TexturedQuad {
    pub fn new() -> Self {
        Self {
            resources: None,
            cycle: SamplerCycle::new(),
        }
    }
}

impl Demo for TexturedQuad {
    fn init(&mut self, ctx: &mut Context) -> Result<()> {
        let device = ctx.gpu.device();

        let vertex_shader = ctx
            .shaders
            .load(device, "quad.vert")
            .context("failed to create vertex shader")?;
        let fragment_shader = ctx
            .shaders
            .load(device, "quad.frag")
            .context("failed to create fragment shader")?;

        let image = load_rgba8(&ctx.asset_path(IMAGE_ASSET)).context("could not load image data")?;

        // One texture + one sampler, visible to the fragment stage.
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("quad bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quad pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quad pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: "vs_main",
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: "fs_main",
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface.format(),
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::Zero,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::Zero,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let samplers = SamplerPreset::ALL.map(|preset| device.create_sampler(&preset.descriptor()));

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad vertices"),
            size: std::mem::size_of_val(&QUAD_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad indices"),
            size: std::mem::size_of_val(&QUAD_INDICES) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let texture = SampledTexture::new(device, image.width, image.height, "quad texture");

        // Stage everything into one transfer buffer: vertices, then indices,
        // then the raw image bytes.
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&QUAD_VERTICES);
        let index_bytes: &[u8] = bytemuck::cast_slice(&QUAD_INDICES);
        let mut staging = StagingWriter::with_capacity(
            vertex_bytes.len() + index_bytes.len() + image.data.len(),
        );
        let vertex_offset = staging.push(vertex_bytes);
        let index_offset = staging.push(index_bytes);
        let image_offset = staging.push(&image.data);
        let transfer = staging.finish(device);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("quad upload"),
        });
        encoder.copy_buffer_to_buffer(
            &transfer,
            vertex_offset,
            &vertex_buffer,
            0,
            vertex_bytes.len() as u64,
        );
        encoder.copy_buffer_to_buffer(
            &transfer,
            index_offset,
            &index_buffer,
            0,
            index_bytes.len() as u64,
        );
        if image.bytes_per_row() % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT == 0 {
            encoder.copy_buffer_to_texture(
                wgpu::ImageCopyBuffer {
                    buffer: &transfer,
                    layout: wgpu::ImageDataLayout {
                        offset: image_offset,
                        bytes_per_row: Some(image.bytes_per_row()),
                        rows_per_image: Some(image.height),
                    },
                },
                texture.texture().as_image_copy(),
                texture.extent(),
            );
        } else {
            // Buffer-to-texture copies need a 256-byte row pitch; images with
            // odd widths take the write_texture path instead.
            ctx.gpu.queue().write_texture(
                texture.texture().as_image_copy(),
                &image.data,
                wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(image.bytes_per_row()),
                    rows_per_image: Some(image.height),
                },
                texture.extent(),
            );
        }
        ctx.gpu.queue().submit(Some(encoder.finish()));
        // The transfer buffer drops here; the queue keeps it alive until the
        // copies complete.

        let bind_groups = std::array::from_fn(|i| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(SamplerPreset::ALL[i].name()),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(texture.view()),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&samplers[i]),
                    },
                ],
            })
        });

        self.resources = Some(QuadResources {
            bind_groups,
            pipeline,
            vertex_buffer,
            index_buffer,
            texture,
            samplers,
        });

        info!("press Left/Right to switch between sampler states");
        info!("setting sampler state to: {}", self.cycle.current().name());
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.input.previous_pressed {
            let preset = self.cycle.retreat();
            info!("setting sampler state to: {}", preset.name());
        }
        if ctx.input.next_pressed {
            let preset = self.cycle.advance();
            info!("setting sampler state to: {}", preset.name());
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<()> {
        let resources = self
            .resources
            .as_ref()
            .context("draw called before init")?;

        let mut encoder = ctx
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("quad frame"),
            });

        // A frame with no surface texture (minimized window) still submits
        // the empty command buffer, keeping the acquire/submit pairing
        // balanced.
        let frame = ctx.surface.acquire(&ctx.gpu)?;
        if let Some(frame) = &frame {
            let view = frame
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quad pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&resources.pipeline);
            pass.set_vertex_buffer(0, resources.vertex_buffer.slice(..));
            pass.set_index_buffer(resources.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.set_bind_group(0, &resources.bind_groups[self.cycle.index()], &[]);
            pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
        }

        ctx.gpu.queue().submit(Some(encoder.finish()));
        if let Some(frame) = frame {
            frame.present();
        }
        Ok(())
    }

    fn quit(&mut self, _ctx: &mut Context) {
        // QuadResources field order gives the release order.
        self.resources = None;
        self.cycle.reset();
    }
}
