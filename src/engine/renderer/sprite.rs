// Sprite pipeline: one textured quad covering the surface

use super::vertex::{Vertex, QUAD_INDICES};
use super::{begin_clear_pass, GpuContext, RenderTarget, Texture};
use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::window::Window;
use wgpu::util::DeviceExt;

/// Fragment entry point matching how the compositor reads alpha.
///
/// Only a premultiplied surface wants premultiplied output; every other mode
/// takes the texture colour as is.
pub fn fragment_entry(alpha_mode: wgpu::CompositeAlphaMode) -> &'static str {
    match alpha_mode {
        wgpu::CompositeAlphaMode::PreMultiplied => "fs_premultiplied",
        _ => "fs_straight",
    }
}

/// Render pipeline and quad buffers for one surface format
pub struct SpritePipeline {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl SpritePipeline {
    /// Create a pipeline targeting `format` on a surface using `alpha_mode`
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        alpha_mode: wgpu::CompositeAlphaMode,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: fragment_entry(alpha_mode),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    // The quad covers every pixel, so the shader output is final
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&Vertex::full_screen_quad()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
        }
    }

    /// Draw `texture` over the whole render target
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, texture: &'a Texture) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &texture.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

/// The pet window: a render target that shows one sprite texture
pub struct SpriteRenderer {
    target: RenderTarget,
    pipeline: SpritePipeline,
}

impl SpriteRenderer {
    pub fn new(gpu: &GpuContext, target: RenderTarget) -> Self {
        let pipeline = SpritePipeline::new(
            &gpu.device,
            target.format(),
            target.alpha_mode(),
            &gpu.texture_bind_group_layout,
        );
        Self { target, pipeline }
    }

    pub fn window(&self) -> &Window {
        self.target.window()
    }

    pub fn resize(&mut self, gpu: &GpuContext, new_size: PhysicalSize<u32>) {
        self.target.resize(gpu, new_size);
    }

    /// Present `texture` stretched over the whole window
    pub fn render(&mut self, gpu: &GpuContext, texture: &Texture) -> Result<()> {
        let Some(output) = self.target.acquire(gpu)? else {
            return Ok(());
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        {
            let mut render_pass = begin_clear_pass(&mut encoder, &view, wgpu::Color::TRANSPARENT);
            self.pipeline.draw(&mut render_pass, texture);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
