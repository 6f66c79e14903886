use super::helpers;
use super::targets::DEPTH_FORMAT;
use app_core::FoliageParticle;
use wgpu;
use wgpu::util::DeviceExt;

// Additive accumulation: the fragment shader outputs premultiplied color
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FoliageUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
    pub(crate) params: [f32; 4],
    pub(crate) color_base: [f32; 4],
    pub(crate) color_edge: [f32; 4],
}

// Static per-particle attributes; the blend happens in the vertex shader
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FoliageAttr {
    scatter: [f32; 3],
    phase: f32,
    target: [f32; 3],
    size: f32,
}

pub(crate) struct FoliageResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) attr_buffer: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) fn create_foliage_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    particles: &[FoliageParticle],
) -> FoliageResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("foliage_shader"),
        source: wgpu::ShaderSource::Wgsl(app_core::FOLIAGE_WGSL.into()),
    });
    let bgl = helpers::make_uniform_bgl(
        device,
        "foliage_bgl",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("foliage_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let attr_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<FoliageAttr>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 16,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 28,
                shader_location: 3,
            },
        ],
    };

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("foliage_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[attr_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            // Glow points read depth but never write it
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let attrs: Vec<FoliageAttr> = particles
        .iter()
        .map(|p| FoliageAttr {
            scatter: p.scatter.to_array(),
            phase: p.phase,
            target: p.target.to_array(),
            size: p.size,
        })
        .collect();
    let attr_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("foliage_attrs"),
        contents: bytemuck::cast_slice(&attrs),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("foliage_uniforms"),
        size: std::mem::size_of::<FoliageUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("foliage_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    FoliageResources {
        pipeline,
        uniform_buffer,
        bind_group,
        attr_buffer,
        count: particles.len() as u32,
    }
}
