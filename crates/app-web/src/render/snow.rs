use super::helpers;
use super::targets::DEPTH_FORMAT;
use app_core::Snowflake;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SnowUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
    pub(crate) params: [f32; 4],
    pub(crate) range: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SnowAttr {
    origin: [f32; 3],
    speed: f32,
    phase: f32,
}

pub(crate) struct SnowResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) attr_buffer: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) fn create_snow_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    flakes: &[Snowflake],
) -> SnowResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("snow_shader"),
        source: wgpu::ShaderSource::Wgsl(app_core::SNOW_WGSL.into()),
    });
    let bgl = helpers::make_uniform_bgl(device, "snow_bgl", wgpu::ShaderStages::VERTEX);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("snow_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let attr_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SnowAttr>() as u64,
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
                format: wgpu::VertexFormat::Float32,
                offset: 16,
                shader_location: 2,
            },
        ],
    };

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("snow_pipeline"),
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
                blend: Some(wgpu::BlendState {
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
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let attrs: Vec<SnowAttr> = flakes
        .iter()
        .map(|f| SnowAttr {
            origin: f.origin.to_array(),
            speed: f.speed,
            phase: f.phase,
        })
        .collect();
    let attr_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("snow_attrs"),
        contents: bytemuck::cast_slice(&attrs),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("snow_uniforms"),
        size: std::mem::size_of::<SnowUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("snow_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SnowResources {
        pipeline,
        uniform_buffer,
        bind_group,
        attr_buffer,
        count: flakes.len() as u32,
    }
}
