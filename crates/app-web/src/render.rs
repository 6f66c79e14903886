//! WebGPU renderer: backdrop, foliage points, instanced meshes, snow, and
//! an HDR bloom post chain composited to the swapchain.

use crate::constants::{KEY_LIGHT_INTENSITY, KEY_LIGHT_POS, STAR_EMISSIVE};
use app_core::{
    star_scale, star_transform, TreeScene, COLOR_EVERGREEN, COLOR_GOLD, SNOW_FLAKE_SIZE,
    SNOW_RANGE, STAR_LIGHT_INTENSITY, GROUND_EXTENT, GROUND_Y,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod backdrop;
mod foliage;
mod helpers;
mod mesh;
mod post;
mod scene;
mod snow;
mod targets;

use backdrop::BackdropResources;
use foliage::FoliageResources;
use scene::{InstanceRaw, MeshResources, SceneUniforms};
use snow::SnowResources;
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    backdrop: BackdropResources,
    foliage: FoliageResources,
    meshes: MeshResources,
    snow: SnowResources,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    // Bind groups for the different post sources
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,
    bg_bloom_b_only: wgpu::BindGroup,

    width: u32,
    height: u32,
    ornament_scratch: Vec<InstanceRaw>,
    gift_scratch: Vec<InstanceRaw>,
}

impl<'a> GpuState<'a> {
    /// The scene is taken as a shared handle and only borrowed after the
    /// async adapter/device setup so no `RefCell` borrow spans an await.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &Rc<RefCell<TreeScene>>,
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
                    // Default limits on web to stay compatible with older WebGPU impls
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

        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let targets = RenderTargets::new(&device, width, height);

        let scene = scene.borrow();
        let backdrop = backdrop::create_backdrop_resources(&device, hdr_format);
        let foliage = foliage::create_foliage_resources(&device, hdr_format, &scene.foliage);
        let meshes = scene::create_mesh_resources(
            &device,
            hdr_format,
            scene.ornaments.len(),
            scene.gifts.len(),
        );
        let snow = snow::create_snow_resources(&device, hdr_format, &scene.snow);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, hdr_format, format);
        let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only, bg_bloom_b_only) =
            post::create_bind_groups(
                &device,
                &post,
                &linear_sampler,
                &targets.hdr_view,
                &targets.bloom_a_view,
                &targets.bloom_b_view,
            );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            backdrop,
            foliage,
            meshes,
            snow,
            targets,
            linear_sampler,
            post,
            bg_hdr,
            bg_from_bloom_a,
            bg_from_bloom_b,
            bg_bloom_a_only,
            bg_bloom_b_only,
            width,
            height,
            ornament_scratch: Vec::new(),
            gift_scratch: Vec::new(),
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
            self.targets.recreate(&self.device, width, height);
            let (bg_hdr, bg_from_a, bg_from_b, bg_a_only, bg_b_only) = post::create_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
                &self.targets.bloom_a_view,
                &self.targets.bloom_b_view,
            );
            self.bg_hdr = bg_hdr;
            self.bg_from_bloom_a = bg_from_a;
            self.bg_from_bloom_b = bg_from_b;
            self.bg_bloom_a_only = bg_a_only;
            self.bg_bloom_b_only = bg_b_only;
        }
    }

    fn write_frame_uniforms(&mut self, scene: &TreeScene, elapsed: f32) {
        let t = scene.blend_value();
        let view_proj = scene.camera.view_proj().to_cols_array_2d();
        let (right, up) = scene.camera.billboard_axes();
        let eye = scene.camera.eye();

        self.queue.write_buffer(
            &self.backdrop.uniform_buffer,
            0,
            bytemuck::bytes_of(&backdrop::BackdropUniforms {
                resolution: [self.width as f32, self.height as f32],
                time: elapsed,
                _pad: 0.0,
            }),
        );

        self.queue.write_buffer(
            &self.foliage.uniform_buffer,
            0,
            bytemuck::bytes_of(&foliage::FoliageUniforms {
                view_proj,
                cam_right: [right.x, right.y, right.z, 0.0],
                cam_up: [up.x, up.y, up.z, 0.0],
                params: [elapsed, t, 0.0, 0.0],
                color_base: [COLOR_EVERGREEN[0], COLOR_EVERGREEN[1], COLOR_EVERGREEN[2], 1.0],
                color_edge: [COLOR_GOLD[0], COLOR_GOLD[1], COLOR_GOLD[2], 1.0],
            }),
        );

        self.queue.write_buffer(
            &self.snow.uniform_buffer,
            0,
            bytemuck::bytes_of(&snow::SnowUniforms {
                view_proj,
                cam_right: [right.x, right.y, right.z, 0.0],
                cam_up: [up.x, up.y, up.z, 0.0],
                params: [elapsed, SNOW_FLAKE_SIZE, 0.0, 0.0],
                range: [SNOW_RANGE[0], SNOW_RANGE[1], SNOW_RANGE[2], 0.0],
            }),
        );

        let star = star_transform(t, elapsed);
        self.queue.write_buffer(
            &self.meshes.uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms {
                view_proj,
                camera_pos: [eye.x, eye.y, eye.z, 0.0],
                star_light: [
                    star.position.x,
                    star.position.y,
                    star.position.z,
                    STAR_LIGHT_INTENSITY * star_scale(t),
                ],
                key_light: [
                    KEY_LIGHT_POS[0],
                    KEY_LIGHT_POS[1],
                    KEY_LIGHT_POS[2],
                    KEY_LIGHT_INTENSITY,
                ],
                params: [elapsed, 0.0, 0.0, 0.0],
            }),
        );
    }

    fn write_instances(&mut self, scene: &TreeScene, elapsed: f32) {
        let t = scene.blend_value();

        self.ornament_scratch.clear();
        for (tr, datum) in scene.ornament_transforms().iter().zip(&scene.ornaments) {
            self.ornament_scratch.push(InstanceRaw {
                pos: tr.position.to_array(),
                scale: tr.scale,
                color: [datum.color[0], datum.color[1], datum.color[2], 1.0],
                rotation: tr.rotation.to_array(),
                emissive: 0.0,
            });
        }
        self.queue.write_buffer(
            &self.meshes.ornaments.instance_buffer,
            0,
            bytemuck::cast_slice(&self.ornament_scratch),
        );

        self.gift_scratch.clear();
        for (tr, datum) in scene.gift_transforms().iter().zip(&scene.gifts) {
            self.gift_scratch.push(InstanceRaw {
                pos: tr.position.to_array(),
                scale: tr.scale,
                color: [datum.color[0], datum.color[1], datum.color[2], 1.0],
                rotation: tr.rotation.to_array(),
                emissive: 0.0,
            });
        }
        self.queue.write_buffer(
            &self.meshes.gifts.instance_buffer,
            0,
            bytemuck::cast_slice(&self.gift_scratch),
        );

        let star = star_transform(t, elapsed);
        let star_instance = InstanceRaw {
            pos: star.position.to_array(),
            scale: star.scale,
            color: [1.0, 0.843, 0.0, 1.0],
            rotation: star.rotation.to_array(),
            emissive: STAR_EMISSIVE,
        };
        self.queue.write_buffer(
            &self.meshes.star.instance_buffer,
            0,
            bytemuck::bytes_of(&star_instance),
        );

        let ground_instance = InstanceRaw {
            pos: [0.0, GROUND_Y, 0.0],
            scale: GROUND_EXTENT * 0.5,
            color: [
                COLOR_EVERGREEN[0],
                COLOR_EVERGREEN[1],
                COLOR_EVERGREEN[2],
                scene.ground_opacity(),
            ],
            rotation: Vec3::ZERO.to_array(),
            emissive: 1.0,
        };
        self.queue.write_buffer(
            &self.meshes.ground.instance_buffer,
            0,
            bytemuck::bytes_of(&ground_instance),
        );
    }

    pub fn render(
        &mut self,
        scene: &TreeScene,
        elapsed: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_frame_uniforms(scene, elapsed);
        self.write_instances(scene, elapsed);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: scene layers into the HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.backdrop.pipeline);
            rpass.set_bind_group(0, &self.backdrop.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.meshes.pipeline);
            rpass.set_bind_group(0, &self.meshes.bind_group, &[]);
            self.meshes
                .ornaments
                .draw(&mut rpass, self.ornament_scratch.len() as u32);
            self.meshes
                .gifts
                .draw(&mut rpass, self.gift_scratch.len() as u32);
            self.meshes.star.draw(&mut rpass, 1);
            self.meshes.ground.draw(&mut rpass, 1);

            rpass.set_pipeline(&self.foliage.pipeline);
            rpass.set_bind_group(0, &self.foliage.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.foliage.attr_buffer.slice(..));
            rpass.draw(0..6, 0..self.foliage.count);

            rpass.set_pipeline(&self.snow.pipeline);
            rpass.set_bind_group(0, &self.snow.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.snow.attr_buffer.slice(..));
            rpass.draw(0..6, 0..self.snow.count);
        }

        post::write_post_uniforms(
            &self.queue,
            &self.post,
            [self.width as f32, self.height as f32],
            elapsed,
        );

        // Pass 2: bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bg_hdr,
            None,
        );

        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );

        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );

        // Pass 5: composite to the swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
