use scrollfield_core::constants::{CENTRAL_DETAIL, CENTRAL_RADIUS, NODE_DETAIL, NODE_RADIUS};
use scrollfield_core::{dodecahedron, icosahedron, msaa_sample_count, Camera, SceneFrame, StarField};
use web_sys as web;

mod helpers;
mod post;
mod scene_pass;
mod targets;
use post::{PostBindGroups, PostResources, PostUniforms};
use scene_pass::{SceneBuffers, ScenePipelines, SceneUniforms};
use targets::RenderTargets;

static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_shader: wgpu::ShaderModule,
    scene: ScenePipelines,
    buffers: SceneBuffers,

    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &web::HtmlCanvasElement, multisampling: u32) -> anyhow::Result<Self> {
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

        let sample_count = msaa_sample_count(multisampling);
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene = scene_pass::create_scene_pipelines(&device, &scene_shader, sample_count);
        let buffers = SceneBuffers::new(
            &device,
            &icosahedron(CENTRAL_RADIUS, CENTRAL_DETAIL),
            &dodecahedron(NODE_RADIUS, NODE_DETAIL),
        );

        let targets = RenderTargets::new(&device, width, height, sample_count);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_groups = post.bind_groups(&device, &targets);
        log::info!(
            "[gpu] ready {}x{} format={:?} samples={}",
            width,
            height,
            format,
            sample_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_shader,
            scene,
            buffers,
            targets,
            post,
            post_groups,
            width,
            height,
            time_accum: 0.0,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
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
            self.rebuild_targets(self.targets.sample_count);
        }
    }

    /// Follow the layout's multisampling level; pipelines and targets are
    /// rebuilt only when the effective sample count changes.
    pub fn set_multisampling(&mut self, multisampling: u32) {
        let sample_count = msaa_sample_count(multisampling);
        if sample_count == self.targets.sample_count {
            return;
        }
        self.scene =
            scene_pass::create_scene_pipelines(&self.device, &self.scene_shader, sample_count);
        self.rebuild_targets(sample_count);
        log::info!("[gpu] sample count -> {}", sample_count);
    }

    /// Recover from a lost or outdated swapchain.
    pub fn reconfigure_surface(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn rebuild_targets(&mut self, sample_count: u32) {
        self.targets = RenderTargets::new(&self.device, self.width, self.height, sample_count);
        self.post_groups = self.post.bind_groups(&self.device, &self.targets);
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        frame: &SceneFrame,
        camera: &Camera,
        stars: &StarField,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.buffers
            .sync_stars(&self.device, frame.field_generation, stars);
        self.buffers
            .write_instances(&self.device, &self.queue, frame);
        self.scene
            .write_uniforms(&self.queue, &SceneUniforms::new(frame, camera));
        self.post.write_uniforms(
            &self.queue,
            PostUniforms::from_chain(
                &frame.post,
                [self.width as f32, self.height as f32],
                self.time_accum,
            ),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let bg = frame.background;
        let clear = wgpu::Color {
            r: bg.x as f64,
            g: bg.y as f64,
            b: bg.z as f64,
            a: 1.0,
        };

        // Pass 1: scene into the (multisampled) HDR target
        {
            let (color_view, resolve_target) = self.targets.scene_attachment();
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass, &self.buffers);
        }

        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a → bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b → bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite (bloom → chromatic aberration → noise → vignette) to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            clear,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
