use super::helpers::{self, HDR_FORMAT};

/// Offscreen targets for the render pipeline.
///
/// - `msaa_*` is the multisampled scene color, present only when
///   `sample_count > 1`; it resolves into `hdr_*`.
/// - `hdr_*` hold the resolved scene color in Rgba16Float for post-processing.
/// - `depth_*` matches the scene pass sample count.
/// - `bloom_*` are half-res buffers used for bright-pass and blur.
pub(crate) struct RenderTargets {
    pub(crate) sample_count: u32,
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b_view: wgpu::TextureView,
    _textures: Vec<wgpu::Texture>,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let mut textures = Vec::with_capacity(5);
        let msaa_view = (sample_count > 1).then(|| {
            let (tex, view) = helpers::create_color_texture(
                device,
                "msaa_tex",
                width,
                height,
                HDR_FORMAT,
                sample_count,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            );
            textures.push(tex);
            view
        });
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, 1, usage);
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(device, width, height, sample_count);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, 1, usage);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, 1, usage);
        textures.extend([hdr_tex, depth_tex, bloom_a, bloom_b]);
        Self {
            sample_count,
            msaa_view,
            hdr_view,
            depth_view,
            bloom_a_view,
            bloom_b_view,
            _textures: textures,
        }
    }

    /// Color attachment and optional resolve target for the scene pass.
    pub(crate) fn scene_attachment(&self) -> (&wgpu::TextureView, Option<&wgpu::TextureView>) {
        match &self.msaa_view {
            Some(msaa) => (msaa, Some(&self.hdr_view)),
            None => (&self.hdr_view, None),
        }
    }
}
