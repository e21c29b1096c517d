use crate::constants::MAX_FRAME_DT_SEC;
use crate::events::InputWiring;
use crate::render;
use instant::Instant;
use scrollfield_core::{
    derive_config, Camera, FrameInput, FrameSample, RenderConfig, SceneComposer, ScrollCamera,
    Theme, ViewportDescriptor,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, PartialEq)]
struct LayoutKey {
    width: i32,
    height: i32,
    theme: Theme,
}

pub struct FrameContext<'a> {
    pub wiring: InputWiring,
    pub gpu: Option<render::GpuState<'a>>,

    camera: Camera,
    controller: ScrollCamera,
    composer: SceneComposer,
    viewport: ViewportDescriptor,
    config: RenderConfig,
    layout_key: Option<LayoutKey>,

    started: Instant,
    last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(wiring: InputWiring, gpu: Option<render::GpuState<'a>>, seed: u64) -> Self {
        let theme = wiring.theme.get();
        let viewport = css_viewport(&wiring.canvas);
        let config = derive_config(&viewport, theme);
        let now = Instant::now();
        Self {
            wiring,
            gpu,
            camera: Camera::default(),
            controller: ScrollCamera::new(&config),
            composer: SceneComposer::new(seed),
            viewport,
            config,
            layout_key: None,
            started: now,
            last_instant: now,
        }
    }

    /// One display refresh: layout → camera → scene → render, strictly in order.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let theme = self.wiring.theme.get();
        self.refresh_layout(theme);

        let scroll_offset = self.wiring.scroll.borrow_mut().sample(dt_sec);
        let input = FrameInput {
            scroll_offset,
            pointer: self.wiring.pointer.get().as_vec2(),
        };
        if let Err(e) = self.controller.update(input, &self.config, &self.viewport) {
            log::warn!("[camera] {}; keeping previous state", e);
        }
        let aspect = self
            .gpu
            .as_ref()
            .map_or_else(|| self.viewport.aspect(), |g| g.aspect());
        self.controller.apply_to(&mut self.camera, aspect);

        let scene = self.composer.compose(
            &FrameSample {
                elapsed,
                scroll_offset,
            },
            &self.config,
            theme,
            self.controller.state(),
        );

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.wiring.canvas.width(), self.wiring.canvas.height());
            g.set_multisampling(self.config.multisampling);
            match g.render(dt_sec, &scene, &self.camera, self.composer.fields().stars()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    g.reconfigure_surface();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Re-derive the config only when the surface size or theme changed.
    fn refresh_layout(&mut self, theme: Theme) {
        let key = LayoutKey {
            width: self.wiring.canvas.client_width(),
            height: self.wiring.canvas.client_height(),
            theme,
        };
        if self.layout_key == Some(key) {
            return;
        }
        self.layout_key = Some(key);
        self.viewport = css_viewport(&self.wiring.canvas);
        if let Err(e) = self.viewport.validate() {
            log::warn!("[layout] {}; using fallback config", e);
        }
        self.config = derive_config(&self.viewport, theme);
        log::info!(
            "[layout] {}x{} {:?} theme={} stars={} nodes={} msaa={}",
            key.width,
            key.height,
            self.config.class,
            theme.as_str(),
            self.config.star_count,
            self.config.node_count,
            self.config.multisampling
        );
    }
}

fn css_viewport(canvas: &web::HtmlCanvasElement) -> ViewportDescriptor {
    ViewportDescriptor::from_pixels(canvas.client_width() as f32, canvas.client_height() as f32)
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    multisampling: u32,
) -> Option<render::GpuState<'static>> {
    match render::GpuState::new(canvas, multisampling).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame registration. Stopping (or dropping) it
/// cancels the pending callback and releases the frame closure.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    FrameLoop { raf_id, tick }
}
