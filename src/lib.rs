#![cfg(target_arch = "wasm32")]
use crate::audio::AudioManager;
use crate::config::BootConfig;
use crate::constants::*;
use crate::events::InputWiring;
use crate::input::PointerState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod scroll;

/// Everything the running scene owns; dropping it tears the scene down.
struct App {
    frame_loop: frame::FrameLoop,
    frame_ctx: Rc<RefCell<frame::FrameContext<'static>>>,
    audio: Rc<RefCell<AudioManager>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn read_boot_config(document: &web::Document) -> BootConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let theme = attr(THEME_ATTR);
    let seed = attr(SEED_ATTR);
    let damping = attr(DAMPING_ATTR);
    BootConfig::from_attributes(theme.as_deref(), seed.as_deref(), damping.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollfield-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let boot = read_boot_config(&document);
    overlay::apply_theme(&document, boot.theme);
    overlay::show(&document);

    // The scene (and audio, which needs a user gesture) starts from the overlay button.
    let started = Rc::new(Cell::new(false));
    let doc_enter = document.clone();
    dom::add_click_listener(&document, ENTER_BUTTON_ID, move || {
        if started.replace(true) {
            return;
        }
        overlay::fade_out(&doc_enter);
        spawn_local(async move {
            if let Err(e) = init(boot).await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init(boot: BootConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * clamped devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let audio = Rc::new(RefCell::new(AudioManager::new()));
    {
        let a = audio.borrow();
        a.play_click();
        a.start_ambient();
    }

    let scroll_host = Rc::new(RefCell::new(scroll::ScrollHost::new(
        &document,
        boot.scroll_damping_sec,
    )?));
    scroll::wire_nav_links(&document, scroll_host.clone(), audio.clone());
    scroll::wire_back_to_top(&document, scroll_host.clone(), audio.clone());

    let wiring = InputWiring {
        canvas: canvas.clone(),
        theme: Rc::new(Cell::new(boot.theme)),
        pointer: Rc::new(Cell::new(PointerState::default())),
        scroll: scroll_host,
        audio: audio.clone(),
    };
    events::wire_input_handlers(&wiring);

    let seed = boot.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("[init] theme={} seed={}", boot.theme.as_str(), seed);

    let initial = scrollfield_core::derive_config(
        &scrollfield_core::ViewportDescriptor::from_pixels(
            canvas.client_width() as f32,
            canvas.client_height() as f32,
        ),
        boot.theme,
    );
    let gpu = frame::init_gpu(&canvas, initial.multisampling).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(wiring, gpu, seed)));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            frame_loop,
            frame_ctx,
            audio,
        })
    });
    Ok(())
}

/// Stop the frame loop and release GPU and audio resources.
#[wasm_bindgen]
pub fn teardown() {
    let Some(app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    app.frame_loop.stop();
    app.frame_ctx.borrow_mut().gpu = None;
    app.audio.borrow_mut().release();
    log::info!("scrollfield-web stopped");
}
