use crate::audio::AudioManager;
use crate::constants::{
    BACK_TO_TOP_FRACTION, BACK_TO_TOP_ID, NAV_LINK_SELECTOR, NAV_TARGET_ATTR, SCROLL_CONTAINER_ID,
    SCROLL_PAGES, SCROLL_SNAP_EPSILON, SCROLL_SPACER_ID,
};
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Adapter over the page's scroll container.
///
/// Exposes a damped progress value in [0, 1] to the frame loop and a
/// programmatic `scroll_to` for navigation.
pub struct ScrollHost {
    container: web::HtmlElement,
    damping_sec: f32,
    offset: f32,
}

impl ScrollHost {
    pub fn new(document: &web::Document, damping_sec: f32) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(SCROLL_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", SCROLL_CONTAINER_ID))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        size_spacer(document, SCROLL_PAGES);
        let mut host = Self {
            container,
            damping_sec,
            offset: 0.0,
        };
        host.offset = host.raw_progress();
        Ok(host)
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    #[inline]
    pub fn scroll_top(&self) -> f64 {
        self.container.scroll_top() as f64
    }

    /// Undamped progress straight from the DOM.
    pub fn raw_progress(&self) -> f32 {
        input::scroll_progress(
            self.container.scroll_top() as f32,
            self.container.scroll_height() as f32,
            self.container.client_height() as f32,
        )
    }

    /// Advance the damped offset by `dt_sec` and return it.
    pub fn sample(&mut self, dt_sec: f32) -> f32 {
        let target = self.raw_progress();
        self.offset = input::damp_toward(
            self.offset,
            target,
            self.damping_sec,
            dt_sec,
            SCROLL_SNAP_EPSILON,
        )
        .clamp(0.0, 1.0);
        self.offset
    }

    pub fn scroll_to(&self, top: f64, smooth: bool) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top.max(0.0));
        opts.set_behavior(if smooth {
            web::ScrollBehavior::Smooth
        } else {
            web::ScrollBehavior::Instant
        });
        self.container.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Give the scroll content a height of `pages` viewports.
fn size_spacer(document: &web::Document, pages: f32) {
    if let Some(el) = document
        .get_element_by_id(SCROLL_SPACER_ID)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el
            .style()
            .set_property("height", &format!("{}vh", pages * 100.0));
    }
}

/// Links carrying `data-scroll-target="<section id>"` smooth-scroll to that section.
pub fn wire_nav_links(
    document: &web::Document,
    host: Rc<RefCell<ScrollHost>>,
    audio: Rc<RefCell<AudioManager>>,
) {
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links
            .item(i)
            .and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let Some(target_id) = link.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        let doc = document.clone();
        let host = host.clone();
        let audio = audio.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            audio.borrow().play_click();
            match doc
                .get_element_by_id(&target_id)
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            {
                Some(section) => host.borrow().scroll_to(section.offset_top() as f64, true),
                None => log::warn!("[scroll] nav target #{} not found", target_id),
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_back_to_top(
    document: &web::Document,
    host: Rc<RefCell<ScrollHost>>,
    audio: Rc<RefCell<AudioManager>>,
) {
    let host_click = host.clone();
    crate::dom::add_click_listener(document, BACK_TO_TOP_ID, move || {
        audio.borrow().play_click();
        host_click.borrow().scroll_to(0.0, true);
    });

    let doc = document.clone();
    let container = host.borrow().container().clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let inner_h = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let visible = input::back_to_top_visible(
            host.borrow().scroll_top(),
            inner_h,
            BACK_TO_TOP_FRACTION,
        );
        overlay::set_back_to_top_visible(&doc, visible);
    }) as Box<dyn FnMut()>);
    _ = container.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}
