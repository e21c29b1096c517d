use crate::constants::{AMBIENT_URL, AMBIENT_VOLUME, CLICK_URL, CLICK_VOLUME};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_element(url: &str, volume: f64, looping: bool, label: &str) -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(url) {
        Ok(el) => {
            el.set_volume(volume);
            el.set_loop(looping);
            el.set_preload("auto");
            Some(el)
        }
        Err(e) => {
            log::error!("[audio] {} element error: {:?}", label, e);
            None
        }
    }
}

/// Fire-and-forget playback; autoplay refusals are logged, never surfaced.
fn play(el: &web::HtmlAudioElement, label: &'static str) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("[audio] {} playback blocked or failed: {:?}", label, e);
            }
        }),
        Err(e) => log::warn!("[audio] {} play error: {:?}", label, e),
    }
}

/// Ambient loop and click cue, owned by the running scene and released with it.
pub struct AudioManager {
    ambient: Option<web::HtmlAudioElement>,
    click: Option<web::HtmlAudioElement>,
    muted: bool,
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            ambient: create_element(AMBIENT_URL, AMBIENT_VOLUME, true, "ambient"),
            click: create_element(CLICK_URL, CLICK_VOLUME, false, "click"),
            muted: false,
        }
    }

    pub fn start_ambient(&self) {
        if let Some(el) = &self.ambient {
            play(el, "ambient");
        }
    }

    /// Restart the click cue from the beginning, even if it is still playing.
    pub fn play_click(&self) {
        if self.muted {
            return;
        }
        if let Some(el) = &self.click {
            el.set_current_time(0.0);
            play(el, "click");
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        for el in [&self.ambient, &self.click].into_iter().flatten() {
            el.set_muted(muted);
        }
        log::info!("[audio] muted={}", muted);
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    /// Stop playback and drop the media sources. Safe to call more than once.
    pub fn release(&mut self) {
        for el in [self.ambient.take(), self.click.take()].into_iter().flatten() {
            _ = el.pause();
            el.set_src("");
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        self.release();
    }
}
