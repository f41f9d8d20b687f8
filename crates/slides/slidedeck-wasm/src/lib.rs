use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use log::LevelFilter;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent};

use slidedeck_core::{Config, Control, Dispatch, Input, Key, Presentation};

mod dom;
mod logger;
mod preload;

pub use dom::{css_transform, DomSurface};
pub use preload::preload_images;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_error(context: &str, e: JsValue) -> JsError {
    JsError::new(&format!("{context}: {e:?}"))
}

struct Inner {
    deck: Presentation,
    dom: DomSurface,
    last_frame: Option<f64>,
}

impl Inner {
    fn handle(&mut self, input: Input) -> Dispatch {
        let Inner { deck, dom, .. } = self;
        deck.handle_input(input, dom)
    }

    /// `now` is the rAF timestamp in milliseconds.
    fn frame(&mut self, now: f64) {
        let dt = match self.last_frame.replace(now) {
            Some(prev) => ((now - prev) / 1000.0) as f32,
            None => 0.0,
        };
        let Inner { deck, dom, .. } = self;
        deck.tick(dt, dom);
    }
}

/// Slideshow bound to the current page.
#[wasm_bindgen]
pub struct Slideshow {
    inner: Rc<RefCell<Inner>>,
    mounted: bool,
}

#[wasm_bindgen]
impl Slideshow {
    /// Create a slideshow for the current document. Pass a config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new Slideshow({ total_slides: 12, transition: { duration: 0.4 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Slideshow, JsError> {
        console_error_panic_hook::set_once();
        logger::install();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let deck = Presentation::new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document available"))?;

        Ok(Slideshow {
            inner: Rc::new(RefCell::new(Inner {
                deck,
                dom: DomSurface::new(document),
                last_frame: None,
            })),
            mounted: false,
        })
    }

    /// Show the first slide, hook up controls and keyboard, start the frame
    /// loop and preload images. Mounting twice does nothing.
    pub fn mount(&mut self) -> Result<(), JsError> {
        self.mount_page().map_err(|e| js_error("mount failed", e))
    }

    /// Go to the next slide. Returns whether a transition started.
    pub fn advance(&self) -> bool {
        self.inner
            .try_borrow_mut()
            .map(|mut s| {
                let Inner { deck, dom, .. } = &mut *s;
                deck.advance(dom)
            })
            .unwrap_or(false)
    }

    /// Go to the previous slide. Returns whether a transition started.
    pub fn retreat(&self) -> bool {
        self.inner
            .try_borrow_mut()
            .map(|mut s| {
                let Inner { deck, dom, .. } = &mut *s;
                deck.retreat(dom)
            })
            .unwrap_or(false)
    }

    /// Go to slide `n` (1-based). Returns whether a transition started.
    #[wasm_bindgen(js_name = jump_to)]
    pub fn jump_to(&self, n: u32) -> bool {
        self.inner
            .try_borrow_mut()
            .map(|mut s| {
                let Inner { deck, dom, .. } = &mut *s;
                deck.jump_to(n, dom)
            })
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = current_slide)]
    pub fn current_slide(&self) -> u32 {
        self.inner.borrow().deck.current_slide()
    }

    #[wasm_bindgen(js_name = total_slides)]
    pub fn total_slides(&self) -> u32 {
        self.inner.borrow().deck.navigator().total()
    }

    #[wasm_bindgen(js_name = is_animating)]
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().deck.is_animating()
    }
}

impl Slideshow {
    fn mount_page(&mut self) -> Result<(), JsValue> {
        if self.mounted {
            log::warn!("slideshow already mounted");
            return Ok(());
        }
        self.mounted = true;

        let document = {
            let mut state = self.inner.borrow_mut();
            let Inner { deck, dom, .. } = &mut *state;
            deck.start(dom);
            dom.document().clone()
        };

        wire_controls(&document, &self.inner)?;
        wire_keyboard(&document, &self.inner)?;
        run_frame_loop(self.inner.clone())?;

        if let Err(e) = preload::preload_images(&document) {
            log::warn!("image preloading unavailable: {e:?}");
        }
        Ok(())
    }
}

fn wire_controls(document: &Document, inner: &Rc<RefCell<Inner>>) -> Result<(), JsValue> {
    for control in [Control::Prev, Control::Next] {
        let Some(el) = document.get_element_by_id(control.element_id()) else {
            log::debug!("no #{} control on the page", control.element_id());
            continue;
        };
        let inner = inner.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            let dispatch = state.handle(Input::Click(control));
            if dispatch.prevent_default {
                event.prevent_default();
            }
            if dispatch.stop_propagation {
                event.stop_propagation();
            }
        });
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn wire_keyboard(document: &Document, inner: &Rc<RefCell<Inner>>) -> Result<(), JsValue> {
    let inner = inner.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let Ok(mut state) = inner.try_borrow_mut() else {
            return;
        };
        let dispatch = state.handle(Input::Key(Key::from_dom(&event.key())));
        if dispatch.prevent_default {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Tick the presentation on every animation frame, forever.
fn run_frame_loop(inner: Rc<RefCell<Inner>>) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::new(move |now: f64| {
        if let Ok(mut state) = inner.try_borrow_mut() {
            state.frame(now);
        }
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(next) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    let scheduled = match g.borrow().as_ref() {
        Some(first) => request_animation_frame(first).map(|_| ()),
        None => Ok(()),
    };
    scheduled
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(f.as_ref().unchecked_ref())
}

/// Build a slideshow and mount it once the document is parsed.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<(), JsError> {
    let mut show = Slideshow::new(config)?;
    let document = show.inner.borrow().dom.document().clone();
    if document.ready_state() != "loading" {
        return show.mount();
    }
    let on_ready: Closure<dyn FnMut()> = Closure::once(move || {
        if let Err(e) = show.mount_page() {
            log::error!("mount failed: {e:?}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| js_error("failed to wait for DOMContentLoaded", e))?;
    on_ready.forget();
    Ok(())
}

/// Set the console log level ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen(js_name = set_log_level)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| JsError::new(&format!("unknown log level '{level}'")))?;
    logger::set_level(filter);
    Ok(())
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
