//! Best-effort image preloading.
//!
//! Every `img` on the page is fetched again through a detached
//! `HtmlImageElement` so later slides render without a decode stall.
//! Results only feed the log.

use std::cell::RefCell;
use std::rc::Rc;

use slidedeck_core::{PreloadStatus, PreloadTracker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

fn report(status: PreloadStatus, tracker: &PreloadTracker) {
    match status {
        PreloadStatus::Pending => {}
        PreloadStatus::Complete => log::info!("All images preloaded"),
        PreloadStatus::Settled => log::info!(
            "image preloading settled: {} loaded, {} failed",
            tracker.loaded(),
            tracker.failed()
        ),
    }
}

/// Start loading every image source in `document`. The returned tracker
/// counts loads and failures as the callbacks arrive.
pub fn preload_images(document: &Document) -> Result<Rc<RefCell<PreloadTracker>>, JsValue> {
    let list = document.query_selector_all("img")?;
    let sources: Vec<String> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())
        .filter(|src| !src.is_empty())
        .collect();

    let tracker = Rc::new(RefCell::new(PreloadTracker::new(sources.len())));
    for src in &sources {
        let img = HtmlImageElement::new()?;

        let on_load = {
            let tracker = tracker.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut t = tracker.borrow_mut();
                let status = t.record_load();
                report(status, &t);
            })
        };
        let on_error = {
            let tracker = tracker.clone();
            let src = src.clone();
            Closure::<dyn FnMut()>::new(move || {
                log::warn!("Failed to load image: {src}");
                let mut t = tracker.borrow_mut();
                let status = t.record_failure();
                report(status, &t);
            })
        };
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_load.forget();
        on_error.forget();

        img.set_src(src);
    }
    log::debug!("preloading {} images", sources.len());
    Ok(tracker)
}
