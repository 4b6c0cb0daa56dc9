//! WASM entry points for the interactive CFG viewer
//!
//! The binder lives in a module-level slot so its click closures stay alive
//! after `bind()` returns. Errors cross the boundary as string `JsValue`s.

use std::cell::RefCell;
use std::fmt::Display;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::pagify::{self, PageOptions};
use crate::viewer::{InfoBinder, ViewerError};

thread_local! {
    // Click closures hold JS values and are not Send, so the slot is
    // thread-local rather than a shared Mutex. WASM runs single-threaded;
    // there is only ever the one slot.
    static BINDER: RefCell<Option<InfoBinder>> = RefCell::new(None);
}

fn ambient_document() -> Result<Document, ViewerError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ViewerError::NoDocument)
}

fn js_err(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Run the handler with the module-level binder, constructing it from the
/// ambient document on first use.
fn with_binder<T>(
    handler: impl FnOnce(&mut InfoBinder, &Document) -> Result<T, ViewerError>,
) -> Result<T, JsValue> {
    let document = ambient_document().map_err(js_err)?;

    BINDER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let mut binder = match slot.take() {
            Some(binder) => binder,
            None => InfoBinder::for_document(&document).map_err(js_err)?,
        };
        let result = handler(&mut binder, &document).map_err(js_err);
        // Put the binder back either way; its closures must outlive the call.
        *slot = Some(binder);
        result
    })
}

/// Attach a click handler to every anchor element currently in the document.
///
/// A one-shot pass: anchors added afterwards stay inert until `bind` is
/// called again. Re-binding replaces the previous handlers instead of
/// stacking them. Side effect only; the anchor count goes to the console.
#[wasm_bindgen]
pub fn bind() -> Result<(), JsValue> {
    with_binder(|binder, document| {
        let bound = binder.bind(document)?;
        log::info!("bound {} anchor elements", bound);
        Ok(())
    })
}

/// Display one anchor's decoded title in the infobox without waiting for a
/// click event.
#[wasm_bindgen(js_name = showTitle)]
pub fn show_title(element: &Element) -> Result<(), JsValue> {
    with_binder(|binder, _| binder.show_title(element))
}

/// Assemble an interactive HTML page around a CFG SVG string.
///
/// `options` may be a plain object with `rows`, `cols` and `module_path`
/// fields; pass `undefined` for the defaults.
#[wasm_bindgen(js_name = pagifySvg)]
pub fn pagify_svg(svg: &str, options: JsValue) -> Result<String, JsValue> {
    let options: PageOptions = if options.is_undefined() || options.is_null() {
        PageOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| JsValue::from_str(&format!("invalid options: {}", err)))?
    };

    pagify::pagify(svg, &options).map_err(js_err)
}
