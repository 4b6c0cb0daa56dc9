//! Title display binder
//!
//! Wires the anchor elements of a CFG document to the infobox: clicking an
//! anchor copies its decoded `xlink:title` into the textarea. The binding
//! pass is one-shot: anchors added to the document afterwards stay inert
//! until [`InfoBinder::bind`] is invoked again.

mod errors;

pub use errors::ViewerError;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTextAreaElement};

use crate::titles;

/// Fixed id of the output textarea. The pagifier templates use the same
/// constant, so generated markup and binder always agree.
pub const INFOBOX_ID: &str = "infobox";

/// Qualified name of the title attribute graphviz puts on anchor elements.
pub const TITLE_ATTR: &str = "xlink:title";

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Binds anchor clicks to the infobox and keeps the handlers alive.
///
/// The output field is an explicit dependency resolved once at construction
/// rather than looked up by id on every click; [`InfoBinder::new`] accepts
/// any textarea, which is what the tests use.
pub struct InfoBinder {
    infobox: HtmlTextAreaElement,
    handlers: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl InfoBinder {
    /// Create a binder writing into the given textarea.
    pub fn new(infobox: HtmlTextAreaElement) -> Self {
        Self {
            infobox,
            handlers: Vec::new(),
        }
    }

    /// Create a binder for the document's [`INFOBOX_ID`] textarea.
    ///
    /// Errors if the element is absent or is not a textarea. Resolving here
    /// means a malformed host page fails at bind time, not on first click.
    pub fn for_document(document: &Document) -> Result<Self, ViewerError> {
        let element = document
            .get_element_by_id(INFOBOX_ID)
            .ok_or_else(|| ViewerError::InfoboxMissing(INFOBOX_ID.to_string()))?;
        let infobox = element
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ViewerError::InfoboxNotTextArea(INFOBOX_ID.to_string()))?;
        Ok(Self::new(infobox))
    }

    /// The textarea this binder writes into.
    pub fn infobox(&self) -> &HtmlTextAreaElement {
        &self.infobox
    }

    /// Attach a click handler to every anchor element currently in the
    /// document and return how many were bound.
    ///
    /// The enumeration is a snapshot: anchors added later are not tracked.
    /// Handlers registered by a previous pass are detached first, so
    /// re-binding picks up new anchors without stacking handlers on the old
    /// ones. Each handler captures its own anchor; clicking one anchor never
    /// displays another anchor's title.
    pub fn bind(&mut self, document: &Document) -> Result<usize, ViewerError> {
        self.unbind();

        let collection = document.get_elements_by_tag_name("a");
        let mut anchors = Vec::with_capacity(collection.length() as usize);
        for index in 0..collection.length() {
            if let Some(anchor) = collection.item(index) {
                anchors.push(anchor);
            }
        }

        for anchor in anchors {
            let infobox = self.infobox.clone();
            let target = anchor.clone();
            let handler = Closure::<dyn FnMut()>::new(move || {
                // Inside the event loop there is no caller to return to;
                // failures go to the console like any uncaught handler error.
                if let Err(err) = display_title(&infobox, &target) {
                    log::error!("anchor title not displayed: {}", err);
                }
            });
            anchor
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .map_err(|err| ViewerError::Listener(format!("{:?}", err)))?;
            self.handlers.push((anchor, handler));
        }

        Ok(self.handlers.len())
    }

    /// Display one anchor's decoded title in the infobox.
    ///
    /// A missing title attribute is a propagated [`ViewerError::TitleMissing`];
    /// the infobox is left untouched in that case.
    pub fn show_title(&self, element: &Element) -> Result<(), ViewerError> {
        display_title(&self.infobox, element)
    }

    /// Detach every handler registered by the last bind pass.
    fn unbind(&mut self) {
        for (anchor, handler) in self.handlers.drain(..) {
            let _ = anchor
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
    }
}

impl Drop for InfoBinder {
    fn drop(&mut self) {
        // Detach before the closures are freed; a listener surviving its
        // closure would throw on the next click.
        self.unbind();
    }
}

/// Read the anchor's title, decode the `\n` escapes, overwrite the infobox.
fn display_title(
    infobox: &HtmlTextAreaElement,
    element: &Element,
) -> Result<(), ViewerError> {
    // graphviz serializes the attribute under its qualified name; fall back
    // to a namespace-aware lookup for documents that bind the xlink prefix
    // differently.
    let raw = element
        .get_attribute(TITLE_ATTR)
        .or_else(|| element.get_attribute_ns(Some(XLINK_NS), "title"))
        .ok_or(ViewerError::TitleMissing)?;

    infobox.set_value(&titles::decode(&raw));
    Ok(())
}
