//! Page template rendering
//!
//! Embeds the viewer-page mustache template and renders it with a typed
//! context. The template carries the node hover styling, the infobox
//! textarea and a module script that boots the WASM viewer.

use serde::Serialize;

use super::{PageOptions, PagifyError};
use crate::viewer::INFOBOX_ID;

/// Context handed to the page template.
#[derive(Serialize)]
struct PageContext<'a> {
    svg: &'a str,
    rows: u32,
    cols: u32,
    infobox_id: &'a str,
    script: String,
}

/// Bootstrap script embedded in generated pages: load the viewer module and
/// run the bind pass over the inlined SVG.
fn bootstrap_script(module_path: &str) -> String {
    format!(
        "import init, {{ bind }} from '{}';\nawait init();\nbind();",
        module_path
    )
}

/// Render the full page around an already-validated SVG body.
pub(super) fn render_page(svg: &str, options: &PageOptions) -> Result<String, PagifyError> {
    let template = mustache::compile_str(include_str!("templates/page.html.mustache"))?;

    let context = PageContext {
        svg,
        rows: options.rows,
        cols: options.cols,
        infobox_id: INFOBOX_ID,
        script: bootstrap_script(&options.module_path),
    };

    Ok(template.render_to_string(&context)?)
}
