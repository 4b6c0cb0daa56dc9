//! SVG to interactive page assembly
//!
//! Takes a CFG SVG as produced by graphviz and wraps it into a
//! self-contained HTML page: hover styling for the nodes, the infobox
//! textarea and a bootstrap script loading the WASM viewer. Pure string to
//! string; reading and writing files is the caller's business.

mod options;
mod templates;

pub use options::PageOptions;

use thiserror::Error;

/// Failures while assembling a viewer page.
#[derive(Debug, Error)]
pub enum PagifyError {
    /// The input is not well-formed XML.
    #[error("invalid SVG: {0}")]
    InvalidSvg(String),

    /// The input parses but its root element is not `<svg>`.
    #[error("root element is <{0}>, expected <svg>")]
    NotSvg(String),

    /// The embedded page template failed to render.
    #[error("page template failed to render: {0}")]
    Template(#[from] mustache::Error),
}

/// Produce an interactive HTML page from a CFG SVG string.
///
/// The SVG is validated before embedding. Everything preceding the root
/// `<svg>` element (XML declaration, doctype, generator comments) is
/// dropped, since the page supplies its own framing.
pub fn pagify(svg: &str, options: &PageOptions) -> Result<String, PagifyError> {
    let parsing_options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let document = roxmltree::Document::parse_with_options(svg, parsing_options)
        .map_err(|err| PagifyError::InvalidSvg(err.to_string()))?;

    let root = document.root_element();
    if root.tag_name().name() != "svg" {
        return Err(PagifyError::NotSvg(root.tag_name().name().to_string()));
    }

    let body = &svg[root.range().start..];
    templates::render_page(body, options)
}
