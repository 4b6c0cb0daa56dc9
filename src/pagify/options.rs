//! Page assembly options.

use serde::{Deserialize, Serialize};

/// Knobs for the generated viewer page.
///
/// Deserialized from a plain JS object at the WASM boundary; every field is
/// optional there and falls back to the defaults below.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PageOptions {
    /// Visible rows of the infobox textarea.
    pub rows: u32,

    /// Visible columns of the infobox textarea.
    pub cols: u32,

    /// Path the bootstrap script imports the viewer module from, relative
    /// to the generated page.
    pub module_path: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 100,
            module_path: "./pagify_wasm.js".to_string(),
        }
    }
}
