//! JavaScript-facing API for the CFG viewer
//!
//! # Module Structure
//!
//! - `core`: the wasm-bindgen entry points (`bind`, `showTitle`,
//!   `pagifySvg`) and the module-level binder they share.

pub mod core;

pub use core::{bind, pagify_svg, show_title};
