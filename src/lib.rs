//! Font swapping for Lottie animations.
//!
//! A Lottie document names its fonts in a font table (`fonts.list`) and every text layer
//! points at one of those entries by `fName` from its first style run (`t.d.k[0].s.f`).
//! This crate replaces the active font (the first table entry) with a font picked from a
//! [`FontCatalog`], and re-points every text layer that used it, both in the top-level layer
//! list and in the layer lists of pre-composition assets.
//!
//! # Overview
//!
//! 1. **Parse**: [`Animation::from_path`] / [`Animation::from_reader`]. Fields the crate does
//!    not interpret are preserved verbatim.
//! 2. **Rewrite**: [`rewrite_font`] mutates the animation in place and returns a
//!    [`FontRewrite`] change record, or `None` when nothing changed.
//! 3. **Notify** (optional): [`FontSelector`] wraps the rewrite behind a dropdown-style
//!    selection API and notifies [`AnimationObserver`]s once per successful selection.
//!
//! Rewriting never fails. Unknown selections, empty font tables and malformed text layers
//! degrade to "no change" and are reported through `tracing`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod fonts;
mod foundation;

pub use animation::layer::{
    AnimatedTextDocument, LAYER_TYPE_TEXT, Layer, LayerKind, TextData, TextDocumentKeyframe,
    TextKeyframes, TextLayer, TextStyle,
};
pub use animation::model::{
    Animation, Asset, FontDescriptor, FontEntry, FontList, FontReference, LayerScope,
};
pub use fonts::catalog::FontCatalog;
pub use fonts::options::{FontOption, PLACEHOLDER_LABEL, font_options};
pub use fonts::rewrite::{FontRewrite, LayerTally, rewrite_font};
pub use fonts::selector::{AnimationObserver, AnimationUpdated, FontSelector};
pub use foundation::error::{LottieFontsError, LottieFontsResult};
