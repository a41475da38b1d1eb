//! Transliteration of romanized Proto-Altekhsnan into the script's glyph
//! code points.
//!
//! ```
//! let r = altekh_engine::convert("c-=la", false);
//! assert_eq!(r.glyphs, "\u{e029}\u{e015}==l==");
//! assert_eq!(r.transcript, "\\ue029\\ue015\\u6c");
//! ```

pub mod cluster;
pub mod converter;
pub mod glyph;
pub mod script;
pub mod segmenter;
pub mod settings;
pub mod trace_init;
pub mod unicode;

pub use converter::explain;
pub use converter::{
    convert, convert_with, try_convert, ConversionResult, ConvertError, ConvertOptions,
    UnmappablePolicy,
};
