//! Plain-text rendering helpers shared by reports and CLI output.

pub mod grid;
pub mod interpolate;
pub mod superscript;
pub mod translit;

pub use grid::{Grid, GridError};
pub use interpolate::interpolate;
pub use superscript::{footnote_marker, superscript};
pub use translit::{decode_named, encode_named, fold_to_ascii};
