//! Playlist model and the sources a playlist can be built from.
//!
//! A playlist is either listed explicitly in the config file or produced by
//! scanning a directory for audio files.

mod catalog;
mod display;
mod model;
mod scan;

pub use catalog::{Catalog, build_catalog};
pub use display::display_title;
pub use model::*;
pub use scan::scan;
