//! Domain model for stylesheet assets

mod stylesheet;

pub use stylesheet::{path_key, Stylesheet};
