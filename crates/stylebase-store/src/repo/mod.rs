//! Repository layer bridging the file store and the legacy node lookup

mod stylesheet_repo;

pub use stylesheet_repo::StylesheetRepository;
