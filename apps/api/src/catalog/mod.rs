//! Post catalog: storage-backed listing, lookup and admin writes.

pub mod handlers;
pub mod repository;
pub mod seed;

pub use repository::{compute_stats, CatalogStats, PostRepository};
