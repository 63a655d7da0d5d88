//! In-memory release storage.

pub mod release_store;

pub use release_store::ReleaseStore;
