//! Top-level facade crate for Release Radar.
//!
//! Re-exports the core model/classifier and the server library so users can
//! depend on a single crate.

pub mod core {
    pub use radar_core::*;
}

pub mod server {
    pub use radar_server::*;
}
