//! Firstlight engine crate.
//!
//! A deliberately small GPU runtime: acquire an adapter and device, configure
//! a window surface, upload a fixed quad, build one render pipeline, and
//! submit a single static frame.

pub mod device;
pub mod frame;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
