//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface
//! - acquiring the frame and providing an encoder/view for rendering

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::GpuError;
pub use frame::GpuFrame;
pub use init::GpuInit;
