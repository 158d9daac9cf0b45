//! Window + runtime shell.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! The runtime presents one static frame; it never schedules redraws itself.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
