use anyhow::Result;
use winit::dpi::LogicalSize;

use firstlight_engine::device::GpuInit;
use firstlight_engine::frame::FrameDesc;
use firstlight_engine::logging::{init_logging, LoggingConfig};
use firstlight_engine::paint::Color;
use firstlight_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // `--clear-only` drops the draw step and leaves a flat red frame.
    let clear_only = std::env::args().skip(1).any(|arg| arg == "--clear-only");
    let frame = if clear_only {
        FrameDesc::clear_only(Color::opaque(1.0, 0.0, 0.0))
    } else {
        FrameDesc::full()
    };

    log::info!(
        "rendering {} frame",
        if clear_only { "clear-only" } else { "full" }
    );

    let config = RuntimeConfig {
        title: "firstlight".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
    };

    Runtime::run(config, GpuInit::default(), frame)
}
