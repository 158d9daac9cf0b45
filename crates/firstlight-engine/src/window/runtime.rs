use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuError, GpuInit};
use crate::frame::FrameDesc;
use crate::render::{self, QuadRenderer, RenderCtx, RenderTarget};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "firstlight".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, renders `frame` onto it, and keeps it presented
    /// until the window is closed.
    ///
    /// GPU setup failures and surface loss abort with an error; there is no
    /// degraded mode.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, frame: FrameDesc) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, frame);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// The surface borrows the window; both live in one entry so they move
// together.
#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    frame: FrameDesc,

    entry: Option<WindowEntry>,
    quad: Option<QuadRenderer>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, frame: FrameDesc) -> Self {
        Self {
            config,
            gpu_init,
            frame,
            entry: None,
            quad: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn setup_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry: Result<WindowEntry, GpuError> = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build();
        // Surface the tagged message ("No adapter found", ...) unwrapped.
        let entry = entry?;

        // The pipeline and vertex buffer exist only if the frame draws.
        if self.frame.draw.is_some() {
            self.quad = Some(entry.with_gpu(|gpu| {
                let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
                QuadRenderer::new(&ctx)
            }));
        }

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        let desc = &self.frame;
        let quad = self.quad.as_ref();

        let result = entry.with_gpu(|gpu| {
            let mut gpu_frame = gpu.begin_frame()?;
            {
                let mut target = RenderTarget::new(&mut gpu_frame.encoder, &gpu_frame.view);
                render::render_frame(&mut target, desc, quad);
            }
            gpu.submit(gpu_frame);
            Ok(())
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("surface out of memory"));
            }
            Err(err) => {
                // Transient acquisition failure; the platform will ask again.
                log::warn!("skipping frame: {err}");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.setup_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Static content: wait for platform events, never self-schedule.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
            }

            // The frame is re-encoded whenever the platform exposes the
            // window; content never changes.
            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
