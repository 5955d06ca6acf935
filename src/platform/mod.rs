//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS events, window) and Pixels (frame buffer) with the
// core session.
//
// Architecture:
// ```text
//  Run loop (single thread)
//  ┌───────────────────────────────────────────────────────────┐
//  │  pump_app_events ──> Platform (ApplicationHandler)        │
//  │                        ├─ KeyboardInput → InputBuffer     │
//  │                        └─ CloseRequested → WindowClosed   │
//  │  flush_input_buffer ──> Channel ──> LifeSession::frame    │
//  │  present(draw)      ──> FrameCanvas ──> Pixels::render    │
//  └───────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pump return = frame boundary**: all input gathered during one pump
//   is flushed as a single batch before the session runs its frame
// - **Lazy window creation**: the window and surface are created in
//   `resumed()`, as Winit requires
// - **Fatal init errors**: window or surface failures are stored for the
//   run loop to pick up, and the event loop is asked to exit
//
//=========================================================================

//=== Submodules ==========================================================

mod diagnostics;
mod frame_canvas;
mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::Sender;
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
pub(crate) use frame_canvas::FrameCanvas;
use input_buffer::InputBuffer;

//=== WindowSettings ======================================================

/// What the platform needs to know to open the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowSettings {
    pub title: String,

    /// Frame buffer size in pixels; also the window's logical inner size.
    pub frame_size: (u32, u32),
}

//=== Platform ============================================================

/// Window owner and input event aggregator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, settings)`
/// 2. **Pumping**: the run loop hands it to `pump_app_events` each frame
/// 3. **Flush / present**: the run loop calls `flush_input_buffer` and
///    `present` between pumps
/// 4. **Shutdown**: dropped by the run loop; window and surface go with it
pub(crate) struct Platform {
    settings: WindowSettings,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// GPU-backed frame buffer for `window`.
    pixels: Option<Pixels<'static>>,

    /// Buffers key events until the next flush.
    buffer: InputBuffer,

    /// Channel to the core session.
    event_sender: Sender<PlatformEvent>,

    /// Fatal initialization failure, picked up by the run loop.
    init_error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(event_sender: Sender<PlatformEvent>, settings: WindowSettings) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            settings,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            init_error: None,
        }
    }

    //--- Run Loop Hooks ---------------------------------------------------

    /// True once the window and its pixel surface exist.
    pub(crate) fn is_ready(&self) -> bool {
        self.pixels.is_some()
    }

    /// Takes the fatal initialization error, if one occurred.
    pub(crate) fn take_init_error(&mut self) -> Option<PlatformError> {
        self.init_error.take()
    }

    /// Sends buffered input to the core as one batch.
    ///
    /// If the core side is gone the events are dropped with a warning; the
    /// run loop notices the disconnect on its own.
    pub(crate) fn flush_input_buffer(&mut self) {
        let Some(batch) = self.buffer.drain() else {
            return;
        };

        let count = batch.len();
        trace!(target: "platform::input", "Flushing {} key events", count);

        if self.event_sender.send(PlatformEvent::Inputs(batch)).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
        }
    }

    /// Draws a frame through `draw` and presents it.
    ///
    /// A no-op until the surface exists.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Present`] if the GPU rejects the frame.
    pub(crate) fn present<F>(&mut self, draw: F) -> Result<(), PlatformError>
    where
        F: FnOnce(&mut FrameCanvas<'_>),
    {
        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };

        let (width, height) = self.settings.frame_size;
        {
            let mut canvas = FrameCanvas::new(pixels.frame_mut(), width, height);
            draw(&mut canvas);
        }

        pixels
            .render()
            .map_err(|e| PlatformError::Present(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let (width, height) = self.settings.frame_size;
        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );
        diagnostics::log_display_mode(&window);

        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface)
            .map_err(|e| PlatformError::SurfaceCreation(e.to_string()))?;
        diagnostics::log_renderer(&pixels);

        self.pixels = Some(pixels);
        self.window = Some(window);
        Ok(())
    }

    fn request_shutdown(&self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            error!(target: "platform", "{}", e);
            self.init_error = Some(e);
            self.request_shutdown(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.request_shutdown(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::translate_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        warn!(target: "platform", "Surface resize to {}x{} failed: {}", size.width, size.height, e);
                    }
                }
            }

            _ => {
                // Ignore: Focused, CursorMoved, RedrawRequested, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;

    fn settings() -> WindowSettings {
        WindowSettings {
            title: "test".into(),
            frame_size: (48, 24),
        }
    }

    #[test]
    fn platform_creation_is_lazy() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, settings());
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert!(!platform.is_ready());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, settings());

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, settings());

        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::KeyR });
        platform.flush_input_buffer();

        assert_eq!(
            rx.try_recv().ok(),
            Some(PlatformEvent::Inputs(vec![InputEvent::KeyDown { key: KeyCode::KeyR }]))
        );
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, settings());

        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::Escape });
        drop(rx);

        // Should not panic, just log a warning.
        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn present_without_surface_is_noop() {
        let (tx, _rx) = unbounded();
        let mut platform = Platform::new(tx, settings());

        let mut called = false;
        assert!(platform.present(|_| called = true).is_ok());
        assert!(!called);
    }

    #[test]
    fn no_init_error_before_resume() {
        let (tx, _rx) = unbounded();
        let mut platform = Platform::new(tx, settings());
        assert!(platform.take_init_error().is_none());
    }
}
