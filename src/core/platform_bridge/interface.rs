//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract between the platform handler and the core session.
// Both run on the same thread; the channel only decouples who produces
// events from who consumes them.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the core via the bridge channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Input events gathered since the last flush, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and presentation errors.
///
/// All of these are fatal. Nothing in the platform layer is retried.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// No GPU surface or adapter could be set up for the window.
    #[error("pixel surface creation failed: {0}")]
    SurfaceCreation(String),

    /// Drawing or presenting a frame failed.
    #[error("frame presentation failed: {0}")]
    Present(String),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::WindowCreation("no display".into());
        assert_eq!(err.to_string(), "window creation failed: no display");
    }

    #[test]
    fn platform_event_is_cloneable() {
        let event = PlatformEvent::Inputs(vec![]);
        assert_eq!(event.clone(), event);
    }
}
