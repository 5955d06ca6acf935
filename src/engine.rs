//=========================================================================
// Life Engine
//
// Main entry point and run loop of the simulator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Run Loop]
//         │                                              │
//         ├─ with_step_interval()          pump OS events (Platform)
//         ├─ with_block_size()             flush input → LifeSession
//         ├─ with_seed()                   session.frame(now)
//         └─ with_key_binding()            present frame
// ```
//
// Everything runs on the calling thread. The loop is a plain `loop`
// around Winit's `pump_app_events`, so the engine (not Winit) owns
// control flow and shutdown order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::bounded;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

//=== Internal Dependencies ===============================================

use crate::core::config::{
    AppMetadata, BLOCK_SIZE, FRAME_TIMEOUT_MS, STEP_INTERVAL_MS, WINDOW_TITLE,
};
use crate::core::grid::GridState;
use crate::core::input::{Command, CommandMapper, KeyCode};
use crate::core::platform_bridge::{EventCollector, PlatformError, TickControl};
use crate::core::render::GridRenderer;
use crate::core::scheduler::{FixedStepScheduler, MonotonicClock};
use crate::core::session::LifeSession;
use crate::core::simulation::LifeEngine;
use crate::platform::{Platform, WindowSettings};

//=== EngineError =========================================================

/// Fatal engine failures. The simulation itself cannot fail; every
/// variant comes from the platform boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Event loop, window or surface could not be created.
    #[error("initialization failed: {0}")]
    Initialization(PlatformError),

    /// A frame could not be presented.
    #[error("rendering failed: {0}")]
    Presentation(PlatformError),
}

//=== EngineConfig ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EngineConfig {
    step_interval_ms: u64,
    block_size: u32,
    seed: Option<u64>,
    channel_capacity: usize,
    frame_timeout: Duration,
    metadata: AppMetadata,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: STEP_INTERVAL_MS,
            block_size: BLOCK_SIZE,
            seed: None,
            channel_capacity: 128,
            frame_timeout: Duration::from_millis(FRAME_TIMEOUT_MS),
            metadata: AppMetadata::DEFAULT,
        }
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Step interval**: 250 ms
/// - **Block size**: 24 px
/// - **Seed**: OS entropy
/// - **Channel capacity**: 128 events
/// - **Frame timeout**: 16 ms
/// - **Keys**: Escape/Q quit, R restarts
///
/// # Examples
///
/// ```no_run
/// use life_engine::EngineBuilder;
///
/// EngineBuilder::new().build().run().expect("engine failed");
/// ```
///
/// Reproducible run with faster generations:
/// ```no_run
/// use std::time::Duration;
/// use life_engine::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_step_interval(Duration::from_millis(100))
///     .with_seed(42)
///     .build()
///     .run()
///     .expect("engine failed");
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
    commands: CommandMapper,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            commands: CommandMapper::new(),
        }
    }

    /// Sets the wall-clock duration of one generation.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is shorter than one millisecond.
    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        let ms = interval.as_millis() as u64;
        assert!(ms > 0, "Step interval must be positive, got {:?}", interval);
        self.config.step_interval_ms = ms;
        self
    }

    /// Sets the on-screen edge length of one cell, in pixels.
    ///
    /// # Panics
    ///
    /// Panics if `block_size < 2`.
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        assert!(block_size >= 2, "Block size must be at least 2, got {}", block_size);
        self.config.block_size = block_size;
        self
    }

    /// Seeds the random generator so every run starts from the same grid.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the platform → core channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets how long one pump waits for OS events before the frame runs.
    pub fn with_frame_timeout(mut self, timeout: Duration) -> Self {
        self.config.frame_timeout = timeout;
        self
    }

    /// Binds `key` to `command` in addition to the stock bindings.
    pub fn with_key_binding(mut self, key: KeyCode, command: Command) -> Self {
        self.commands.bind_key(key, command);
        self
    }

    /// Removes the binding of `key`.
    pub fn without_key_binding(mut self, key: KeyCode) -> Self {
        self.commands.unbind_key(key);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine (step: {}ms, block: {}px, seed: {:?})",
            self.config.step_interval_ms,
            self.config.block_size,
            self.config.seed
        );

        Engine {
            config: self.config,
            commands: self.commands,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game of Life runtime.
///
/// Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
pub struct Engine {
    config: EngineConfig,
    commands: CommandMapper,
}

impl Engine {
    /// Opens the window and runs until Quit or window close.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event loop, bridge channel and platform
    /// 2. Pumps events until the window and surface exist
    /// 3. Randomizes the grid and starts the step clock
    /// 4. Loops: pump → flush input → session frame → present
    /// 5. Drops session, platform and event loop on exit
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Initialization`] if the event loop, window or
    /// pixel surface cannot be created, and [`EngineError::Presentation`] if
    /// a frame cannot be presented. Both end the run immediately.
    pub fn run(self) -> Result<(), EngineError> {
        let Engine { config, commands } = self;
        info!(target: "engine", "Starting {}", config.metadata);

        //--- 1. Event loop, channel, platform -----------------------------
        let mut event_loop = EventLoop::new()
            .map_err(|e| EngineError::Initialization(PlatformError::EventLoopCreation(e.to_string())))?;

        let (tx, rx) = bounded(config.channel_capacity);
        let renderer = GridRenderer::new(config.block_size);
        let settings = WindowSettings {
            title: WINDOW_TITLE.to_owned(),
            frame_size: renderer.frame_size(&GridState::default()),
        };
        let mut platform = Platform::new(tx, settings);

        let clock = MonotonicClock::new();
        let mut startup = Some((commands, EventCollector::new(rx)));
        let mut session: Option<LifeSession> = None;

        //--- 2-4. Run loop ------------------------------------------------
        loop {
            let status = event_loop.pump_app_events(Some(config.frame_timeout), &mut platform);

            if let Some(e) = platform.take_init_error() {
                return Err(EngineError::Initialization(e));
            }
            if let PumpStatus::Exit(code) = status {
                info!(target: "engine", "Event loop exited (code {})", code);
                break;
            }

            if session.is_none() {
                if !platform.is_ready() {
                    continue;
                }
                if let Some((commands, collector)) = startup.take() {
                    session = Some(start_session(&config, &clock, commands, collector, renderer));
                }
            }
            let Some(active) = session.as_mut() else {
                continue;
            };

            platform.flush_input_buffer();
            if active.frame(clock.now_ms()) == TickControl::Exit {
                break;
            }

            platform
                .present(|canvas| active.render(canvas))
                .map_err(EngineError::Presentation)?;
        }

        //--- 5. Teardown --------------------------------------------------
        if let Some(finished) = &session {
            debug!(
                target: "engine",
                "Final generation {} with {} alive cells",
                finished.engine().generation(),
                finished.engine().population()
            );
        }
        info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }
}

/// Randomizes a fresh grid and anchors the step clock at the current time.
fn start_session(
    config: &EngineConfig,
    clock: &MonotonicClock,
    commands: CommandMapper,
    collector: EventCollector,
    renderer: GridRenderer,
) -> LifeSession {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = LifeEngine::with_rng(GridState::default(), rng);
    let scheduler = FixedStepScheduler::new(config.step_interval_ms, clock.now_ms());

    LifeSession::new(engine, scheduler, commands, collector, renderer)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GRID_WIDTH;
    use crate::core::platform_bridge::PlatformEvent;
    use crossbeam_channel::unbounded;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config.step_interval_ms, 250);
        assert_eq!(builder.config.block_size, 24);
        assert_eq!(builder.config.seed, None);
        assert_eq!(builder.config.channel_capacity, 128);
        assert_eq!(builder.config.frame_timeout, Duration::from_millis(16));
        assert_eq!(builder.commands.binding(KeyCode::KeyR), Some(Command::Restart));
    }

    #[test]
    fn builder_with_step_interval() {
        let builder = EngineBuilder::new().with_step_interval(Duration::from_millis(100));
        assert_eq!(builder.config.step_interval_ms, 100);
    }

    #[test]
    #[should_panic(expected = "Step interval must be positive")]
    fn builder_with_sub_millisecond_interval_panics() {
        EngineBuilder::new().with_step_interval(Duration::from_micros(500));
    }

    #[test]
    #[should_panic(expected = "Block size must be at least 2")]
    fn builder_with_block_size_panics_on_one() {
        EngineBuilder::new().with_block_size(1);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_key_bindings() {
        let builder = EngineBuilder::new()
            .with_key_binding(KeyCode::Space, Command::Restart)
            .without_key_binding(KeyCode::KeyQ);

        assert_eq!(builder.commands.binding(KeyCode::Space), Some(Command::Restart));
        assert_eq!(builder.commands.binding(KeyCode::KeyQ), None);
        assert_eq!(builder.commands.binding(KeyCode::Escape), Some(Command::Quit));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_step_interval(Duration::from_millis(500))
            .with_block_size(8)
            .with_seed(9)
            .with_channel_capacity(16)
            .build();

        assert_eq!(engine.config.step_interval_ms, 500);
        assert_eq!(engine.config.block_size, 8);
        assert_eq!(engine.config.seed, Some(9));
        assert_eq!(engine.config.channel_capacity, 16);
    }

    //=====================================================================
    // Session Startup Tests
    //=====================================================================

    #[test]
    fn seeded_sessions_start_identically() {
        let config = EngineBuilder::new().with_seed(1234).config;
        let clock = MonotonicClock::new();

        let (_tx_a, rx_a) = unbounded::<PlatformEvent>();
        let (_tx_b, rx_b) = unbounded::<PlatformEvent>();
        let a = start_session(&config, &clock, CommandMapper::new(), EventCollector::new(rx_a), GridRenderer::default());
        let b = start_session(&config, &clock, CommandMapper::new(), EventCollector::new(rx_b), GridRenderer::default());

        assert_eq!(a.engine().grid(), b.engine().grid());
        assert_eq!(a.engine().grid().width(), GRID_WIDTH);
        assert_eq!(a.scheduler().interval_ms(), 250);
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::Initialization(PlatformError::SurfaceCreation("no adapter".into()));
        assert_eq!(err.to_string(), "initialization failed: pixel surface creation failed: no adapter");
    }
}
