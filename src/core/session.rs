//=========================================================================
// Life Session
//=========================================================================
//
// The explicitly owned simulation state driven by the run loop.
//
// Each frame:
// ```text
//   EventCollector ──batches──> CommandMapper ──Command──> apply()
//                                                            │
//   FixedStepScheduler ──tick(now)──> LifeEngine::step() ×N  │
//                                                            ↓
//                                                      TickControl
// ```
//
// Rendering is a separate read-only pass (`render`) so the host decides
// when to present. Nothing here touches the OS, which keeps the whole
// per-frame control flow testable without a window.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::input::{Command, CommandMapper};
use super::platform_bridge::{EventCollector, TickControl};
use super::render::{Canvas, GridRenderer};
use super::scheduler::FixedStepScheduler;
use super::simulation::LifeEngine;

//=== LifeSession =========================================================

pub(crate) struct LifeSession<R: Rng = StdRng> {
    engine: LifeEngine<R>,
    scheduler: FixedStepScheduler,
    commands: CommandMapper,
    collector: EventCollector,
    renderer: GridRenderer,
}

impl<R: Rng> LifeSession<R> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        engine: LifeEngine<R>,
        scheduler: FixedStepScheduler,
        commands: CommandMapper,
        collector: EventCollector,
        renderer: GridRenderer,
    ) -> Self {
        info!(
            target: "core::session",
            "Session started: {}x{} grid, {} alive, step every {}ms",
            engine.grid().width(),
            engine.grid().height(),
            engine.population(),
            scheduler.interval_ms()
        );

        Self {
            engine,
            scheduler,
            commands,
            collector,
            renderer,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one host frame: dispatch pending input, then catch up the
    /// simulation to `now_ms`.
    ///
    /// Input is handled before stepping, so a Quit seen this frame stops
    /// the loop without advancing the grid.
    pub(crate) fn frame(&mut self, now_ms: u64) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!(target: "core::session", "Platform requested shutdown");
            return TickControl::Exit;
        }

        for batch in self.collector.take_batches() {
            for event in &batch {
                let Some(command) = self.commands.map_event(event) else {
                    trace!(target: "core::session", "Ignored input: {:?}", event);
                    continue;
                };
                if self.apply(command) == TickControl::Exit {
                    return TickControl::Exit;
                }
            }
        }

        let steps = self.scheduler.tick(now_ms, &mut self.engine);
        if steps > 1 {
            debug!(
                target: "core::session",
                "Caught up {} steps (generation {})",
                steps,
                self.engine.generation()
            );
        }

        TickControl::Continue
    }

    /// Executes a single command.
    pub(crate) fn apply(&mut self, command: Command) -> TickControl {
        match command {
            Command::Quit => {
                info!(target: "core::session", "Quit requested at generation {}", self.engine.generation());
                TickControl::Exit
            }
            Command::Restart => {
                self.engine.randomize();
                debug!(
                    target: "core::session",
                    "Restarted with {} alive cells",
                    self.engine.population()
                );
                TickControl::Continue
            }
        }
    }

    //--- Presentation -----------------------------------------------------

    /// Draws the current generation.
    pub(crate) fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.renderer.draw(self.engine.grid(), canvas);
    }

    //--- Accessors --------------------------------------------------------

    pub(crate) fn engine(&self) -> &LifeEngine<R> {
        &self.engine
    }

    pub(crate) fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
