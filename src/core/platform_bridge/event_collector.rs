//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side draining of platform events with shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input_batches → TickControl
//
// Draining is bounded per frame and never waits: an empty queue simply
// yields `Continue` with no batches.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Run loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events into per-frame input batches.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending platform events (bounded to prevent starvation).
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform side of the
    /// channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "core::session", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns collected input batches for this frame.
    #[cfg(test)]
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Takes ownership of collected input batches, leaving an empty vec.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.input_batches)
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(batch) => {
                if !batch.is_empty() {
                    self.input_batches.push(batch);
                }
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
