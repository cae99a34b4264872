use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::board::{LineBoard, RenderFrame};
use crate::error::BoardResult;
use crate::event::{BoardEvent, BoardSignal};
use crate::input::route_event;

/// A board that can be handed to other threads.
///
/// Board operations are not meant to interleave, so every event is applied
/// under a single lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<LineBoard>>,
}

impl SharedBoard {
    pub fn new(board: LineBoard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Route one event to the board.
    pub fn apply(&self, event: &BoardEvent) -> BoardResult<Vec<BoardSignal>> {
        route_event(&mut self.inner.lock(), event)
    }

    pub fn render_frame(&self) -> RenderFrame {
        self.inner.lock().render_frame()
    }

    /// Exclusive access for anything the event interface doesn't cover.
    pub fn lock(&self) -> MutexGuard<'_, LineBoard> {
        self.inner.lock()
    }
}
