use std::cell::RefCell;

use crate::event::{BoardSignal, SignalHandler};

/// Broadcasts board signals to registered handlers
pub struct SignalBus {
    handlers: RefCell<Vec<Box<dyn SignalHandler>>>,
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive signals
    pub fn subscribe(&self, handler: Box<dyn SignalHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn emit(&self, signal: &BoardSignal) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_signal(signal);
        }
    }

    pub fn emit_all(&self, signals: &[BoardSignal]) {
        for signal in signals {
            self.emit(signal);
        }
    }
}
