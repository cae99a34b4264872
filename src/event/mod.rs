mod bus;
mod events;

pub use bus::SignalBus;
pub use events::{BoardEvent, BoardSignal, DELETE_ACTION};

pub trait SignalHandler: Send {
    fn handle_signal(&mut self, signal: &BoardSignal);
}
