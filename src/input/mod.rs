mod gestures;
mod router;
mod state;

pub use gestures::GestureRecognizer;
pub use router::route_event;
pub use state::{InputCollector, TouchPhase, TouchSample};
