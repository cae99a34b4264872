#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod line;
pub mod panels;
pub mod renderer;
pub mod shared;

pub use app::TouchTrackerApp;
pub use board::{FinishedLine, LineBoard, RenderFrame};
pub use config::{BoardConfig, GestureConfig, RenderConfig, Settings};
pub use error::{BoardError, BoardResult, SettingsError};
pub use event::{BoardEvent, BoardSignal, SignalBus, SignalHandler};
pub use input::{GestureRecognizer, InputCollector, TouchPhase, TouchSample, route_event};
pub use line::{LineSegment, MOUSE_TOUCH_ID, SegmentId, TouchId};
pub use renderer::Renderer;
pub use shared::SharedBoard;
