use egui::{Id, Order, Pos2, Rect, vec2};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::event::{BoardEvent, BoardSignal, DELETE_ACTION, SignalHandler};

/// Where the edit menu is shown and what it offers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuState {
    pub anchor: Option<Pos2>,
    pub options: Vec<&'static str>,
}

impl ContextMenuState {
    pub fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Keeps a [`ContextMenuState`] in sync with board signals.
#[derive(Debug, Clone, Default)]
pub struct ContextMenuHandler {
    state: Arc<Mutex<ContextMenuState>>,
}

impl ContextMenuHandler {
    pub fn new(state: Arc<Mutex<ContextMenuState>>) -> Self {
        Self { state }
    }
}

impl SignalHandler for ContextMenuHandler {
    fn handle_signal(&mut self, signal: &BoardSignal) {
        let mut state = self.state.lock();
        match signal {
            BoardSignal::ShowContextMenu { point, options } => {
                state.anchor = Some(*point);
                state.options = options.clone();
            }
            BoardSignal::HideContextMenu => *state = ContextMenuState::default(),
            BoardSignal::RequestRedraw => {}
        }
    }
}

/// Shows the menu if it is visible.
///
/// Returns the menu's rect (so touches on it don't reach the canvas) and the
/// event for a clicked action, if any.
pub fn context_menu(ctx: &egui::Context, state: &ContextMenuState) -> (Option<Rect>, Option<BoardEvent>) {
    let Some(anchor) = state.anchor else {
        return (None, None);
    };

    let mut clicked = None;
    let response = egui::Area::new(Id::new("line_context_menu"))
        .order(Order::Foreground)
        .fixed_pos(anchor + vec2(2.0, 2.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    for &option in &state.options {
                        if ui.button(option).clicked() && option == DELETE_ACTION {
                            clicked = Some(BoardEvent::DeleteCommand);
                        }
                    }
                });
            });
        })
        .response;

    (Some(response.rect), clicked)
}
