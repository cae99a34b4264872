use egui::{Pos2, Vec2};

use crate::line::TouchId;

/// Label of the only context menu action.
pub const DELETE_ACTION: &str = "Delete";

/// Normalized input delivered by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    TouchBegan { id: TouchId, point: Pos2 },
    TouchMoved { id: TouchId, point: Pos2 },
    TouchEnded { id: TouchId },
    TouchCancelled { id: TouchId },
    DoubleTap { point: Pos2 },
    SingleTap { point: Pos2 },
    LongPressBegan { point: Pos2 },
    LongPressEnded,
    /// Movement since the previous pan sample, not since the pan started
    Pan { delta: Vec2 },
    /// The context menu "Delete" action
    DeleteCommand,
}

impl BoardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TouchBegan { .. } => "TouchBegan",
            Self::TouchMoved { .. } => "TouchMoved",
            Self::TouchEnded { .. } => "TouchEnded",
            Self::TouchCancelled { .. } => "TouchCancelled",
            Self::DoubleTap { .. } => "DoubleTap",
            Self::SingleTap { .. } => "SingleTap",
            Self::LongPressBegan { .. } => "LongPressBegan",
            Self::LongPressEnded => "LongPressEnded",
            Self::Pan { .. } => "Pan",
            Self::DeleteCommand => "DeleteCommand",
        }
    }
}

/// Requests sent back to the rendering and menu layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardSignal {
    RequestRedraw,
    ShowContextMenu {
        point: Pos2,
        options: Vec<&'static str>,
    },
    HideContextMenu,
}

impl BoardSignal {
    pub fn show_delete_menu(point: Pos2) -> Self {
        Self::ShowContextMenu {
            point,
            options: vec![DELETE_ACTION],
        }
    }
}
