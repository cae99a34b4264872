use log::debug;

use crate::board::LineBoard;
use crate::error::BoardResult;
use crate::event::{BoardEvent, BoardSignal};

/// Applies one inbound event to the board and returns the signals the
/// rendering and menu layer should act on.
///
/// On error the board is unchanged and no signals are produced.
pub fn route_event(board: &mut LineBoard, event: &BoardEvent) -> BoardResult<Vec<BoardSignal>> {
    debug!("Routing {}", event.name());

    let mut signals = Vec::with_capacity(2);
    match *event {
        BoardEvent::TouchBegan { id, point } => board.begin_touch(id, point)?,
        BoardEvent::TouchMoved { id, point } => board.move_touch(id, point)?,
        BoardEvent::TouchEnded { id } => {
            board.end_touch(id)?;
        }
        BoardEvent::TouchCancelled { id } => board.cancel_touch(id)?,
        BoardEvent::DoubleTap { .. } => {
            board.clear_all();
            signals.push(BoardSignal::HideContextMenu);
        }
        BoardEvent::SingleTap { point } => match board.select_at(point) {
            Some(_) => signals.push(BoardSignal::show_delete_menu(point)),
            None => signals.push(BoardSignal::HideContextMenu),
        },
        // The menu belongs to the tap selection that a long press replaces
        BoardEvent::LongPressBegan { point } => {
            board.long_press_begin(point);
            signals.push(BoardSignal::HideContextMenu);
        }
        BoardEvent::LongPressEnded => {
            board.long_press_end();
            signals.push(BoardSignal::HideContextMenu);
        }
        BoardEvent::Pan { delta } => {
            // Nothing to redraw if there's nothing to move
            if !board.move_selected_by(delta) {
                return Ok(signals);
            }
        }
        BoardEvent::DeleteCommand => {
            board.delete_selected()?;
            signals.push(BoardSignal::HideContextMenu);
        }
    }

    signals.insert(0, BoardSignal::RequestRedraw);
    Ok(signals)
}
