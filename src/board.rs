use egui::{Pos2, Vec2};
use log::{debug, info, warn};
use std::collections::HashMap;

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::geometry::line_near_point;
use crate::line::{LineSegment, SegmentId, TouchId};

/// A completed line together with its identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishedLine {
    pub id: SegmentId,
    pub segment: LineSegment,
}

/// Everything the renderer needs, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Finished lines, earliest first. Drawn in the base color.
    pub finished: Vec<LineSegment>,
    /// Lines still following a touch. Drawn in the in-progress color.
    pub in_progress: Vec<LineSegment>,
    /// The selected line, drawn last in the highlight color.
    pub selected: Option<LineSegment>,
}

impl RenderFrame {
    pub fn is_empty(&self) -> bool {
        self.finished.is_empty() && self.in_progress.is_empty() && self.selected.is_none()
    }
}

/// The drawing surface state: lines being drawn, lines finished, and the
/// current selection.
///
/// Each touch owns at most one in-progress line. When the touch ends the line
/// moves to the end of the finished list; finished lines are searched and
/// drawn earliest first. The selection is an id into the finished list and is
/// cleared whenever the line it names goes away.
#[derive(Debug, Default)]
pub struct LineBoard {
    config: BoardConfig,
    in_progress: HashMap<TouchId, LineSegment>,
    finished: Vec<FinishedLine>,
    selected: Option<SegmentId>,
}

impl LineBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ---- Touches ----

    /// Start a zero-length line under `id`. A touch that is already drawing
    /// keeps its line; the duplicate begin is rejected.
    pub fn begin_touch(&mut self, id: TouchId, point: Pos2) -> BoardResult<()> {
        if self.in_progress.contains_key(&id) {
            warn!("Ignoring begin for touch {id}: already drawing");
            return Err(BoardError::DuplicateTouch(id));
        }
        debug!("Touch {id} began at {point:?}");
        self.in_progress.insert(id, LineSegment::at(point));
        Ok(())
    }

    pub fn move_touch(&mut self, id: TouchId, point: Pos2) -> BoardResult<()> {
        match self.in_progress.get_mut(&id) {
            Some(line) => {
                line.end = point;
                Ok(())
            }
            None => {
                warn!("Ignoring move for untracked touch {id}");
                Err(BoardError::UnknownTouch(id))
            }
        }
    }

    /// Finish the line drawn by `id` and append it to the finished list.
    pub fn end_touch(&mut self, id: TouchId) -> BoardResult<SegmentId> {
        let Some(segment) = self.in_progress.remove(&id) else {
            warn!("Ignoring end for untracked touch {id}");
            return Err(BoardError::UnknownTouch(id));
        };
        let line = FinishedLine {
            id: SegmentId::new(),
            segment,
        };
        debug!("Touch {id} finished line {} {:?}", line.id, line.segment);
        self.finished.push(line);
        Ok(line.id)
    }

    /// Discard the line drawn by `id`.
    pub fn cancel_touch(&mut self, id: TouchId) -> BoardResult<()> {
        if self.in_progress.remove(&id).is_none() {
            warn!("Ignoring cancel for untracked touch {id}");
            return Err(BoardError::UnknownTouch(id));
        }
        debug!("Touch {id} cancelled");
        Ok(())
    }

    pub fn clear_all(&mut self) {
        info!(
            "Clearing board ({} finished, {} in progress)",
            self.finished.len(),
            self.in_progress.len()
        );
        self.in_progress.clear();
        self.finished.clear();
        self.selected = None;
    }

    // ---- Selection ----

    /// First finished line (in drawing order) near `point`.
    pub fn line_at(&self, point: Pos2) -> Option<SegmentId> {
        self.finished
            .iter()
            .find(|line| line_near_point(&line.segment, point, &self.config))
            .map(|line| line.id)
    }

    /// Select the line under `point`, or clear the selection if there is none.
    pub fn select_at(&mut self, point: Pos2) -> Option<SegmentId> {
        self.selected = self.line_at(point);
        match self.selected {
            Some(id) => info!("Selected line {id} at {point:?}"),
            None => debug!("No line at {point:?}"),
        }
        self.selected
    }

    /// Like [`Self::select_at`], but a hit also drops every line in progress so
    /// the press doesn't leave a stray stroke behind while the line is dragged.
    pub fn long_press_begin(&mut self, point: Pos2) -> Option<SegmentId> {
        let hit = self.select_at(point);
        if hit.is_some() && !self.in_progress.is_empty() {
            debug!("Long press discarding {} lines in progress", self.in_progress.len());
            self.in_progress.clear();
        }
        hit
    }

    pub fn long_press_end(&mut self) {
        self.selected = None;
    }

    /// Translate the selected line by one pan increment. No-op without a selection.
    pub fn move_selected_by(&mut self, delta: Vec2) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        match self.finished.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.segment.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Remove the selected line and clear the selection.
    pub fn delete_selected(&mut self) -> BoardResult<LineSegment> {
        let id = self.selected.ok_or(BoardError::NoSelection)?;
        let removed = self.remove_segment(id).ok_or(BoardError::NoSelection)?;
        info!("Deleted line {id}");
        Ok(removed)
    }

    /// Remove a finished line by identity. Clears the selection if it named that line.
    pub fn remove_segment(&mut self, id: SegmentId) -> Option<LineSegment> {
        let index = self.finished.iter().position(|line| line.id == id)?;
        let removed = self.finished.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(removed.segment)
    }

    // ---- Queries ----

    pub fn finished(&self) -> &[FinishedLine] {
        &self.finished
    }

    /// Lines in progress, ordered by touch id so the result is stable.
    pub fn in_progress(&self) -> Vec<(TouchId, LineSegment)> {
        let mut lines: Vec<_> = self
            .in_progress
            .iter()
            .map(|(id, line)| (*id, *line))
            .collect();
        lines.sort_by_key(|(id, _)| *id);
        lines
    }

    pub fn is_drawing(&self, id: TouchId) -> bool {
        self.in_progress.contains_key(&id)
    }

    pub fn segment(&self, id: SegmentId) -> Option<&LineSegment> {
        self.finished
            .iter()
            .find(|line| line.id == id)
            .map(|line| &line.segment)
    }

    pub fn selected_id(&self) -> Option<SegmentId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&LineSegment> {
        self.selected.and_then(|id| self.segment(id))
    }

    pub fn len(&self) -> usize {
        self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finished.is_empty() && self.in_progress.is_empty()
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            finished: self.finished.iter().map(|line| line.segment).collect(),
            in_progress: self.in_progress().into_iter().map(|(_, line)| line).collect(),
            selected: self.selected().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn draw(board: &mut LineBoard, id: u64, from: Pos2, to: Pos2) -> SegmentId {
        let touch = TouchId(id);
        board.begin_touch(touch, from).unwrap();
        board.move_touch(touch, to).unwrap();
        board.end_touch(touch).unwrap()
    }

    #[test]
    fn test_begin_creates_zero_length_line() {
        let mut board = LineBoard::new();
        board.begin_touch(TouchId(1), pos2(3.0, 4.0)).unwrap();
        assert_eq!(
            board.in_progress(),
            vec![(TouchId(1), LineSegment::at(pos2(3.0, 4.0)))]
        );
        assert!(board.finished().is_empty());
    }

    #[test]
    fn test_duplicate_begin_keeps_original_line() {
        let mut board = LineBoard::new();
        board.begin_touch(TouchId(1), pos2(0.0, 0.0)).unwrap();
        board.move_touch(TouchId(1), pos2(5.0, 0.0)).unwrap();

        let err = board.begin_touch(TouchId(1), pos2(9.0, 9.0)).unwrap_err();
        assert_eq!(err, BoardError::DuplicateTouch(TouchId(1)));
        assert_eq!(
            board.in_progress()[0].1,
            LineSegment::new(pos2(0.0, 0.0), pos2(5.0, 0.0))
        );
    }

    #[test]
    fn test_unknown_touch_is_rejected_without_changes() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(1.0, 1.0));

        assert_eq!(
            board.move_touch(TouchId(7), pos2(1.0, 1.0)),
            Err(BoardError::UnknownTouch(TouchId(7)))
        );
        assert_eq!(
            board.end_touch(TouchId(7)),
            Err(BoardError::UnknownTouch(TouchId(7)))
        );
        assert_eq!(
            board.cancel_touch(TouchId(7)),
            Err(BoardError::UnknownTouch(TouchId(7)))
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_cancel_discards_line() {
        let mut board = LineBoard::new();
        board.begin_touch(TouchId(1), pos2(0.0, 0.0)).unwrap();
        board.cancel_touch(TouchId(1)).unwrap();
        assert!(board.is_empty());
        assert!(!board.is_drawing(TouchId(1)));
    }

    #[test]
    fn test_multiple_touches_draw_independently() {
        let mut board = LineBoard::new();
        board.begin_touch(TouchId(2), pos2(0.0, 0.0)).unwrap();
        board.begin_touch(TouchId(1), pos2(50.0, 50.0)).unwrap();
        board.move_touch(TouchId(2), pos2(10.0, 0.0)).unwrap();
        board.move_touch(TouchId(1), pos2(60.0, 50.0)).unwrap();

        board.end_touch(TouchId(1)).unwrap();
        board.end_touch(TouchId(2)).unwrap();

        // Completion order, not begin order
        let segments: Vec<_> = board.finished().iter().map(|line| line.segment).collect();
        assert_eq!(
            segments,
            vec![
                LineSegment::new(pos2(50.0, 50.0), pos2(60.0, 50.0)),
                LineSegment::new(pos2(0.0, 0.0), pos2(10.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_select_at_prefers_earliest_line() {
        let mut board = LineBoard::new();
        let first = draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 10.0));
        let _second = draw(&mut board, 2, pos2(10.0, 0.0), pos2(0.0, 10.0));

        assert_eq!(board.select_at(pos2(5.0, 5.0)), Some(first));
        assert_eq!(board.selected_id(), Some(first));
    }

    #[test]
    fn test_select_at_miss_clears_selection() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.select_at(pos2(0.0, 0.0));
        assert!(board.selected().is_some());

        assert_eq!(board.select_at(pos2(500.0, 500.0)), None);
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_long_press_miss_keeps_lines_in_progress() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.begin_touch(TouchId(2), pos2(200.0, 200.0)).unwrap();

        assert_eq!(board.long_press_begin(pos2(400.0, 400.0)), None);
        assert!(board.is_drawing(TouchId(2)));
    }

    #[test]
    fn test_long_press_end_clears_selection() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.long_press_begin(pos2(0.0, 0.0));
        board.long_press_end();
        assert_eq!(board.selected_id(), None);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_move_selected_without_selection_is_noop() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!(!board.move_selected_by(vec2(5.0, 5.0)));
        assert_eq!(
            board.finished()[0].segment,
            LineSegment::new(pos2(0.0, 0.0), pos2(10.0, 0.0))
        );
    }

    #[test]
    fn test_delete_without_selection_fails() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert_eq!(board.delete_selected(), Err(BoardError::NoSelection));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_delete_removes_selected_identity_not_value() {
        let mut board = LineBoard::new();
        let first = draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        let second = draw(&mut board, 2, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.select_at(pos2(0.0, 0.0));
        assert_eq!(board.selected_id(), Some(first));

        // Point the selection at the later duplicate
        board.remove_segment(first);
        let third = draw(&mut board, 3, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.select_at(pos2(0.0, 0.0));
        assert_eq!(board.selected_id(), Some(second));

        board.delete_selected().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.finished()[0].id, third);
    }

    #[test]
    fn test_remove_segment_clears_matching_selection_only() {
        let mut board = LineBoard::new();
        let first = draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        let second = draw(&mut board, 2, pos2(100.0, 100.0), pos2(110.0, 100.0));

        board.select_at(pos2(100.0, 100.0));
        board.remove_segment(first);
        assert_eq!(board.selected_id(), Some(second));

        board.remove_segment(second);
        assert_eq!(board.selected_id(), None);
    }

    #[test]
    fn test_render_frame_order() {
        let mut board = LineBoard::new();
        draw(&mut board, 1, pos2(0.0, 0.0), pos2(10.0, 0.0));
        board.begin_touch(TouchId(2), pos2(50.0, 50.0)).unwrap();
        board.select_at(pos2(0.0, 0.0));

        let frame = board.render_frame();
        assert_eq!(frame.finished, vec![LineSegment::new(pos2(0.0, 0.0), pos2(10.0, 0.0))]);
        assert_eq!(frame.in_progress, vec![LineSegment::at(pos2(50.0, 50.0))]);
        assert_eq!(frame.selected, Some(LineSegment::new(pos2(0.0, 0.0), pos2(10.0, 0.0))));
    }
}
