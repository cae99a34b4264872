//! Raw touches through the gesture layer and into the board.

use egui::{Vec2, pos2, vec2};
use touch_tracker::{
    BoardEvent, BoardSignal, GestureRecognizer, LineBoard, LineSegment, TouchId, TouchPhase,
    TouchSample, route_event,
};

struct Harness {
    board: LineBoard,
    gestures: GestureRecognizer,
    signals: Vec<BoardSignal>,
}

impl Harness {
    fn new() -> Self {
        Self {
            board: LineBoard::new(),
            gestures: GestureRecognizer::default(),
            signals: Vec::new(),
        }
    }

    fn run(&mut self, events: Vec<BoardEvent>) {
        for event in events {
            if let Ok(signals) = route_event(&mut self.board, &event) {
                self.signals.extend(signals);
            }
        }
    }

    fn touch(&mut self, id: u64, x: f32, y: f32, phase: TouchPhase, time: f64) {
        let sample = TouchSample { id: TouchId(id), pos: pos2(x, y), phase };
        let events = self.gestures.process(sample, time);
        self.run(events);
    }

    fn tick(&mut self, time: f64) {
        let events = self.gestures.update(time);
        self.run(events);
    }
}

#[test]
fn test_drag_draws_a_line() {
    let mut h = Harness::new();
    h.touch(1, 0.0, 0.0, TouchPhase::Started, 0.0);
    h.touch(1, 40.0, 0.0, TouchPhase::Moved, 0.05);
    h.touch(1, 80.0, 0.0, TouchPhase::Moved, 0.1);
    h.touch(1, 80.0, 0.0, TouchPhase::Ended, 0.15);

    assert_eq!(
        h.board.render_frame().finished,
        vec![LineSegment::new(pos2(0.0, 0.0), pos2(80.0, 0.0))]
    );
}

#[test]
fn test_tap_selects_and_shows_menu_without_drawing() {
    let mut h = Harness::new();
    h.touch(1, 0.0, 0.0, TouchPhase::Started, 0.0);
    h.touch(1, 80.0, 0.0, TouchPhase::Moved, 0.1);
    h.touch(1, 80.0, 0.0, TouchPhase::Ended, 0.2);

    h.touch(2, 41.0, 2.0, TouchPhase::Started, 1.0);
    h.touch(2, 41.0, 2.0, TouchPhase::Ended, 1.05);
    h.tick(1.5);

    assert_eq!(h.board.len(), 1);
    assert!(h.board.selected().is_some());
    assert_eq!(h.signals.last(), Some(&BoardSignal::show_delete_menu(pos2(41.0, 2.0))));
}

#[test]
fn test_double_tap_wipes_board() {
    let mut h = Harness::new();
    h.touch(1, 0.0, 0.0, TouchPhase::Started, 0.0);
    h.touch(1, 80.0, 0.0, TouchPhase::Moved, 0.1);
    h.touch(1, 80.0, 0.0, TouchPhase::Ended, 0.2);

    for (id, start) in [(2, 1.0), (3, 1.15)] {
        h.touch(id, 200.0, 200.0, TouchPhase::Started, start);
        h.touch(id, 200.0, 200.0, TouchPhase::Ended, start + 0.05);
    }
    h.tick(3.0);

    assert!(h.board.render_frame().is_empty());
}

#[test]
fn test_long_press_and_drag_moves_line_then_releases() {
    let mut h = Harness::new();
    h.touch(1, 0.0, 0.0, TouchPhase::Started, 0.0);
    h.touch(1, 80.0, 0.0, TouchPhase::Moved, 0.1);
    h.touch(1, 80.0, 0.0, TouchPhase::Ended, 0.2);

    h.touch(2, 40.0, 0.0, TouchPhase::Started, 1.0);
    h.tick(1.6);
    assert!(h.board.selected().is_some());
    assert!(h.board.in_progress().is_empty());

    let mut expected = Vec2::ZERO;
    for step in 1..=4 {
        let x = 40.0 + step as f32 * 5.0;
        h.touch(2, x, 0.0, TouchPhase::Moved, 1.6 + step as f64 * 0.02);
        expected += vec2(5.0, 0.0);
        // Each increment is visible immediately
        assert_eq!(h.board.selected().map(|line| line.begin), Some(pos2(0.0, 0.0) + expected));
    }

    h.touch(2, 60.0, 0.0, TouchPhase::Ended, 2.0);
    assert!(h.board.selected().is_none());
    assert_eq!(
        h.board.render_frame().finished,
        vec![LineSegment::new(pos2(20.0, 0.0), pos2(100.0, 0.0))]
    );
}
