use egui::{Event, PointerButton, Pos2, Rect};
use std::collections::HashSet;

use crate::line::{MOUSE_TOUCH_ID, TouchId};

/// Phase of a touch interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<egui::TouchPhase> for TouchPhase {
    fn from(phase: egui::TouchPhase) -> Self {
        match phase {
            egui::TouchPhase::Start => Self::Started,
            egui::TouchPhase::Move => Self::Moved,
            egui::TouchPhase::End => Self::Ended,
            egui::TouchPhase::Cancel => Self::Cancelled,
        }
    }
}

/// A single raw touch update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub id: TouchId,
    pub pos: Pos2,
    pub phase: TouchPhase,
}

/// Extracts touch samples for the canvas from egui's raw events.
///
/// Touches only count if they start inside the canvas and outside any
/// blocked region (the context menu). The primary mouse button is reported
/// as [`MOUSE_TOUCH_ID`]. Once a real touch has been seen, pointer events are
/// ignored since egui also synthesizes them from touches.
#[derive(Debug, Default)]
pub struct InputCollector {
    active: HashSet<TouchId>,
    saw_touch: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: TouchId) -> bool {
        self.active.contains(&id)
    }

    pub fn collect(&mut self, events: &[Event], canvas: Rect, blocked: Option<Rect>) -> Vec<TouchSample> {
        let mut samples = Vec::new();
        for event in events {
            let sample = match *event {
                Event::Touch { id, phase, pos, .. } => {
                    self.saw_touch = true;
                    Some(TouchSample { id: id.into(), pos, phase: phase.into() })
                }
                _ if self.saw_touch => None,
                Event::PointerButton { pos, button: PointerButton::Primary, pressed, .. } => {
                    Some(TouchSample {
                        id: MOUSE_TOUCH_ID,
                        pos,
                        phase: if pressed { TouchPhase::Started } else { TouchPhase::Ended },
                    })
                }
                Event::PointerMoved(pos) if self.is_active(MOUSE_TOUCH_ID) => Some(TouchSample {
                    id: MOUSE_TOUCH_ID,
                    pos,
                    phase: TouchPhase::Moved,
                }),
                Event::PointerGone if self.is_active(MOUSE_TOUCH_ID) => Some(TouchSample {
                    id: MOUSE_TOUCH_ID,
                    pos: Pos2::ZERO,
                    phase: TouchPhase::Cancelled,
                }),
                _ => None,
            };

            if let Some(sample) = sample.and_then(|sample| self.admit(sample, canvas, blocked)) {
                samples.push(sample);
            }
        }
        samples
    }

    /// Keep only samples belonging to touches that started on the canvas.
    fn admit(&mut self, sample: TouchSample, canvas: Rect, blocked: Option<Rect>) -> Option<TouchSample> {
        match sample.phase {
            TouchPhase::Started => {
                let on_canvas = canvas.contains(sample.pos)
                    && !blocked.is_some_and(|rect| rect.contains(sample.pos));
                if !on_canvas || !self.active.insert(sample.id) {
                    return None;
                }
            }
            TouchPhase::Moved => {
                if !self.active.contains(&sample.id) {
                    return None;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if !self.active.remove(&sample.id) {
                    return None;
                }
            }
        }
        Some(sample)
    }
}
