use egui::Pos2;
use log::{debug, info};
use std::collections::BTreeMap;

use super::state::{TouchPhase, TouchSample};
use crate::config::GestureConfig;
use crate::event::BoardEvent;
use crate::line::TouchId;

#[derive(Debug, Clone, Copy)]
struct TrackedTouch {
    start_pos: Pos2,
    start_time: f64,
    last_pos: Pos2,
    /// Moved beyond the tap slop at some point
    moved_far: bool,
    /// Still reported to the board as a drawing touch
    drawing: bool,
    /// This touch triggered the active long press
    long_press: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingTap {
    pos: Pos2,
    time: f64,
}

/// Turns raw touch samples into board events.
///
/// Raw touches are passed through as drawing events unless a gesture claims
/// them. Taps and long presses cancel their touch so they don't leave a line
/// behind. Pan runs alongside drawing and reports per-sample increments.
/// A single tap is held back until the double-tap window has passed, so call
/// [`GestureRecognizer::update`] every frame.
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    touches: BTreeMap<TouchId, TrackedTouch>,
    primary: Option<TouchId>,
    pan_anchor: Option<Pos2>,
    pending_tap: Option<PendingTap>,
    long_press_active: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            touches: BTreeMap::new(),
            primary: None,
            pan_anchor: None,
            pending_tap: None,
            long_press_active: false,
        }
    }

    /// Number of touches currently on the surface
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// No touch is down and no tap is waiting to resolve
    pub fn is_idle(&self) -> bool {
        self.touches.is_empty() && self.pending_tap.is_none()
    }

    /// Fire time-based gestures: expired single taps and long presses.
    pub fn update(&mut self, time: f64) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        if let Some(tap) = self.pending_tap {
            if time - tap.time > self.config.multi_tap_time {
                info!("Recognized tap at {:?}", tap.pos);
                events.push(BoardEvent::SingleTap { point: tap.pos });
                self.pending_tap = None;
            }
        }

        if !self.long_press_active {
            let long_press_time = self.config.long_press_time;
            let pressed = self.touches.iter_mut().find(|(_, touch)| {
                !touch.moved_far && time - touch.start_time >= long_press_time
            });
            if let Some((&id, touch)) = pressed {
                info!("Recognized long press at {:?}", touch.last_pos);
                touch.long_press = true;
                if touch.drawing {
                    touch.drawing = false;
                    events.push(BoardEvent::TouchCancelled { id });
                }
                events.push(BoardEvent::LongPressBegan { point: touch.last_pos });
                self.long_press_active = true;
            }
        }

        events
    }

    /// Feed one raw touch sample taken at `time` (seconds, monotonic).
    pub fn process(&mut self, sample: TouchSample, time: f64) -> Vec<BoardEvent> {
        let mut events = self.update(time);
        let TouchSample { id, pos, phase } = sample;

        match phase {
            TouchPhase::Started => self.touch_started(id, pos, time, &mut events),
            TouchPhase::Moved => self.touch_moved(id, pos, &mut events),
            TouchPhase::Ended => self.touch_ended(id, pos, time, &mut events),
            TouchPhase::Cancelled => self.touch_cancelled(id, &mut events),
        }

        events
    }

    fn touch_started(&mut self, id: TouchId, pos: Pos2, time: f64, events: &mut Vec<BoardEvent>) {
        self.touches.insert(
            id,
            TrackedTouch {
                start_pos: pos,
                start_time: time,
                last_pos: pos,
                moved_far: false,
                drawing: true,
                long_press: false,
            },
        );
        if self.primary.is_none() {
            self.primary = Some(id);
            self.pan_anchor = Some(pos);
        }
        events.push(BoardEvent::TouchBegan { id, point: pos });
    }

    fn touch_moved(&mut self, id: TouchId, pos: Pos2, events: &mut Vec<BoardEvent>) {
        let Some(touch) = self.touches.get_mut(&id) else {
            return;
        };
        touch.last_pos = pos;
        if touch.start_pos.distance(pos) > self.config.tap_slop {
            touch.moved_far = true;
        }
        if touch.drawing {
            events.push(BoardEvent::TouchMoved { id, point: pos });
        }

        if self.primary == Some(id) {
            if let Some(anchor) = self.pan_anchor {
                let delta = pos - anchor;
                if delta.length() >= self.config.min_pan_distance {
                    events.push(BoardEvent::Pan { delta });
                    self.pan_anchor = Some(pos);
                }
            }
        }
    }

    fn touch_ended(&mut self, id: TouchId, pos: Pos2, time: f64, events: &mut Vec<BoardEvent>) {
        let Some(touch) = self.release(id) else {
            return;
        };

        if touch.long_press {
            self.long_press_active = false;
            events.push(BoardEvent::LongPressEnded);
            return;
        }

        let is_tap = !touch.moved_far && time - touch.start_time <= self.config.tap_max_duration;
        if !is_tap {
            if touch.drawing {
                events.push(BoardEvent::TouchEnded { id });
            }
            return;
        }

        if touch.drawing {
            events.push(BoardEvent::TouchCancelled { id });
        }
        match self.pending_tap.take() {
            Some(previous)
                if time - previous.time <= self.config.multi_tap_time
                    && previous.pos.distance(pos) <= self.config.tap_slop * 2.0 =>
            {
                info!("Recognized double tap at {pos:?}");
                events.push(BoardEvent::DoubleTap { point: pos });
            }
            previous => {
                // A tap somewhere else resolves the earlier one as a single tap
                if let Some(previous) = previous {
                    events.push(BoardEvent::SingleTap { point: previous.pos });
                }
                debug!("Tap at {pos:?} waiting for a possible second tap");
                self.pending_tap = Some(PendingTap { pos, time });
            }
        }
    }

    fn touch_cancelled(&mut self, id: TouchId, events: &mut Vec<BoardEvent>) {
        let Some(touch) = self.release(id) else {
            return;
        };
        if touch.long_press {
            self.long_press_active = false;
            events.push(BoardEvent::LongPressEnded);
        } else if touch.drawing {
            events.push(BoardEvent::TouchCancelled { id });
        }
    }

    fn release(&mut self, id: TouchId) -> Option<TrackedTouch> {
        let touch = self.touches.remove(&id)?;
        if self.primary == Some(id) {
            // Hand panning over to the earliest remaining touch
            let next = self.touches.iter().next().map(|(&next_id, touch)| (next_id, touch.last_pos));
            self.primary = next.map(|(next_id, _)| next_id);
            self.pan_anchor = next.map(|(_, pos)| pos);
        }
        Some(touch)
    }
}
