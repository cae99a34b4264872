use egui::{Pos2, Vec2};
use std::fmt;
use uuid::Uuid;

/// Identifies one touch contact for as long as it stays on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// The mouse is driven through the same path as touches, under this id.
pub const MOUSE_TOUCH_ID: TouchId = TouchId(u64::MAX);

impl From<egui::TouchId> for TouchId {
    fn from(id: egui::TouchId) -> Self {
        Self(id.0)
    }
}

impl fmt::Display for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == MOUSE_TOUCH_ID {
            write!(f, "mouse")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Identity of a finished line, assigned when the line is completed.
///
/// Two lines with the same endpoints still have distinct ids, so selection
/// and deletion never confuse one for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(Uuid);

impl SegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub begin: Pos2,
    pub end: Pos2,
}

impl LineSegment {
    pub fn new(begin: Pos2, end: Pos2) -> Self {
        Self { begin, end }
    }

    /// A zero-length line, as created when a touch first lands.
    pub fn at(point: Pos2) -> Self {
        Self::new(point, point)
    }

    /// Point at parametric fraction `t` (0.0 = begin, 1.0 = end).
    pub fn point_at(&self, t: f32) -> Pos2 {
        self.begin + (self.end - self.begin) * t
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.begin += delta;
        self.end += delta;
    }

    pub fn length(&self) -> f32 {
        self.begin.distance(self.end)
    }

    pub fn is_zero_length(&self) -> bool {
        self.begin == self.end
    }
}
