use egui::{Color32, Painter, Rect, Shape, Stroke};

use crate::board::RenderFrame;
use crate::config::RenderConfig;
use crate::line::LineSegment;

/// Draws a [`RenderFrame`] with egui.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the board into `rect`
    pub fn render(&self, painter: &Painter, rect: Rect, frame: &RenderFrame) {
        painter.extend(self.shapes(rect, frame));
    }

    /// Background first, then finished, in-progress and selected lines.
    pub fn shapes(&self, rect: Rect, frame: &RenderFrame) -> Vec<Shape> {
        let mut shapes = vec![Shape::rect_filled(rect, 0.0, self.config.background_color())];

        let finished = self.config.finished_color();
        for line in &frame.finished {
            self.stroke_line(&mut shapes, line, finished);
        }

        let in_progress = self.config.in_progress_color();
        for line in &frame.in_progress {
            self.stroke_line(&mut shapes, line, in_progress);
        }

        if let Some(line) = &frame.selected {
            self.stroke_line(&mut shapes, line, self.config.selected_color());
        }

        shapes
    }

    /// A thick line with round caps
    fn stroke_line(&self, shapes: &mut Vec<Shape>, line: &LineSegment, color: Color32) {
        let width = self.config.line_width;
        if !line.is_zero_length() {
            shapes.push(Shape::line_segment([line.begin, line.end], Stroke::new(width, color)));
        }
        shapes.push(Shape::circle_filled(line.begin, width / 2.0, color));
        if !line.is_zero_length() {
            shapes.push(Shape::circle_filled(line.end, width / 2.0, color));
        }
    }
}
