use egui::Pos2;

use crate::config::BoardConfig;
use crate::line::LineSegment;

/// The points along `line` that are tested against a tap.
pub fn sample_points<'a>(
    line: &'a LineSegment,
    fractions: &'a [f32],
) -> impl Iterator<Item = Pos2> + 'a {
    fractions.iter().map(move |&t| line.point_at(t))
}

/// True when any sampled point of `line` lies strictly within the proximity
/// radius of `pos`.
pub fn line_near_point(line: &LineSegment, pos: Pos2, config: &BoardConfig) -> bool {
    sample_points(line, &config.sample_fractions)
        .any(|sample| sample.distance(pos) < config.proximity_radius)
}
