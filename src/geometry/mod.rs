pub mod hit_testing;

pub use hit_testing::{line_near_point, sample_points};
