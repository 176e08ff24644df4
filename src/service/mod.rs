pub mod points;

pub use points::{compute_points, score_breakdown};
