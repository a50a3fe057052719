//! Input normalization and the closed-form banked-curve solver.
//!
//! Every function in this crate is pure and total: arbitrary input in,
//! finite output out, no errors and no panics. Degenerate geometry is
//! reported through sentinel values on the result record.

pub mod banked;
pub mod normalize;

pub use banked::{EPS, flat_road_max_speed, required_angle_deg, safe_speed_envelope, solve};
pub use normalize::{coerce_numeric, finite_or_zero, sanitize_config};
