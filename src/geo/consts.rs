pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_SCORE: f64 = 1000.0;
/// Span used for accuracy when the country has no known area.
pub const DEFAULT_SPAN_KM: f64 = 1000.0;
pub const PERFECT_GUESS_KM: f64 = 1.0;
pub const CLOSE_GUESS_KM: f64 = 10.0;
pub const PERFECT_GUESS_BONUS: u64 = 200;
pub const CLOSE_GUESS_BONUS: u64 = 100;
