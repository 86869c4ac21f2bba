use consts::{
    CLOSE_GUESS_BONUS, CLOSE_GUESS_KM, DEFAULT_SPAN_KM, EARTH_RADIUS_KM, MAX_SCORE,
    PERFECT_GUESS_BONUS, PERFECT_GUESS_KM,
};

pub use areas::CountryAreas;
pub use models::Coordinate;

pub mod areas;
pub mod consts;
pub mod models;

/// Great-circle distance in kilometers (haversine).
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Score in `[0, 1000]`, relative to the size of `country` when its area is
/// known and on a fixed absolute schedule otherwise.
pub fn score(distance_km: f64, country: &str, areas: &CountryAreas) -> u64 {
    let raw = match areas.span_km(country) {
        Some(span) => MAX_SCORE * (1.0 - distance_km / span),
        None => fallback_score(distance_km),
    };
    raw.clamp(0.0, MAX_SCORE).round() as u64
}

fn fallback_score(distance_km: f64) -> f64 {
    if distance_km < 1.0 {
        MAX_SCORE
    } else if distance_km < 10.0 {
        1000.0 - 50.0 * distance_km
    } else if distance_km < 100.0 {
        500.0 - 5.0 * (distance_km - 10.0)
    } else if distance_km < 1000.0 {
        100.0 - 0.1 * (distance_km - 100.0)
    } else {
        0.0
    }
}

/// Closeness percentage for display, rounded to one decimal place.
pub fn accuracy_pct(distance_km: f64, country: &str, areas: &CountryAreas) -> f64 {
    let span = areas.span_km(country).unwrap_or(DEFAULT_SPAN_KM);
    let accuracy = (100.0 - 100.0 * distance_km / span).max(0.0);
    (accuracy * 10.0).round() / 10.0
}

pub fn bonus(distance_km: f64) -> u64 {
    if distance_km < PERFECT_GUESS_KM {
        PERFECT_GUESS_BONUS
    } else if distance_km < CLOSE_GUESS_KM {
        CLOSE_GUESS_BONUS
    } else {
        0
    }
}
