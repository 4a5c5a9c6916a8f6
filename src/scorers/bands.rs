//! Shared band-table primitives for the rubric
//!
//! A band table is an ordered list of `(threshold, points)` pairs checked
//! in declaration order; the first band the measured value satisfies wins.

/// Awards `points` when the measured value is at least `min`
#[derive(Debug, Clone, Copy)]
pub struct FloorBand {
    pub min: f64,
    pub points: u32,
}

/// First band whose `min` the value meets, else `fallback`
pub fn floor_points(bands: &[FloorBand], value: f64, fallback: u32) -> u32 {
    bands
        .iter()
        .find(|b| value >= b.min)
        .map(|b| b.points)
        .unwrap_or(fallback)
}

/// Awards `points` when the measured value is at most `max`
#[derive(Debug, Clone, Copy)]
pub struct CeilingBand {
    pub max: f64,
    pub points: u32,
}

/// First band whose `max` the value stays under, else `fallback`
pub fn ceiling_points(bands: &[CeilingBand], value: f64, fallback: u32) -> u32 {
    bands
        .iter()
        .find(|b| value <= b.max)
        .map(|b| b.points)
        .unwrap_or(fallback)
}
