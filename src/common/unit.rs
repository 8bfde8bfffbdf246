//! Unit conversion utilities.
//!
//! Deck geometry is expressed in inches at the API surface and written to
//! DrawingML in EMUs (English Metric Units).

pub const EMUS_PER_INCH: i64 = 914_400;

#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inch(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// DrawingML run sizes (`sz`) are hundredths of a point.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}
