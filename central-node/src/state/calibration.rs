use crate::constants::{LEVEL_EMPTY_CM, LEVEL_FULL_CM, TANK_FULL_SCALE_ML};

// Line through the anchors (LEVEL_FULL_CM, TANK_FULL_SCALE_ML) and (LEVEL_EMPTY_CM, 0 ml).
const SLOPE_ML_PER_CM: f64 = -TANK_FULL_SCALE_ML / (LEVEL_EMPTY_CM - LEVEL_FULL_CM);
const INTERCEPT_ML: f64 = TANK_FULL_SCALE_ML - SLOPE_ML_PER_CM * LEVEL_FULL_CM;

/// Converts a raw sensor reading into the water available in the tank, in liters.
///
/// Readings outside of the calibrated range saturate: anything above the full
/// mark (i.e. below [LEVEL_FULL_CM]) is `1.0`, anything past the empty mark is `0.0`.
pub fn volume_liters(reading_cm: f64) -> f64 {
    // not mul_add: the separate rounding keeps both anchors exact
    let volume_ml = SLOPE_ML_PER_CM * reading_cm + INTERCEPT_ML;
    volume_ml.clamp(0.0, TANK_FULL_SCALE_ML) / TANK_FULL_SCALE_ML
}

/// Rounds to 2 decimal places based on the exact binary value, ties to even.
///
/// `(value * 100.0).round()` is off by one hundredth for values such as
/// 0.865, whose product with 100 rounds up to an exact half.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
