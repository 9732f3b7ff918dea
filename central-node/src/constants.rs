pub const DEVICE_ID: &str = "ESP32-TANK-A1";

/// Sensor reading when the tank is full (the sensor is mounted upside down).
pub const LEVEL_FULL_CM: f64 = 20.0;
/// Sensor reading when the tank is empty.
pub const LEVEL_EMPTY_CM: f64 = 190.0;
pub const TANK_FULL_SCALE_ML: f64 = 1000.0;

pub const DEFAULT_NOISE_CM: f64 = 0.5;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
