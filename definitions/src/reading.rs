use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// The identifier of the device that produced the reading.
    pub device_id: String,
    /// Seconds since the Unix epoch at the moment the reading was produced.
    pub timestamp: u64,
    /// The raw distance between the sensor and the water surface, in centimeters.
    /// The sensor is mounted on the lid pointing down, so 20 cm means the tank
    /// is full and 190 cm means the tank is empty.
    pub water_level_cm: f64,
    /// How much water is in the tank, in liters (between 0.0 and 1.0),
    /// rounded to 2 decimal places.
    pub water_available_liters: f64,
}
