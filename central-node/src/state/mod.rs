pub mod calibration;
pub mod source;

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{SystemTime, UNIX_EPOCH},
};

use definitions::SensorReading;

use crate::{
    constants::{DEVICE_ID, LEVEL_EMPTY_CM, LEVEL_FULL_CM},
    state::{
        calibration::{round_to_hundredths, volume_liters},
        source::{RawSample, ReadingSource},
    },
};

#[derive(Debug)]
struct Store {
    current: SensorReading,
    source: Box<dyn ReadingSource>,
}

/// Owns the current reading of the tank. Clones share the same reading.
#[derive(Debug, Clone)]
pub struct StateHandler {
    store: Arc<Mutex<Store>>,
}

fn acquire(store: &Arc<Mutex<Store>>) -> MutexGuard<'_, Store> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Turns a raw sample into the level that gets stored: jitter can't push the
/// level outside of the sensor range, and the result is rounded afterwards.
pub fn simulated_level_cm(sample: RawSample) -> f64 {
    let level_cm = (sample.base_cm + sample.jitter_cm).clamp(LEVEL_FULL_CM, LEVEL_EMPTY_CM);
    round_to_hundredths(level_cm)
}

/// Builds a reading for a level that was already clamped and rounded.
///
/// Note that the stored liters are rounded as well, not only the JSON
/// returned to clients, so later reads see the rounded value too.
pub fn reading_for_level(level_cm: f64, timestamp: u64) -> SensorReading {
    SensorReading {
        device_id: DEVICE_ID.to_string(),
        timestamp,
        water_level_cm: level_cm,
        water_available_liters: round_to_hundredths(volume_liters(level_cm)),
    }
}

impl StateHandler {
    /// Starts with an empty tank.
    pub fn new(source: impl ReadingSource + 'static) -> StateHandler {
        StateHandler {
            store: Arc::new(Mutex::new(Store {
                current: reading_for_level(LEVEL_EMPTY_CM, now_epoch_secs()),
                source: Box::new(source),
            })),
        }
    }

    pub fn get_current_reading(&self) -> SensorReading {
        acquire(&self.store).current.clone()
    }

    /// Simulates a new sensor reading and makes it the current one.
    ///
    /// Sampling and replacement happen under the same lock, so concurrent
    /// callers are serialized and readers never see half of an update.
    pub fn generate_new_reading(&self) -> SensorReading {
        let mut store = acquire(&self.store);
        let sample = store.source.next_sample();
        let reading = reading_for_level(simulated_level_cm(sample), now_epoch_secs());
        store.current = reading.clone();
        drop(store);

        log::debug!("Simulated new data: {reading:?}");
        reading
    }
}
