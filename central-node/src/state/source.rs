use std::fmt::Debug;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::{LEVEL_EMPTY_CM, LEVEL_FULL_CM};

/// One raw measurement as it would come out of the ultrasonic sensor,
/// before clamping and rounding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawSample {
    /// The water level in centimeters, anywhere in the sensor range.
    pub base_cm: f64,
    /// Sensor jitter in centimeters, added on top of `base_cm`.
    pub jitter_cm: f64,
}

/// Something that produces raw water level samples, i.e. a stand-in for the
/// physical sensor.
pub trait ReadingSource: Debug + Send {
    fn next_sample(&mut self) -> RawSample;
}

/// Simulates a tank that fills and drains across the full sensor range,
/// with uniform jitter of at most `noise_cm` in either direction.
#[derive(Debug)]
pub struct RandomReadingSource {
    rng: SmallRng,
    noise_cm: f64,
}

impl RandomReadingSource {
    pub fn new(noise_cm: f64) -> RandomReadingSource {
        RandomReadingSource { rng: SmallRng::from_os_rng(), noise_cm }
    }

    pub fn from_seed(seed: u64, noise_cm: f64) -> RandomReadingSource {
        RandomReadingSource { rng: SmallRng::seed_from_u64(seed), noise_cm }
    }
}

impl ReadingSource for RandomReadingSource {
    fn next_sample(&mut self) -> RawSample {
        RawSample {
            base_cm: self.rng.random_range(LEVEL_FULL_CM..=LEVEL_EMPTY_CM),
            jitter_cm: self.rng.random_range(-self.noise_cm..=self.noise_cm),
        }
    }
}

/// Replays a fixed list of `(base_cm, jitter_cm)` samples, starting over
/// once the list is exhausted.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedReadingSource {
    samples: Vec<RawSample>,
    next: usize,
}

#[cfg(test)]
impl FixedReadingSource {
    pub fn new(samples: impl IntoIterator<Item = (f64, f64)>) -> FixedReadingSource {
        let samples: Vec<RawSample> = samples
            .into_iter()
            .map(|(base_cm, jitter_cm)| RawSample { base_cm, jitter_cm })
            .collect();
        assert!(!samples.is_empty(), "FixedReadingSource needs at least one sample");
        FixedReadingSource { samples, next: 0 }
    }
}

#[cfg(test)]
impl ReadingSource for FixedReadingSource {
    fn next_sample(&mut self) -> RawSample {
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_samples_stay_in_range() {
        let mut source = RandomReadingSource::from_seed(42, 0.5);
        for _ in 0..10_000 {
            let RawSample { base_cm, jitter_cm } = source.next_sample();
            assert!((LEVEL_FULL_CM..=LEVEL_EMPTY_CM).contains(&base_cm), "base {base_cm}");
            assert!((-0.5..=0.5).contains(&jitter_cm), "jitter {jitter_cm}");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomReadingSource::from_seed(7, 0.5);
        let mut b = RandomReadingSource::from_seed(7, 0.5);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn zero_noise_means_no_jitter() {
        let mut source = RandomReadingSource::from_seed(3, 0.0);
        for _ in 0..100 {
            assert_eq!(source.next_sample().jitter_cm, 0.0);
        }
    }

    #[test]
    fn fixed_source_cycles() {
        let mut source = FixedReadingSource::new([(30.0, 0.1), (150.0, -0.2)]);
        assert_eq!(source.next_sample(), RawSample { base_cm: 30.0, jitter_cm: 0.1 });
        assert_eq!(source.next_sample(), RawSample { base_cm: 150.0, jitter_cm: -0.2 });
        assert_eq!(source.next_sample(), RawSample { base_cm: 30.0, jitter_cm: 0.1 });
    }
}
