//! Sampling engine
//!
//! Acquires a fixed number of readings evenly spaced across the travel
//! range. Sample `i` of `n` is taken at `round(i * travel_range_steps / n)`.
//! Targets only ever increase, so the sweep never reverses mid-way.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::config::TravelConfig;
use crate::error::ScanError;
use crate::motion::MotionController;
use crate::traits::{AnalogSensor, ReferenceSensor, StepperDriver};

/// Readings in acquisition order, at most `N` of them
pub type ReadingSequence<const N: usize> = Vec<u16, N>;

/// Position of sample `index` out of `sample_count`, rounded half up
///
/// `sample_count` must be non-zero.
pub fn target_position(travel_range_steps: u32, sample_count: usize, index: usize) -> i32 {
    let range = u64::from(travel_range_steps);
    let count = sample_count as u64;
    let index = index as u64;
    ((2 * index * range + count) / (2 * count)) as i32
}

/// Iterator over the sweep targets
#[derive(Debug, Clone)]
pub struct TargetPositions {
    travel_range_steps: u32,
    sample_count: usize,
    next: usize,
}

impl TargetPositions {
    /// Targets for `sample_count` samples across `travel`
    pub fn new(travel: &TravelConfig, sample_count: usize) -> Self {
        Self {
            travel_range_steps: travel.travel_range_steps,
            sample_count,
            next: 0,
        }
    }
}

impl Iterator for TargetPositions {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.next >= self.sample_count {
            return None;
        }
        let target = target_position(self.travel_range_steps, self.sample_count, self.next);
        self.next += 1;
        Some(target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TargetPositions {}

/// Sweeps the axis and reads the analog channel at every stop
pub struct SamplingEngine<A> {
    sensor: A,
}

impl<A: AnalogSensor> SamplingEngine<A> {
    /// Create a sampling engine around an analog channel
    pub fn new(sensor: A) -> Self {
        Self { sensor }
    }

    /// Acquire `sample_count` readings across the travel range
    ///
    /// Fails with [`ScanError::NotHomed`] without moving if the axis has no
    /// reference. The motor ends at the last target.
    pub fn sweep<const N: usize, S, R, D>(
        &mut self,
        motion: &mut MotionController<S, R, D>,
        sample_count: usize,
    ) -> Result<ReadingSequence<N>, ScanError>
    where
        S: StepperDriver,
        R: ReferenceSensor,
        D: DelayNs,
    {
        if !motion.is_homed() {
            return Err(ScanError::NotHomed);
        }
        if sample_count > N {
            return Err(ScanError::OutOfRange);
        }

        let mut readings = ReadingSequence::new();
        for target in TargetPositions::new(motion.travel(), sample_count) {
            motion.step_to(target)?;
            let reading = self.sensor.read().map_err(|_| ScanError::SensorFault)?;
            readings.push(reading).map_err(|_| ScanError::OutOfRange)?;
        }

        Ok(readings)
    }

    /// Get the analog channel
    pub fn sensor(&self) -> &A {
        &self.sensor
    }
}
