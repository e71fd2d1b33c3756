// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

use std::collections::VecDeque;

/// The last `capacity` samples, oldest first.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append and drop the oldest sample once over capacity.
    pub fn push(&mut self, value: f64) {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Contents right-padded with zeros to exactly `capacity` values.
    pub fn padded(&self) -> Vec<f64> {
        self.iter()
            .chain(std::iter::repeat(0.0))
            .take(self.capacity)
            .collect()
    }
}

/// Paired x/y data handed to the chart. Both sides always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    /// Flat zero line over `0..points`.
    pub fn zeros(points: usize) -> Self {
        Self {
            x: (0..points).map(|i| i as f64).collect(),
            y: vec![0.0; points],
        }
    }

    /// Replace y with the buffer's padded contents. The x axis is never touched.
    pub fn set_from(&mut self, buffer: &RollingBuffer) {
        self.y = buffer.padded();
        debug_assert_eq!(self.x.len(), self.y.len());
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let buf = RollingBuffer::new(50);
        assert!(buf.is_empty());
        assert_eq!(buf.padded(), vec![0.0; 50]);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut buf = RollingBuffer::new(50);
        for v in 1..=51 {
            buf.push(v as f64);
        }
        assert_eq!(buf.len(), 50);
        let expected: Vec<f64> = (2..=51).map(|v| v as f64).collect();
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buf = RollingBuffer::new(50);
        for v in 0..500 {
            buf.push(v as f64);
            assert!(buf.len() <= 50);
        }
    }

    #[test]
    fn padded_is_always_full_length() {
        let mut buf = RollingBuffer::new(50);
        for n in 0..=50 {
            let padded = buf.padded();
            assert_eq!(padded.len(), 50);
            assert_eq!(&padded[..n], buf.to_vec().as_slice());
            assert!(padded[n..].iter().all(|&v| v == 0.0));
            buf.push(n as f64 + 0.5);
        }
    }

    #[test]
    fn series_x_axis_is_fixed() {
        let mut series = Series::zeros(50);
        let x_before = series.x.clone();
        assert_eq!(x_before.first(), Some(&0.0));
        assert_eq!(x_before.last(), Some(&49.0));

        let mut buf = RollingBuffer::new(50);
        buf.push(3.0);
        buf.push(4.0);
        series.set_from(&buf);

        assert_eq!(series.x, x_before);
        assert_eq!(series.y.len(), 50);
        assert_eq!(&series.y[..3], &[3.0, 4.0, 0.0]);
        assert_eq!(series.points().nth(1), Some((1.0, 4.0)));
    }
}
