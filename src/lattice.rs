//! The step lattice: every legal slider value between the bounds.

use log::debug;

/// Upper bound on the number of points in a lattice.
pub const MAX_POINTS: usize = 100_000;

/// Ordered set of legal values from `min` to `max`, spaced by `step`.
///
/// The first point is always `min` and the last is always exactly `max`, even
/// when the span is not a whole multiple of the step. Every `min + k * step`
/// below `max` is a point; only one that rounds onto `max` (or onto the
/// previous point, at magnitudes where `step` is below float resolution) is
/// dropped, so the sequence stays strictly increasing.
///
/// # Examples
///
/// ```
/// use glidar::Lattice;
///
/// let lattice = Lattice::build(0.0, 10.0, 3.0);
/// assert_eq!(lattice.as_slice(), &[0.0, 3.0, 6.0, 9.0, 10.0]);
///
/// assert_eq!(lattice.nearest(4.4), 3.0);
/// assert_eq!(lattice.nearest(4.5), 3.0); // ties go to the lower point
/// assert_eq!(lattice.nearest(-7.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    points: Vec<f64>,
}

impl Lattice {
    /// Builds the lattice for already validated bounds and step.
    ///
    /// Expects `min < max` and `0 < step <= max - min`. A step too fine for
    /// [`MAX_POINTS`] truncates the lattice there, before `max`.
    pub fn build(min: f64, max: f64, step: f64) -> Self {
        // About one ulp at the bounds' magnitude: points this close to max are max.
        let tolerance = min.abs().max(max.abs()) * f64::EPSILON;
        let mut points = vec![min];

        for index in 1..MAX_POINTS - 1 {
            // Index based so long lattices don't accumulate rounding error.
            let value = min + step * index as f64;
            if value >= max - tolerance {
                break;
            }
            if value > points[points.len() - 1] {
                points.push(value);
            }
            if points.len() == MAX_POINTS - 1 {
                debug!("lattice [{min}, {max}] by {step} truncated at {MAX_POINTS} points");
                break;
            }
        }
        points.push(max);

        Self { points }
    }

    /// Returns the lattice point closest to `value`.
    ///
    /// Ties resolve to the lower point, the first one met scanning upward.
    pub fn nearest(&self, value: f64) -> f64 {
        let points = &self.points;
        let upper = points.partition_point(|&p| p < value);
        if upper == 0 {
            return points[0];
        }
        if upper == points.len() {
            return points[points.len() - 1];
        }

        let below = points[upper - 1];
        let above = points[upper];
        if (above - value).abs() < (value - below).abs() {
            above
        } else {
            below
        }
    }

    /// Position of an exact lattice point.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.points
            .binary_search_by(|p| p.total_cmp(&value))
            .ok()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> f64 {
        self.points[0]
    }

    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// The two lowest points.
    pub fn first_pair(&self) -> (f64, f64) {
        (self.points[0], self.points[1])
    }

    /// The two highest points.
    pub fn last_pair(&self) -> (f64, f64) {
        let n = self.points.len();
        (self.points[n - 2], self.points[n - 1])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.index_of(value).is_some()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let lattice = Lattice::build(0.0, 100.0, 10.0);

        assert_eq!(lattice.len(), 11);
        assert_eq!(lattice.first(), 0.0);
        assert_eq!(lattice.last(), 100.0);
        assert_eq!(lattice.get(4), Some(40.0));
    }

    #[test]
    fn test_last_point_is_max_when_span_is_not_a_multiple() {
        let lattice = Lattice::build(-33.0, 103.0, 5.0);

        assert_eq!(lattice.first(), -33.0);
        assert_eq!(lattice.last(), 103.0);
        assert_eq!(lattice.last_pair(), (102.0, 103.0));
    }

    #[test]
    fn test_point_close_to_max_is_kept() {
        let lattice = Lattice::build(0.0, 10.05, 1.0);
        assert_eq!(lattice.last_pair(), (10.0, 10.05));
        assert_eq!(lattice.len(), 12);

        let lattice = Lattice::build(0.0, 10.5, 10.0);
        assert_eq!(lattice.as_slice(), &[0.0, 10.0, 10.5]);
    }

    #[test]
    fn test_point_rounding_onto_max_is_dropped() {
        // 0.1 * 3 is 0.30000000000000004
        let lattice = Lattice::build(0.0, 0.3, 0.1);
        assert_eq!(lattice.as_slice(), &[0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_large_magnitude_stays_strictly_increasing() {
        let lattice = Lattice::build(1e17, 1e17 + 64.0, 1.0);

        assert_eq!(lattice.first(), 1e17);
        assert_eq!(lattice.last(), 1e17 + 64.0);
        for pair in lattice.as_slice().windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_point_count_is_capped() {
        let lattice = Lattice::build(0.0, 1.0, 1e-9);

        assert_eq!(lattice.len(), MAX_POINTS);
        assert_eq!(lattice.last(), 1.0);
    }

    #[test]
    fn test_single_step_span() {
        let lattice = Lattice::build(5.0, 6.0, 1.0);

        assert_eq!(lattice.as_slice(), &[5.0, 6.0]);
        assert_eq!(lattice.first_pair(), lattice.last_pair());
    }

    #[test]
    fn test_strictly_increasing() {
        let lattice = Lattice::build(-101.0, 100.0, 8.0);

        for pair in lattice.as_slice().windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_nearest_clamps_to_bounds() {
        let lattice = Lattice::build(0.0, 10.0, 1.0);

        assert_eq!(lattice.nearest(-3.0), 0.0);
        assert_eq!(lattice.nearest(42.0), 10.0);
        assert_eq!(lattice.nearest(7.0), 7.0);
        assert_eq!(lattice.nearest(7.6), 8.0);
    }

    #[test]
    fn test_nearest_tie_prefers_lower_point() {
        let lattice = Lattice::build(0.0, 100.0, 10.0);

        assert_eq!(lattice.nearest(45.0), 40.0);
        assert_eq!(lattice.nearest(45.000001), 50.0);
    }

    #[test]
    fn test_index_of() {
        let lattice = Lattice::build(0.0, 10.0, 2.5);

        assert_eq!(lattice.index_of(5.0), Some(2));
        assert_eq!(lattice.index_of(5.1), None);
        assert!(lattice.contains(10.0));
    }
}
