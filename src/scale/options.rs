use num_traits::Float;

/// Iterator over `count` evenly spaced values from `min` to `max`, inclusive.
///
/// Values are computed from their index rather than by repeated addition, so
/// the last value is exactly `max`.
///
/// # Examples
///
/// ```
/// use glidar::scale::OptionIter;
///
/// let values: Vec<f64> = OptionIter::new(0.0, 100.0, 5).collect();
/// assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
///
/// assert_eq!(OptionIter::new(0.0, 100.0, 0).count(), 0);
/// assert_eq!(OptionIter::new(0.0, 100.0, 1).collect::<Vec<f64>>(), vec![0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct OptionIter<D> {
    min: D,
    max: D,
    count: usize,
    index: usize,
}

impl<D: Float> OptionIter<D> {
    pub fn new(min: D, max: D, count: usize) -> Self {
        Self {
            min,
            max,
            count,
            index: 0,
        }
    }

    fn value_at(&self, index: usize) -> Option<D> {
        if index == 0 {
            return Some(self.min);
        }
        let last = self.count - 1;
        if index == last {
            return Some(self.max);
        }
        let fraction = D::from(index)? / D::from(last)?;
        Some(self.min + (self.max - self.min) * fraction)
    }
}

impl<D: Float> Iterator for OptionIter<D> {
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let value = self.value_at(self.index);
        self.index += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_include_both_ends() {
        let values: Vec<f64> = OptionIter::new(-33.0, 103.0, 6).collect();

        assert_eq!(values.len(), 6);
        assert_eq!(values[0], -33.0);
        assert_eq!(values[5], 103.0);
    }

    #[test]
    fn test_options_are_sorted() {
        let values: Vec<f32> = OptionIter::new(0.0, 1.0, 11).collect();

        for i in 1..values.len() {
            assert!(values[i] > values[i - 1]);
        }
    }

    #[test]
    fn test_options_size_hint() {
        let mut iter = OptionIter::new(0.0f64, 10.0, 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}
