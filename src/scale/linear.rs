use super::{OptionIter, Scale};
use num_traits::Float;

/// Linear scale: affine mapping between a numeric domain and normalized `[0, 1]` range.
///
/// `Linear` is how a slider turns a position along its track into a value and
/// back. A fraction of `0.0` is the domain minimum, `1.0` the maximum.
///
/// # Type Parameters
///
/// - `D`: Domain type (the slider values, typically `f64`)
/// - `N`: Normalized type (typically `f32` or `f64`, represents `[0, 1]` range)
///
/// # Clamping
///
/// [`Scale::normalize`] does not clamp: out-of-range values map beyond `[0, 1]`.
/// Use [`Linear::normalize_clamped`] when the result positions something on a
/// track that must not overflow.
///
/// # Examples
///
/// ```rust
/// use glidar::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
///
/// // Normalize to [0, 1]
/// assert_eq!(scale.normalize(&0.0), 0.0);
/// assert_eq!(scale.normalize(&50.0), 0.5);
/// assert_eq!(scale.normalize(&100.0), 1.0);
///
/// // Denormalize back to domain
/// assert_eq!(scale.denormalize(0.25), 25.0);
/// ```
///
/// ## Negative Domains
///
/// ```rust
/// use glidar::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(-100.0, 100.0);
/// assert_eq!(scale.normalize(&0.0), 0.5);
/// assert_eq!(scale.denormalize(0.25), -50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Linear<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new linear scale with the given domain range.
    ///
    /// # Examples
    ///
    /// ```
    /// use glidar::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0);
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub const fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Normalizes `value` and clamps the result into `[0, 1]`.
    pub fn normalize_clamped(&self, value: &D) -> N {
        self.normalize(value).max(N::zero()).min(N::one())
    }

    /// Returns `count` evenly spaced domain values from `min` to `max`.
    pub fn options(&self, count: usize) -> OptionIter<D> {
        OptionIter::new(self.min, self.max, count)
    }
}

impl<D, N> Scale for Linear<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        let offset = *value - self.min;
        let offset_n: N = N::from(offset)?;
        let span_n: N = N::from(span)?;

        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let span = self.max - self.min;
        let span_n: N = N::from(span)?;
        let scaled = t * span_n;
        let scaled_d: D = D::from(scaled)?;
        Some(self.min + scaled_d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_normalize_f64() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        assert_eq!(scale.normalize(&0.0), 0.0);
        assert_eq!(scale.normalize(&50.0), 0.5);
        assert_eq!(scale.normalize(&100.0), 1.0);
        assert_eq!(scale.normalize(&25.0), 0.25);
    }

    #[test]
    fn test_linear_denormalize() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        assert_eq!(scale.denormalize(0.0), 0.0);
        assert_eq!(scale.denormalize(0.5), 50.0);
        assert_eq!(scale.denormalize(1.0), 100.0);
    }

    #[test]
    fn test_linear_negative_domain() {
        let scale = Linear::<f64, f64>::new(-33.0, 103.0);

        assert_eq!(scale.normalize(&-33.0), 0.0);
        assert_eq!(scale.normalize(&103.0), 1.0);
        assert_eq!(scale.denormalize(0.5), 35.0);
    }

    #[test]
    fn test_linear_zero_span_normalizes_to_zero() {
        let scale = Linear::<f64, f64>::new(5.0, 5.0);
        assert_eq!(scale.normalize(&5.0), 0.0);
        assert_eq!(scale.normalize(&50.0), 0.0);
    }

    #[test]
    fn test_linear_clamped() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        // Values outside domain are not clamped by default
        assert_eq!(scale.normalize(&150.0), 1.5);
        assert_eq!(scale.normalize_clamped(&150.0), 1.0);
        assert_eq!(scale.normalize_clamped(&-50.0), 0.0);
    }

    #[test]
    fn test_linear_mixed_types() {
        // Domain is f64, Normalized is f32
        let scale = Linear::<f64, f32>::new(0.0, 100.0);

        let normalized: f32 = scale.normalize(&50.0);
        assert_eq!(normalized, 0.5f32);

        let denormalized: f64 = scale.denormalize(0.5f32);
        assert_eq!(denormalized, 50.0);
    }

    #[test]
    fn test_linear_through_generic_scale_bound() {
        fn fraction<S: Scale>(scale: &S, value: S::Domain) -> S::Normalized {
            scale.normalize(&value)
        }

        let scale = Linear::<f64, f32>::new(0.0, 100.0);
        assert_eq!(fraction(&scale, 25.0), 0.25f32);
    }
}
