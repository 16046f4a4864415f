//! Sanitization of raw ranges coming from callers.

use crate::error::BadInput;
use crate::interval::Interval;

/// A primitive number accepted as a raw range bound.
///
/// Floating point bounds are rounded to the nearest integer, halves rounding up.
pub trait Bound: Copy {
    /// Convert into an integer bound, `Err` if the value is not a usable number.
    fn to_bound(self) -> Result<i64, BadInput>;
}

macro_rules! impl_bound_lossless {
    ($($t:ty),*) => {
        $(
            impl Bound for $t {
                #[inline(always)]
                fn to_bound(self) -> Result<i64, BadInput> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_bound_checked {
    ($($t:ty),*) => {
        $(
            impl Bound for $t {
                #[inline(always)]
                fn to_bound(self) -> Result<i64, BadInput> {
                    i64::try_from(self).map_err(|_| BadInput::OutOfRange)
                }
            }
        )*
    };
}

impl_bound_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_bound_checked!(u64, isize, usize);

impl Bound for f64 {
    #[inline]
    fn to_bound(self) -> Result<i64, BadInput> {
        if !self.is_finite() {
            return Err(BadInput::NonFinite);
        }
        let floor = self.floor();
        let rounded = if self - floor >= 0.5 { floor + 1.0 } else { floor };
        // 2^63 is exact in f64, i64::MAX is not
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if (-LIMIT..LIMIT).contains(&rounded) {
            Ok(rounded as i64)
        } else {
            Err(BadInput::OutOfRange)
        }
    }
}

impl Bound for f32 {
    #[inline]
    fn to_bound(self) -> Result<i64, BadInput> {
        f64::from(self).to_bound()
    }
}

/// Turn a raw range into an ascending integer pair.
///
/// Returns `Ok(None)` for a pair that rounds to an empty range.
pub(crate) fn sanitize<N: Bound>(range: &[N]) -> Result<Option<Interval>, BadInput> {
    let [a, b] = range else {
        return Err(BadInput::Arity { len: range.len() });
    };
    let (a, b) = (a.to_bound()?, b.to_bound()?);
    let (low, high) = if b < a { (b, a) } else { (a, b) };
    Ok(Interval::try_new(low, high))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reversed_pair_is_swapped() {
        assert_eq!(sanitize(&[20, -50]), Ok(Some(Interval::new(-50, 20))));
    }

    #[test]
    fn fractions_are_rounded() {
        assert_eq!(sanitize(&[2.2, 9.11]), Ok(Some(Interval::new(2, 9))));
        assert_eq!(sanitize(&[2.5, -2.5]), Ok(Some(Interval::new(-2, 3))));
        assert_eq!(sanitize(&[0.499_999_999_999_999_94_f64, 1.0]), Ok(Some(Interval::new(0, 1))));
        assert_eq!(sanitize(&[1.5_f32, 7.49_f32]), Ok(Some(Interval::new(2, 7))));
    }

    #[test]
    fn empty_pair_is_none() {
        assert_eq!(sanitize(&[20, 20]), Ok(None));
        assert_eq!(sanitize(&[10.4, 9.6]), Ok(None));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(sanitize(&[1, 2, 3, 4]), Err(BadInput::Arity { len: 4 }));
        assert_eq!(sanitize(&[1]), Err(BadInput::Arity { len: 1 }));
        assert_eq!(sanitize::<i32>(&[]), Err(BadInput::Arity { len: 0 }));
    }

    #[test]
    fn unusable_numbers_are_rejected() {
        assert_eq!(sanitize(&[f64::NAN, 1.0]), Err(BadInput::NonFinite));
        assert_eq!(sanitize(&[0.0, f64::INFINITY]), Err(BadInput::NonFinite));
        assert_eq!(sanitize(&[0.0, 1e19]), Err(BadInput::OutOfRange));
        assert_eq!(sanitize(&[0, u64::MAX]), Err(BadInput::OutOfRange));
        assert_eq!(
            sanitize(&[i64::MIN, i64::MAX]),
            Ok(Some(Interval::new(i64::MIN, i64::MAX)))
        );
    }
}
