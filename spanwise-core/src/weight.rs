//! Totally ordered edge weights.
//!
//! Kruskal and Prim only need to compare and sum weights. [`Weight`] captures
//! exactly that for the primitive numeric types so callers can keep integer
//! weights exact and still use floats where they must.

use std::{cmp::Ordering, fmt};

/// Numeric edge weight with a total order.
///
/// Floating-point weights are only [`valid`](Weight::is_valid) when finite,
/// which is what makes [`Weight::total_cmp`] agree with the usual numeric
/// order for every accepted value.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use spanwise_core::Weight;
///
/// assert_eq!(2_i64.total_cmp(&3), Ordering::Less);
/// assert_eq!(1.5_f32.accumulate(2.0), Some(3.5));
/// assert_eq!(u32::MAX.accumulate(1), None);
/// assert!(!f64::NAN.is_valid());
/// ```
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq {
    /// The additive identity.
    fn zero() -> Self;

    /// Returns `self + other`, or `None` when the sum is not representable.
    ///
    /// Integers fail on overflow; floats fail when the sum is not finite.
    #[must_use]
    fn accumulate(self, other: Self) -> Option<Self>;

    /// Total order used to sort edges.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for values that cannot take part in a spanning forest.
    fn is_valid(&self) -> bool;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                #[rustfmt::skip]
                fn zero() -> Self { 0 }

                fn accumulate(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[rustfmt::skip]
                fn is_valid(&self) -> bool { true }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                #[rustfmt::skip]
                fn zero() -> Self { 0.0 }

                fn accumulate(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                fn is_valid(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

impl_integer_weight!(i32, i64, i128, u32, u64, usize);
impl_float_weight!(f32, f64);

/// Sums `weights`, failing only when the total itself is not representable.
///
/// Weights are summed in ascending order, drawing from the negative values
/// while the running sum is non-negative and from the rest otherwise. Once
/// one side runs out the partial sums move monotonically towards the total,
/// so no partial sum leaves the range of `W` unless the total does. The
/// result depends only on the multiset of weights.
pub(crate) fn checked_total<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    let mut sorted: Vec<W> = weights.into_iter().collect();
    sorted.sort_by(Weight::total_cmp);

    let zero = W::zero();
    let split = sorted.partition_point(is_negative);
    let (negatives, rest) = sorted.split_at(split);
    let mut negatives = negatives.iter().copied();
    let mut rest = rest.iter().copied();

    let mut total = zero;
    loop {
        let next = if is_negative(&total) {
            rest.next().or_else(|| negatives.next())
        } else {
            negatives.next().or_else(|| rest.next())
        };
        match next {
            Some(weight) => total = total.accumulate(weight)?,
            None => return Some(total),
        }
    }
}

fn is_negative<W: Weight>(weight: &W) -> bool {
    weight.total_cmp(&W::zero()) == Ordering::Less
}
