//! Scalar types that can be used as the priority of a queue entry.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric scalar with a total order.
///
/// Integers use their natural order. Floats use the IEEE 754 `totalOrder` predicate, which places
/// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`. This makes every priority comparable,
/// which the heap relies upon.
pub trait Priority: Copy + Debug {
    fn total_cmp(&self, other: &Self) -> Ordering;

    #[inline]
    fn total_eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

macro_rules! impl_priority_ord {
    ($($t:ident)*) => {
        $(
        impl Priority for $t {
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering { Ord::cmp(self, other) }
        }
        )*
    }
}

macro_rules! impl_priority_float {
    ($($t:ident)*) => {
        $(
        impl Priority for $t {
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering { $t::total_cmp(self, other) }
        }
        )*
    }
}

impl_priority_ord!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_priority_float!(f32 f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer_order() {
        assert_eq!(Priority::total_cmp(&-1i64, &5), Ordering::Less);
        assert_eq!(Priority::total_cmp(&7u8, &7), Ordering::Equal);
        assert!(Priority::total_eq(&1000i32, &1000));
        assert!(!Priority::total_eq(&1000i32, &-1000));
    }

    #[test]
    fn test_float_order() {
        assert_eq!(Priority::total_cmp(&-0.0f64, &0.0), Ordering::Less);
        assert_eq!(Priority::total_cmp(&f64::INFINITY, &f64::NAN), Ordering::Less);
        assert_eq!(Priority::total_cmp(&2.5f32, &-2.5), Ordering::Greater);
        assert!(Priority::total_eq(&f64::NAN, &f64::NAN));
    }
}
