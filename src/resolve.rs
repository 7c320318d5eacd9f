//! The conversion resolver.
//!
//! Converting a [`Variant`](crate::Variant) into a target type `T` consults a
//! priority table of the alternatives that can construct `T`. The table is a
//! compile-time bitmask derived from [`Coerce::COERCIBLE`]; only the choice
//! among its entries depends on which alternative is active at run time.
//!
//! Priority runs from the last alternative down to the first. Alternative 0
//! is the terminal entry; when it cannot produce the value either, the
//! caller decides between `T::default()` and an access failure.

use core::{iter::FusedIterator, marker::PhantomData};

use crate::{
    coerce::Coerce,
    sum::{
        repr::{Nil, SumList},
        Sum,
    },
    tag::Tag,
};

/// Type lists whose alternatives can be tried as sources of a `T`.
pub trait Resolve<T>: SumList {
    /// Bit `i` is set when alternative `i` can construct a `T`.
    #[doc(hidden)]
    const ELIGIBLE: u64;

    #[doc(hidden)]
    unsafe fn coerce_at(this: &Self::Repr, tag: u8) -> Option<T>;
}

impl<T> Resolve<T> for () {
    const ELIGIBLE: u64 = 0;

    unsafe fn coerce_at(_: &Nil, tag: u8) -> Option<T> {
        unreachable!("tag {tag} is out of range of the sum")
    }
}

impl<T, Head, Tail> Resolve<T> for (Head, Tail)
where
    Head: Coerce<T>,
    Tail: Resolve<T>,
{
    const ELIGIBLE: u64 = (<Head as Coerce<T>>::COERCIBLE as u64) | (Tail::ELIGIBLE << 1);

    unsafe fn coerce_at(this: &Self::Repr, tag: u8) -> Option<T> {
        match tag {
            0 => <Head as Coerce<T>>::coerce(unsafe { &this.data }),
            _ => unsafe { Tail::coerce_at(&this.next, tag - 1) },
        }
    }
}

/// A stateless conversion strategy from the alternatives of `S` to `T`.
///
/// # Examples
///
/// ```rust
/// use evariant::{Resolver, Sum, T};
///
/// type L = T![i32, &'static str, f64];
///
/// assert_eq!(Resolver::<f32, L>::ELIGIBLE, 0b101);
/// assert_eq!(Resolver::<f32, L>::new().priority().collect::<Vec<_>>(), [2, 0]);
///
/// let sum: Sum<L> = Sum::new(2.5);
/// assert_eq!(Resolver::<f32, L>::new().resolve(&sum), Some(2.5));
/// ```
pub struct Resolver<T, S>(PhantomData<fn(&S) -> T>);

impl<T, S: Resolve<T>> Resolver<T, S> {
    /// Bit `i` is set when alternative `i` can construct a `T`.
    pub const ELIGIBLE: u64 = {
        assert!(
            <S::Count as Tag>::INDEX <= 64,
            "conversion is supported for at most 64 alternatives"
        );
        S::ELIGIBLE
    };

    /// Whether any alternative can construct a `T`.
    pub const ANY: bool = Self::ELIGIBLE != 0;

    pub const fn new() -> Self {
        Resolver(PhantomData)
    }

    /// Whether the alternative at `index` can construct a `T`.
    pub const fn can_resolve_from(index: usize) -> bool {
        index < 64 && Self::ELIGIBLE & (1 << index) != 0
    }

    /// The eligible alternative indices in the order they are tried.
    pub fn priority(&self) -> Priority {
        Priority {
            remaining: Self::ELIGIBLE,
        }
    }

    /// Converts the active alternative of `sum`, if it is eligible.
    pub fn resolve(&self, sum: &Sum<S>) -> Option<T> {
        if !Self::can_resolve_from(sum.index()) {
            return None;
        }
        unsafe { S::coerce_at(&sum.data, sum.tag) }
    }
}

impl<T, S: Resolve<T>> Default for Resolver<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for Resolver<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for Resolver<T, S> {}

/// Iterator over eligible alternative indices, highest index first.
#[derive(Debug, Clone)]
pub struct Priority {
    remaining: u64,
}

impl Iterator for Priority {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = 63 - self.remaining.leading_zeros() as usize;
        self.remaining &= !(1 << index);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Priority {}

impl FusedIterator for Priority {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;
    use crate::T;

    type L = T![i32, f64, String];

    #[test]
    fn eligibility() {
        assert_eq!(Resolver::<f64, L>::ELIGIBLE, 0b011);
        assert_eq!(Resolver::<String, L>::ELIGIBLE, 0b100);
        assert!(Resolver::<char, L>::can_resolve_from(0));
        assert!(!Resolver::<char, L>::can_resolve_from(2));
        assert!(!Resolver::<char, L>::can_resolve_from(70));
        assert!(Resolver::<u8, L>::ANY);

        type Mixed = T![Vec<u8>, i16, Option<i16>];
        assert_eq!(Resolver::<i16, Mixed>::ELIGIBLE, 0b010);
        assert_eq!(Resolver::<Vec<u8>, Mixed>::ELIGIBLE, 0b001);
        assert_eq!(Resolver::<Option<i16>, Mixed>::ELIGIBLE, 0b100);
    }

    #[test]
    fn priority_descends() {
        let order: Vec<_> = Resolver::<i64, T![u8, String, char, f32]>::new()
            .priority()
            .collect();
        assert_eq!(order, [3, 2, 0]);

        let priority = Resolver::<String, L>::new().priority();
        assert_eq!(priority.len(), 1);
    }

    #[test]
    fn resolves_from_active() {
        let resolver = Resolver::<f64, L>::new();
        assert_eq!(resolver.resolve(&Sum::new(3)), Some(3.0));
        assert_eq!(resolver.resolve(&Sum::new(0.25)), Some(0.25));
        assert_eq!(resolver.resolve(&Sum::new("x".to_string())), None);
    }

    #[test]
    fn identity_is_a_clone() {
        let sum: Sum<L> = Sum::new("same".to_string());
        assert_eq!(
            Resolver::<String, L>::new().resolve(&sum).as_deref(),
            Some("same")
        );
    }
}
