//! Type-level indices naming the position of an alternative in a type list.
//!
//! Indices are Peano numbers: [`UTerm`] is zero and [`UInt<U>`] is the
//! successor of `U`. The aliases [`U0`] to [`U15`] cover the common cases;
//! deeper positions are spelled out by nesting `UInt`.

use core::marker::PhantomData;

/// The index zero.
pub struct UTerm;

/// The index following `U`.
pub struct UInt<U>(PhantomData<U>);

/// A type-level index.
///
/// The runtime tag of a [`Sum`](crate::Sum) is a `u8`, so a list holds at
/// most 255 alternatives; a deeper index fails const evaluation.
pub trait Tag {
    /// The index as stored in the runtime tag.
    const VALUE: u8;

    /// The index as a position.
    const INDEX: usize = Self::VALUE as usize;
}

impl Tag for UTerm {
    const VALUE: u8 = 0;
}

impl<U: Tag> Tag for UInt<U> {
    const VALUE: u8 = match U::VALUE.checked_add(1) {
        Some(value) => value,
        None => panic!("type-level index exceeds the range of the tag"),
    };
}

macro_rules! aliases {
    ($first:ident $(, $next:ident)* $(,)?) => {
        pub type $first = UTerm;
        aliases!(@succ $first $(, $next)*);
    };
    (@succ $prev:ident, $name:ident $(, $rest:ident)*) => {
        pub type $name = UInt<$prev>;
        aliases!(@succ $name $(, $rest)*);
    };
    (@succ $last:ident) => {};
}

aliases!(U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, U13, U14, U15);
