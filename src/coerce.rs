//! Compile-time constructibility between value types.
//!
//! [`Coerce<T>`] answers two questions about a source type: whether a `T`
//! can be constructed from it at all ([`Coerce::COERCIBLE`], fixed by the
//! type signature), and how ([`Coerce::coerce`]). The conversion resolver
//! folds the first answer over a type list to decide, at compile time, which
//! alternatives of a [`Variant`](crate::Variant) can produce a `T`.
//!
//! Every `Clone` type coerces into itself, so converting a variant into one
//! of its own alternatives is always defined. Beyond identity, the
//! primitive scalars, `String`, `&'static str`, `Option<T>`, `Vec<T>` and
//! `VecDeque<T>` implement `Coerce` between each other:
//!
//! | from \ to           | numbers | `bool`   | `char`   | `String` | `&str` | containers |
//! |---------------------|---------|----------|----------|----------|--------|------------|
//! | numbers             | `as`    | non-zero | low byte | no       | no     | no         |
//! | `bool`              | 0 / 1   | identity | low byte | no       | no     | no         |
//! | `char`              | scalar  | non-NUL  | identity | no       | no     | no         |
//! | `String`            | no      | no       | no       | identity | no     | no         |
//! | `&'static str`      | no      | no       | no       | owned    | identity | no       |
//! | containers          | no      | no       | no       | no       | no     | identity   |
//!
//! Other types declare their coercions with the [`coerce!`](crate::coerce)
//! macro. `coerce!(MyType)` marks a type as [`Custom`], which makes every
//! built-in source above refuse to convert into it; the coercions out of
//! `MyType` are then declared one target at a time.
//!
//! Types from other crates cannot implement `Coerce` for targets they do
//! not own. Wrap them in a local newtype and declare the coercions of the
//! newtype instead.

/// Construction of a `T` from a borrowed `Self`.
pub trait Coerce<T> {
    /// Whether a `T` can be constructed from `Self`.
    const COERCIBLE: bool;

    /// Constructs a `T`, or returns `None` exactly when `COERCIBLE` is
    /// false.
    fn coerce(&self) -> Option<T>;
}

impl<T: Clone> Coerce<T> for T {
    const COERCIBLE: bool = true;

    #[inline]
    fn coerce(&self) -> Option<T> {
        Some(self.clone())
    }
}

/// A user type no built-in type can be converted into.
///
/// Implemented through [`coerce!`](crate::coerce).
pub trait Custom {}

macro_rules! coerce_impls {
    (@impl cast $src:ty => $dst:ty) => {
        impl Coerce<$dst> for $src {
            const COERCIBLE: bool = true;

            #[inline]
            fn coerce(&self) -> Option<$dst> {
                Some(*self as $dst)
            }
        }
    };
    (@impl (via $mid:ty) $src:ty => $dst:ty) => {
        impl Coerce<$dst> for $src {
            const COERCIBLE: bool = true;

            #[inline]
            fn coerce(&self) -> Option<$dst> {
                Some(*self as $mid as $dst)
            }
        }
    };
    (@impl (nonzero $zero:expr) $src:ty => $dst:ty) => {
        impl Coerce<$dst> for $src {
            const COERCIBLE: bool = true;

            #[inline]
            fn coerce(&self) -> Option<$dst> {
                Some(*self != $zero)
            }
        }
    };
    (@row $how:tt $src:ty => [$($dst:ty),* $(,)?]) => {
        $(coerce_impls!(@impl $how $src => $dst);)*
    };
    // Every ordered pair of distinct types in the list.
    (@cross $how:tt [$($done:ty),*] []) => {};
    (@cross $how:tt [$($done:ty),*] [$cur:ty $(, $rest:ty)* $(,)?]) => {
        $(
            coerce_impls!(@impl $how $cur => $done);
            coerce_impls!(@impl $how $done => $cur);
        )*
        coerce_impls!(@cross $how [$($done,)* $cur] [$($rest),*]);
    };
    ($how:tt [$($src:ty),* $(,)?] => $dst:tt) => {
        $(coerce_impls!(@row $how $src => $dst);)*
    };
}

macro_rules! refuse {
    (@one [$($g:ident),*] $src:ty => $dst:ty) => {
        impl<$($g),*> Coerce<$dst> for $src {
            const COERCIBLE: bool = false;

            #[inline]
            fn coerce(&self) -> Option<$dst> {
                None
            }
        }
    };
    (@row $gen:tt $src:ty => [$($dst:ty),* $(,)?]) => {
        $(refuse!(@one $gen $src => $dst);)*
    };
    (@custom [$($g:ident),*] $src:ty) => {
        impl<$($g,)* C: Custom> Coerce<C> for $src {
            const COERCIBLE: bool = false;

            #[inline]
            fn coerce(&self) -> Option<C> {
                None
            }
        }
    };
    (custom $gen:tt [$($src:ty),* $(,)?]) => {
        $(refuse!(@custom $gen $src);)*
    };
    ($gen:tt [$($src:ty),* $(,)?] => $dst:tt) => {
        $(refuse!(@row $gen $src => $dst);)*
    };
}

coerce_impls!(@cross cast [] [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
]);
coerce_impls!(cast [bool, char] => [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
]);
coerce_impls!((via u8) [bool] => [f32, f64]);
coerce_impls!((via u32) [char] => [f32, f64]);
coerce_impls!((via u8) [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
] => [char]);
coerce_impls!((nonzero 0) [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
] => [bool]);
coerce_impls!((nonzero 0.0) [f32, f64] => [bool]);
coerce_impls!((nonzero '\0') [char] => [bool]);

refuse!([] [&'static str] => [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
]);
refuse!([] [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
] => [&'static str]);

refuse!([T] [Option<T>] => [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    &'static str,
]);
refuse!([T] [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    &'static str,
] => [Option<T>]);

refuse!(custom [] [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    &'static str,
]);
refuse!(custom [T] [Option<T>]);

#[cfg(feature = "std")]
mod owned {
    use std::{collections::VecDeque, string::String, vec::Vec};

    use super::{Coerce, Custom};

    refuse!([] [String] => [
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
        &'static str,
    ]);
    refuse!([] [
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    ] => [String]);

    impl Coerce<String> for &'static str {
        const COERCIBLE: bool = true;

        #[inline]
        fn coerce(&self) -> Option<String> {
            Some(String::from(*self))
        }
    }

    refuse!([T] [Vec<T>, VecDeque<T>] => [
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
        &'static str, String,
    ]);
    refuse!([T] [
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
        &'static str, String,
    ] => [Vec<T>, VecDeque<T>]);
    refuse!([T] [String] => [Option<T>]);
    refuse!([T] [Option<T>] => [String]);

    refuse!([T, U] [Vec<T>] => [VecDeque<U>, Option<U>]);
    refuse!([T, U] [VecDeque<T>] => [Vec<U>, Option<U>]);
    refuse!([T, U] [Option<T>] => [Vec<U>, VecDeque<U>]);

    refuse!(custom [] [String]);
    refuse!(custom [T] [Vec<T>, VecDeque<T>]);
}
