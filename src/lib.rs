#![cfg_attr(feature = "std", doc = include_str!("../README.md"))]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![warn(rust_2024_compatibility)]
#![allow(edition_2024_expr_fragment_specifier)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

pub mod coerce;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod resolve;
pub mod sum;
pub mod tag;
pub mod variant;
pub mod visit;

pub use self::{
    coerce::Coerce,
    error::AccessError,
    resolve::{Resolve, Resolver},
    sum::Sum,
    variant::{visit, Variant},
    visit::{Visitor, VisitorMut},
};

#[cfg(feature = "std")]
pub use self::error::ReadError;

/// A growable list of variants over the type list `S`.
#[cfg(feature = "std")]
pub type HVec<S> = std::vec::Vec<Variant<S>>;

/// A fixed-size array of `N` variants over the type list `S`.
pub type HArray<S, const N: usize> = [Variant<S>; N];
