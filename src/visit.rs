//! Visitation of the active alternative.
//!
//! A visitor plays the role of a polymorphic function: it implements
//! [`Visitor<T, R>`] for every alternative type `T` of the variant it
//! visits, all with the same result type `R`. Usually this is a single
//! generic impl bounded by the capability the visitor needs.
//!
//! ```rust
//! use core::fmt::Display;
//! use evariant::{Variant, Visitor};
//!
//! struct Describe;
//!
//! impl<T: Display> Visitor<T, String> for Describe {
//!     fn visit(self, value: &T) -> String {
//!         format!("<{value}>")
//!     }
//! }
//!
//! let v: Variant![i32, String] = Variant::new(String::from("hello"));
//! assert_eq!(v.visit(Describe), "<hello>");
//! ```

use crate::sum::repr::{Nil, SumList};

/// A function applicable to a shared reference of type `T`.
pub trait Visitor<T, R> {
    fn visit(self, value: &T) -> R;
}

/// A function applicable to a mutable reference of type `T`.
pub trait VisitorMut<T, R> {
    fn visit_mut(self, value: &mut T) -> R;
}

/// Type lists every element of which can be visited by `F`.
pub trait SumVisit<F, R>: SumList {
    #[doc(hidden)]
    unsafe fn visit(this: &Self::Repr, tag: u8, visitor: F) -> R;
}

impl<F, R> SumVisit<F, R> for () {
    unsafe fn visit(_: &Nil, tag: u8, _: F) -> R {
        unreachable!("tag {tag} is out of range of the sum")
    }
}

impl<F, R, Head, Tail> SumVisit<F, R> for (Head, Tail)
where
    F: Visitor<Head, R>,
    Tail: SumVisit<F, R>,
{
    unsafe fn visit(this: &Self::Repr, tag: u8, visitor: F) -> R {
        match tag {
            0 => visitor.visit(unsafe { &*this.data }),
            _ => unsafe { Tail::visit(&this.next, tag - 1, visitor) },
        }
    }
}

/// Type lists every element of which can be mutably visited by `F`.
pub trait SumVisitMut<F, R>: SumList {
    #[doc(hidden)]
    unsafe fn visit_mut(this: &mut Self::Repr, tag: u8, visitor: F) -> R;
}

impl<F, R> SumVisitMut<F, R> for () {
    unsafe fn visit_mut(_: &mut Nil, tag: u8, _: F) -> R {
        unreachable!("tag {tag} is out of range of the sum")
    }
}

impl<F, R, Head, Tail> SumVisitMut<F, R> for (Head, Tail)
where
    F: VisitorMut<Head, R>,
    Tail: SumVisitMut<F, R>,
{
    unsafe fn visit_mut(this: &mut Self::Repr, tag: u8, visitor: F) -> R {
        match tag {
            0 => visitor.visit_mut(unsafe { &mut *this.data }),
            _ => unsafe { Tail::visit_mut(&mut this.next, tag - 1, visitor) },
        }
    }
}
