//! The module dealing with the underlying representation of the [`Sum`] type.
//!
//! # Implementation details
//!
//! This crate defines a sum type by hand-written tagged unions. In other words,
//! the memory layout of a sum type resembles a tagged union:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // For example only. Not actually defined.
//! struct RawSum2<T1, T2> {
//!     tag: u8,
//!     data: Cons<T1, Cons<T2, Nil>>,
//! }
//! ```
//!
//! And all the traits are implemented upon this layout.
//!
//! See the source code for more details.
//!
//! [`Sum`]: crate::sum::Sum

use core::{convert::Infallible, mem::ManuallyDrop, ptr};

use crate::tag::{Tag, UInt, UTerm};

/// The terminator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub struct Nil(pub(crate) Infallible);

/// The accumulator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// The trait that type lists implement to support its corresponding tagged
/// union representation for the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub trait SumList: Count {
    /// The underlying representation of the `Sum` type.
    type Repr;

    #[doc(hidden)]
    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8);
}

impl SumList for () {
    type Repr = Nil;

    unsafe fn drop(_: &mut ManuallyDrop<Nil>, tag: u8) {
        unreachable!("dropping tag {tag} of an empty sum")
    }
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;

    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8) {
        if tag == 0 {
            unsafe { ManuallyDrop::drop(&mut this.data) };
        } else {
            unsafe { Tail::drop(&mut this.next, tag - 1) }
        }
    }
}

/// The trait that type lists implement to support manipulating a specified
/// variant value marked by a specified tag in the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub trait Split<T, U: Tag>: SumList {
    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    #[doc(hidden)]
    unsafe fn into_data_unchecked(this: Self::Repr) -> T;

    #[doc(hidden)]
    fn as_ptr(this: &Self::Repr) -> *const T;

    #[doc(hidden)]
    fn as_mut_ptr(this: &mut Self::Repr) -> *mut T;
}

impl<Head, Tail> Split<Head, UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    fn from_data(data: Head) -> Self::Repr {
        Cons {
            data: ManuallyDrop::new(data),
        }
    }

    unsafe fn into_data_unchecked(this: Self::Repr) -> Head {
        unsafe { ManuallyDrop::into_inner(this.data) }
    }

    fn as_ptr(this: &Self::Repr) -> *const Head {
        let ptr = unsafe { ptr::addr_of!(this.data) }.cast::<Head>();
        debug_assert_eq!(ptr.cast::<u8>(), (this as *const Self::Repr).cast::<u8>());
        ptr
    }

    fn as_mut_ptr(this: &mut Self::Repr) -> *mut Head {
        let ptr = unsafe { ptr::addr_of_mut!(this.data) }.cast::<Head>();
        debug_assert_eq!(ptr.cast::<u8>(), (this as *mut Self::Repr).cast::<u8>());
        ptr
    }
}

impl<Head, Tail, T, U: Tag> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    fn from_data(data: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_data(data)),
        }
    }

    unsafe fn into_data_unchecked(this: Self::Repr) -> T {
        unsafe { Tail::into_data_unchecked(ManuallyDrop::into_inner(this.next)) }
    }

    fn as_ptr(this: &Self::Repr) -> *const T {
        let ptr = unsafe { Tail::as_ptr(&this.next) };
        debug_assert_eq!(ptr.cast::<u8>(), (this as *const Self::Repr).cast::<u8>());
        ptr
    }

    fn as_mut_ptr(this: &mut Self::Repr) -> *mut T {
        let ptr = unsafe { Tail::as_mut_ptr(&mut this.next) };
        debug_assert_eq!(ptr.cast::<u8>(), (this as *mut Self::Repr).cast::<u8>());
        ptr
    }
}

/// Maps an index tag to the alternative type stored at that position.
pub trait Select<U: Tag>: SumList {
    /// The alternative type at index `U`.
    type Output;
}

impl<Head, Tail> Select<UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    type Output = Head;
}

impl<Head, Tail, U: Tag> Select<UInt<U>> for (Head, Tail)
where
    Tail: Select<U>,
{
    type Output = Tail::Output;
}

/// Counts the number of elements in a type list using index tags.
pub trait Count {
    /// The number of elements in the type list, measured by index tags.
    type Count: Tag;
}

impl Count for () {
    type Count = UTerm;
}

impl<Head, Tail> Count for (Head, Tail)
where
    Tail: Count,
{
    type Count = UInt<Tail::Count>;
}
