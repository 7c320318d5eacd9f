//! Standard trait implementations for [`Sum`], dispatched on the tag.
//!
//! Every trait here is implemented for a type list when all of its element
//! types implement the corresponding standard trait.
//!
//! [`Sum`]: crate::sum::Sum

use core::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
};

use super::repr::{Cons, Nil, SumList};

fn out_of_range(tag: u8) -> ! {
    unreachable!("tag {tag} is out of range of the sum")
}

pub trait TypeMeta: SumList {
    #[doc(hidden)]
    fn type_id(tag: u8) -> TypeId;

    #[doc(hidden)]
    fn type_name(tag: u8) -> &'static str;

    #[doc(hidden)]
    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any;

    #[doc(hidden)]
    unsafe fn as_any_mut(this: &mut Self::Repr, tag: u8) -> &mut dyn Any;
}

impl TypeMeta for () {
    fn type_id(tag: u8) -> TypeId {
        out_of_range(tag)
    }

    fn type_name(tag: u8) -> &'static str {
        out_of_range(tag)
    }

    unsafe fn as_any(_: &Nil, tag: u8) -> &dyn Any {
        out_of_range(tag)
    }

    unsafe fn as_any_mut(_: &mut Nil, tag: u8) -> &mut dyn Any {
        out_of_range(tag)
    }
}

impl<Head: 'static, Tail: TypeMeta> TypeMeta for (Head, Tail) {
    fn type_id(tag: u8) -> TypeId {
        match tag {
            0 => TypeId::of::<Head>(),
            _ => Tail::type_id(tag - 1),
        }
    }

    fn type_name(tag: u8) -> &'static str {
        match tag {
            0 => core::any::type_name::<Head>(),
            _ => Tail::type_name(tag - 1),
        }
    }

    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any {
        match tag {
            0 => unsafe { &*this.data },
            _ => unsafe { Tail::as_any(&this.next, tag - 1) },
        }
    }

    unsafe fn as_any_mut(this: &mut Self::Repr, tag: u8) -> &mut dyn Any {
        match tag {
            0 => unsafe { &mut *this.data },
            _ => unsafe { Tail::as_any_mut(&mut this.next, tag - 1) },
        }
    }
}

pub trait SumDebug: SumList {
    #[doc(hidden)]
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDebug for () {
    unsafe fn fmt(_: &Nil, tag: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        out_of_range(tag)
    }
}

impl<Head: fmt::Debug, Tail: SumDebug> SumDebug for (Head, Tail) {
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tag {
            0 => fmt::Debug::fmt(unsafe { &*this.data }, f),
            _ => unsafe { Tail::fmt(&this.next, tag - 1, f) },
        }
    }
}

pub trait SumDisplay: SumList {
    #[doc(hidden)]
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDisplay for () {
    unsafe fn fmt(_: &Nil, tag: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        out_of_range(tag)
    }
}

impl<Head: fmt::Display, Tail: SumDisplay> SumDisplay for (Head, Tail) {
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tag {
            0 => fmt::Display::fmt(unsafe { &*this.data }, f),
            _ => unsafe { Tail::fmt(&this.next, tag - 1, f) },
        }
    }
}

pub trait SumClone: SumList {
    #[doc(hidden)]
    unsafe fn clone(this: &Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr>;
}

impl SumClone for () {
    unsafe fn clone(_: &Nil, tag: u8) -> ManuallyDrop<Nil> {
        out_of_range(tag)
    }
}

impl<Head: Clone, Tail: SumClone> SumClone for (Head, Tail) {
    unsafe fn clone(this: &Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr> {
        ManuallyDrop::new(match tag {
            0 => Cons {
                data: unsafe { this.data.clone() },
            },
            _ => Cons {
                next: unsafe { Tail::clone(&this.next, tag - 1) },
            },
        })
    }
}

pub trait SumPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool;
}

impl SumPartialEq for () {
    unsafe fn eq(_: &Nil, _: &Nil, tag: u8) -> bool {
        out_of_range(tag)
    }
}

impl<Head: PartialEq, Tail: SumPartialEq> SumPartialEq for (Head, Tail) {
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool {
        match tag {
            0 => unsafe { *this.data == *other.data },
            _ => unsafe { Tail::eq(&this.next, &other.next, tag - 1) },
        }
    }
}

pub trait SumPartialOrd: SumPartialEq {
    #[doc(hidden)]
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering>;
}

impl SumPartialOrd for () {
    unsafe fn partial_cmp(_: &Nil, _: &Nil, tag: u8) -> Option<Ordering> {
        out_of_range(tag)
    }
}

impl<Head: PartialOrd, Tail: SumPartialOrd> SumPartialOrd for (Head, Tail) {
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering> {
        match tag {
            0 => unsafe { (*this.data).partial_cmp(&*other.data) },
            _ => unsafe { Tail::partial_cmp(&this.next, &other.next, tag - 1) },
        }
    }
}

pub trait SumOrd: SumPartialOrd {
    #[doc(hidden)]
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering;
}

impl SumOrd for () {
    unsafe fn cmp(_: &Nil, _: &Nil, tag: u8) -> Ordering {
        out_of_range(tag)
    }
}

impl<Head: Ord, Tail: SumOrd> SumOrd for (Head, Tail) {
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering {
        match tag {
            0 => unsafe { (*this.data).cmp(&*other.data) },
            _ => unsafe { Tail::cmp(&this.next, &other.next, tag - 1) },
        }
    }
}

pub trait SumHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H);
}

impl SumHash for () {
    unsafe fn hash<H: Hasher>(_: &Nil, tag: u8, _: &mut H) {
        out_of_range(tag)
    }
}

impl<Head: Hash, Tail: SumHash> SumHash for (Head, Tail) {
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H) {
        match tag {
            0 => unsafe { (*this.data).hash(state) },
            _ => unsafe { Tail::hash(&this.next, tag - 1, state) },
        }
    }
}
