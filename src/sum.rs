//! The underlying closed sum type.
//!
//! [`Sum`] holds exactly one value out of a type list such as
//! `T![i32, f64, String]`, tagged with the index of its type in the list.
//! [`Variant`](crate::Variant) builds its extended API on top of it.

use core::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
};

pub mod derive;
pub mod repr;

use self::repr::{Select, Split, SumList};
use crate::tag::{Tag, UTerm};

pub type Repr<S> = <S as SumList>::Repr;

/// The alternative type at index `U` of the type list `S`.
pub type At<S, U> = <S as Select<U>>::Output;

/// A tagged union over the type list `S`.
///
/// # Examples
///
/// ```rust
/// use evariant::{tag::U1, Sum};
///
/// let mut s: Sum![u32, String] = Sum::new(7u32);
/// assert_eq!(s.get_if::<u32, _>(), Some(&7));
///
/// s.set(String::from("seven"));
/// assert_eq!(s.index(), 1);
/// assert_eq!(s.get_if::<_, U1>().map(String::as_str), Some("seven"));
/// ```
pub struct Sum<S: SumList> {
    pub(crate) tag: u8,
    pub(crate) data: ManuallyDrop<Repr<S>>,
}

impl<S: SumList> Sum<S> {
    /// The number of alternatives in the type list.
    pub const LEN: usize = <S::Count as Tag>::INDEX;

    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Tag,
    {
        Sum {
            tag: U::VALUE,
            data: ManuallyDrop::new(S::from_data(value)),
        }
    }

    /// The position of the active alternative in the type list.
    pub fn index(&self) -> usize {
        self.tag.into()
    }

    pub fn holds_alternative<T, U>(&self) -> bool
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.tag == U::VALUE
    }

    pub fn get_if<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Tag,
    {
        (self.tag == U::VALUE).then(|| unsafe { &*S::as_ptr(&self.data) })
    }

    pub fn get_if_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: Split<T, U>,
        U: Tag,
    {
        (self.tag == U::VALUE).then(|| unsafe { &mut *S::as_mut_ptr(&mut self.data) })
    }

    pub fn get_if_at<U>(&self) -> Option<&At<S, U>>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.get_if::<At<S, U>, U>()
    }

    pub fn get_if_at_mut<U>(&mut self) -> Option<&mut At<S, U>>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.get_if_mut::<At<S, U>, U>()
    }

    /// Replaces the active alternative, dropping the previous value.
    pub fn set<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Tag,
    {
        *self = Sum::new(value);
    }

    /// Exchanges the contents of two sums without cloning either value.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    pub fn try_unwrap<T, U>(self) -> Result<T, Self>
    where
        S: Split<T, U>,
        U: Tag,
    {
        if self.tag != U::VALUE {
            return Err(self);
        }
        let mut this = ManuallyDrop::new(self);
        Ok(unsafe { S::into_data_unchecked(ManuallyDrop::take(&mut this.data)) })
    }
}

impl<S: derive::TypeMeta> Sum<S> {
    pub fn type_id(&self) -> TypeId {
        S::type_id(self.tag)
    }

    pub fn type_name(&self) -> &'static str {
        S::type_name(self.tag)
    }

    pub fn as_any(&self) -> &dyn Any {
        unsafe { S::as_any(&self.data, self.tag) }
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        unsafe { S::as_any_mut(&mut self.data, self.tag) }
    }
}

impl<Head: Default, Tail: SumList> Default for Sum<(Head, Tail)> {
    /// Holds the default value of the first alternative.
    fn default() -> Self {
        Sum::new::<Head, UTerm>(Head::default())
    }
}

impl<S: derive::SumDebug> fmt::Debug for Sum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { <S as derive::SumDebug>::fmt(&self.data, self.tag, f) }
    }
}

impl<S: derive::SumDisplay> fmt::Display for Sum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { <S as derive::SumDisplay>::fmt(&self.data, self.tag, f) }
    }
}

impl<S: SumList> Drop for Sum<S> {
    fn drop(&mut self) {
        unsafe { S::drop(&mut self.data, self.tag) }
    }
}

impl<S: derive::SumClone> Clone for Sum<S> {
    fn clone(&self) -> Self {
        Sum {
            tag: self.tag,
            data: unsafe { S::clone(&self.data, self.tag) },
        }
    }
}

impl<S: derive::SumPartialEq> PartialEq for Sum<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && unsafe { S::eq(&self.data, &other.data, self.tag) }
    }
}

impl<S: derive::SumPartialEq + Eq> Eq for Sum<S> {}

impl<S: derive::SumPartialOrd> PartialOrd for Sum<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.tag.cmp(&other.tag) {
            Ordering::Equal => unsafe { S::partial_cmp(&self.data, &other.data, self.tag) },
            other => Some(other),
        }
    }
}

impl<S: derive::SumOrd + Eq> Ord for Sum<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tag
            .cmp(&other.tag)
            .then_with(|| unsafe { S::cmp(&self.data, &other.data, self.tag) })
    }
}

impl<S: derive::SumHash> Hash for Sum<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        unsafe { S::hash(&self.data, self.tag, state) }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        format,
        rc::Rc,
        string::{String, ToString},
    };

    use super::*;
    use crate::tag::*;

    #[test]
    fn basic() {
        type T1 = crate::T![u32, String];

        let mut sum: Sum<T1> = Sum::new(12345u32);
        assert_eq!(sum.get_if::<u32, _>(), Some(&12345));
        assert_eq!(sum.get_if::<_, U1>(), None::<&String>);
        assert_eq!(sum.index(), 0);

        sum = Sum::new("Hello World!".to_string());
        assert_eq!(sum.get_if(), Some(&"Hello World!".to_string()));
        assert_eq!(sum.index(), 1);
        assert_eq!(Sum::<T1>::LEN, 2);
    }

    #[test]
    fn index_access() {
        let mut sum: crate::Sum![u8, bool, char] = Sum::new('x');
        assert_eq!(sum.get_if_at::<U2>(), Some(&'x'));
        assert_eq!(sum.get_if_at::<U0>(), None);

        *sum.get_if_at_mut::<U2>().unwrap() = 'y';
        assert_eq!(sum.get_if::<char, _>(), Some(&'y'));
    }

    #[test]
    fn drops_active_value_once() {
        let rc = Rc::new(());
        {
            let mut sum: crate::Sum![Rc<()>, i32] = Sum::new(rc.clone());
            assert_eq!(Rc::strong_count(&rc), 2);

            let copy = sum.clone();
            assert_eq!(Rc::strong_count(&rc), 3);
            drop(copy);

            sum.set(4);
            assert_eq!(Rc::strong_count(&rc), 1);

            sum.set(rc.clone());
            assert_eq!(Rc::strong_count(&rc), 2);
        }
        assert_eq!(Rc::strong_count(&rc), 1);
    }

    #[test]
    fn try_unwrap() {
        let sum: crate::Sum![i32, String] = Sum::new("moved".to_string());
        let sum = sum.try_unwrap::<i32, _>().unwrap_err();
        assert_eq!(sum.try_unwrap::<String, _>().ok().as_deref(), Some("moved"));
    }

    #[test]
    fn swap() {
        let mut a: crate::Sum![i32, String] = Sum::new(1);
        let mut b: crate::Sum![i32, String] = Sum::new("b".to_string());
        a.swap(&mut b);

        assert_eq!(a.get_if::<String, _>().map(String::as_str), Some("b"));
        assert_eq!(b.get_if::<i32, _>(), Some(&1));
    }

    #[test]
    fn ordering_by_tag_then_value() {
        type S = crate::Sum![i32, f64];

        assert!(S::new(100) < S::new(0.5));
        assert!(S::new(1) < S::new(2));
        assert_eq!(S::new(2.0).partial_cmp(&S::new(2.0)), Some(Ordering::Equal));
        assert_ne!(S::new(1), S::new(1.0));
        assert_eq!(S::new(f64::NAN).partial_cmp(&S::new(0.0)), None);
    }

    #[test]
    fn hash_includes_tag() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        type S = crate::Sum![u8, u16];
        assert_eq!(hash_of(&S::new(1u8)), hash_of(&S::new(1u8)));
        assert_ne!(hash_of(&S::new(1u8)), hash_of(&S::new(1u16)));
    }

    #[test]
    fn formatting() {
        let sum: crate::Sum![i32, &str] = Sum::new("text");
        assert_eq!(format!("{sum}"), "text");
        assert_eq!(format!("{sum:?}"), "\"text\"");
        assert_eq!(sum.type_name(), "&str");
        assert_eq!(sum.type_id(), TypeId::of::<&'static str>());
    }

    #[test]
    fn default_is_first_alternative() {
        let sum: crate::Sum![String, i32] = Default::default();
        assert_eq!(sum.index(), 0);
        assert_eq!(sum.get_if::<String, _>().map(String::len), Some(0));
    }
}
