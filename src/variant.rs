//! The extended variant container.

use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::AccessError,
    resolve::{Resolve, Resolver},
    sum::{
        derive::{
            SumClone, SumDebug, SumDisplay, SumHash, SumOrd, SumPartialEq, SumPartialOrd,
            TypeMeta,
        },
        repr::{Select, Split, SumList},
        At, Sum,
    },
    tag::Tag,
    visit::{SumVisit, SumVisitMut},
};

/// A tagged union over the type list `S` that converts into any type one of
/// its alternatives can construct.
///
/// `Variant` wraps a [`Sum`] and adds value conversion ([`to`](Self::to),
/// [`try_to`](Self::try_to)), queries tolerant of foreign types
/// ([`holds`](Self::holds)), fallible accessors ([`get`](Self::get),
/// [`get_at`](Self::get_at)) next to their non-failing forms, visitation and
/// stream operators.
///
/// # Examples
///
/// ```rust
/// use evariant::Variant;
///
/// let mut v: Variant![i32, f64, &str] = Variant::new(5);
/// assert_eq!(v.index(), 0);
/// assert_eq!(v.to::<i32>(), 5);
/// assert_eq!(v.to::<f64>(), 5.0);
///
/// v.set("hi");
/// assert_eq!(v.index(), 2);
/// assert!(!v.holds::<i32>());
/// assert!(!v.holds::<Vec<u8>>());
/// ```
#[repr(transparent)]
pub struct Variant<S: SumList> {
    data: Sum<S>,
}

impl<S: SumList> Variant<S> {
    /// The number of alternatives.
    pub const LEN: usize = Sum::<S>::LEN;

    /// Constructs a variant holding `value`, whose type selects the
    /// alternative.
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Tag,
    {
        Variant {
            data: Sum::new(value),
        }
    }

    pub fn from_sum(sum: Sum<S>) -> Self {
        Variant { data: sum }
    }

    pub fn as_sum(&self) -> &Sum<S> {
        &self.data
    }

    pub fn as_sum_mut(&mut self) -> &mut Sum<S> {
        &mut self.data
    }

    pub fn into_sum(self) -> Sum<S> {
        self.data
    }

    /// The position of the active alternative, in `0..Self::LEN`.
    pub fn index(&self) -> usize {
        self.data.index()
    }

    /// The number of alternatives.
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Replaces the active alternative with `value`, possibly changing which
    /// alternative is active.
    pub fn set<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.data.set(value)
    }

    /// Like [`set`](Self::set), returning the previous contents.
    pub fn replace<T, U>(&mut self, value: T) -> Self
    where
        S: Split<T, U>,
        U: Tag,
    {
        core::mem::replace(self, Variant::new(value))
    }

    /// Exchanges the active alternatives of `self` and `other` in place.
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data)
    }

    /// Returns `true` if `T` is the active alternative.
    ///
    /// Asking about a type outside the alternative list is not an error; the
    /// answer is simply `false`.
    pub fn holds<T: ?Sized + 'static>(&self) -> bool
    where
        S: TypeMeta,
    {
        self.data.type_id() == TypeId::of::<T>()
    }

    /// Returns `true` if the listed alternative `T` is active.
    pub fn holds_alternative<T, U>(&self) -> bool
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.data.holds_alternative::<T, U>()
    }

    /// Returns the active value if it is a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Inactive`] if another alternative is active.
    pub fn get<T, U>(&self) -> Result<&T, AccessError>
    where
        S: Split<T, U>,
        U: Tag,
    {
        let active = self.index();
        self.data
            .get_if::<T, U>()
            .ok_or_else(|| inactive::<T>(U::INDEX, active))
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut<T, U>(&mut self) -> Result<&mut T, AccessError>
    where
        S: Split<T, U>,
        U: Tag,
    {
        let active = self.index();
        self.data
            .get_if_mut::<T, U>()
            .ok_or_else(|| inactive::<T>(U::INDEX, active))
    }

    pub fn get_if<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.data.get_if::<T, U>()
    }

    pub fn get_if_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.data.get_if_mut::<T, U>()
    }

    /// Returns the value at index `U` if it is active.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Inactive`] if another alternative is active.
    pub fn get_at<U>(&self) -> Result<&At<S, U>, AccessError>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.get::<At<S, U>, U>()
    }

    pub fn get_at_mut<U>(&mut self) -> Result<&mut At<S, U>, AccessError>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.get_mut::<At<S, U>, U>()
    }

    pub fn get_if_at<U>(&self) -> Option<&At<S, U>>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.data.get_if_at::<U>()
    }

    pub fn get_if_at_mut<U>(&mut self) -> Option<&mut At<S, U>>
    where
        S: Select<U> + Split<At<S, U>, U>,
        U: Tag,
    {
        self.data.get_if_at_mut::<U>()
    }

    /// Moves the value out if `T` is active, otherwise gives `self` back.
    pub fn try_unwrap<T, U>(self) -> Result<T, Self>
    where
        S: Split<T, U>,
        U: Tag,
    {
        self.data.try_unwrap::<T, U>().map_err(Variant::from_sum)
    }

    /// Applies `visitor` to the active alternative.
    pub fn visit<F, R>(&self, visitor: F) -> R
    where
        S: SumVisit<F, R>,
    {
        unsafe { S::visit(&self.data.data, self.data.tag, visitor) }
    }

    /// Applies `visitor` to the active alternative by mutable reference.
    pub fn visit_mut<F, R>(&mut self, visitor: F) -> R
    where
        S: SumVisitMut<F, R>,
    {
        let tag = self.data.tag;
        unsafe { S::visit_mut(&mut self.data.data, tag, visitor) }
    }

    /// Converts the active alternative into a `T`.
    ///
    /// When `T` is the active alternative the result is a clone of it.
    /// Otherwise alternatives that can construct a `T` are tried from the
    /// last one to the first; the one that is active produces the value. When the
    /// active alternative cannot construct a `T`, the result is
    /// `T::default()`.
    ///
    /// Converting into a type no alternative can construct does not
    /// compile.
    pub fn to<T: Default>(&self) -> T
    where
        S: Resolve<T>,
    {
        self.resolve().unwrap_or_else(|| {
            tracing::trace!(
                ty = type_name::<T>(),
                active = self.index(),
                "active alternative cannot convert, using default"
            );
            T::default()
        })
    }

    /// Converts the active alternative into a `T` without a default
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unconvertible`] if the active alternative
    /// cannot construct a `T`.
    pub fn try_to<T>(&self) -> Result<T, AccessError>
    where
        S: Resolve<T>,
    {
        self.resolve().ok_or_else(|| {
            tracing::trace!(
                ty = type_name::<T>(),
                active = self.index(),
                "active alternative cannot convert"
            );
            AccessError::Unconvertible {
                target: type_name::<T>(),
                active: self.index(),
            }
        })
    }

    fn resolve<T>(&self) -> Option<T>
    where
        S: Resolve<T>,
    {
        const {
            assert!(
                Resolver::<T, S>::ANY,
                "no alternative can be converted to the target type"
            )
        };
        Resolver::<T, S>::new().resolve(&self.data)
    }
}

fn inactive<T>(requested: usize, active: usize) -> AccessError {
    tracing::trace!(requested, active, "bad variant access");
    AccessError::Inactive {
        requested,
        ty: type_name::<T>(),
        active,
    }
}

impl<S: TypeMeta> Variant<S> {
    /// The type name of the active alternative.
    pub fn type_name(&self) -> &'static str {
        self.data.type_name()
    }

    pub fn type_id(&self) -> TypeId {
        self.data.type_id()
    }

    pub fn as_any(&self) -> &dyn Any {
        self.data.as_any()
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self.data.as_any_mut()
    }
}

/// Applies `visitor` to the active alternative of `variant`.
pub fn visit<S, F, R>(variant: &Variant<S>, visitor: F) -> R
where
    S: SumVisit<F, R>,
{
    variant.visit(visitor)
}

impl<S: SumList> From<Sum<S>> for Variant<S> {
    fn from(sum: Sum<S>) -> Self {
        Variant::from_sum(sum)
    }
}

impl<S: SumList> From<Variant<S>> for Sum<S> {
    fn from(variant: Variant<S>) -> Self {
        variant.into_sum()
    }
}

impl<Head: Default, Tail: SumList> Default for Variant<(Head, Tail)> {
    /// Holds the default value of the first alternative.
    fn default() -> Self {
        Variant::from_sum(Sum::default())
    }
}

impl<S: SumClone> Clone for Variant<S> {
    fn clone(&self) -> Self {
        Variant {
            data: self.data.clone(),
        }
    }
}

impl<S: SumDebug> fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variant")
            .field(&self.index())
            .field(&self.data)
            .finish()
    }
}

impl<S: SumDisplay> fmt::Display for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl<S: SumPartialEq> PartialEq for Variant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<S: SumPartialEq + Eq> Eq for Variant<S> {}

impl<S: SumPartialOrd> PartialOrd for Variant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

impl<S: SumOrd + Eq> Ord for Variant<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<S: SumHash> Hash for Variant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}
