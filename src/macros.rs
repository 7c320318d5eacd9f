/// Constructs a [`struct@Sum`] type from a list of types.
///
/// # Examples
///
/// ```rust
/// use evariant::Sum;
///
/// type MySum = Sum![i32, u32, f64];
/// let s: MySum = Sum::new(42u32);
/// assert_eq!(s.index(), 1);
/// ```
#[macro_export]
macro_rules! Sum {
    [$($t:ty),* $(,)?] => [$crate::Sum::<$crate::T![$($t,)*]>];
}

/// Constructs a [`struct@Variant`] type from a list of types.
///
/// # Examples
///
/// ```rust
/// use evariant::Variant;
///
/// type Value = Variant![i32, f64, String];
/// let v: Value = Variant::new(2.5);
/// assert_eq!(v.index(), 1);
/// ```
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::T![$($t,)*]>];
}

/// Constructs a type list, the alternative list of a [`struct@Sum`] or a
/// [`struct@Variant`], from a list of types.
///
/// # Examples
///
/// ```rust
/// use evariant::T;
///
/// type MyList = T![i32, u32, f64];
/// let _: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Builds an [`HVec`](crate::HVec), constructing every element with
/// [`Variant::new`](crate::Variant::new).
///
/// # Examples
///
/// ```rust
/// use evariant::{hvec, HVec, T};
///
/// let hv: HVec<T![i32, f64, String]> = hvec![2321, String::from("string"), 328.32];
/// assert_eq!(hv[1].index(), 2);
/// assert_eq!(hv[2].to::<f64>(), 328.32);
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! hvec {
    [$($value:expr),* $(,)?] => [::std::vec![$($crate::Variant::new($value)),*]];
}

/// Declares how a type coerces into conversion targets.
///
/// Every alternative of a [`Variant`](crate::Variant) must implement
/// [`Coerce<T>`](crate::Coerce) for each target `T` it is converted to,
/// either as a real conversion or as an explicit refusal. Identity comes
/// for free for every `Clone` type.
///
/// - `coerce!(Ty)` marks `Ty` as [`Custom`](crate::coerce::Custom): every
///   built-in type refuses to convert into it, so `Ty` can sit next to
///   scalars, strings and containers and still be a conversion target.
/// - `coerce!(Ty => Target, |value| expr)` declares a conversion.
/// - `coerce!(Ty => !A, B)` declares that `Ty` converts into neither `A`
///   nor `B`.
///
/// # Examples
///
/// ```rust
/// use evariant::{coerce, Variant};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Meters(f64);
///
/// coerce!(Meters);
/// coerce!(Meters => f64, |m| m.0);
/// coerce!(Meters => !i32);
///
/// let v: Variant![Meters, i32] = Variant::new(Meters(1.5));
/// assert_eq!(v.to::<f64>(), 1.5);
/// assert_eq!(v.to::<i32>(), 0);
/// assert_eq!(v.try_to::<Meters>(), Ok(Meters(1.5)));
/// ```
///
/// Types from other crates cannot declare coercions between each other.
/// Wrap one of them in a local newtype:
///
/// ```rust
/// use evariant::{coerce, Variant};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Bytes(Vec<u8>);
///
/// coerce!(Bytes);
/// coerce!(Bytes => !Vec<i32>);
///
/// let v: Variant![Bytes, Vec<i32>] = Variant::new(vec![1, 2]);
/// assert_eq!(v.to::<Vec<i32>>(), [1, 2]);
/// assert!(v.try_to::<Bytes>().is_err());
/// ```
#[macro_export]
macro_rules! coerce {
    ($src:ty => !$($dst:ty),+ $(,)?) => {
        $(
            impl $crate::Coerce<$dst> for $src {
                const COERCIBLE: bool = false;

                #[inline]
                fn coerce(&self) -> ::core::option::Option<$dst> {
                    ::core::option::Option::None
                }
            }
        )+
    };
    ($src:ty => $dst:ty, |$value:ident| $body:expr $(,)?) => {
        impl $crate::Coerce<$dst> for $src {
            const COERCIBLE: bool = true;

            #[inline]
            fn coerce(&self) -> ::core::option::Option<$dst> {
                let $value = self;
                ::core::option::Option::Some($body)
            }
        }
    };
    ($ty:ty $(,)?) => {
        impl $crate::coerce::Custom for $ty {}
    };
}
