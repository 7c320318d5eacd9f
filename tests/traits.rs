use std::{cell::Cell, rc::Rc};

use static_assertions::{assert_impl_all, assert_not_impl_any};

use evariant::{Resolver, Variant, T};

#[allow(dead_code)]
struct NoDefault {
    _value: i32,
}

#[allow(dead_code)]
#[derive(Default)]
struct NoClone;

assert_impl_all!(Variant![f32, char, String]: Default, Clone, Send, Sync);
assert_impl_all!(Variant![i32, char, String]: Default, Clone, Eq, Ord, std::hash::Hash);
assert_impl_all!(Variant![Vec<i32>, i16]: Default, Clone);

assert_not_impl_any!(Variant![NoDefault, i32, f64]: Default);
assert_not_impl_any!(Variant![i32, NoDefault]: Clone);
assert_impl_all!(Variant![i32, NoDefault]: Default);
assert_not_impl_any!(Variant![NoClone, String, f64]: Clone);
assert_impl_all!(Variant![NoClone, String, f64]: Default);

assert_not_impl_any!(Variant![Rc<i32>, i32]: Send, Sync);
assert_not_impl_any!(Variant![Cell<i32>, i32]: Sync);
assert_impl_all!(Variant![Cell<i32>, i32]: Send);

assert_not_impl_any!(Variant![f64, i32]: Eq, Ord);

assert_impl_all!(Resolver<String, T![i32, String]>: Copy, Send, Sync);

#[cfg(feature = "std")]
#[test]
fn eligibility_tables() {
    type L = T![i32, f64, String];

    assert_eq!(Resolver::<i64, L>::ELIGIBLE, 0b011);
    assert_eq!(Resolver::<String, L>::ELIGIBLE, 0b100);
    assert_eq!(Resolver::<bool, L>::new().priority().collect::<Vec<_>>(), [1, 0]);
}
