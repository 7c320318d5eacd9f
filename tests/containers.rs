#![cfg(feature = "std")]

use std::{collections::VecDeque, io::Cursor};

use evariant::{hvec, HArray, HVec, Variant, Visitor, T};

#[test]
fn hvec_of_mixed_values() {
    let hv: HVec<T![i32, f64, String]> = hvec![2321, String::from("string"), 328.32];

    assert_eq!(hv.len(), 3);
    assert_eq!(hv[0].to::<i32>(), 2321);
    assert_eq!(hv[1].to::<String>(), "string");
    assert_eq!(hv[2].to::<f64>(), 328.32);
    assert_eq!(
        hv.iter().map(Variant::index).collect::<Vec<_>>(),
        [0, 2, 1]
    );
}

#[test]
fn harray_converts_per_element() {
    let ha: HArray<T![i64, String, char], 3> = [
        Variant::new(12345i64),
        Variant::new(String::from("another string")),
        Variant::new('c'),
    ];

    assert_eq!(ha[0].to::<i32>(), 12345);
    assert_eq!(ha[1].to::<String>(), "another string");
    assert_eq!(ha[2].to::<char>(), 'c');
    assert_eq!(ha[2].to::<u32>(), 99);
    assert_eq!(ha[1].to::<i32>(), 0);
}

#[test]
fn sorting_orders_by_index_then_value() {
    let mut hv: HVec<T![i32, String]> = hvec![
        String::from("b"),
        3,
        String::from("a"),
        -1,
    ];
    hv.sort();

    let rendered: Vec<String> = hv.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["-1", "3", "a", "b"]);
}

struct Width;

impl<T: ToString> Visitor<T, usize> for Width {
    fn visit(self, value: &T) -> usize {
        value.to_string().len()
    }
}

#[test]
fn visit_every_element() {
    let hv: HVec<T![u16, &'static str, bool]> = hvec![512u16, "four", true];
    let widths: Vec<usize> = hv.iter().map(|v| evariant::visit(v, Width)).collect();
    assert_eq!(widths, [3, 4, 4]);
}

#[test]
fn stream_every_element() {
    let mut hv: HVec<T![i32, f64, String]> = hvec![0, 0.0, String::new()];
    let mut input = Cursor::new("7 2.5 word");
    for v in hv.iter_mut() {
        v.read_from(&mut input).unwrap();
    }

    let mut out = Vec::new();
    for v in &hv {
        v.write_to(&mut out).unwrap();
        out.push(b' ');
    }
    assert_eq!(out, b"7 2.5 word ");
}

#[test]
fn container_alternatives() {
    let hv: HVec<T![Vec<i32>, i16, VecDeque<u8>]> = hvec![
        vec![1, 2],
        7i16,
        VecDeque::from([3u8]),
    ];

    assert_eq!(hv[0].to::<Vec<i32>>(), [1, 2]);
    assert_eq!(hv[0].to::<i16>(), 0);
    assert_eq!(hv[1].to::<i16>(), 7);
    assert_eq!(hv[1].to::<f32>(), 7.0);
    assert!(hv[1].try_to::<Vec<i32>>().is_err());
    assert_eq!(hv[2].to::<VecDeque<u8>>(), [3]);
}
