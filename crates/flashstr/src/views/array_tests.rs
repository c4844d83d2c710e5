use crate::test_utils::StrictFlash;
use crate::{Addr, Array, Image, ImageBuilder, View};

fn image() -> (Image, Addr, Addr, Addr) {
    let mut builder = ImageBuilder::new();
    let words = builder.array(&[1u32, 2, 3, 5, 8]).unwrap();
    let wide = builder.array(&[u64::MAX, 0x0102_0304_0506_0708]).unwrap();
    let floats = builder.array(&[0.5f32, -1.25, 3.0]).unwrap();
    (builder.finish().unwrap(), words, wide, floats)
}

#[test]
fn element_access() {
    let (image, words, _, _) = image();
    let array: Array<'_, u32> = image.bind(words).unwrap();

    assert_eq!(array.length(), 5);
    assert_eq!(array.size(), 20);
    assert_eq!(array.value_at(0), 1);
    assert_eq!(array.value_at(4), 8);
}

#[test]
fn out_of_range_is_zero() {
    let (image, words, _, floats) = image();
    let array: Array<'_, u32> = image.bind(words).unwrap();
    let floats: Array<'_, f32> = image.bind(floats).unwrap();

    assert_eq!(array.value_at(5), 0);
    assert_eq!(floats.value_at(3), 0.0);
}

#[test]
fn wide_elements() {
    let (image, _, wide, _) = image();
    let array: Array<'_, u64> = image.bind(wide).unwrap();

    assert_eq!(array.length(), 2);
    assert_eq!(array.value_at(0), u64::MAX);
    assert_eq!(array.value_at(1), 0x0102_0304_0506_0708);
}

#[test]
fn index_of_first_match() {
    let (image, words, _, _) = image();
    let array: Array<'_, u32> = image.bind(words).unwrap();

    assert_eq!(array.index_of(&5), Some(3));
    assert_eq!(array.index_of(&4), None);
}

#[test]
fn read_elements_in_bulk() {
    let (image, words, _, _) = image();
    let array: Array<'_, u32> = image.bind(words).unwrap();

    let mut out = [0u32; 3];
    assert_eq!(array.read_elements(1, &mut out), 3);
    assert_eq!(out, [2, 3, 5]);

    let mut out = [0u32; 8];
    assert_eq!(array.read_elements(3, &mut out), 2);
    assert_eq!(out[..2], [5, 8]);

    assert_eq!(array.read_elements(5, &mut out), 0);
}

#[test]
fn read_elements_spanning_chunks() {
    let values: Vec<u16> = (0..300).collect();
    let mut builder = ImageBuilder::new();
    let addr = builder.array(&values).unwrap();
    let image = builder.finish().unwrap();
    let array: Array<'_, u16> = image.bind(addr).unwrap();

    assert_eq!(array.to_vec(), values);
}

#[test]
fn content_equality() {
    let mut builder = ImageBuilder::new();
    let a = builder.array(&[1i16, -2, 3]).unwrap();
    let b = builder.array(&[1i16, -2, 3]).unwrap();
    let c = builder.array(&[1i16, -2]).unwrap();
    let image = builder.finish().unwrap();

    let a: Array<'_, i16> = image.bind(a).unwrap();
    let b: Array<'_, i16> = image.bind(b).unwrap();
    let c: Array<'_, i16> = image.bind(c).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, a.copy());
}

#[test]
fn debug_lists_elements() {
    let (image, words, _, _) = image();
    let array: Array<'_, u32> = image.bind(words).unwrap();

    assert_eq!(format!("{array:?}"), "[1, 2, 3, 5, 8]");
    assert_eq!(format!("{:?}", Array::<u8>::empty()), "[]");
}

#[test]
fn reads_stay_inside_the_object() {
    let mut builder = ImageBuilder::new();
    let addr = builder.array(&[7u16, 8, 9]).unwrap();
    builder.array(&[u32::MAX; 4]).unwrap();
    let image = builder.finish().unwrap();
    let strict = StrictFlash::new(&image);

    let array: Array<'_, u16> = View::at(&strict, addr);
    let end = array.data() + array.size();
    assert_eq!(array.iter().collect::<Vec<_>>(), [7, 8, 9]);
    assert!(strict.furthest() <= end);

    strict.reset();
    for index in array.length()..array.length() + 100 {
        assert_eq!(array.value_at(index), 0);
    }
    let mut out = [0u16; 8];
    assert_eq!(array.read_elements(2, &mut out), 1);
    assert!(strict.furthest() <= end);
}
