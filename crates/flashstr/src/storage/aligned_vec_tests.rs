use super::aligned_vec::AlignedVec;
use crate::object::ALIGN;

fn is_aligned(ptr: *const u8) -> bool {
    (ptr as usize).is_multiple_of(ALIGN)
}

#[test]
fn alignment_guarantee() {
    let data: Vec<u8> = (0..101).collect();
    let vec = AlignedVec::copy_from_slice(&data);
    assert!(is_aligned(vec.as_ptr()));
    assert_eq!(&*vec, &data[..]);
}

#[test]
fn empty_slice() {
    let vec = AlignedVec::copy_from_slice(&[]);
    assert!(vec.is_empty());
    assert_eq!(vec.as_slice(), &[] as &[u8]);
    assert_eq!(vec.word(0), None);
}

#[test]
fn words_are_little_endian() {
    let vec = AlignedVec::copy_from_slice(&[0x01, 0x02, 0x03, 0x04, 0xAA]);
    assert_eq!(vec.word(0), Some(0x0403_0201));
    assert_eq!(vec.word(1), Some(0x0000_00AA));
    assert_eq!(vec.word(2), None);
}

#[test]
fn trailing_word_is_zero_padded() {
    let vec = AlignedVec::copy_from_slice(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(vec.len(), 6);
    assert_eq!(vec.word_bytes(1), Some([5, 6, 0, 0]));
}

#[test]
fn clone_preserves_alignment() {
    let data: Vec<u8> = (0..64).collect();
    let vec = AlignedVec::copy_from_slice(&data);
    let cloned = vec.clone();

    assert!(is_aligned(cloned.as_ptr()));
    assert_eq!(&*cloned, &*vec);
}

#[test]
fn copy_words_stops_at_len() {
    let vec = AlignedVec::copy_from_slice(&[1, 2, 3, 4, 5, 6]);

    let mut buf = [0xffu8; 8];
    assert_eq!(vec.copy_words(3, &mut buf), 3);
    assert_eq!(buf[..4], [4, 5, 6, 0xff]);

    assert_eq!(vec.copy_words(6, &mut buf), 0);
    assert_eq!(vec.copy_words(100, &mut buf), 0);
    assert_eq!(vec.copy_words(1, &mut []), 0);
}
