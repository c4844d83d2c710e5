use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Flash, Scalar, copy_clamped, read_value};

/// Byte region that records which load path was taken.
#[derive(Default)]
struct Probe {
    bytes: Vec<u8>,
    halfwords: AtomicUsize,
    words: AtomicUsize,
    bulk: AtomicUsize,
}

impl Probe {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            ..Self::default()
        }
    }
}

impl Flash for Probe {
    fn size(&self) -> usize {
        self.bytes.len()
    }

    fn cached_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        self.bulk.fetch_add(1, Ordering::Relaxed);
        copy_clamped(&self.bytes, offset, dst)
    }

    fn direct_read(&self, offset: usize, dst: &mut [u8]) -> usize {
        copy_clamped(&self.bytes, offset, dst)
    }

    fn read_u16(&self, addr: usize) -> u16 {
        self.halfwords.fetch_add(1, Ordering::Relaxed);
        u16::from_le_bytes([self.bytes[addr], self.bytes[addr + 1]])
    }

    fn read_u32(&self, addr: usize) -> u32 {
        assert!(addr.is_multiple_of(4), "unaligned word load at {addr}");
        self.words.fetch_add(1, Ordering::Relaxed);
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[addr..addr + 4]);
        u32::from_le_bytes(raw)
    }
}

const BYTES: [u8; 16] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
];

#[test]
fn byte_values() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u8>(&flash, 3), 0x04);
    assert_eq!(read_value::<i8>(&flash, 0), 1);
    assert!(read_value::<bool>(&flash, 0));
}

#[test]
fn halfword_at_odd_address_uses_halfword_load() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u16>(&flash, 1), 0x0302);
    assert_eq!(flash.halfwords.load(Ordering::Relaxed), 1);
    assert_eq!(flash.bulk.load(Ordering::Relaxed), 0);
}

#[test]
fn aligned_word_uses_word_load() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u32>(&flash, 4), 0x0807_0605);
    assert_eq!(flash.words.load(Ordering::Relaxed), 1);
}

#[test]
fn misaligned_word_falls_back_to_bytes() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u32>(&flash, 5), 0x0908_0706);
    assert_eq!(read_value::<i32>(&flash, 2), 0x0605_0403);
    assert_eq!(flash.words.load(Ordering::Relaxed), 0);
    assert_eq!(flash.bulk.load(Ordering::Relaxed), 2);
}

#[test]
fn wide_values_decode_little_endian() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u64>(&flash, 0), 0x0807_0605_0403_0201);
    assert_eq!(read_value::<u64>(&flash, 3), 0x0b0a_0908_0706_0504);
}

#[test]
fn floats() {
    let mut bytes = Vec::new();
    1.5f32.write_le(&mut bytes);
    (-2.25f64).write_le(&mut bytes);
    let flash = Probe::new(&bytes);

    assert_eq!(read_value::<f32>(&flash, 0), 1.5);
    assert_eq!(read_value::<f64>(&flash, 4), -2.25);
}

#[test]
fn past_end_reads_zero() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<u64>(&flash, 12), 0x100f_0e0d);
    assert_eq!(read_value::<u64>(&flash, 64), 0);
}

#[test]
fn zero_values() {
    assert_eq!(u32::zero(), 0);
    assert_eq!(f64::zero(), 0.0);
    assert!(!bool::zero());
}

/// Widest user scalar the default load accepts.
#[derive(Clone, Copy, PartialEq, Debug)]
struct Uuid([u8; super::INLINE_LIMIT]);

impl Scalar for Uuid {
    const SIZE: usize = super::INLINE_LIMIT;

    fn zero() -> Self {
        Self([0; super::INLINE_LIMIT])
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut raw = [0u8; super::INLINE_LIMIT];
        raw.copy_from_slice(&bytes[..Self::SIZE]);
        Self(raw)
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

#[test]
fn user_scalar_at_inline_limit() {
    let flash = Probe::new(&BYTES);

    assert_eq!(read_value::<Uuid>(&flash, 0), Uuid(BYTES));
    assert_eq!(flash.bulk.load(Ordering::Relaxed), 1);

    let mut tail = [0u8; 16];
    tail[..4].copy_from_slice(&BYTES[12..]);
    assert_eq!(read_value::<Uuid>(&flash, 12), Uuid(tail));
}
