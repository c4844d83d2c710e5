use crate::{Addr, Image, ImageBuilder, Str, View};

struct Fixture {
    image: Image,
    embedded: Addr,
    hello: Addr,
    shout: Addr,
    other: Addr,
    alias: Addr,
    empty: Addr,
    long: Addr,
}

fn fixture() -> Fixture {
    let mut builder = ImageBuilder::new();
    let embedded = builder.string(b"ab\0cd").unwrap();
    let hello = builder.string("hello").unwrap();
    let shout = builder.string("HELLO").unwrap();
    let other = builder.string("hello").unwrap();
    let alias = builder.alias(hello).unwrap();
    let empty = builder.string("").unwrap();
    let long = builder.string("x".repeat(150)).unwrap();
    Fixture {
        image: builder.finish().unwrap(),
        embedded,
        hello,
        shout,
        other,
        alias,
        empty,
        long,
    }
}

impl Fixture {
    fn str(&self, addr: Addr) -> Str<'_> {
        self.image.bind(addr).unwrap()
    }
}

#[test]
fn embedded_zero_bytes() {
    let fx = fixture();
    let s = fx.str(fx.embedded);

    assert_eq!(s.length(), 5);
    assert_eq!(s.value_at(2), 0);
    assert_eq!(s.value_at(3), b'c');

    let mut buf = [0u8; 5];
    assert_eq!(s.read(0, &mut buf), 5);
    assert_eq!(&buf, b"ab\0cd");
}

#[test]
fn out_of_range_element_is_zero() {
    let fx = fixture();
    let s = fx.str(fx.hello);

    assert_eq!(s.value_at(5), 0);
    assert_eq!(s.value_at(usize::MAX / 2), 0);
}

#[test]
fn size_counts_terminator() {
    let fx = fixture();

    assert_eq!(fx.str(fx.hello).size(), 8);
    assert_eq!(fx.str(fx.empty).size(), 4);
    assert_eq!(fx.str(fx.long).size(), 152);
}

#[test]
fn null_identity() {
    let fx = fixture();
    let null = Str::default();

    assert!(null.is_null());
    assert_eq!(null.length(), 0);
    assert!(null.equals(&Str::empty(), false));
    assert!(!null.equals(&fx.str(fx.empty), false));
    assert!(!fx.str(fx.empty).equals(&null, false));
    assert_ne!(null, fx.str(fx.hello));
}

#[test]
fn null_equals_empty_host_string() {
    assert_eq!(Str::empty(), "");
    assert!(Str::empty().equals_bytes(b"", true));
}

#[test]
fn content_equality() {
    let fx = fixture();
    let hello = fx.str(fx.hello);

    assert_eq!(hello, fx.str(fx.other));
    assert_ne!(hello, fx.str(fx.shout));
    assert!(hello.equals(&fx.str(fx.shout), true));
    assert_ne!(hello, fx.str(fx.embedded));
}

#[test]
fn copies_are_equal_to_their_target() {
    let fx = fixture();
    let hello = fx.str(fx.hello);
    let alias = fx.str(fx.alias);

    assert!(alias.is_copy());
    assert_eq!(alias, hello);
    assert_eq!(hello.copy(), hello);
    assert_eq!(hello.copy().copy().data(), hello.data());
}

#[test]
fn host_comparisons() {
    let fx = fixture();
    let hello = fx.str(fx.hello);

    assert_eq!(hello, "hello");
    assert_ne!(hello, "hell");
    assert_ne!(hello, "HELLO");
    assert!(hello.equals_ignore_case("HeLLo"));
    assert_eq!(fx.str(fx.embedded), b"ab\0cd"[..]);
}

#[test]
fn long_content_compares_across_chunks() {
    let fx = fixture();
    let long = fx.str(fx.long);

    assert_eq!(long, "x".repeat(150).as_str());
    let mut almost = "x".repeat(149);
    almost.push('y');
    assert_ne!(long, almost.as_str());
    assert!(long.equals_bytes("X".repeat(150).as_bytes(), true));
}

#[test]
fn conversions() {
    let fx = fixture();
    let hello = fx.str(fx.hello);

    assert_eq!(hello.to_bytes(), b"hello");
    assert_eq!(hello.to_string(), "hello");
    assert_eq!(format!("{hello:?}"), r#"Str("hello")"#);
    assert_eq!(format!("{:?}", Str::empty()), "Str(null)");
    assert_eq!(fx.str(fx.embedded).to_bytes(), b"ab\0cd");
}

#[test]
fn index_of_byte() {
    let fx = fixture();
    let hello = fx.str(fx.hello);

    assert_eq!(hello.index_of(&b'l'), Some(2));
    assert_eq!(hello.index_of(&b'z'), None);
}

#[test]
fn as_view_reinterprets_content() {
    let fx = fixture();
    let bytes: crate::Array<'_, u8> = fx.str(fx.hello).as_view();

    assert_eq!(bytes.length(), 5);
    assert_eq!(bytes.value_at(0), b'h');
}
