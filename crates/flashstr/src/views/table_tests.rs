use crate::{ImageBuilder, Scalar, Table, TableRow, View, read_value};

#[test]
fn row_columns() {
    let row = TableRow::new([1.5f32, 2.5, 3.5]);

    assert_eq!(row.length(), 3);
    assert_eq!(row.get(1), 2.5);
    assert_eq!(row[2], 3.5);
    assert_eq!(row.get(3), 0.0);
}

#[test]
fn row_is_scalar() {
    assert_eq!(TableRow::<u16, 3>::SIZE, 6);
    assert_eq!(TableRow::<u16, 3>::zero(), TableRow::new([0, 0, 0]));

    let mut bytes = Vec::new();
    TableRow::new([0x0102u16, 0x0304]).write_le(&mut bytes);
    assert_eq!(bytes, [0x02, 0x01, 0x04, 0x03]);
    assert_eq!(TableRow::<u16, 2>::from_le_slice(&bytes), TableRow::new([0x0102, 0x0304]));
}

#[test]
fn table_rows() {
    let mut builder = ImageBuilder::new();
    let addr = builder.table(&[[1i32, 2, 3], [4, 5, 6]]).unwrap();
    let image = builder.finish().unwrap();
    let table: Table<'_, i32, 3> = image.bind(addr).unwrap();

    assert_eq!(table.length(), 2);
    assert_eq!(table.value_at(1), TableRow::new([4, 5, 6]));
    assert_eq!(table.value_at(0)[2], 3);
    assert_eq!(table.value_at(2), TableRow::zero());
    assert_eq!(table.index_of(&TableRow::new([4, 5, 6])), Some(1));
}

#[test]
fn misaligned_rows_load_by_column() {
    let mut builder = ImageBuilder::new();
    let addr = builder.table(&[[0xaau8, 0xbb, 0xcc], [0x11, 0x22, 0x33]]).unwrap();
    let wide = builder.table(&[[7u8], [8]]).unwrap();
    let image = builder.finish().unwrap();

    let table: Table<'_, u8, 3> = image.bind(addr).unwrap();
    assert_eq!(table.value_at(1).values(), &[0x11, 0x22, 0x33]);

    let row: TableRow<u16, 1> = read_value(&image, addr.content() + 1);
    assert_eq!(row[0], 0xccbb);

    let single: Table<'_, u8, 1> = image.bind(wide).unwrap();
    assert_eq!(single.to_vec(), [TableRow::new([7]), TableRow::new([8])]);
}
