use bitlayout::{
    buffer_io::{BufferReader, BufferWriter},
    errors::FieldError,
    layout::Layout,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_write_single_fields() {
    init_logger();

    let mut data = vec![0u8; 1];
    BufferWriter::new(&mut data, Layout::msb0([8]))
        .unwrap()
        .write(0, 32u8)
        .unwrap();
    assert_eq!(data, [32]);

    let mut data = vec![0u8; 8];
    BufferWriter::new(&mut data, Layout::msb0([64]))
        .unwrap()
        .write(0, 323794u32)
        .unwrap();
    assert_eq!(data, [0, 0, 0, 0, 0, 4, 240, 210]);

    let mut data = vec![0u8; 4];
    BufferWriter::new(&mut data, Layout::msb0([32]))
        .unwrap()
        .write(0, 323794u32)
        .unwrap();
    assert_eq!(data, [0, 4, 240, 210]);
}

#[test]
fn test_write_flag_then_byte() {
    init_logger();

    let mut data = vec![0u8; 2];
    let mut writer = BufferWriter::new(&mut data, Layout::msb0([1, 8])).unwrap();

    writer.write(0, true).unwrap();
    assert_eq!(writer.data()[0], 0x80);

    writer.write(1, 128u8).unwrap();
    assert_eq!(writer.data(), &[0xC0, 0x00]);
}

#[test]
fn test_write_flag_then_u64() {
    let mut data = vec![0u8; 9];
    let mut writer = BufferWriter::new(&mut data, Layout::msb0([1, 64])).unwrap();

    writer.write(0, true).unwrap();
    assert_eq!(writer.data()[0], 128);

    writer.write(1, 64u64).unwrap();
    assert_eq!(writer.data(), &[128, 0, 0, 0, 0, 0, 0, 32, 0]);
}

#[test]
fn test_write_tcp_header() {
    init_logger();

    let mut data = vec![0u8; 24];
    let layout = Layout::msb0([16, 16, 32, 32, 4, 6, 1, 1, 1, 1, 1, 1, 16, 16, 16, 24, 8]);
    let mut writer = BufferWriter::new(&mut data, layout).unwrap();

    writer.write(0, 128u16).unwrap();
    assert_eq!(writer.data()[0..2], [0, 128]);
    writer.write(1, 255u16).unwrap();
    assert_eq!(writer.data()[2..4], [0, 255]);
    writer.write(2, 82000u32).unwrap();
    assert_eq!(writer.data()[4..8], [0, 1, 64, 80]);
    writer.write(3, 4000000u32).unwrap();
    assert_eq!(writer.data()[8..12], [0, 61, 9, 0]);

    writer.write(4, 8u8).unwrap();
    assert_eq!(writer.data()[12], 128);
    writer.write(5, 0u8).unwrap();
    assert_eq!(writer.data()[12..14], [128, 0]);

    let flags = [(6, true, 32), (7, false, 32), (8, true, 40), (9, true, 44), (10, false, 44), (11, true, 45)];
    for (index, flag, byte) in flags {
        writer.write(index, flag).unwrap();
        assert_eq!(writer.data()[13], byte, "after flag {index}");
    }

    writer.write(12, 8192u16).unwrap();
    assert_eq!(writer.data()[14..16], [32, 0]);
    writer.write(13, 12288u16).unwrap();
    assert_eq!(writer.data()[16..18], [48, 0]);
    writer.write(14, 12368u16).unwrap();
    assert_eq!(writer.data()[18..20], [48, 80]);
    writer.write(15, 2097152u32).unwrap();
    assert_eq!(writer.data()[20..24], [32, 0, 0, 0]);
    writer.write(16, 255u8).unwrap();
    assert_eq!(writer.data()[23], 255);

    let reader = writer.as_reader();
    assert_eq!(reader.read::<u32>(3).unwrap(), 4000000);
    assert_eq!(reader.read::<u8>(4).unwrap(), 8);
    assert!(reader.read::<bool>(11).unwrap());
    assert_eq!(reader.read::<u32>(15).unwrap(), 2097152);
}

#[test]
fn test_write_is_idempotent() {
    let layout = Layout::msb0([3, 11, 2]);

    let mut once = [0x5Au8; 2];
    BufferWriter::new(&mut once, layout).unwrap().write(1, 0x4D3u16).unwrap();

    let mut twice = [0x5Au8; 2];
    let mut writer = BufferWriter::new(&mut twice, layout).unwrap();
    writer.write(1, 0x4D3u16).unwrap();
    writer.write(1, 0x4D3u16).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_write_truncates_wide_value() {
    let mut data = [0u8; 2];
    let mut writer = BufferWriter::new(&mut data, Layout::lsb0([4, 8, 4])).unwrap();
    writer.write(1, 0xABCu16).unwrap();

    assert_eq!(writer.read::<u8>(1).unwrap(), 0xBC);
    assert_eq!(writer.data(), &[0x0B, 0xC0]);
}

#[test]
fn test_out_of_range_index() {
    let data = [0u8; 2];
    let reader = BufferReader::new(&data, Layout::msb0([4, 4])).unwrap();
    assert_eq!(
        reader.read::<u8>(2).unwrap_err(),
        FieldError::IndexOutOfRange { index: 2, count: 2 }
    );
}
