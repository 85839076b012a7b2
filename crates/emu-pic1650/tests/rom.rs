//! ROM image loader tests.

use std::io::Cursor;

use emu_pic1650::{ROM_BYTES, RomError, read_rom};

#[test]
fn words_are_little_endian() {
    let mut image = vec![0u8; ROM_BYTES];
    image[0] = 0x5A;
    image[1] = 0x0C;
    image[2] = 0xFF;
    image[3] = 0x01;
    let rom = read_rom(&mut Cursor::new(image)).expect("full image loads");
    assert_eq!(rom[0], 0x0C5A);
    assert_eq!(rom[1], 0x01FF);
    assert_eq!(rom[511], 0);
}

#[test]
fn bits_12_to_15_are_dropped() {
    let mut image = vec![0u8; ROM_BYTES];
    image[0] = 0x5A;
    image[1] = 0xFC;
    let rom = read_rom(&mut Cursor::new(image)).expect("full image loads");
    assert_eq!(rom[0], 0x0C5A, "the top nibble of each word carries nothing");
}

#[test]
fn short_image_is_rejected_with_the_byte_count() {
    let image = vec![0u8; 10];
    match read_rom(&mut Cursor::new(image)) {
        Err(RomError::TooShort(got)) => assert_eq!(got, 10),
        other => panic!("expected TooShort, got {other:?}"),
    }
}

#[test]
fn empty_stream_is_rejected() {
    match read_rom(&mut Cursor::new(Vec::new())) {
        Err(RomError::TooShort(0)) => {}
        other => panic!("expected TooShort(0), got {other:?}"),
    }
}

#[test]
fn trailing_bytes_are_left_unread() {
    let mut image = vec![0u8; ROM_BYTES + 4];
    image[ROM_BYTES] = 0xEE;
    let mut cursor = Cursor::new(image);
    read_rom(&mut cursor).expect("full image loads");
    assert_eq!(cursor.position(), ROM_BYTES as u64);
}
