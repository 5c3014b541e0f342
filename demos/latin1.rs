use transcode_core::{convert_latin1_to_utf8, is_utf8_latin1};

fn main() {
    let latin1 = [b'c', b'a', b'f', 0xE9]; // "café" in Latin-1
    let mut utf8 = [0u8; 8];
    let written = convert_latin1_to_utf8(&latin1, &mut utf8);
    let s = transcode_core::from_utf8(&utf8[..written]).unwrap();
    println!("{s}");

    println!("is_utf8_latin1({s:?}) = {}", is_utf8_latin1(s.as_bytes()));
    println!("is_utf8_latin1(\"日本語\") = {}", is_utf8_latin1("日本語".as_bytes()));
}
