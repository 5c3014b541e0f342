use transcode_core::{convert_utf16_to_utf8, convert_utf16_to_utf8_partial};

fn main() {
    // A supplementary-plane scalar (💩, U+1F4A9) as a surrogate pair.
    let src = [0xD83Du16, 0xDCA9];
    let mut dst = [0u8; 8];
    let written = convert_utf16_to_utf8(&src, &mut dst);
    println!("{:02X?}", &dst[..written]);

    // Feeding a destination too small to hold the whole thing: the
    // converter fills it with a bit-exact replacement instead of a partial
    // code point, and tells you how much source it actually consumed.
    let mut tiny = [0u8; 2];
    let (read, written) = convert_utf16_to_utf8_partial(&src, &mut tiny);
    println!("read={read} written={written} {:02X?}", &tiny[..written]);
}
