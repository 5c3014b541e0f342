use transcode_core::from_utf8;

fn main() -> transcode_core::Result<()> {
    let data = b"hello world!";

    let str = from_utf8(data)?;
    println!("{str}");

    Ok(())
}
