use image::{ImageBuffer, Rgb, Rgba};
use std::path::Path;

/// Writes a flat-colored RGB PNG of the given size as a batch input fixture.
pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgb([200, 30, 90]));
    img.save(path).expect("write fixture PNG");
}

/// Writes a translucent RGBA PNG; only its size matters to the generator.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgba([10, 20, 30, 40]));
    img.save(path).expect("write fixture PNG");
}

/// Asserts that the PNG at `path` is an 8-bit RGB checkerboard of the given size.
pub fn assert_checkerboard(path: &Path, width: u32, height: u32) {
    let decoded = image::open(path).expect("decode generated PNG");
    assert_eq!(decoded.color(), image::ColorType::Rgb8, "{}", path.display());
    let rgb = decoded.into_rgb8();
    assert_eq!(rgb.dimensions(), (width, height), "{}", path.display());
    for (x, y, px) in rgb.enumerate_pixels() {
        let expected = if (x + y) % 2 == 0 { [255; 3] } else { [0; 3] };
        assert_eq!(px.0, expected, "pixel ({x}, {y}) of {}", path.display());
    }
}

/// Writes a PNG whose header declares `width x height` but carries no pixel data.
///
/// Decoding fails; only header readers such as `image::image_dimensions` succeed.
pub fn write_png_header_only(path: &Path, width: u32, height: u32) {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]); // 8-bit RGB, no interlace

    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    push_chunk(&mut bytes, b"IHDR", &ihdr);
    push_chunk(&mut bytes, b"IDAT", &[]);
    push_chunk(&mut bytes, b"IEND", &[]);
    std::fs::write(path, bytes).expect("write header-only PNG");
}

fn push_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let start = out.len();
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    let crc = crc32(&out[start..]);
    out.extend_from_slice(&crc.to_be_bytes());
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= u32::from(b);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}
