use std::path::PathBuf;

use enough::Unstoppable;
use zenbmp::*;

/// Hand-built BMP file, independent of the encoder. `rows` are top-down RGB.
fn build_bmp(
    rows: &[Vec<[u8; 3]>],
    reserved: u32,
    image_size: u32,
    file_size: Option<u32>,
) -> Vec<u8> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, Vec::len) as u32;
    let pad = (4 - (width as usize * 3) % 4) % 4;
    let computed = 54 + (width as usize * 3 + pad) * height as usize;

    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&file_size.unwrap_or(computed as u32).to_le_bytes());
    data.extend_from_slice(&reserved.to_le_bytes());
    data.extend_from_slice(&54u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&image_size.to_le_bytes());
    data.extend_from_slice(&3780u32.to_le_bytes());
    data.extend_from_slice(&3779u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    for row in rows.iter().rev() {
        for &[r, g, b] in row {
            data.extend_from_slice(&[b, g, r]);
        }
        data.extend(std::iter::repeat_n(0u8, pad));
    }
    data
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zenbmp-{}-{name}.bmp", std::process::id()))
}

#[test]
fn decode_hand_built_file() {
    let rows = vec![
        vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]],
        vec![[128, 128, 128], [64, 64, 64], [0, 0, 0]],
    ];
    let data = build_bmp(&rows, 0, 0, None);
    let image = decode_bmp(&data, Unstoppable).unwrap();

    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 2);
    assert_eq!(image.padding(), 3);
    assert_eq!(image.header().signature, 0x424d);
    assert_eq!(image.header().file_size, 54 + 12 * 2);
    assert_eq!(image.info_header().x_pixels_per_meter, 3780);
    assert_eq!(image.pixels()[0][0], Pixel::new(255, 0, 0));
    assert_eq!(image.pixels()[0][2], Pixel::new(0, 0, 255));
    assert_eq!(image.pixels()[1][1], Pixel::new(64, 64, 64));
}

#[test]
fn encode_is_byte_identical() {
    // Odd advisory fields must survive untouched.
    let rows: Vec<Vec<[u8; 3]>> = (0..5u8)
        .map(|y| (0..7u8).map(|x| [x * 30, y * 50, x ^ y]).collect())
        .collect();
    let data = build_bmp(&rows, 0xdead_beef, 0, Some(12345));
    let image = decode_bmp(&data, Unstoppable).unwrap();
    assert_eq!(image.header().reserved, 0xdead_beef);
    assert_eq!(encode_bmp(&image, Unstoppable).unwrap(), data);
}

#[test]
fn encode_decode_preserves_pixels() {
    let grid: Vec<Vec<Pixel>> = (0..3u8)
        .map(|y| (0..5u8).map(|x| Pixel::new(x, y, 200)).collect())
        .collect();
    let image = Image::from_pixels(grid.clone()).unwrap();
    let encoded = image.encode(Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");
    let decoded = Image::decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &grid[..]);
    assert_eq!(decoded, image);
}

#[test]
fn save_then_load() {
    let path = temp_path("save-load");
    let rows = vec![vec![[1, 2, 3], [4, 5, 6]], vec![[7, 8, 9], [10, 11, 12]]];
    let data = build_bmp(&rows, 0, 16, None);
    let image = decode_bmp(&data, Unstoppable).unwrap();

    save(&image, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), data);

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, image);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn transformed_image_saves_consistent_sizes() {
    let path = temp_path("transformed");
    let grid = vec![vec![Pixel::new(9, 8, 7); 5]; 2];
    let mut image = Image::from_pixels(grid).unwrap();
    image.rotate90_left();
    image.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() as u64, image.calculate_size());
    assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), bytes.len() as u32);
    let loaded = Image::load(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (2, 5));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn write_to_matches_encode() {
    let image = Image::from_pixels(vec![vec![Pixel::WHITE; 3]; 3]).unwrap();
    let mut out = Vec::new();
    image.write_to(&mut out).unwrap();
    assert_eq!(out, image.encode(Unstoppable).unwrap());
}

#[test]
fn missing_file_is_file_open_error() {
    let path = temp_path("does-not-exist");
    match load(&path) {
        Err(BmpError::FileOpen { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected FileOpen, got {other:?}"),
    }
}

#[test]
fn save_into_missing_directory_is_file_open_error() {
    let image = Image::from_pixels(vec![vec![Pixel::BLACK]]).unwrap();
    let path = std::env::temp_dir()
        .join(format!("zenbmp-missing-dir-{}", std::process::id()))
        .join("out.bmp");
    assert!(matches!(image.save(&path), Err(BmpError::FileOpen { .. })));
}

#[test]
fn wrong_signature_is_invalid_format() {
    let mut data = build_bmp(&vec![vec![[0, 0, 0]; 2]; 2], 0, 0, None);
    data[0] = b'X';
    data[1] = b'Y';
    assert!(matches!(
        decode_bmp(&data, Unstoppable),
        Err(BmpError::InvalidFormat(ProfileViolation::Signature(0x5859)))
    ));
}

#[test]
fn unsupported_profile_is_invalid_format() {
    let base = build_bmp(&vec![vec![[0, 0, 0]; 2]; 2], 0, 0, None);
    let cases: [(usize, &[u8], ProfileViolation); 4] = [
        (10, &[0x36, 0x04], ProfileViolation::DataOffset(0x436)),
        (28, &[32, 0], ProfileViolation::BitsPerPixel(32)),
        (30, &[1], ProfileViolation::Compression(1)),
        (46, &[0, 1], ProfileViolation::ColorsUsed(256)),
    ];
    for (offset, patch, expected) in cases {
        let mut data = base.clone();
        data[offset..offset + patch.len()].copy_from_slice(patch);
        match decode_bmp(&data, Unstoppable) {
            Err(BmpError::InvalidFormat(v)) => assert_eq!(v, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }
}

#[test]
fn truncated_file_is_unexpected_eof() {
    let data = build_bmp(&vec![vec![[1, 2, 3]; 3]; 3], 0, 0, None);
    for len in [0, 1, 13, 20, 53, 60] {
        assert!(
            matches!(decode_bmp(&data[..len], Unstoppable), Err(BmpError::UnexpectedEof)),
            "len {len}"
        );
    }
}

#[test]
fn truncated_file_on_disk_is_unexpected_eof() {
    let path = temp_path("truncated");
    let data = build_bmp(&vec![vec![[1, 2, 3]; 4]; 4], 0, 0, None);
    std::fs::write(&path, &data[..30]).unwrap();
    assert!(matches!(load(&path), Err(BmpError::UnexpectedEof)));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn limits_reject_large() {
    let data = build_bmp(&[vec![[0, 0, 0]; 2]], 0, 0, None);
    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable);
    match result.unwrap_err() {
        BmpError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    assert!(DecodeRequest::new(&data).decode(Unstoppable).is_ok());
}
