#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(1 << 26),
        ..Default::default()
    };
    let Ok(mut decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // Re-encoding and decoding again must produce the identical image
    let reencoded = encode_bmp(&decoded, enough::Unstoppable).expect("decoded image must encode");
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded, decoded2, "roundtrip mismatch");

    // Geometry transforms must keep the image encodable and consistent
    decoded.rotate90_left();
    decoded.flip_horizontal();
    let size = decoded.calculate_size();
    let encoded = encode_bmp(&decoded, enough::Unstoppable).expect("rotated image must encode");
    assert_eq!(encoded.len() as u64, size);
});
