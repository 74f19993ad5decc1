#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and must not allocate beyond what the header permits
    let limits = zenbmp::Limits {
        max_pixels: Some(1 << 22),
        max_memory_bytes: Some(1 << 26),
        ..Default::default()
    };
    let _ = zenbmp::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
