#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::{DecodeRequest, Limits, RGBA8, Validation};

fuzz_target!(|data: &[u8]| {
    // Must never panic, in either validation mode or through the reader path
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let _ = zenbmp::decode_bmp::<RGBA8>(data);
    let _ = DecodeRequest::new()
        .with_limits(&limits)
        .with_validation(Validation::Strict)
        .decode::<RGBA8>(data);
    let _ = zenbmp::read_bmp::<RGBA8, _>(data);
});
