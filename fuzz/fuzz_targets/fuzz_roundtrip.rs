#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode_bmp::<RGBA8>(data) else {
        return;
    };

    let reencoded = encode_bmp(&decoded).expect("decoded image must re-encode");
    assert_eq!(
        reencoded.len(),
        54 + row_stride(decoded.width()) as usize * decoded.height() as usize
    );
    let Ok(decoded2) = decode_bmp::<RGBA8>(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
});
