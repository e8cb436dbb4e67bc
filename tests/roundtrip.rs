use zenbmp::*;

fn rgba(r: u8, g: u8, b: u8, a: u8) -> RGBA8 {
    RGBA8::new(r, g, b, a)
}

#[test]
fn bmp_roundtrip_rgba8() {
    let pixels = vec![
        rgba(255, 0, 0, 255),
        rgba(0, 255, 0, 128),
        rgba(0, 0, 255, 0), // row 0: R G B
        rgba(128, 128, 128, 255),
        rgba(64, 64, 64, 1),
        rgba(0, 0, 0, 255), // row 1: gray dark black
    ];
    let image = Image::from_pixels(pixels.clone(), 3, 2).unwrap();

    let encoded = encode_bmp(&image).unwrap();
    assert_eq!(&encoded[0..2], b"BM");
    assert_eq!(encoded.len(), 54 + 12 * 2);

    let decoded: Image<RGBA8> = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    for (out, orig) in decoded.pixels().iter().zip(&pixels) {
        assert_eq!(out.rgb(), orig.rgb());
        assert_eq!(out.a, 255, "alpha is never stored");
    }
}

#[test]
fn bmp_roundtrip_rgb8() {
    let pixels = vec![
        RGB8::new(1, 2, 3),
        RGB8::new(4, 5, 6),
        RGB8::new(7, 8, 9),
        RGB8::new(10, 11, 12),
    ];
    let image = Image::from_pixels(pixels, 2, 2).unwrap();
    let encoded = encode_bmp(&image).unwrap();
    let decoded: Image<RGB8> = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn zero_by_zero_is_headers_only() {
    let image = Image::<RGBA8>::default();
    let encoded = encode_bmp(&image).unwrap();
    assert_eq!(encoded.len(), 54);

    let decoded: Image<RGBA8> = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded.width(), 0);
    assert_eq!(decoded.height(), 0);
    assert!(decoded.is_empty());
}

#[test]
fn bottom_row_is_written_first() {
    let red = rgba(255, 0, 0, 255);
    let blue = rgba(0, 0, 255, 255);
    let image = Image::from_pixels(vec![red, blue], 1, 2).unwrap();
    let encoded = encode_bmp(&image).unwrap();

    assert_eq!(encoded.len(), 54 + 4 * 2);
    // first row on disk: blue as B,G,R plus one padding byte
    assert_eq!(&encoded[54..58], &[255, 0, 0, 0]);
    // second row: red
    assert_eq!(&encoded[58..62], &[0, 0, 255, 0]);
}

#[test]
fn padding_bytes_are_zero() {
    let image = Image::new(5, 3, rgba(0xAB, 0xCD, 0xEF, 0x12));
    let encoded = encode_bmp(&image).unwrap();
    let stride = row_stride(5) as usize;
    assert_eq!(stride, 16);
    for row in encoded[54..].chunks_exact(stride) {
        assert_eq!(&row[..3], &[0xEF, 0xCD, 0xAB]);
        assert_eq!(row[15], 0);
    }
}

#[test]
fn header_fields_match_layout() {
    let image = Image::new(4, 7, rgba(0, 0, 0, 255));
    let encoded = encode_bmp(&image).unwrap();
    let header = BmpHeader::from_bytes(&encoded).unwrap();

    assert!(header.file.has_signature());
    assert_eq!(header.file.file_size as usize, encoded.len());
    assert_eq!(header.file.reserved, 0);
    assert_eq!(header.file.pixel_offset, 54);
    assert_eq!(header.info.header_size, 40);
    assert_eq!(header.info.width, 4);
    assert_eq!(header.info.height, 7);
    assert_eq!(header.info.planes, 1);
    assert_eq!(header.info.bits_per_pixel, 24);
    assert_eq!(header.info.compression, 0);
    assert_eq!(header.info.image_size, 12 * 7);
    assert_eq!(header.info.x_pixels_per_meter, 11811);
    assert_eq!(header.info.y_pixels_per_meter, 11811);
    assert_eq!(header.info.colors_used, 0);
    assert_eq!(header.info.colors_important, 0x100_0000);
}

#[test]
fn custom_resolution_is_written() {
    let image = Image::new(1, 1, rgba(9, 9, 9, 255));
    let encoded = EncodeRequest::new()
        .with_pixels_per_meter(2835, 3780)
        .encode(&image)
        .unwrap();
    let header = BmpHeader::from_bytes(&encoded).unwrap();
    assert_eq!(header.info.x_pixels_per_meter, 2835);
    assert_eq!(header.info.y_pixels_per_meter, 3780);
}

#[test]
fn bad_signature_is_rejected() {
    let image = Image::new(2, 2, rgba(1, 2, 3, 255));
    let mut encoded = encode_bmp(&image).unwrap();
    encoded[0] = b'P';
    encoded[1] = b'6';
    match decode_bmp::<RGBA8>(&encoded) {
        Err(BmpError::UnrecognizedFormat) => {}
        other => panic!("expected UnrecognizedFormat, got {other:?}"),
    }
}

#[test]
fn truncated_rows_are_rejected() {
    let image = Image::new(3, 4, rgba(1, 2, 3, 255));
    let encoded = encode_bmp(&image).unwrap();
    for cut in [54, 55, encoded.len() - 12, encoded.len() - 1] {
        match decode_bmp::<RGBA8>(&encoded[..cut]) {
            Err(BmpError::UnexpectedEof) => {}
            other => panic!("cut at {cut}: expected UnexpectedEof, got {other:?}"),
        }
    }
}

#[test]
fn truncated_header_is_rejected() {
    assert!(matches!(
        decode_bmp::<RGBA8>(b"BM\x00\x00"),
        Err(BmpError::UnexpectedEof)
    ));
    assert!(matches!(decode_bmp::<RGBA8>(&[]), Err(BmpError::UnexpectedEof)));
}

#[test]
fn trailing_bytes_are_ignored() {
    let image = Image::new(2, 1, rgba(10, 20, 30, 255));
    let mut encoded = encode_bmp(&image).unwrap();
    encoded.extend_from_slice(b"trailing");
    let decoded: Image<RGBA8> = decode_bmp(&encoded).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn limits_reject_large() {
    let image = Image::new(4, 4, rgba(0, 0, 0, 255));
    let encoded = encode_bmp(&image).unwrap();

    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    let result = DecodeRequest::new()
        .with_limits(&limits)
        .decode::<RGBA8>(&encoded);
    match result.unwrap_err() {
        BmpError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(16 * 4 - 1),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new()
            .with_limits(&limits)
            .decode::<RGBA8>(&encoded),
        Err(BmpError::LimitExceeded(_))
    ));
    // RGB8 output is smaller and fits
    assert!(
        DecodeRequest::new()
            .with_limits(&limits)
            .decode::<RGB8>(&encoded)
            .is_ok()
    );
}

#[test]
fn stream_and_slice_agree() {
    let image = Image::new(7, 3, rgba(200, 100, 50, 255));
    let mut streamed = Vec::new();
    write_bmp(&image, &mut streamed).unwrap();
    assert_eq!(streamed, encode_bmp(&image).unwrap());

    let decoded: Image<RGBA8> = read_bmp(streamed.as_slice()).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn stream_read_stops_after_last_row() {
    let image = Image::new(1, 1, rgba(1, 2, 3, 255));
    let mut data = encode_bmp(&image).unwrap();
    data.extend_from_slice(b"next");

    let mut reader = data.as_slice();
    let _: Image<RGBA8> = DecodeRequest::new().read(&mut reader).unwrap();
    assert_eq!(reader, b"next");
}

#[test]
fn stream_truncation_is_eof_not_io() {
    let image = Image::new(3, 3, rgba(1, 2, 3, 255));
    let encoded = encode_bmp(&image).unwrap();
    for cut in [10, 60] {
        match read_bmp::<RGBA8, _>(&encoded[..cut]) {
            Err(BmpError::UnexpectedEof) => {}
            other => panic!("cut at {cut}: expected UnexpectedEof, got {other:?}"),
        }
    }
}

#[test]
fn save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.bmp");

    let image = Image::from_pixels(
        (0..12u8).map(|i| rgba(i, i * 2, i * 3, 77)).collect(),
        4,
        3,
    )
    .unwrap();
    save_bmp(&image, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 54 + 12 * 3);

    let loaded: Image<RGBA8> = load_bmp(&path).unwrap();
    for (out, orig) in loaded.pixels().iter().zip(image.pixels()) {
        assert_eq!(out.rgb(), orig.rgb());
        assert_eq!(out.a, 255);
    }
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    match load_bmp::<RGBA8>(dir.path().join("missing.bmp")) {
        Err(BmpError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.bmp");
    let image = Image::new(1, 1, rgba(0, 0, 0, 255));
    assert!(matches!(save_bmp(&image, &path), Err(BmpError::Io(_))));
}

#[test]
fn failing_writer_reports_error() {
    struct Full;
    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let image = Image::new(2, 2, rgba(0, 0, 0, 255));
    assert!(matches!(write_bmp(&image, Full), Err(BmpError::Io(_))));
}
