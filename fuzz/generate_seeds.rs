#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bpp: u16, rows: &[&[u8]]) -> Vec<u8> {
    let stride = (4 * ((3 * width.max(0) as usize + 3) / 4)) as usize;
    let data_len = stride * rows.len();
    let mut out = vec![0u8; 54];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&((54 + data_len) as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    out[34..38].copy_from_slice(&(data_len as u32).to_le_bytes());
    for row in rows {
        let mut padded = row.to_vec();
        padded.resize(stride, 0);
        out.extend_from_slice(&padded);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 24, &[b"\xff\x00\x00"])).unwrap();
    fs::write(
        format!("{dir}/bmp_2x2.bmp"),
        bmp(2, 2, 24, &[b"\x00\xff\x00\x00\xff\x00", b"\xff\xff\xff\x00\x00\x00"]),
    )
    .unwrap();
    fs::write(format!("{dir}/bmp_0x0.bmp"), bmp(0, 0, 24, &[])).unwrap();
    fs::write(format!("{dir}/bmp_32bpp.bmp"), bmp(1, 1, 32, &[b"\x01\x02\x03"])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/top_down.bin"), bmp(1, -1, 24, &[])).unwrap();
    fs::write(format!("{dir}/rows_missing.bin"), bmp(4, 4, 24, &[b"\x00"])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
