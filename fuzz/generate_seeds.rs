#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: u32, height: u32, fill: [u8; 3]) -> Vec<u8> {
    let pad = ((4 - (width * 3) % 4) % 4) as usize;
    let data_size = (width as usize * 3 + pad) * height as usize;
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + data_size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&(data_size as u32).to_le_bytes());
    for _ in 0..height {
        for _ in 0..width {
            bmp.extend_from_slice(&fill);
        }
        bmp.extend(std::iter::repeat_n(0u8, pad));
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1, [0xff, 0, 0])).unwrap();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp24(3, 2, [0x10, 0x20, 0x30])).unwrap();
    fs::write(format!("{dir}/bmp_4x4.bmp"), bmp24(4, 4, [0, 0xff, 0])).unwrap();

    // Editors sometimes append two zero bytes
    let mut trailing = bmp24(2, 2, [1, 2, 3]);
    trailing.extend_from_slice(&[0, 0]);
    fs::write(format!("{dir}/bmp_trailing.bmp"), trailing).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let full = bmp24(5, 5, [9, 9, 9]);
    fs::write(format!("{dir}/bmp_truncated.bin"), &full[..70]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
