#![allow(dead_code)]

/// Fibonacci-hashed index: a fixed pattern that covers the full range
/// without visible structure. `offset` shifts where the sequence starts.
fn scramble(index: usize, offset: u64) -> u64 {
    (index as u64)
        .wrapping_add(offset)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

pub fn scrambled_u8(len: usize, offset: u64) -> Vec<u8> {
    (0..len).map(|i| (scramble(i, offset) >> 56) as u8).collect()
}

pub fn scrambled_u16(len: usize, offset: u64) -> Vec<u16> {
    (0..len).map(|i| (scramble(i, offset) >> 48) as u16).collect()
}

/// Horizontal gradient, darkest on the left.
pub fn gradient_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1, "gradient needs at least two columns");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = (x * 255 / (width - 1)) as u8;
        }
    }
    img
}

/// Two-level image, mostly white with a dark band at the top.
pub fn text_like_u8(width: usize, height: usize, dark_rows: usize) -> Vec<u8> {
    let mut img = vec![230u8; width * height];
    for px in img.iter_mut().take(dark_rows.min(height) * width) {
        *px = 25;
    }
    img
}
