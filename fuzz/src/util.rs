/// Interprets `data` as little endian `i32` values, trailing bytes are ignored.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Splits off the last value as search target and sorts the rest.
pub fn sorted_and_target(data: &[u8]) -> Option<(Vec<i32>, i32)> {
    let mut v = u8_as_i32(data);
    let target = v.pop()?;
    v.sort_unstable();

    Some((v, target))
}
