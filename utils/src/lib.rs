//! Helpers shared across the blockscan crates.

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| hex.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x` prefix. Used in
/// tests to paste external vectors (block explorers, RPC dumps) without modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

/// Copies `bytes` into a `N`-byte array, keeping the rightmost bytes.
///
/// Shorter inputs are left-padded with zeros and longer inputs are cropped from the left, the
/// usual way an arbitrary-length big-endian value is squeezed into a fixed-width word.
pub fn right_aligned<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut word = [0u8; N];
    let bytes = &bytes[bytes.len().saturating_sub(N)..];
    word[N - bytes.len()..].copy_from_slice(bytes);
    word
}
