//! transform.rs
//! Per-byte mapping and filtering.

/// Apply `f` to every byte. Output has the same length as `data`.
pub fn map<F>(mut f: F, data: &[u8]) -> Vec<u8>
where
    F: FnMut(u8) -> u8,
{
    data.iter().map(|&b| f(b)).collect()
}

/// Apply `f` to every byte without allocating.
pub fn map_in_place<F>(mut f: F, data: &mut [u8])
where
    F: FnMut(u8) -> u8,
{
    for b in data.iter_mut() {
        *b = f(*b);
    }
}

/// Keep the bytes for which `pred` holds, in order.
pub fn filter<F>(mut pred: F, data: &[u8]) -> Vec<u8>
where
    F: FnMut(u8) -> bool,
{
    data.iter().copied().filter(|&b| pred(b)).collect()
}

/// ASCII upper-case. Non-ASCII bytes are left alone.
pub fn to_upper(data: &[u8]) -> Vec<u8> {
    map(|b| b.to_ascii_uppercase(), data)
}

/// ASCII lower-case. Non-ASCII bytes are left alone.
pub fn to_lower(data: &[u8]) -> Vec<u8> {
    map(|b| b.to_ascii_lowercase(), data)
}

/// Split up to `num_lines` leading `\n`-terminated lines off `data`.
///
/// A trailing `\r` is stripped from each line. A last fragment without a
/// newline is not a line; it stays in the returned rest.
pub fn head(data: &[u8], num_lines: usize) -> (Vec<&[u8]>, &[u8]) {
    let mut lines = Vec::with_capacity(num_lines.min(64));
    let mut rest = data;

    while lines.len() < num_lines {
        let Some(pos) = rest.iter().position(|&b| b == b'\n') else {
            break;
        };
        let mut line = &rest[..pos];
        if let [head @ .., b'\r'] = line {
            line = head;
        }
        lines.push(line);
        rest = &rest[pos + 1..];
    }

    (lines, rest)
}
