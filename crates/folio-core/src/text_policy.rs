//! Small text helpers for labels and catalog search.

use core::str;

/// Case-insensitive substring test. A blank needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }

    haystack
        .char_indices()
        .any(|(start, _)| starts_with_ignore_case(&haystack[start..], needle))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text_chars.next() == Some(expected))
}

/// Writes `"<index>/<total>"` into `out`, e.g. `"2/5"`.
pub fn section_progress_label(index: u16, total: u16, out: &mut [u8]) -> &str {
    let mut len = write_u16_ascii(index, out);
    if len + 1 < out.len() {
        out[len] = b'/';
        len += 1;
        len += write_u16_ascii(total, &mut out[len..]);
    }

    str::from_utf8(&out[..len]).unwrap_or("")
}

pub fn write_u16_ascii(mut value: u16, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 5];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}
