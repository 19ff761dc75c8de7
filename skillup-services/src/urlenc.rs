//! Minimal percent-encoding (avoids pulling a URL crate for two query
//! parameters).

/// Percent-encode a string for use in a URL query component. Unreserved
/// characters (RFC 3986 §2.3) pass through; everything else is encoded
/// byte-wise as uppercase `%XX`.
pub(crate) fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(hex_digit(byte >> 4));
                out.push(hex_digit(byte & 0x0f));
            }
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        _ => (b'A' + nibble - 10) as char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_passes_through() {
        assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn spaces_and_utf8_are_encoded() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(
            percent_encode("Link inválido ou expirado."),
            "Link%20inv%C3%A1lido%20ou%20expirado."
        );
    }
}
