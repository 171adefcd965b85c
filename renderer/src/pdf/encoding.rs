/// Encode text for the standard fonts' WinAnsi encoding.
///
/// Characters outside the encoding become `?`. Tabs become four spaces.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.extend_from_slice(b"    "),
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => out.push(c as u32 as u8),
            _ => out.push(win_ansi_extra(c).unwrap_or(b'?')),
        }
    }
    out
}

fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

/// Write encoded bytes as a PDF literal string, parentheses included.
pub fn write_literal(out: &mut Vec<u8>, encoded: &[u8]) {
    out.push(b'(');
    for &b in encoded {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            0x20..=0x7e | 0x80..=0xff => out.push(b),
            _ => out.extend_from_slice(format!("\\{:03o}", b).as_bytes()),
        }
    }
    out.push(b')');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        assert_eq!(encode_win_ansi("abc é"), vec![b'a', b'b', b'c', b' ', 0xe9]);
    }

    #[test]
    fn typographic_characters_map_into_win_ansi() {
        assert_eq!(
            encode_win_ansi("• – — “x”"),
            vec![0x95, b' ', 0x96, b' ', 0x97, b' ', 0x93, b'x', 0x94]
        );
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        assert_eq!(encode_win_ansi("✅ ok"), b"? ok".to_vec());
    }

    #[test]
    fn literal_escapes_delimiters() {
        let mut out = Vec::new();
        write_literal(&mut out, b"f(x) \\ y");
        assert_eq!(out, b"(f\\(x\\) \\\\ y)".to_vec());
    }
}
