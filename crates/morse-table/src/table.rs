//! Character to Morse Lookup

/// Longest sequence in the table, separator included
pub const MAX_CODE_LEN: usize = 7;

/// Result of translating one input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// Symbol sequence including the trailing gap
    Code(&'static [u8]),
    /// Byte has no Morse mapping and must be skipped
    Unsupported(u8),
}

impl Translation {
    /// Symbol bytes, empty for unsupported input
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Translation::Code(code) => code,
            Translation::Unsupported(_) => &[],
        }
    }

    /// Whether the byte had a mapping
    pub fn is_supported(&self) -> bool {
        matches!(self, Translation::Code(_))
    }

    /// Number of symbol bytes produced
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for unsupported input
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Translate a single byte. Letters are case-insensitive.
pub fn translate(byte: u8) -> Translation {
    let code: &'static [u8] = match byte.to_ascii_uppercase() {
        b'0' => b"----- ",
        b'1' => b".---- ",
        b'2' => b"..--- ",
        b'3' => b"...-- ",
        b'4' => b"....- ",
        b'5' => b"..... ",
        b'6' => b"-.... ",
        b'7' => b"--... ",
        b'8' => b"---.. ",
        b'9' => b"----. ",

        b'A' => b".- ",
        b'B' => b"-... ",
        b'C' => b"-.-. ",
        b'D' => b"-.. ",
        b'E' => b". ",
        b'F' => b"..-. ",
        b'G' => b"--. ",
        b'H' => b".... ",
        b'I' => b".. ",
        b'J' => b".--- ",
        b'K' => b"-.- ",
        b'L' => b".-.. ",
        b'M' => b"-- ",
        b'N' => b"-. ",
        b'O' => b"--- ",
        b'P' => b".--. ",
        b'Q' => b"--.- ",
        b'R' => b".-. ",
        b'S' => b"... ",
        b'T' => b"- ",
        b'U' => b"..- ",
        b'V' => b"...- ",
        b'W' => b".-- ",
        b'X' => b"-..- ",
        b'Y' => b"-.-- ",
        b'Z' => b"--.. ",

        b'"' => b".-..-. ",
        b'\'' => b".----. ",
        b'(' => b"-.--. ",
        b')' => b"-.--.- ",
        b'*' => b"-..- ",
        b'+' => b".-.-. ",
        b',' => b"--..-- ",
        b'-' => b"-....- ",
        b'.' => b".-.-.- ",
        b'/' => b"-..-. ",
        b':' => b"---... ",
        b'=' => b"-...- ",
        b'?' => b"..--.. ",
        b'@' => b".--.-. ",

        _ => return Translation::Unsupported(byte),
    };
    Translation::Code(code)
}

/// Concatenate the translations of every supported byte in `input`
pub fn encode(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .flat_map(|&byte| translate(byte).as_bytes().iter().copied())
        .collect()
}
