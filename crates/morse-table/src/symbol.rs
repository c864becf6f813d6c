//! Morse Symbol Alphabet

/// One symbol of the encoded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorseSymbol {
    /// Short mark (`.`)
    Dot,
    /// Long mark (`-`)
    Dash,
    /// Inter-character gap (` `)
    Gap,
}

impl MorseSymbol {
    /// Parse a stream byte, `None` for anything outside the alphabet
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(MorseSymbol::Dot),
            b'-' => Some(MorseSymbol::Dash),
            b' ' => Some(MorseSymbol::Gap),
            _ => None,
        }
    }

    /// Byte representation used on the stream
    pub fn as_byte(&self) -> u8 {
        match self {
            MorseSymbol::Dot => b'.',
            MorseSymbol::Dash => b'-',
            MorseSymbol::Gap => b' ',
        }
    }
}
