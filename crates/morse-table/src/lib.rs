//! Morse Translation Table
//!
//! Maps single ASCII bytes to International Morse symbol sequences. Every
//! sequence ends with one gap symbol marking the inter-character space.

mod symbol;
mod table;

pub use symbol::MorseSymbol;
pub use table::{encode, translate, Translation, MAX_CODE_LEN};
