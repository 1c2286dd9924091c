use phf::phf_map;

pub const UTF8_SPACE: u8 = 32;
pub const UTF8_PLUS: u8 = 43;
pub const UTF8_ONE: u8 = 49;
pub const UTF8_TWO: u8 = 50;

/// The bases that the random strand generator draws from, in draw order.
pub const DNA_ALPHABET: [u8; 4] = [b'A', b'T', b'G', b'C'];

/// maps from \<UTF8 base\> -> \<canonical upper case UTF8 base\>
pub const UTF8_TO_CANONICAL_DNA: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 65,   // A
    67u8 => 67,   // C
    71u8 => 71,   // G
    84u8 => 84,   // T
    // lower case
    97u8 => 65,   // a
    99u8 => 67,   // c
    103u8 => 71,  // g
    116u8 => 84,  // t
};
