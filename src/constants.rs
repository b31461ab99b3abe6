//! Static phonological tables consulted by [`crate::cluster`] and
//! [`crate::prosody`].

use phf::phf_map;

use crate::prosody::NaturalLength;

/// Natural length of single (non-diphthong) base vowels, ignoring position,
/// circumflex, correption, and synizesis (§4.3). Diphthongs are always
/// [`NaturalLength::Long`] and are not looked up here.
pub static VOWEL_NATURAL_LENGTH: phf::Map<char, NaturalLength> = phf_map! {
    'ε' => NaturalLength::Short,
    'ο' => NaturalLength::Short,
    'η' => NaturalLength::Long,
    'ω' => NaturalLength::Long,
    'α' => NaturalLength::Indeterminate,
    'ι' => NaturalLength::Indeterminate,
    'υ' => NaturalLength::Indeterminate,
};

/// Ordered base-vowel pairs recognized as diphthongs (§6).
#[rustfmt::skip]
pub const DIPHTHONGS: [(char, char); 8] = [
    ('α', 'ι'), ('α', 'υ'),
    ('ε', 'ι'), ('ε', 'υ'),
    ('η', 'υ'),
    ('ο', 'ι'), ('ο', 'υ'),
    ('υ', 'ι'),
];

/// Consonants that count double toward the "followed by two consonants"
/// positional-lengthening rule (§4.3).
pub const LONG_CONSONANTS: [char; 3] = ['ζ', 'ξ', 'ψ'];

/// The rho code point, carved out because the positional-lengthening rule
/// gives it special (and deliberately imperfect) treatment: a rho counts
/// only when it is the first consonant encountered after the vowel — once
/// another consonant in the same run has already been tallied, a
/// subsequent rho is skipped (§4.3, §9).
pub const RHO: char = 'ρ';

/// Vowel-cluster text values eligible for synizesis (§4.3).
///
/// Preserved exactly as specified: noted there as possibly incomplete, and
/// deliberately not extended.
pub const SYNIZESIS_CANDIDATES: [&str; 2] = ["ε", "ε\u{0301}"];
