//! Proquint words - pronounceable encoding of binary data
//!
//! Every 16-bit big-endian chunk becomes one five-letter word laid out as
//! consonant-vowel-consonant-vowel-consonant, taking bits
//! `[15:12] [11:10] [9:6] [5:4] [3:0]`. Words are joined with `-`.
//!
//! Odd-length input is padded with a single zero byte, so decoding always
//! yields an even number of bytes.
//!
//! ```
//! use fingerprint_core::words::{from_words, to_words};
//!
//! assert_eq!(to_words(&[0x7f, 0x00, 0x00, 0x01]), "lusab-babad");
//! assert_eq!(from_words("lusab-babad").unwrap(), vec![0x7f, 0x00, 0x00, 0x01]);
//! ```

use arrayvec::ArrayVec;

use crate::error::{Error, Result};
use crate::types::{CONSONANTS, SEPARATOR, VOWELS, WORD_LEN};

/// Marks a byte that is not in the table's alphabet.
const NOT_MEMBER: u8 = 0xff;

const fn build_index(alphabet: &[u8]) -> [u8; 256] {
    let mut table = [NOT_MEMBER; 256];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Both alphabets in one table; they are disjoint, so indices never collide.
const fn build_shared_index() -> [u8; 256] {
    let mut table = build_index(&CONSONANTS);
    let mut i = 0;
    while i < VOWELS.len() {
        table[VOWELS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static CONSONANT_INDEX: [u8; 256] = build_index(&CONSONANTS);
static VOWEL_INDEX: [u8; 256] = build_index(&VOWELS);
static SHARED_INDEX: [u8; 256] = build_shared_index();

/// 4-bit index of a proquint consonant.
#[inline]
pub fn consonant_index(byte: u8) -> Option<u8> {
    match CONSONANT_INDEX[byte as usize] {
        NOT_MEMBER => None,
        i => Some(i),
    }
}

/// 2-bit index of a proquint vowel.
#[inline]
pub fn vowel_index(byte: u8) -> Option<u8> {
    match VOWEL_INDEX[byte as usize] {
        NOT_MEMBER => None,
        i => Some(i),
    }
}

/// Per-position field layout: (shift, is_vowel).
const FIELDS: [(u32, bool); WORD_LEN] = [(12, false), (10, true), (6, false), (4, true), (0, false)];

fn encode_word(w: u16, out: &mut String) {
    let mut word: ArrayVec<u8, WORD_LEN> = ArrayVec::new();
    for (shift, is_vowel) in FIELDS {
        let c = if is_vowel {
            VOWELS[((w >> shift) & 0x3) as usize]
        } else {
            CONSONANTS[((w >> shift) & 0xf) as usize]
        };
        word.push(c);
    }
    out.extend(word.iter().map(|&b| b as char));
}

/// Encode `bytes` as dash-separated proquint words.
///
/// An odd trailing byte is encoded as if followed by `0x00`.
pub fn to_words(bytes: &[u8]) -> String {
    let n_words = bytes.len().div_ceil(2);
    let mut out = String::with_capacity(n_words * (WORD_LEN + 1));

    for (i, chunk) in bytes.chunks(2).enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        let hi = chunk[0];
        let lo = chunk.get(1).copied().unwrap_or(0);
        encode_word(u16::from_be_bytes([hi, lo]), &mut out);
    }
    out
}

/// How characters are looked up while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unknown {
    /// Only the alphabet for the position is accepted; anything else fails.
    Reject,
    /// Either alphabet is accepted in any position; anything else reads as 0.
    Zero,
}

fn lookup(ch: char, is_vowel: bool, unknown: Unknown) -> Option<u8> {
    let b = u8::try_from(ch).ok()?;
    match unknown {
        Unknown::Reject if is_vowel => vowel_index(b),
        Unknown::Reject => consonant_index(b),
        Unknown::Zero => match SHARED_INDEX[b as usize] {
            NOT_MEMBER => Some(0),
            i => Some(i),
        },
    }
}

fn decode(s: &str, unknown: Unknown) -> Result<Vec<u8>> {
    // A dangling partial word is reported ahead of any bad character.
    let leftover = s.chars().filter(|&c| c != SEPARATOR).count() % WORD_LEN;
    if leftover != 0 {
        log::debug!("proquint input ends with {} dangling characters", leftover);
        return Err(Error::IncompleteQuintet { leftover });
    }

    let mut out = Vec::with_capacity(2 * s.len() / (WORD_LEN + 1) + 2);
    let mut quintet: ArrayVec<u16, WORD_LEN> = ArrayVec::new();

    for (position, ch) in s.chars().enumerate() {
        if ch == SEPARATOR {
            continue;
        }

        let (_, is_vowel) = FIELDS[quintet.len()];
        let index = match lookup(ch, is_vowel, unknown) {
            Some(i) => i,
            None if unknown == Unknown::Zero => 0,
            None => {
                log::debug!("rejecting {:?} at position {} of proquint input", ch, position);
                return Err(Error::InvalidCharacter { ch, position });
            }
        };
        quintet.push(index as u16);

        if quintet.is_full() {
            // Fields are ORed unmasked: in lenient mode a consonant index above
            // 3 in a vowel slot spills into the field above it.
            let w = FIELDS
                .iter()
                .zip(quintet.drain(..))
                .fold(0u16, |w, (&(shift, _), field)| w | (field << shift));
            out.extend_from_slice(&w.to_be_bytes());
        }
    }

    debug_assert!(quintet.is_empty());
    Ok(out)
}

/// Decode dash-separated proquint words back to bytes.
///
/// Separators are skipped wherever they appear. Every character must belong to
/// the consonant or vowel table required at its position within the word.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] for a character outside its table.
/// - [`Error::IncompleteQuintet`] when 1-4 characters remain after the last
///   complete word.
pub fn from_words(s: &str) -> Result<Vec<u8>> {
    decode(s, Unknown::Reject)
}

/// Like [`from_words`], but nothing is rejected character by character.
///
/// Consonants and vowels share one lookup table, so a letter from either
/// alphabet decodes to its own index in any position, and a consonant in a
/// vowel slot carries its high bits into the neighbouring field. Characters
/// outside both alphabets read as index 0. Only [`Error::IncompleteQuintet`]
/// is reported.
pub fn from_words_lenient(s: &str) -> Result<Vec<u8>> {
    decode(s, Unknown::Zero)
}
