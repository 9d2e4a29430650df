//! Growable bit storage backing every tape.
//!
//! Bits are packed into little-endian `u64` words: position `p` lives in word
//! `p / 64` at bit `p % 64`. Words are materialized only when a 1 is written
//! past the current end, so reading any position that was never set yields 0
//! without allocating.
//!
//! Read as a whole, the vector is an unsigned integer whose least significant
//! bit is position 0. `Display` prints that integer in decimal, the format the
//! machine's work tape is traditionally traced in.

use super::TapeError;
use std::fmt;
use std::hash::{Hash, Hasher};

const WORD_BITS: u64 = u64::BITS as u64;

/// Largest power of ten that fits in a `u64`, used as the decimal radix chunk.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// An unbounded sequence of bits, all initially 0.
///
/// # Example
///
/// ```rust
/// use monotone::tape::BitVector;
///
/// let mut bits = BitVector::new();
/// assert!(!bits.get(10_000));
///
/// bits.set(3, true).unwrap();
/// bits.flip(0).unwrap();
/// assert_eq!(bits.to_string(), "9");
/// assert_eq!(format!("{:b}", bits), "1001");
/// ```
#[derive(Clone, Default)]
pub struct BitVector {
    words: Vec<u64>,
}

impl BitVector {
    /// Create an all-zero vector.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a vector from bits in position order (first item = position 0).
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut words = Vec::new();
        for (pos, bit) in bits.into_iter().enumerate() {
            let pos = pos as u64;
            let index = (pos / WORD_BITS) as usize;
            if index >= words.len() {
                words.push(0);
            }
            if bit {
                words[index] |= 1 << (pos % WORD_BITS);
            }
        }
        Self { words }
    }

    /// Build a vector from little-endian words.
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Read the bit at `pos`. Never-written positions read 0.
    pub fn get(&self, pos: u64) -> bool {
        let Some(word) = word_index(pos).and_then(|index| self.words.get(index)) else {
            return false;
        };
        (word >> (pos % WORD_BITS)) & 1 == 1
    }

    /// Store `bit` at `pos`, growing storage when a 1 lands past the end.
    pub fn set(&mut self, pos: u64, bit: bool) -> Result<(), TapeError> {
        let mask = 1u64 << (pos % WORD_BITS);
        if bit {
            *self.grow_to(pos)? |= mask;
        } else if let Some(word) = word_index(pos).and_then(|index| self.words.get_mut(index)) {
            *word &= !mask;
        }
        Ok(())
    }

    /// Invert the bit at `pos`, returning its new value.
    pub fn flip(&mut self, pos: u64) -> Result<bool, TapeError> {
        let bit = !self.get(pos);
        self.set(pos, bit)?;
        Ok(bit)
    }

    /// Materialize storage for `pos` so a later write there cannot fail.
    pub fn reserve(&mut self, pos: u64) -> Result<(), TapeError> {
        self.grow_to(pos).map(|_| ())
    }

    fn grow_to(&mut self, pos: u64) -> Result<&mut u64, TapeError> {
        let index = word_index(pos).ok_or(TapeError::Exhausted { position: pos })?;
        if index >= self.words.len() {
            let additional = index + 1 - self.words.len();
            self.words
                .try_reserve(additional)
                .map_err(|_| TapeError::Exhausted { position: pos })?;
            self.words.resize(index + 1, 0);
        }
        Ok(&mut self.words[index])
    }

    /// Number of bits up to and including the highest set bit.
    pub fn significant_bits(&self) -> u64 {
        let words = self.words();
        match words.last() {
            Some(top) => {
                (words.len() as u64 - 1) * WORD_BITS + u64::from(u64::BITS - top.leading_zeros())
            }
            None => 0,
        }
    }

    /// Number of bits currently backed by storage.
    pub fn capacity_bits(&self) -> u64 {
        self.words.len() as u64 * WORD_BITS
    }

    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Little-endian words without trailing zero words.
    pub fn words(&self) -> &[u64] {
        let len = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |top| top + 1);
        &self.words[..len]
    }

    /// Bits in position order up to the highest set bit.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.significant_bits()).map(move |pos| self.get(pos))
    }

    fn to_decimal(&self) -> String {
        let mut limbs = self.words().to_vec();
        if limbs.is_empty() {
            return "0".to_string();
        }

        // Repeated division by 10^19; each remainder is one chunk of digits.
        let mut chunks = Vec::new();
        while !limbs.is_empty() {
            let mut rem: u128 = 0;
            for limb in limbs.iter_mut().rev() {
                let current = (rem << WORD_BITS) | u128::from(*limb);
                *limb = (current / u128::from(DECIMAL_CHUNK)) as u64;
                rem = current % u128::from(DECIMAL_CHUNK);
            }
            chunks.push(rem as u64);
            while limbs.last() == Some(&0) {
                limbs.pop();
            }
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut rest = chunks.iter().rev();
        if let Some(top) = rest.next() {
            out.push_str(&top.to_string());
        }
        for chunk in rest {
            out.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
        }
        out
    }

    fn to_radix(&self, bits_per_digit: usize, render: fn(u64, usize) -> String) -> String {
        let words = self.words();
        let digits_per_word = WORD_BITS as usize / bits_per_digit;
        let mut iter = words.iter().rev();
        let Some(top) = iter.next() else {
            return "0".to_string();
        };
        let mut out = render(*top, 0);
        for word in iter {
            out.push_str(&render(*word, digits_per_word));
        }
        out
    }
}

fn word_index(pos: u64) -> Option<usize> {
    usize::try_from(pos / WORD_BITS).ok()
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.words() == other.words()
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words().hash(state);
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}

impl From<u64> for BitVector {
    fn from(value: u64) -> Self {
        Self::from_words(vec![value])
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal())
    }
}

impl fmt::Binary for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.to_radix(1, |w, width| format!("{w:0width$b}"));
        f.pad_integral(true, "0b", &digits)
    }
}

impl fmt::LowerHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.to_radix(4, |w, width| format!("{w:0width$x}"));
        f.pad_integral(true, "0x", &digits)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({:#x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_positions_read_zero() {
        let bits = BitVector::new();
        assert!(!bits.get(0));
        assert!(!bits.get(10_000));
        assert!(!bits.get(u64::MAX));
    }

    #[test]
    fn set_grows_storage_on_demand() {
        let mut bits = BitVector::new();
        bits.set(10_000, true).unwrap();

        assert!(bits.get(10_000));
        assert!(!bits.get(9_999));
        assert_eq!(bits.significant_bits(), 10_001);
        assert!(bits.capacity_bits() > 10_000);
    }

    #[test]
    fn writing_zero_past_end_does_not_allocate() {
        let mut bits = BitVector::new();
        bits.set(500, false).unwrap();
        assert_eq!(bits.capacity_bits(), 0);
    }

    #[test]
    fn storage_never_shrinks() {
        let mut bits = BitVector::new();
        bits.set(200, true).unwrap();
        let capacity = bits.capacity_bits();
        bits.set(200, false).unwrap();

        assert_eq!(bits.capacity_bits(), capacity);
        assert!(bits.is_zero());
    }

    #[test]
    fn flip_inverts_and_reports_new_bit() {
        let mut bits = BitVector::new();
        assert!(bits.flip(7).unwrap());
        assert!(bits.get(7));
        assert!(!bits.flip(7).unwrap());
        assert!(!bits.get(7));
    }

    #[test]
    fn equality_ignores_trailing_zero_words() {
        let mut grown = BitVector::new();
        grown.set(1_000, true).unwrap();
        grown.set(1_000, false).unwrap();
        grown.set(1, true).unwrap();

        assert_eq!(grown, BitVector::from(2));
    }

    #[test]
    fn from_bits_uses_position_order() {
        let bits = BitVector::from_bits([true, false, true]);
        assert!(bits.get(0));
        assert!(!bits.get(1));
        assert!(bits.get(2));
        assert_eq!(bits, BitVector::from(5));
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn decimal_display_spans_words() {
        let all_ones: BitVector = std::iter::repeat(true).take(100).collect();
        assert_eq!(all_ones.to_string(), "1267650600228229401496703205375");
        assert_eq!(BitVector::new().to_string(), "0");
        assert_eq!(BitVector::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn decimal_display_pads_inner_chunks() {
        let bits = BitVector::from(10_000_000_000_000_000_005);
        assert_eq!(bits.to_string(), "10000000000000000005");
        assert_eq!(format!("{bits:>22}"), "  10000000000000000005");
    }

    #[test]
    fn binary_and_hex_pad_inner_words() {
        let mut bits = BitVector::new();
        bits.set(64, true).unwrap();
        bits.set(0, true).unwrap();

        assert_eq!(format!("{:x}", bits), "10000000000000001");
        assert_eq!(format!("{:#x}", bits), "0x10000000000000001");
        assert_eq!(format!("{:b}", bits).len(), 65);
        assert_eq!(format!("{:b}", BitVector::new()), "0");
    }

    #[test]
    fn counts_set_bits() {
        let bits = BitVector::from(0b1011);
        assert_eq!(bits.count_ones(), 3);
        assert_eq!(bits.significant_bits(), 4);
    }

    #[test]
    fn unallocatable_position_reports_exhaustion() {
        let mut bits = BitVector::new();
        assert_eq!(
            bits.set(u64::MAX, true),
            Err(TapeError::Exhausted { position: u64::MAX })
        );
        assert!(bits.is_zero());
    }
}
