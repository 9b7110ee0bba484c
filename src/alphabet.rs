//! The key alphabet: lowercase ASCII letters `a..=z`.
//!
//! Every edge of a trie is labelled by a [`Symbol`]. A symbol is a validated
//! index into the alphabet, so the array-backed trie can use it directly as a
//! slot index without further bounds checking.

use core::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// A single alphabet symbol, stored as its index `0..ALPHABET_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Symbol(u8);

impl Symbol {
    /// Maps a character to its symbol, or `None` if it is not in `a..=z`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the symbol at `index`, or `None` if `index >= ALPHABET_SIZE`.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Slot index of this symbol, always `< ALPHABET_SIZE`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this symbol stands for.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error returned when a word contains a character outside `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// The offending character.
    pub character: char,
    /// Offset of the character within the word, counted in chars.
    pub position: usize,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid symbol {:?} at position {}: only lowercase letters a-z are accepted",
            self.character, self.position
        )
    }
}

impl std::error::Error for InvalidSymbol {}

/// Iterates the symbols of `word`, yielding an error for the first bad character.
pub fn symbols(word: &str) -> impl Iterator<Item = Result<Symbol, InvalidSymbol>> + '_ {
    word.chars().enumerate().map(|(position, character)| {
        Symbol::from_char(character).ok_or(InvalidSymbol { character, position })
    })
}

/// Validates the whole word up front and returns its symbols.
///
/// # Errors
/// Returns [`InvalidSymbol`] describing the first character outside `a..=z`.
pub fn parse_word(word: &str) -> Result<Vec<Symbol>, InvalidSymbol> {
    symbols(word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping_is_total_and_injective() {
        let mut seen = [false; ALPHABET_SIZE];
        for c in 'a'..='z' {
            let sym = Symbol::from_char(c).unwrap();
            assert!(!seen[sym.index()]);
            seen[sym.index()] = true;
            assert_eq!(sym.to_char(), c);
            assert_eq!(Symbol::from_index(sym.index()), Some(sym));
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Symbol::from_index(ALPHABET_SIZE), None);
    }

    #[test]
    fn test_rejects_outside_alphabet() {
        for c in ['A', 'Z', '0', ' ', '-', 'é', 'я', '{', '`'] {
            assert_eq!(Symbol::from_char(c), None, "{c:?} should be rejected");
            assert_eq!(Symbol::try_from(c), Err(c));
        }
    }

    #[test]
    fn test_parse_word_reports_first_bad_char() {
        assert_eq!(parse_word("cat").unwrap().len(), 3);
        assert_eq!(parse_word("").unwrap(), Vec::new());

        let err = parse_word("caT9").unwrap_err();
        assert_eq!(err, InvalidSymbol { character: 'T', position: 2 });

        // position counts chars, not bytes
        let err = parse_word("éa!").unwrap_err();
        assert_eq!(err.position, 0);
        let err = parse_word("aé").unwrap_err();
        assert_eq!(err, InvalidSymbol { character: 'é', position: 1 });
    }

    #[test]
    fn test_error_display() {
        let err = InvalidSymbol { character: 'Q', position: 4 };
        assert_eq!(
            err.to_string(),
            "invalid symbol 'Q' at position 4: only lowercase letters a-z are accepted"
        );
    }
}
