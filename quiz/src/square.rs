//! Board coordinates.
//!
//! A [`Square`] is a `(File, Rank)` pair. Its canonical label is the
//! lowercase file letter followed by the rank digit, e.g. `f3`.

#[cfg(test)]
#[path = "square_test.rs"]
mod square_test;

use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a square label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSquareError {
    /// Input did not have exactly two characters after trimming.
    #[error("square label must be two characters, got {0:?}")]
    Length(String),
    /// First character is not a file letter `a`-`h`.
    #[error("invalid file {0:?} (expected a-h)")]
    File(char),
    /// Second character is not a rank digit `1`-`8`.
    #[error("invalid rank {0:?} (expected 1-8)")]
    Rank(char),
}

/// Board column, `a` through `h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// All files in canonical left-to-right order.
    pub const ALL: [File; 8] = [File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H];

    /// Zero-based index (`a` = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// File at a zero-based index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase label letter.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'a' + self as u8)
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Self::from_index(c as usize - 'a' as usize),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Board row, `1` through `8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    /// All ranks in ascending order (`1` first).
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    /// Zero-based index (`1` = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rank at a zero-based index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rank number, 1 through 8.
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as usize - '1' as usize),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the 64 board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    #[must_use]
    pub fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Canonical lowercase label, e.g. `"e4"`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Every square, file-major (`a1`, `a2`, ... `h8`).
    pub fn all() -> impl Iterator<Item = Square> {
        File::ALL
            .into_iter()
            .flat_map(|file| Rank::ALL.into_iter().map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parse a label such as `e4`. Surrounding whitespace and file case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::Length(trimmed.to_owned()));
        };
        let file = File::from_char(f).ok_or(ParseSquareError::File(f))?;
        let rank = Rank::from_char(r).ok_or(ParseSquareError::Rank(r))?;
        Ok(Square { file, rank })
    }
}
