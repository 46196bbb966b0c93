//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the fingerprint encoders.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core algorithms, terminal rendering, CLI).
//!
//! # Random-art grid
//!
//! The default field is the classic "drunken bishop" room:
//!
//! - **Height**: 8 rows (indexed 0-7)
//! - **Width**: 16 columns (indexed 0-15)
//! - **Start position**: (4, 8), i.e. `(height / 2, width / 2)`
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HEIGHT` | 8 | Grid rows |
//! | `DEFAULT_WIDTH` | 16 | Grid columns |
//! | `DEFAULT_ALPHABET` | `" .+oVXLZAHPDRB"` | Visit-count symbols, cycled modulo length |
//! | `START_CHAR` | `S` | Marks where the walk began |
//! | `END_CHAR` | `E` | Marks where the walk stopped |
//!
//! # Proquint words
//!
//! Every 16 bits become one `CVCVC` word (`4+2+4+2+4` bits) drawn from
//! [`CONSONANTS`] and [`VOWELS`]. Words are joined by [`SEPARATOR`].
//!
//! # Examples
//!
//! ```
//! use fingerprint_types::{Cell, Direction, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Directions come from 2-bit values
//! assert_eq!(Direction::from_bits(0b11), Direction::SouthEast);
//! assert_eq!(Direction::SouthEast.delta(), (1, 1));
//!
//! // Cells are visit counters or sentinels
//! assert_eq!(Cell::default(), Cell::Visits(0));
//! assert_eq!(Cell::Start.symbol(&[' ']), 'S');
//!
//! assert_eq!(DEFAULT_HEIGHT, 8);
//! assert_eq!(DEFAULT_WIDTH, 16);
//! ```

/// Grid height in rows (8)
pub const DEFAULT_HEIGHT: u16 = 8;

/// Grid width in columns (16)
pub const DEFAULT_WIDTH: u16 = 16;

/// Symbols used for visit counts, indexed by `count % len`.
pub const DEFAULT_ALPHABET: &str = " .+oVXLZAHPDRB";

/// Rendered at the cell where the walk started.
pub const START_CHAR: char = 'S';

/// Rendered at the cell where the walk ended.
pub const END_CHAR: char = 'E';

/// Grid border corner.
pub const BORDER_CORNER: char = '+';

/// Grid border top/bottom edge.
pub const BORDER_HORIZONTAL: char = '-';

/// Grid border left/right edge.
pub const BORDER_VERTICAL: char = '|';

/// Proquint consonants, indexed by a 4-bit field.
pub const CONSONANTS: [u8; 16] = *b"bdfghjklmnprstvz";

/// Proquint vowels, indexed by a 2-bit field.
pub const VOWELS: [u8; 4] = *b"aiou";

/// Characters per proquint word.
pub const WORD_LEN: usize = 5;

/// Word separator used when encoding; skipped when decoding.
pub const SEPARATOR: char = '-';


/// The four diagonal moves of the walk
///
/// Each move changes both the row and the column by one:
/// - **NorthWest** (`00`): up and left
/// - **NorthEast** (`01`): up and right
/// - **SouthWest** (`10`): down and left
/// - **SouthEast** (`11`): down and right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Map the low two bits of `bits` to a direction.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Direction::NorthWest,
            0b01 => Direction::NorthEast,
            0b10 => Direction::SouthWest,
            _ => Direction::SouthEast,
        }
    }

    /// Row and column offsets `(d_row, d_col)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// One cell of the random-art grid.
///
/// Sentinels are separate variants so they can never collide with a visit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Visits(u32),
    Start,
    End,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Visits(0)
    }
}

impl Cell {
    /// Character for this cell given the visit-count alphabet.
    ///
    /// Counts cycle through `alphabet`; an empty alphabet draws blanks.
    pub fn symbol(self, alphabet: &[char]) -> char {
        match self {
            Cell::Start => START_CHAR,
            Cell::End => END_CHAR,
            Cell::Visits(_) if alphabet.is_empty() => ' ',
            Cell::Visits(n) => alphabet[(n as usize) % alphabet.len()],
        }
    }
}
