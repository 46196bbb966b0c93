//! Random-art ("drunken bishop") rendering
//!
//! A byte sequence is turned into a walk of diagonal moves (see [`crate::bits`])
//! across a small grid. Each landing cell counts its visits, and the final
//! picture maps those counts through a short alphabet. Identical inputs always
//! give identical pictures; similar inputs usually give visibly different ones.
//!
//! ```
//! use fingerprint_core::art::{render, ArtConfig};
//!
//! let art = render(&[0x7f, 0x00, 0x00, 0x01], &ArtConfig::default());
//! let lines: Vec<&str> = art.lines().collect();
//! assert_eq!(lines.len(), 10);
//! assert!(lines.iter().all(|l| l.chars().count() == 18));
//! ```

use serde::{Deserialize, Serialize};

use crate::bits::directions;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::types::{DEFAULT_ALPHABET, DEFAULT_HEIGHT, DEFAULT_WIDTH, END_CHAR, START_CHAR};

/// Alphabet and grid dimensions for one rendering.
///
/// Always valid: a non-empty alphabet and non-zero dimensions. Build one with
/// [`ArtConfig::new`], [`ArtConfig::builder`] or [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArtConfig", into = "RawArtConfig")]
pub struct ArtConfig {
    alphabet: Vec<char>,
    height: u16,
    width: u16,
}

impl ArtConfig {
    pub fn new(alphabet: &str, height: u16, width: u16) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(Error::InvalidConfiguration("alphabet is empty".into()));
        }
        if height == 0 || width == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "grid must be at least 1x1, got {}x{}",
                height, width
            )));
        }
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.iter().any(|&c| c == START_CHAR || c == END_CHAR) {
            log::warn!(
                "alphabet contains a sentinel character ({} or {}); markers may be ambiguous",
                START_CHAR,
                END_CHAR
            );
        }
        Ok(Self {
            alphabet,
            height,
            width,
        })
    }

    pub fn builder() -> ArtConfigBuilder {
        ArtConfigBuilder::default()
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Builder for [`ArtConfig`]; unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct ArtConfigBuilder {
    alphabet: Option<String>,
    height: Option<u16>,
    width: Option<u16>,
}

impl ArtConfigBuilder {
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn build(self) -> Result<ArtConfig> {
        ArtConfig::new(
            self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET),
            self.height.unwrap_or(DEFAULT_HEIGHT),
            self.width.unwrap_or(DEFAULT_WIDTH),
        )
    }
}

/// Serialized form; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawArtConfig {
    #[serde(default = "default_alphabet")]
    alphabet: String,
    #[serde(default = "default_height")]
    height: u16,
    #[serde(default = "default_width")]
    width: u16,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_height() -> u16 {
    DEFAULT_HEIGHT
}

fn default_width() -> u16 {
    DEFAULT_WIDTH
}

impl TryFrom<RawArtConfig> for ArtConfig {
    type Error = Error;

    fn try_from(raw: RawArtConfig) -> Result<Self> {
        ArtConfig::new(&raw.alphabet, raw.height, raw.width)
    }
}

impl From<ArtConfig> for RawArtConfig {
    fn from(config: ArtConfig) -> Self {
        Self {
            alphabet: config.alphabet.into_iter().collect(),
            height: config.height,
            width: config.width,
        }
    }
}

/// Run the walk for `bytes` and return the finished grid.
pub fn walk(bytes: &[u8], config: &ArtConfig) -> Grid {
    let mut grid = Grid::new(config.height as usize, config.width as usize);
    grid.walk(directions(bytes));
    grid
}

/// Render `bytes` as a bordered random-art picture.
///
/// The result has `height + 2` lines, each `width + 2` characters long and
/// terminated by `\n`.
pub fn render(bytes: &[u8], config: &ArtConfig) -> String {
    let grid = walk(bytes, config);
    let mut out = String::new();
    grid.render_into(config.alphabet(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn default_config_matches_constants() {
        let c = ArtConfig::default();
        assert_eq!(c.height(), 8);
        assert_eq!(c.width(), 16);
        assert_eq!(c.alphabet().iter().collect::<String>(), DEFAULT_ALPHABET);
        assert_eq!(ArtConfig::builder().build().unwrap(), c);
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert!(matches!(
            ArtConfig::new("", 8, 16),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ArtConfig::builder().height(0).build(),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ArtConfig::builder().width(0).build(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn builder_overrides_fields() {
        let c = ArtConfig::builder()
            .alphabet("ab")
            .height(3)
            .width(4)
            .build()
            .unwrap();
        assert_eq!(c.alphabet(), &['a', 'b']);
        assert_eq!((c.height(), c.width()), (3, 4));
    }

    #[test]
    fn single_byte_walk() {
        // 0x00 walks NW four times from (4,8): (3,7) (2,6) (1,5) (0,4).
        let grid = walk(&[0x00], &ArtConfig::default());
        assert_eq!(grid.get(4, 8), Some(Cell::Start));
        assert_eq!(grid.get(3, 7), Some(Cell::Visits(1)));
        assert_eq!(grid.get(2, 6), Some(Cell::Visits(1)));
        assert_eq!(grid.get(1, 5), Some(Cell::Visits(1)));
        assert_eq!(grid.get(0, 4), Some(Cell::End));
    }

    #[test]
    fn corner_pile_up_clamps_to_edges() {
        // 0x00 x4: first four steps reach (0,4), the remaining twelve are
        // clamped moves that land on row 0 columns 3..0, then stay at (0,0).
        let grid = walk(&[0x00; 4], &ArtConfig::default());
        assert_eq!(grid.get(0, 4), Some(Cell::Visits(1)));
        assert_eq!(grid.get(0, 1), Some(Cell::Visits(1)));
        assert_eq!(grid.get(0, 0), Some(Cell::End));

        let grid = walk(&[0x00; 8], &ArtConfig::builder().height(2).width(2).build().unwrap());
        // 2x2 grid: start (1,1), every NW step after the first lands on (0,0).
        assert_eq!(grid.get(1, 1), Some(Cell::Start));
        assert_eq!(grid.get(0, 0), Some(Cell::End));
    }

    #[test]
    fn visit_counts_wrap_around_alphabet() {
        let config = ArtConfig::builder()
            .alphabet("ab")
            .height(1)
            .width(3)
            .build()
            .unwrap();
        // 0x40 is NW NW NW NE from (0,1): three visits pile up on (0,0), then
        // the walk ends back on the start cell.
        let grid = walk(&[0x40], &config);
        assert_eq!(grid.get(0, 0), Some(Cell::Visits(3)));
        // 3 % 2 == 1 picks 'b'.
        assert_eq!(render(&[0x40], &config), "+---+\n|bEa|\n+---+\n");
    }

    #[test]
    fn render_known_picture() {
        let config = ArtConfig::builder()
            .alphabet(" .o")
            .height(3)
            .width(5)
            .build()
            .unwrap();
        // 0xff: SE four times from (1,2): (2,3) (2,4) (2,4) (2,4).
        let art = render(&[0xff], &config);
        assert_eq!(art, "+-----+\n|     |\n|  S  |\n|   .E|\n+-----+\n");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let c = ArtConfig::builder().alphabet("xy").height(4).width(6).build().unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: ArtConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad = serde_json::from_str::<ArtConfig>(r#"{"alphabet":"","height":4,"width":6}"#);
        assert!(bad.is_err());

        let partial: ArtConfig = serde_json::from_str(r#"{"height":4}"#).unwrap();
        assert_eq!(partial.width(), DEFAULT_WIDTH);
    }
}
