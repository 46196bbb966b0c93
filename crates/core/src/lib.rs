//! Core encoders - pure, deterministic, and testable
//!
//! This crate contains the two byte encoders behind `fingerprint`. It has
//! **no** dependencies on terminals, files or the process environment:
//!
//! - **Deterministic**: Same bytes always produce the same output
//! - **Total**: Encoding never fails; only decoding and configuration can
//! - **Independent**: The art renderer and the word codec share nothing but types
//!
//! # Module Structure
//!
//! - [`bits`]: splits bytes into 2-bit walk directions, low pair first
//! - [`grid`]: the visit-counter field and its clamped cursor
//! - [`art`]: random-art ("drunken bishop") configuration and rendering
//! - [`words`]: proquint encoding of 16-bit chunks as `CVCVC` words
//! - [`error`]: the error type for decoding and configuration
//!
//! # Example
//!
//! ```
//! use fingerprint_core::{decode_words, encode_words, render_grid, ArtConfig};
//!
//! let key = [0x3f, 0x54, 0xdc, 0xc1];
//!
//! let words = encode_words(&key);
//! assert_eq!(words, "gutih-tugad");
//! assert_eq!(decode_words(&words).unwrap(), key);
//!
//! let art = render_grid(&key, &ArtConfig::default());
//! assert!(art.starts_with("+----------------+\n"));
//! assert_eq!(art.matches('E').count(), 1);
//! ```

pub mod art;
pub mod bits;
pub mod error;
pub mod grid;
pub mod words;

pub use fingerprint_types as types;

// Re-export commonly used types for convenience
pub use art::{render as render_grid, walk, ArtConfig, ArtConfigBuilder};
pub use error::{Error, Result};
pub use grid::{Cursor, Grid};
pub use words::{from_words as decode_words, from_words_lenient, to_words as encode_words};
