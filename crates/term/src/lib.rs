//! Terminal presentation for random-art fingerprints.
//!
//! This is a small rendering layer on top of `fingerprint-core`. It renders
//! into a simple styled framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal concerns
//! - Color the start/end markers and visit density without changing the layout
//! - Produce exactly the same characters as `fingerprint_core::render_grid`

pub mod art_view;
pub mod fb;
pub mod renderer;

pub use fingerprint_core as core;
pub use fingerprint_types as types;

pub use art_view::{ArtView, Palette};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_into, TerminalRenderer};
