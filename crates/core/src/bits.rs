//! Bit-pair extraction - turns bytes into walk directions
//!
//! Each byte yields four 2-bit directions, least-significant pair first:
//! bits 0-1, then 2-3, then 4-5, then 6-7.

use crate::types::Direction;

/// Split one byte into its four directions, low bits first.
#[inline]
pub fn bit_pairs(byte: u8) -> [Direction; 4] {
    [
        Direction::from_bits(byte),
        Direction::from_bits(byte >> 2),
        Direction::from_bits(byte >> 4),
        Direction::from_bits(byte >> 6),
    ]
}

/// All directions of `bytes`, in walk order.
pub fn directions(bytes: &[u8]) -> impl Iterator<Item = Direction> + '_ {
    bytes.iter().flat_map(|&b| bit_pairs(b))
}
