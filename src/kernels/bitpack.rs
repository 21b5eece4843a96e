//! This module contains the pure, stateless kernels for packing a variable-length
//! bit stream into bytes and unpacking it again.
//!
//! Bits are laid out most-significant-first within each byte. The number of
//! trailing zero bits added to reach a byte boundary is returned alongside the
//! payload and must be stored by the caller; it is never inferred from the data.

use bitvec::prelude::*;

use crate::error::HuffpackError;

/// A byte-aligned bit stream together with the number of padding bits appended
/// to its final byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub payload: Vec<u8>,
    /// Always in `0..=7`.
    pub padding: u8,
}

/// Number of zero bits needed to pad `bit_len` bits to a whole byte.
pub fn padding_for(bit_len: usize) -> u8 {
    ((8 - bit_len % 8) % 8) as u8
}

/// Pads `bits` with zeros to a byte boundary and returns the bytes.
pub fn pack(bits: &BitSlice<u8, Msb0>) -> PackedBits {
    let padding = padding_for(bits.len());

    let mut buffer: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len() + padding as usize);
    buffer.extend_from_bitslice(bits);
    buffer.resize(bits.len() + padding as usize, false);

    PackedBits {
        payload: buffer.into_vec(),
        padding,
    }
}

/// Expands `payload` to bits and drops the last `padding` of them.
pub fn unpack(payload: &[u8], padding: u8) -> Result<BitVec<u8, Msb0>, HuffpackError> {
    let payload_bits = payload.len() * 8;
    if padding as usize > payload_bits {
        return Err(HuffpackError::CorruptPadding {
            padding,
            payload_bits,
        });
    }

    let mut bits = BitVec::<u8, Msb0>::from_slice(payload);
    bits.truncate(payload_bits - padding as usize);
    Ok(bits)
}
