//! The prime-field element shared with the circuit arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::{WireError, WireResult};
use crate::serialize::{BufferReader, Decode, Encode};

/// Scalar field modulus, `2^64 - 2^32 + 1`.
pub const MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

/// Canonical field element, always reduced below [`MODULUS`].
///
/// The wire form is one 32-byte big-endian slot: circuit field slots are 32
/// bytes wide regardless of the machine representation, so the value sits in
/// the low 8 bytes and the upper 24 must be zero. Decoding rejects
/// non-canonical slots instead of reducing them, since a reduced-on-read
/// value would re-encode to different bytes than it was read from.
///
/// All arithmetic goes through `u128` intermediates and reduces on every
/// operation, so identical inputs always produce identical outputs on every
/// host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fr(u64);

impl Fr {
    pub const ZERO: Fr = Fr(0);
    pub const ONE: Fr = Fr(1);

    pub const fn new(value: u64) -> Self {
        Fr(value % MODULUS)
    }

    pub const fn to_u64(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The 32-byte big-endian wire slot for this element.
    pub fn to_be_slot(self) -> [u8; 32] {
        let mut slot = [0u8; 32];
        slot[24..].copy_from_slice(&self.0.to_be_bytes());
        slot
    }
}

impl From<u64> for Fr {
    fn from(value: u64) -> Self {
        Fr::new(value)
    }
}

impl From<u32> for Fr {
    fn from(value: u32) -> Self {
        Fr(value as u64)
    }
}

impl Add for Fr {
    type Output = Fr;

    fn add(self, rhs: Fr) -> Fr {
        Fr(((self.0 as u128 + rhs.0 as u128) % MODULUS as u128) as u64)
    }
}

impl Sub for Fr {
    type Output = Fr;

    fn sub(self, rhs: Fr) -> Fr {
        Fr(((self.0 as u128 + MODULUS as u128 - rhs.0 as u128) % MODULUS as u128) as u64)
    }
}

impl Mul for Fr {
    type Output = Fr;

    fn mul(self, rhs: Fr) -> Fr {
        Fr(((self.0 as u128 * rhs.0 as u128) % MODULUS as u128) as u64)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Encode for Fr {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_be_slot());
    }
}

impl Decode for Fr {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        let slot = reader.read_array::<32>()?;
        if slot[..24].iter().any(|byte| *byte != 0) {
            return Err(WireError::InvalidValue {
                context: "field element",
                reason: "upper slot bytes are not zero".into(),
            });
        }
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&slot[24..]);
        let value = u64::from_be_bytes(tail);
        if value >= MODULUS {
            return Err(WireError::InvalidValue {
                context: "field element",
                reason: format!("0x{value:016x} is not reduced below the modulus"),
            });
        }
        Ok(Fr(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_reduces_modulo_the_prime() {
        let a = Fr::new(MODULUS - 1);
        assert_eq!(a + Fr::ONE, Fr::ZERO);
        assert_eq!(Fr::ZERO - Fr::ONE, a);
        // (p - 1)^2 = p^2 - 2p + 1 ≡ 1 (mod p)
        assert_eq!(a * a, Fr::ONE);
    }

    #[test]
    fn wire_slot_is_32_bytes_value_in_the_tail() {
        let bytes = Fr::new(0x0102_0304).to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..28], &[0u8; 28]);
        assert_eq!(&bytes[28..], &[1, 2, 3, 4]);
        assert_eq!(Fr::from_bytes(&bytes).unwrap(), Fr::new(0x0102_0304));
    }

    #[test]
    fn decode_rejects_non_canonical_slots() {
        let mut garbage_upper = [0u8; 32];
        garbage_upper[0] = 1;
        assert!(matches!(
            Fr::from_bytes(&garbage_upper),
            Err(WireError::InvalidValue { context: "field element", .. })
        ));

        let mut unreduced = [0u8; 32];
        unreduced[24..].copy_from_slice(&u64::MAX.to_be_bytes());
        assert!(matches!(
            Fr::from_bytes(&unreduced),
            Err(WireError::InvalidValue { context: "field element", .. })
        ));
    }
}
