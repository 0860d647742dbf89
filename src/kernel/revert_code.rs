use serde::{Deserialize, Serialize};

use crate::errors::{WireError, WireResult};
use crate::serialize::{BufferReader, Decode, Encode};

/// Outcome of a transaction's public execution. Immutable once assigned;
/// one wire byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RevertCode {
    #[default]
    Ok = 0,
    AppLogicReverted = 1,
    TeardownReverted = 2,
    BothReverted = 3,
}

impl RevertCode {
    pub fn is_ok(self) -> bool {
        self == RevertCode::Ok
    }
}

impl Encode for RevertCode {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }
}

impl Decode for RevertCode {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        match reader.read_u8()? {
            0 => Ok(RevertCode::Ok),
            1 => Ok(RevertCode::AppLogicReverted),
            2 => Ok(RevertCode::TeardownReverted),
            3 => Ok(RevertCode::BothReverted),
            byte => Err(WireError::InvalidValue {
                context: "revert code",
                reason: format!("unknown discriminant {byte}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_discriminants_round_trip() {
        for code in [
            RevertCode::Ok,
            RevertCode::AppLogicReverted,
            RevertCode::TeardownReverted,
            RevertCode::BothReverted,
        ] {
            assert_eq!(RevertCode::from_bytes(&code.to_bytes()).unwrap(), code);
        }
    }

    #[test]
    fn unknown_discriminant_is_a_decode_error() {
        assert!(matches!(
            RevertCode::from_bytes(&[4]),
            Err(WireError::InvalidValue { context: "revert code", .. })
        ));
    }
}
