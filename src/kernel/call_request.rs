use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::serialize::{BufferReader, Decode, Encode};

/// One pending nested invocation owed public execution.
///
/// Call-stack slots are positionally meaningful: the kernel outputs place
/// specific phases in specific slots, so an empty slot (zero hash) is
/// semantically distinct from an absent one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub hash: Fr,
    pub caller_contract_address: Fr,
    pub start_side_effect_counter: u32,
    pub end_side_effect_counter: u32,
}

impl CallRequest {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_zero()
    }
}

impl Encode for CallRequest {
    fn write(&self, buf: &mut Vec<u8>) {
        self.hash.write(buf);
        self.caller_contract_address.write(buf);
        self.start_side_effect_counter.write(buf);
        self.end_side_effect_counter.write(buf);
    }
}

impl Decode for CallRequest {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            hash: reader.read_object()?,
            caller_contract_address: reader.read_object()?,
            start_side_effect_counter: reader.read_object()?,
            end_side_effect_counter: reader.read_object()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness_is_defined_by_the_hash_alone() {
        let mut request = CallRequest::empty();
        assert!(request.is_empty());
        request.caller_contract_address = Fr::new(42);
        assert!(request.is_empty());
        request.hash = Fr::ONE;
        assert!(!request.is_empty());
    }
}
