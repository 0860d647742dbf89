use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::serialize::{BufferReader, Decode, Encode};

/// Marker for the recursive proof aggregation state carried between kernel
/// iterations. Two field slots, matching the circuit layout; the verifier
/// treats the contents as opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationObject {
    pub p0: Fr,
    pub p1: Fr,
}

impl AggregationObject {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for AggregationObject {
    fn write(&self, buf: &mut Vec<u8>) {
        self.p0.write(buf);
        self.p1.write(buf);
    }
}

impl Decode for AggregationObject {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            p0: reader.read_object()?,
            p1: reader.read_object()?,
        })
    }
}
