use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::serialize::{BufferReader, Decode, Encode};

/// Optional upper bound on the block number a tx may be included in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxBlockNumber {
    pub is_some: bool,
    pub value: Fr,
}

impl MaxBlockNumber {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for MaxBlockNumber {
    fn write(&self, buf: &mut Vec<u8>) {
        self.is_some.write(buf);
        self.value.write(buf);
    }
}

impl Decode for MaxBlockNumber {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            is_some: reader.read_object()?,
            value: reader.read_object()?,
        })
    }
}

/// Validation requests left for the rollup circuits to complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupValidationRequests {
    pub max_block_number: MaxBlockNumber,
}

impl RollupValidationRequests {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for RollupValidationRequests {
    fn write(&self, buf: &mut Vec<u8>) {
        self.max_block_number.write(buf);
    }
}

impl Decode for RollupValidationRequests {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            max_block_number: reader.read_object()?,
        })
    }
}

/// Validation requests accumulated from public execution, still owed
/// completion by later stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequests {
    pub for_rollup: RollupValidationRequests,
}

impl ValidationRequests {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for ValidationRequests {
    fn write(&self, buf: &mut Vec<u8>) {
        self.for_rollup.write(buf);
    }
}

impl Decode for ValidationRequests {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            for_rollup: reader.read_object()?,
        })
    }
}
