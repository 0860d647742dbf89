use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::kernel::gas::{GasFees, GasSettings};
use crate::serialize::{BufferReader, Decode, Encode};

/// Block-level values fixed for every tx in the block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariables {
    pub block_number: Fr,
    pub timestamp: Fr,
    pub gas_fees: GasFees,
}

impl GlobalVariables {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for GlobalVariables {
    fn write(&self, buf: &mut Vec<u8>) {
        self.block_number.write(buf);
        self.timestamp.write(buf);
        self.gas_fees.write(buf);
    }
}

impl Decode for GlobalVariables {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            block_number: reader.read_object()?,
            timestamp: reader.read_object()?,
            gas_fees: reader.read_object()?,
        })
    }
}

/// Chain context the transaction was signed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    pub chain_id: Fr,
    pub version: Fr,
    pub gas_settings: GasSettings,
}

impl TxContext {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for TxContext {
    fn write(&self, buf: &mut Vec<u8>) {
        self.chain_id.write(buf);
        self.version.write(buf);
        self.gas_settings.write(buf);
    }
}

impl Decode for TxContext {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            chain_id: reader.read_object()?,
            version: reader.read_object()?,
            gas_settings: reader.read_object()?,
        })
    }
}

/// Data the circuits read but never modify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedConstantData {
    pub historical_header_hash: Fr,
    pub tx_context: TxContext,
    pub global_variables: GlobalVariables,
}

impl CombinedConstantData {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for CombinedConstantData {
    fn write(&self, buf: &mut Vec<u8>) {
        self.historical_header_hash.write(buf);
        self.tx_context.write(buf);
        self.global_variables.write(buf);
    }
}

impl Decode for CombinedConstantData {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            historical_header_hash: reader.read_object()?,
            tx_context: reader.read_object()?,
            global_variables: reader.read_object()?,
        })
    }
}
