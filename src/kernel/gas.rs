//! Gas accounting carried through the kernel outputs.

use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::serialize::{BufferReader, Decode, Encode};

/// Gas consumed (or limited) on the data-availability and L2 dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gas {
    pub da_gas: u32,
    pub l2_gas: u32,
}

impl Gas {
    pub const fn new(da_gas: u32, l2_gas: u32) -> Self {
        Self { da_gas, l2_gas }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Fee owed for this gas at the given per-dimension prices.
    ///
    /// The base rollup circuit computes the same product-sum in field
    /// arithmetic; both sides must stay bit-identical or the block's content
    /// commitment breaks.
    pub fn compute_fee(&self, fees: &GasFees) -> Fr {
        fees.fee_per_da_gas * Fr::from(self.da_gas)
            + fees.fee_per_l2_gas * Fr::from(self.l2_gas)
    }
}

impl Encode for Gas {
    fn write(&self, buf: &mut Vec<u8>) {
        self.da_gas.write(buf);
        self.l2_gas.write(buf);
    }
}

impl Decode for Gas {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            da_gas: reader.read_object()?,
            l2_gas: reader.read_object()?,
        })
    }
}

/// Per-dimension gas prices for one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasFees {
    pub fee_per_da_gas: Fr,
    pub fee_per_l2_gas: Fr,
}

impl GasFees {
    pub const fn new(fee_per_da_gas: Fr, fee_per_l2_gas: Fr) -> Self {
        Self {
            fee_per_da_gas,
            fee_per_l2_gas,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for GasFees {
    fn write(&self, buf: &mut Vec<u8>) {
        self.fee_per_da_gas.write(buf);
        self.fee_per_l2_gas.write(buf);
    }
}

impl Decode for GasFees {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            fee_per_da_gas: reader.read_object()?,
            fee_per_l2_gas: reader.read_object()?,
        })
    }
}

/// Gas configuration a transaction signed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasSettings {
    pub gas_limits: Gas,
    pub teardown_gas_limits: Gas,
    pub max_fees_per_gas: GasFees,
    pub inclusion_fee: Fr,
}

impl GasSettings {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Encode for GasSettings {
    fn write(&self, buf: &mut Vec<u8>) {
        self.gas_limits.write(buf);
        self.teardown_gas_limits.write(buf);
        self.max_fees_per_gas.write(buf);
        self.inclusion_fee.write(buf);
    }
}

impl Decode for GasSettings {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            gas_limits: reader.read_object()?,
            teardown_gas_limits: reader.read_object()?,
            max_fees_per_gas: reader.read_object()?,
            inclusion_fee: reader.read_object()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_the_field_product_sum() {
        let gas = Gas::new(3, 5);
        let fees = GasFees::new(Fr::new(100), Fr::new(7));
        assert_eq!(gas.compute_fee(&fees), Fr::new(3 * 100 + 5 * 7));
    }

    #[test]
    fn gas_wire_layout() {
        let bytes = Gas::new(1, 2).to_bytes();
        assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(Gas::from_bytes(&bytes).unwrap(), Gas::new(1, 2));
    }
}
