use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::fields::Fr;
use crate::kernel::accumulated_data::CombinedAccumulatedData;
use crate::kernel::aggregation::AggregationObject;
use crate::kernel::constant_data::CombinedConstantData;
use crate::kernel::revert_code::RevertCode;
use crate::kernel::state_reference::PartialStateReference;
use crate::kernel::validation_requests::RollupValidationRequests;
use crate::serialize::{BufferReader, Decode, Encode};

/// Public outputs of the final private kernel stage, produced once per
/// transaction and consumed by the rollup builder. An immutable value
/// object once decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelCircuitPublicInputs {
    pub aggregation_object: AggregationObject,
    pub rollup_validation_requests: RollupValidationRequests,
    pub end: CombinedAccumulatedData,
    pub constants: CombinedConstantData,
    pub start_state: PartialStateReference,
    pub revert_code: RevertCode,
}

impl KernelCircuitPublicInputs {
    pub fn empty() -> Self {
        Self {
            aggregation_object: AggregationObject::empty(),
            rollup_validation_requests: RollupValidationRequests::empty(),
            end: CombinedAccumulatedData::empty(),
            constants: CombinedConstantData::empty(),
            start_state: PartialStateReference::empty(),
            revert_code: RevertCode::Ok,
        }
    }

    /// Fee charged for this transaction.
    ///
    /// The base rollup circuit computes the same value in-circuit; this
    /// off-circuit duplicate lets the rollup builder price a tx before a
    /// proof exists. The two computations must stay bit-identical, or the
    /// block's content commitment becomes invalid.
    pub fn transaction_fee(&self) -> Fr {
        self.end
            .gas_used
            .compute_fee(&self.constants.global_variables.gas_fees)
            + self.constants.tx_context.gas_settings.inclusion_fee
    }

    /// The nullifiers actually emitted, skipping unused (zero) slots.
    pub fn non_empty_nullifiers(&self) -> Vec<Fr> {
        self.end
            .nullifiers
            .iter()
            .copied()
            .filter(|nullifier| !nullifier.is_zero())
            .collect()
    }
}

impl Encode for KernelCircuitPublicInputs {
    fn write(&self, buf: &mut Vec<u8>) {
        self.aggregation_object.write(buf);
        self.rollup_validation_requests.write(buf);
        self.end.write(buf);
        self.constants.write(buf);
        self.start_state.write(buf);
        self.revert_code.write(buf);
    }
}

impl Decode for KernelCircuitPublicInputs {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            aggregation_object: reader.read_object()?,
            rollup_validation_requests: reader.read_object()?,
            end: reader.read_object()?,
            constants: reader.read_object()?,
            start_state: reader.read_object()?,
            revert_code: reader.read_object()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::gas::{Gas, GasFees};

    fn sample() -> KernelCircuitPublicInputs {
        let mut inputs = KernelCircuitPublicInputs::empty();
        inputs.end.gas_used = Gas::new(120, 45);
        inputs.end.nullifiers[0] = Fr::new(5);
        inputs.end.nullifiers[2] = Fr::new(6);
        inputs.constants.global_variables.gas_fees = GasFees::new(Fr::new(3), Fr::new(2));
        inputs.constants.tx_context.gas_settings.inclusion_fee = Fr::new(1000);
        inputs.revert_code = RevertCode::AppLogicReverted;
        inputs
    }

    #[test]
    fn round_trips_through_bytes_and_hex() {
        let inputs = sample();
        assert_eq!(
            KernelCircuitPublicInputs::from_bytes(&inputs.to_bytes()).unwrap(),
            inputs
        );
        assert_eq!(
            KernelCircuitPublicInputs::from_hex(&inputs.to_hex()).unwrap(),
            inputs
        );
    }

    #[test]
    fn transaction_fee_is_gas_times_price_plus_inclusion() {
        let inputs = sample();
        assert_eq!(
            inputs.transaction_fee(),
            Fr::new(120 * 3 + 45 * 2 + 1000)
        );
    }

    #[test]
    fn transaction_fee_is_deterministic() {
        let inputs = sample();
        assert_eq!(inputs.transaction_fee(), inputs.transaction_fee());
        // A decoded copy prices identically to the original.
        let decoded = KernelCircuitPublicInputs::from_bytes(&inputs.to_bytes()).unwrap();
        assert_eq!(decoded.transaction_fee(), inputs.transaction_fee());
    }

    #[test]
    fn non_empty_nullifiers_skips_zero_slots() {
        let inputs = sample();
        assert_eq!(inputs.non_empty_nullifiers(), vec![Fr::new(5), Fr::new(6)]);
        assert!(KernelCircuitPublicInputs::empty()
            .non_empty_nullifiers()
            .is_empty());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let bytes = sample().to_bytes();
        assert!(KernelCircuitPublicInputs::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
