use serde::{Deserialize, Serialize};

use crate::errors::WireResult;
use crate::kernel::accumulated_data::PublicAccumulatedData;
use crate::kernel::aggregation::AggregationObject;
use crate::kernel::call_request::CallRequest;
use crate::kernel::constant_data::CombinedConstantData;
use crate::kernel::revert_code::RevertCode;
use crate::kernel::validation_requests::ValidationRequests;
use crate::serialize::{BufferReader, Decode, Encode};

// Which call-stack slot holds each pending phase. Fixed by the circuit
// layout; "any non-empty slot" would be wrong.
const SETUP_CALL_STACK_SLOT: usize = 1;
const APP_LOGIC_CALL_STACK_SLOT: usize = 0;
const TEARDOWN_CALL_STACK_SLOT: usize = 0;

/// Public outputs shared by every public kernel stage.
///
/// The `needs_*` flags are a checklist of execution phases still owed, not
/// mutually exclusive states: the orchestrator runs setup, then app logic,
/// then teardown, and each flag is read independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKernelCircuitPublicInputs {
    pub aggregation_object: AggregationObject,
    pub validation_requests: ValidationRequests,
    pub end_non_revertible: PublicAccumulatedData,
    pub end: PublicAccumulatedData,
    pub constants: CombinedConstantData,
    pub revert_code: RevertCode,
    pub public_teardown_call_request: CallRequest,
}

impl PublicKernelCircuitPublicInputs {
    pub fn empty() -> Self {
        Self {
            aggregation_object: AggregationObject::empty(),
            validation_requests: ValidationRequests::empty(),
            end_non_revertible: PublicAccumulatedData::empty(),
            end: PublicAccumulatedData::empty(),
            constants: CombinedConstantData::empty(),
            revert_code: RevertCode::Ok,
            public_teardown_call_request: CallRequest::empty(),
        }
    }

    /// A setup call is still pending.
    pub fn needs_setup(&self) -> bool {
        !self.end_non_revertible.public_call_stack[SETUP_CALL_STACK_SLOT].is_empty()
    }

    /// An app-logic call is still pending.
    pub fn needs_app_logic(&self) -> bool {
        !self.end.public_call_stack[APP_LOGIC_CALL_STACK_SLOT].is_empty()
    }

    /// The teardown call is still pending.
    pub fn needs_teardown(&self) -> bool {
        !self.end_non_revertible.public_call_stack[TEARDOWN_CALL_STACK_SLOT].is_empty()
    }
}

impl Encode for PublicKernelCircuitPublicInputs {
    fn write(&self, buf: &mut Vec<u8>) {
        self.aggregation_object.write(buf);
        self.validation_requests.write(buf);
        self.end_non_revertible.write(buf);
        self.end.write(buf);
        self.constants.write(buf);
        self.revert_code.write(buf);
        self.public_teardown_call_request.write(buf);
    }
}

impl Decode for PublicKernelCircuitPublicInputs {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        Ok(Self {
            aggregation_object: reader.read_object()?,
            validation_requests: reader.read_object()?,
            end_non_revertible: reader.read_object()?,
            end: reader.read_object()?,
            constants: reader.read_object()?,
            revert_code: reader.read_object()?,
            public_teardown_call_request: reader.read_object()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fr;

    fn occupied() -> CallRequest {
        CallRequest {
            hash: Fr::new(7),
            ..CallRequest::empty()
        }
    }

    #[test]
    fn empty_inputs_need_nothing() {
        let inputs = PublicKernelCircuitPublicInputs::empty();
        assert!(!inputs.needs_setup());
        assert!(!inputs.needs_app_logic());
        assert!(!inputs.needs_teardown());
    }

    #[test]
    fn each_flag_reads_exactly_one_slot() {
        // Every combination of the three relevant slots, plus a distractor
        // slot that must never influence any flag.
        for setup in [false, true] {
            for app_logic in [false, true] {
                for teardown in [false, true] {
                    for distractor in [false, true] {
                        let mut inputs = PublicKernelCircuitPublicInputs::empty();
                        if setup {
                            inputs.end_non_revertible.public_call_stack[1] = occupied();
                        }
                        if teardown {
                            inputs.end_non_revertible.public_call_stack[0] = occupied();
                        }
                        if app_logic {
                            inputs.end.public_call_stack[0] = occupied();
                        }
                        if distractor {
                            inputs.end.public_call_stack[1] = occupied();
                            inputs.end_non_revertible.public_call_stack[2] = occupied();
                        }

                        assert_eq!(inputs.needs_setup(), setup);
                        assert_eq!(inputs.needs_app_logic(), app_logic);
                        assert_eq!(inputs.needs_teardown(), teardown);
                    }
                }
            }
        }
    }

    #[test]
    fn round_trips_through_bytes_and_hex() {
        let mut inputs = PublicKernelCircuitPublicInputs::empty();
        inputs.end_non_revertible.public_call_stack[1] = occupied();
        inputs.public_teardown_call_request = occupied();
        inputs.revert_code = RevertCode::TeardownReverted;

        assert_eq!(
            PublicKernelCircuitPublicInputs::from_bytes(&inputs.to_bytes()).unwrap(),
            inputs
        );
        assert_eq!(
            PublicKernelCircuitPublicInputs::from_hex(&inputs.to_hex()).unwrap(),
            inputs
        );
    }

    #[test]
    fn flags_survive_a_round_trip() {
        let mut inputs = PublicKernelCircuitPublicInputs::empty();
        inputs.end_non_revertible.public_call_stack[0] = occupied();
        inputs.end.public_call_stack[0] = occupied();

        let decoded =
            PublicKernelCircuitPublicInputs::from_bytes(&inputs.to_bytes()).unwrap();
        assert!(!decoded.needs_setup());
        assert!(decoded.needs_app_logic());
        assert!(decoded.needs_teardown());
    }
}
