//! Kernel circuit public-input aggregates and their sub-structs.
//!
//! Each aggregate is the fixed-shape public output of one proving stage.
//! Encodings are strict field-order concatenations, recursive over the
//! sub-structs, with no self-describing tags; the encoder and decoder for a
//! given circuit version must always travel together.

mod accumulated_data;
mod aggregation;
mod call_request;
mod constant_data;
mod gas;
mod kernel_circuit_public_inputs;
mod public_kernel_circuit_public_inputs;
mod revert_code;
mod state_reference;
mod validation_requests;

pub use accumulated_data::{CombinedAccumulatedData, PublicAccumulatedData};
pub use aggregation::AggregationObject;
pub use call_request::CallRequest;
pub use constant_data::{CombinedConstantData, GlobalVariables, TxContext};
pub use gas::{Gas, GasFees, GasSettings};
pub use kernel_circuit_public_inputs::KernelCircuitPublicInputs;
pub use public_kernel_circuit_public_inputs::PublicKernelCircuitPublicInputs;
pub use revert_code::RevertCode;
pub use state_reference::{AppendOnlyTreeSnapshot, PartialStateReference};
pub use validation_requests::{MaxBlockNumber, RollupValidationRequests, ValidationRequests};
