use proptest::collection::vec;
use proptest::prelude::*;

use veil_circuit_types::{
    BufferReader, Decode, Encode, EncryptedTxLogs, FunctionLogs, Log, LogKind, TxLogs,
    Unencrypted, UnencryptedTxLogs,
};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

// Groupings of at most MAX_LOGS_PER_TX payloads into function calls.
fn arb_payload_groups() -> impl Strategy<Value = Vec<Vec<Vec<u8>>>> {
    vec(
        vec(vec(any::<u8>(), 0..48), 0..=4),
        0..=4,
    )
    .prop_filter("within the per-tx maximum", |groups| {
        groups.iter().map(Vec::len).sum::<usize>() <= Unencrypted::MAX_LOGS_PER_TX
    })
}

fn build_logs<K: LogKind>(groups: &[Vec<Vec<u8>>]) -> TxLogs<K> {
    TxLogs::new(
        groups
            .iter()
            .map(|group| {
                FunctionLogs::new(group.iter().map(|data| Log::new(data.clone())).collect())
            })
            .collect(),
    )
    .expect("groups stay within capacity")
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn tx_logs_round_trip_in_both_length_modes(groups in arb_payload_groups()) {
        let logs: UnencryptedTxLogs = build_logs(&groups);
        let bytes = logs.to_bytes();

        prop_assert_eq!(bytes.len(), logs.serialized_length());
        prop_assert_eq!(&UnencryptedTxLogs::from_bytes(&bytes).unwrap(), &logs);

        let mut reader = BufferReader::new(&bytes[4..]);
        let implicit = UnencryptedTxLogs::from_buffer(&mut reader, false).unwrap();
        prop_assert!(reader.is_empty());
        prop_assert_eq!(&implicit, &logs);
    }

    #[test]
    fn commitment_depends_only_on_the_unrolled_sequence(groups in arb_payload_groups()) {
        let grouped: EncryptedTxLogs = build_logs(&groups);

        // Regroup every log into its own function call.
        let flat: Vec<Vec<Vec<u8>>> = groups
            .iter()
            .flatten()
            .map(|data| vec![data.clone()])
            .collect();
        let regrouped: EncryptedTxLogs = build_logs(&flat);

        prop_assert_eq!(grouped.hash(), regrouped.hash());
    }

    #[test]
    fn commitment_is_zero_exactly_for_empty_logs(groups in arb_payload_groups()) {
        let logs: EncryptedTxLogs = build_logs(&groups);
        let is_zero = logs.hash() == [0u8; 32];
        prop_assert_eq!(is_zero, logs.total_log_count() == 0);
    }

    #[test]
    fn hex_form_is_reversible(groups in arb_payload_groups()) {
        let logs: UnencryptedTxLogs = build_logs(&groups);
        prop_assert_eq!(UnencryptedTxLogs::from_hex(&logs.to_hex()).unwrap(), logs);
    }
}
