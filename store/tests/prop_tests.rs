use proptest::prelude::*;

use bitkit_store::database_file_name;
use bitkit_types::{DerivationPurpose, NetworkKind, SyncMode};

fn network_strategy() -> impl Strategy<Value = NetworkKind> {
    prop::sample::select(NetworkKind::ALL.to_vec())
}

fn purpose_strategy() -> impl Strategy<Value = DerivationPurpose> {
    prop::sample::select(DerivationPurpose::ALL.to_vec())
}

fn sync_mode_strategy() -> impl Strategy<Value = SyncMode> {
    prop::sample::select(SyncMode::ALL.to_vec())
}

proptest! {
    /// The partition name is injective over the full input tuple.
    #[test]
    fn file_name_is_injective(
        id_a in "[a-zA-Z0-9_-]{1,24}",
        id_b in "[a-zA-Z0-9_-]{1,24}",
        net_a in network_strategy(),
        net_b in network_strategy(),
        purpose_a in purpose_strategy(),
        purpose_b in purpose_strategy(),
        mode_a in sync_mode_strategy(),
        mode_b in sync_mode_strategy(),
    ) {
        let name_a = database_file_name(&id_a, net_a, purpose_a, mode_a);
        let name_b = database_file_name(&id_b, net_b, purpose_b, mode_b);
        let same_inputs =
            id_a == id_b && net_a == net_b && purpose_a == purpose_b && mode_a == mode_b;
        prop_assert_eq!(name_a == name_b, same_inputs);
    }

    /// The partition name is stable: repeated calls yield identical bytes.
    #[test]
    fn file_name_is_stable(
        id in "[a-zA-Z0-9_-]{1,24}",
        net in network_strategy(),
        purpose in purpose_strategy(),
        mode in sync_mode_strategy(),
    ) {
        let first = database_file_name(&id, net, purpose, mode);
        let second = database_file_name(&id, net, purpose, mode);
        prop_assert_eq!(first, second);
    }
}
