//! Partition-directory maintenance.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::identity::wallet_id_component;
use crate::StoreError;

/// Delete every wallet partition in `dir` except those whose wallet-id
/// component appears in `except_wallet_ids`. Files that are not wallet
/// partitions are left alone. Returns the number of partitions removed.
pub fn clear_partitions(dir: &Path, except_wallet_ids: &[&str]) -> Result<usize, StoreError> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Some(wallet_id) = wallet_id_component(&name) else {
            debug!(file = %name, "skipping non-partition file");
            continue;
        };
        if except_wallet_ids.contains(&wallet_id) {
            continue;
        }
        fs::remove_file(&path)?;
        warn!(file = %name, "removed wallet partition");
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::database_file_name;
    use bitkit_types::{DerivationPurpose, NetworkKind, SyncMode};

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn removes_all_but_allow_listed_wallets() {
        let dir = tempfile::tempdir().unwrap();
        let keep = database_file_name(
            "keeper",
            NetworkKind::MainNet,
            DerivationPurpose::Bip84,
            SyncMode::Api,
        );
        let drop_a = database_file_name(
            "old",
            NetworkKind::MainNet,
            DerivationPurpose::Bip44,
            SyncMode::Api,
        );
        let drop_b = database_file_name(
            "old",
            NetworkKind::TestNet,
            DerivationPurpose::Bip44,
            SyncMode::Full,
        );
        touch(dir.path(), &keep);
        touch(dir.path(), &drop_a);
        touch(dir.path(), &drop_b);

        let removed = clear_partitions(dir.path(), &["keeper"]).unwrap();
        assert_eq!(removed, 2);
        assert!(dir.path().join(&keep).exists());
        assert!(!dir.path().join(&drop_a).exists());
        assert!(!dir.path().join(&drop_b).exists());
    }

    #[test]
    fn leaves_non_partition_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lockfile");
        let removed = clear_partitions(dir.path(), &[]).unwrap();
        assert_eq!(removed, 0);
        assert!(dir.path().join("lockfile").exists());
    }

    #[test]
    fn missing_directory_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(clear_partitions(&missing, &[]).unwrap(), 0);
    }
}
