//! Integration tests for the PassVault vault store.
//!
//! Most tests run against `MemoryStore`; one round-trip exercises the
//! on-disk `FileStore`.

use passvault::crypto::kdf::Argon2Params;
use passvault::errors::PassVaultError;
use passvault::vault::{EntryDraft, EntryPatch, FileStore, MemoryStore, Vault, VaultStore};
use tempfile::TempDir;

/// Cheap Argon2 parameters so the suite stays fast.
fn test_params() -> Argon2Params {
    Argon2Params {
        memory_kib: 8_192,
        iterations: 1,
        parallelism: 1,
    }
}

/// Helper: an in-memory vault store.
fn memory_store() -> VaultStore<MemoryStore> {
    VaultStore::with_params(MemoryStore::new(), test_params())
}

/// Helper: a draft with the given title.
fn draft(title: &str) -> EntryDraft {
    EntryDraft {
        title: title.to_string(),
        username: "a@b.com".to_string(),
        password: "x".to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Account lifecycle
// ---------------------------------------------------------------------------

#[test]
fn create_account_then_verify_passphrase() {
    let mut store = memory_store();
    store.create_account("master-pw").expect("create account");

    assert!(store.account_exists());
    assert!(store.verify_passphrase("master-pw"));
    assert!(!store.verify_passphrase("wrong-pw"));
}

#[test]
fn verify_passphrase_is_false_without_account() {
    let store = memory_store();
    assert!(!store.account_exists());
    assert!(!store.verify_passphrase("anything"));
}

#[test]
fn create_account_persists_an_empty_encrypted_vault() {
    let mut store = memory_store();
    store.create_account("master-pw").expect("create account");

    let vault = store.load_vault("master-pw").expect("load vault");
    assert!(vault.entries.is_empty());
    assert!(vault.last_modified > 0);
}

#[test]
fn wipe_removes_account_and_vault() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();
    store.add_entry(draft("Gmail"), "master-pw").unwrap();

    store.wipe().expect("wipe");

    assert!(!store.account_exists());
    assert!(!store.verify_passphrase("master-pw"));
    // With no blob persisted, loading yields a fresh empty vault.
    assert!(store.load_vault("master-pw").unwrap().entries.is_empty());
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

#[test]
fn load_vault_without_blob_returns_fresh_empty_vault() {
    let store = memory_store();
    let vault = store.load_vault("any-pw").expect("load");
    assert!(vault.entries.is_empty());
}

#[test]
fn load_vault_with_wrong_passphrase_fails() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();

    let err = store.load_vault("wrong-pw").unwrap_err();
    assert!(matches!(err, PassVaultError::VaultAccess));
}

#[test]
fn vault_wire_format_is_camel_case() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();
    store.add_entry(draft("Gmail"), "master-pw").unwrap();

    let vault = store.load_vault("master-pw").unwrap();
    let json = serde_json::to_string(&vault).unwrap();

    assert!(json.contains("\"lastModified\""));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"updatedAt\""));
    assert!(!json.contains("last_modified"));
}

// ---------------------------------------------------------------------------
// Entry CRUD
// ---------------------------------------------------------------------------

#[test]
fn add_entry_populates_id_and_timestamps() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();

    let created = store.add_entry(draft("Gmail"), "master-pw").expect("add");

    let vault = store.load_vault("master-pw").unwrap();
    assert_eq!(vault.entries.len(), 1);

    let entry = &vault.entries[0];
    assert_eq!(entry, &created);
    assert_eq!(entry.title, "Gmail");
    assert_eq!(entry.username, "a@b.com");
    assert_eq!(entry.password, "x");
    assert!(!entry.id.is_empty());
    assert!(entry.created_at > 0);
    assert_eq!(entry.created_at, entry.updated_at);
}

#[test]
fn added_entries_get_unique_hex_ids() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();

    let mut ids = Vec::new();
    for title in ["One", "Two", "Three", "Four"] {
        let entry = store.add_entry(draft(title), "master-pw").unwrap();
        assert_eq!(entry.id.len(), 32);
        assert!(entry.id.bytes().all(|b| b.is_ascii_hexdigit()));
        ids.push(entry.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn entries_keep_insertion_order() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();

    for title in ["Zebra", "Apple", "Mango"] {
        store.add_entry(draft(title), "master-pw").unwrap();
    }

    let titles: Vec<String> = store
        .load_vault("master-pw")
        .unwrap()
        .entries
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["Zebra", "Apple", "Mango"]);
}

#[test]
fn update_entry_changes_only_patched_fields() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();
    let entry = store.add_entry(draft("Gmail"), "master-pw").unwrap();

    let patch = EntryPatch {
        password: Some("y".to_string()),
        ..Default::default()
    };
    store.update_entry(&entry.id, patch, "master-pw").expect("update");

    let vault = store.load_vault("master-pw").unwrap();
    let updated = &vault.entries[0];

    assert_eq!(updated.password, "y");
    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.created_at, entry.created_at);
    assert_eq!(updated.title, entry.title);
    assert_eq!(updated.username, entry.username);
    assert!(updated.updated_at >= entry.updated_at);
}

#[test]
fn update_missing_entry_fails() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();

    let err = store
        .update_entry("no-such-id", EntryPatch::default(), "master-pw")
        .unwrap_err();
    assert!(matches!(err, PassVaultError::EntryNotFound(id) if id == "no-such-id"));
}

#[test]
fn delete_entry_removes_it() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();
    let entry = store.add_entry(draft("Gmail"), "master-pw").unwrap();
    store.add_entry(draft("Bank"), "master-pw").unwrap();

    store.delete_entry(&entry.id, "master-pw").expect("delete");

    let vault = store.load_vault("master-pw").unwrap();
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].title, "Bank");
}

#[test]
fn delete_nonexistent_entry_is_a_silent_noop() {
    let mut store = memory_store();
    store.create_account("master-pw").unwrap();
    store.add_entry(draft("Gmail"), "master-pw").unwrap();

    store
        .delete_entry("no-such-id", "master-pw")
        .expect("deleting a missing id must not fail");

    let vault = store.load_vault("master-pw").unwrap();
    assert_eq!(vault.entries.len(), 1);
}

// ---------------------------------------------------------------------------
// Export / import
// ---------------------------------------------------------------------------

#[test]
fn export_then_replace_import_roundtrip() {
    let mut source = memory_store();
    source.create_account("pw-a").unwrap();
    source.add_entry(draft("Gmail"), "pw-a").unwrap();
    let blob = source.export_vault("pw-a").expect("export");

    let mut target = memory_store();
    target.create_account("pw-a").unwrap();
    target.add_entry(draft("Old"), "pw-a").unwrap();

    // Replace import discards everything the target had.
    target.import_vault(&blob, "pw-a", false, None).expect("import");

    let vault = target.load_vault("pw-a").unwrap();
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].title, "Gmail");
}

#[test]
fn merge_import_keeps_existing_and_appends_foreign_entries() {
    let mut source = memory_store();
    source.create_account("pw-a").unwrap();
    let foreign = source.add_entry(draft("Gmail"), "pw-a").unwrap();
    let blob = source.export_vault("pw-a").unwrap();

    let mut target = memory_store();
    target.create_account("pw-b").unwrap();
    let existing = target.add_entry(draft("Bank"), "pw-b").unwrap();

    target
        .import_vault(&blob, "pw-a", true, Some("pw-b"))
        .expect("merge import");

    let vault = target.load_vault("pw-b").unwrap();
    let ids: Vec<&str> = vault.entries.iter().map(|e| e.id.as_str()).collect();
    // Existing entries first, non-conflicting imported ones appended.
    assert_eq!(ids, [existing.id.as_str(), foreign.id.as_str()]);
}

#[test]
fn merge_import_is_idempotent() {
    let mut source = memory_store();
    source.create_account("pw-a").unwrap();
    source.add_entry(draft("Gmail"), "pw-a").unwrap();
    let blob = source.export_vault("pw-a").unwrap();

    let mut target = memory_store();
    target.create_account("pw-b").unwrap();
    target.add_entry(draft("Bank"), "pw-b").unwrap();

    target.import_vault(&blob, "pw-a", true, Some("pw-b")).unwrap();
    target.import_vault(&blob, "pw-a", true, Some("pw-b")).unwrap();

    // Importing the same backup twice must not duplicate entries —
    // conflicts are resolved by id with existing entries winning.
    let vault = target.load_vault("pw-b").unwrap();
    assert_eq!(vault.entries.len(), 2);
}

#[test]
fn merge_import_drops_conflicting_ids_keeping_existing_fields() {
    let mut store = memory_store();
    store.create_account("pw").unwrap();
    let entry = store.add_entry(draft("Gmail"), "pw").unwrap();
    let blob = store.export_vault("pw").unwrap();

    // Mutate the live entry after the export.
    let patch = EntryPatch {
        password: Some("new-secret".to_string()),
        ..Default::default()
    };
    store.update_entry(&entry.id, patch, "pw").unwrap();

    // Re-importing the stale backup must not roll the entry back.
    store.import_vault(&blob, "pw", true, None).unwrap();

    let vault = store.load_vault("pw").unwrap();
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].password, "new-secret");
}

#[test]
fn import_with_wrong_passphrase_fails_and_leaves_target_untouched() {
    let mut source = memory_store();
    source.create_account("pw-a").unwrap();
    source.add_entry(draft("Gmail"), "pw-a").unwrap();
    let blob = source.export_vault("pw-a").unwrap();

    let mut target = memory_store();
    target.create_account("pw-b").unwrap();
    target.add_entry(draft("Bank"), "pw-b").unwrap();

    let err = target
        .import_vault(&blob, "wrong-pw", true, Some("pw-b"))
        .unwrap_err();
    assert!(matches!(err, PassVaultError::ImportFailed(msg) if msg.contains("invalid backup")));

    let vault = target.load_vault("pw-b").unwrap();
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].title, "Bank");
}

#[test]
fn import_rejects_well_encrypted_but_malformed_backup() {
    use passvault::crypto::encrypt_with_params;

    // Decrypts fine, but has no `entries` array.
    let bogus = encrypt_with_params("{\"foo\": 1}", "pw", &test_params()).unwrap();

    let mut target = memory_store();
    target.create_account("pw").unwrap();

    let err = target.import_vault(&bogus, "pw", false, None).unwrap_err();
    assert!(matches!(err, PassVaultError::ImportFailed(msg) if msg.contains("invalid vault format")));
}

#[test]
fn import_can_reencrypt_under_a_new_passphrase() {
    let mut source = memory_store();
    source.create_account("pw-a").unwrap();
    source.add_entry(draft("Gmail"), "pw-a").unwrap();
    let blob = source.export_vault("pw-a").unwrap();

    let mut target = memory_store();
    target.create_account("pw-b").unwrap();
    target.import_vault(&blob, "pw-a", false, Some("pw-b")).unwrap();

    // Saved under the target passphrase, not the backup's.
    assert_eq!(target.load_vault("pw-b").unwrap().entries.len(), 1);
    assert!(target.load_vault("pw-a").is_err());
}

#[test]
fn export_blob_is_standalone() {
    let mut store = memory_store();
    store.create_account("pw").unwrap();
    store.add_entry(draft("Gmail"), "pw").unwrap();
    let blob = store.export_vault("pw").unwrap();

    // The export must be decryptable with nothing but the passphrase.
    let json = passvault::crypto::decrypt(&blob, "pw").expect("standalone decrypt");
    let vault: Vault = serde_json::from_str(&json).expect("parse exported vault");
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].title, "Gmail");
}

// ---------------------------------------------------------------------------
// FileStore round-trip
// ---------------------------------------------------------------------------

#[test]
fn file_store_persists_across_reopens() {
    let dir = TempDir::new().expect("temp dir");

    let file_store = FileStore::open(dir.path()).expect("open store");
    let mut store = VaultStore::with_params(file_store, test_params());
    store.create_account("master-pw").unwrap();
    let entry = store.add_entry(draft("Gmail"), "master-pw").unwrap();
    drop(store);

    // A brand-new handle over the same directory sees the same data.
    let reopened = FileStore::open(dir.path()).expect("reopen store");
    let store = VaultStore::with_params(reopened, test_params());
    assert!(store.account_exists());
    assert!(store.verify_passphrase("master-pw"));

    let vault = store.load_vault("master-pw").unwrap();
    assert_eq!(vault.entries.len(), 1);
    assert_eq!(vault.entries[0].id, entry.id);
}

#[test]
fn file_store_persists_only_ciphertext() {
    let dir = TempDir::new().expect("temp dir");

    let file_store = FileStore::open(dir.path()).expect("open store");
    let mut store = VaultStore::with_params(file_store, test_params());
    store.create_account("master-pw").unwrap();
    store
        .add_entry(
            EntryDraft {
                title: "Gmail".to_string(),
                username: "a@b.com".to_string(),
                password: "super-secret-value".to_string(),
                ..Default::default()
            },
            "master-pw",
        )
        .unwrap();

    let blob = std::fs::read_to_string(dir.path().join("vault")).expect("vault file");
    assert!(!blob.contains("super-secret-value"));
    assert!(!blob.contains("Gmail"));
}
