//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the two persisted records — the account record and
//! the encrypted vault blob — through an injected [`KeyValueStore`].
//! Every operation decrypts the blob, applies its change, re-encrypts
//! and persists; no decrypted vault survives across calls.  Mutating
//! operations take `&mut self`, so one handle cannot interleave two
//! load-modify-save sequences.

use subtle::ConstantTimeEq;

use crate::crypto::cipher::{decrypt, encrypt_with_params, hash_passphrase};
use crate::crypto::kdf::Argon2Params;
use crate::errors::{PassVaultError, Result};

use super::entry::{now_millis, Account, Entry, EntryDraft, EntryPatch, Vault};
use super::kv::KeyValueStore;

/// Key under which the account record is persisted.
pub const ACCOUNT_KEY: &str = "account";

/// Key under which the encrypted vault blob is persisted.
pub const VAULT_KEY: &str = "vault";

/// The main vault handle.  Construct with an injected store, then use
/// its methods to manage the account and its credential records.
pub struct VaultStore<S: KeyValueStore> {
    store: S,
    argon2_params: Argon2Params,
}

impl<S: KeyValueStore> VaultStore<S> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Wrap a persisted store, encrypting new blobs with default
    /// Argon2id parameters.
    pub fn new(store: S) -> Self {
        Self::with_params(store, Argon2Params::default())
    }

    /// Wrap a persisted store with explicit Argon2id parameters
    /// (e.g. from `.passvault.toml`).  Existing blobs decrypt with
    /// whatever parameters they embed; these apply to new writes.
    pub fn with_params(store: S, argon2_params: Argon2Params) -> Self {
        Self {
            store,
            argon2_params,
        }
    }

    // ------------------------------------------------------------------
    // Account lifecycle
    // ------------------------------------------------------------------

    /// Create the account: persist the passphrase digest, then an
    /// encrypted empty vault.  Overwrites whatever was stored before;
    /// callers gate on [`account_exists`].
    pub fn create_account(&mut self, passphrase: &str) -> Result<()> {
        let account = Account {
            hashed_master_password: hash_passphrase(passphrase),
            created_at: now_millis(),
        };
        let account_json = serde_json::to_string(&account)
            .map_err(|e| PassVaultError::SerializationFailed(format!("account: {e}")))?;
        self.store.set(ACCOUNT_KEY, &account_json)?;

        self.save_vault(&Vault::empty(), passphrase)
    }

    /// True iff an account record is persisted.  Store read errors
    /// read as "no account".
    pub fn account_exists(&self) -> bool {
        matches!(self.store.get(ACCOUNT_KEY), Ok(Some(_)))
    }

    /// Compare a candidate against the stored passphrase digest.
    ///
    /// Constant-time comparison, so the check leaks nothing about how
    /// many digest bytes matched.  False when no account exists.
    pub fn verify_passphrase(&self, candidate: &str) -> bool {
        let Ok(Some(account_json)) = self.store.get(ACCOUNT_KEY) else {
            return false;
        };
        let Ok(account) = serde_json::from_str::<Account>(&account_json) else {
            return false;
        };

        let candidate_digest = hash_passphrase(candidate);
        candidate_digest
            .as_bytes()
            .ct_eq(account.hashed_master_password.as_bytes())
            .into()
    }

    /// Delete both persisted records unconditionally.  Irreversible.
    pub fn wipe(&mut self) -> Result<()> {
        self.store.delete(ACCOUNT_KEY)?;
        self.store.delete(VAULT_KEY)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Vault load/save
    // ------------------------------------------------------------------

    /// Decrypt and parse the persisted vault.
    ///
    /// Returns a fresh empty vault when no blob is persisted yet.
    /// A decryption or parse failure is the user-facing "wrong master
    /// passphrase" signal.
    pub fn load_vault(&self, passphrase: &str) -> Result<Vault> {
        let Some(blob) = self.store.get(VAULT_KEY)? else {
            return Ok(Vault::empty());
        };

        let vault_json = decrypt(&blob, passphrase).map_err(|_| PassVaultError::VaultAccess)?;
        serde_json::from_str(&vault_json).map_err(|_| PassVaultError::VaultAccess)
    }

    /// Serialize, encrypt, and persist the vault as one single-key write.
    pub fn save_vault(&mut self, vault: &Vault, passphrase: &str) -> Result<()> {
        let vault_json = serde_json::to_string(vault)
            .map_err(|e| PassVaultError::SerializationFailed(format!("vault: {e}")))?;
        let blob = encrypt_with_params(&vault_json, passphrase, &self.argon2_params)?;
        self.store.set(VAULT_KEY, &blob)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Append a new entry with a generated id and fresh timestamps.
    /// Returns the created entry so callers can show its id.
    pub fn add_entry(&mut self, draft: EntryDraft, passphrase: &str) -> Result<Entry> {
        let mut vault = self.load_vault(passphrase)?;

        let entry = Entry::from_draft(draft)?;
        vault.entries.push(entry.clone());
        vault.last_modified = now_millis();

        self.save_vault(&vault, passphrase)?;
        Ok(entry)
    }

    /// Merge a patch into the entry with the given id.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    pub fn update_entry(&mut self, id: &str, patch: EntryPatch, passphrase: &str) -> Result<()> {
        let mut vault = self.load_vault(passphrase)?;

        let entry = vault
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| PassVaultError::EntryNotFound(id.to_string()))?;
        entry.apply(patch);

        vault.last_modified = now_millis();
        self.save_vault(&vault, passphrase)
    }

    /// Remove the entry with the given id.  Deleting an id that does
    /// not exist is a silent no-op.
    pub fn delete_entry(&mut self, id: &str, passphrase: &str) -> Result<()> {
        let mut vault = self.load_vault(passphrase)?;

        vault.entries.retain(|e| e.id != id);
        vault.last_modified = now_millis();

        self.save_vault(&vault, passphrase)
    }

    // ------------------------------------------------------------------
    // Export / import
    // ------------------------------------------------------------------

    /// Produce a standalone encrypted backup blob.
    ///
    /// The vault is loaded (which validates the passphrase) and then
    /// encrypted *again* under the same passphrase, so the export is
    /// decryptable anywhere with only the passphrase — it does not
    /// depend on this store's persisted encoding.
    pub fn export_vault(&self, passphrase: &str) -> Result<String> {
        let vault = self.load_vault(passphrase)?;
        let vault_json = serde_json::to_string_pretty(&vault)
            .map_err(|e| PassVaultError::SerializationFailed(format!("export: {e}")))?;
        encrypt_with_params(&vault_json, passphrase, &self.argon2_params)
    }

    /// Import a backup blob produced by [`export_vault`].
    ///
    /// The blob is decrypted with `import_passphrase` and saved under
    /// `target_passphrase` when given, else under `import_passphrase`.
    /// With `merge`, existing entries win on id conflict and
    /// non-conflicting imported entries are appended after them, which
    /// makes re-importing the same backup idempotent.  Without `merge`,
    /// the imported entries fully replace the existing ones.
    ///
    /// All decrypt/parse/merge work happens before the single
    /// persisting write, so a failed import leaves the stored vault
    /// untouched.
    pub fn import_vault(
        &mut self,
        blob: &str,
        import_passphrase: &str,
        merge: bool,
        target_passphrase: Option<&str>,
    ) -> Result<()> {
        let vault_json = decrypt(blob, import_passphrase).map_err(|_| {
            PassVaultError::ImportFailed("wrong passphrase or invalid backup file".into())
        })?;

        let imported_entries = parse_imported_entries(&vault_json)?;

        let save_passphrase = target_passphrase.unwrap_or(import_passphrase);

        let entries = if merge {
            let existing = self.load_vault(save_passphrase)?;
            let mut entries = existing.entries;
            // Existing entries win on id conflict; no field-level merge.
            let new_entries: Vec<Entry> = imported_entries
                .into_iter()
                .filter(|imported| !entries.iter().any(|e| e.id == imported.id))
                .collect();
            entries.extend(new_entries);
            entries
        } else {
            imported_entries
        };

        let vault = Vault {
            entries,
            last_modified: now_millis(),
        };
        self.save_vault(&vault, save_passphrase)
    }
}

/// Validate the shape of a decrypted backup and pull out its entries.
///
/// Requires a JSON object with an `entries` array; anything else is an
/// invalid backup.  Other top-level fields (e.g. `lastModified`) are
/// ignored — the importer stamps its own.
fn parse_imported_entries(vault_json: &str) -> Result<Vec<Entry>> {
    let invalid = || PassVaultError::ImportFailed("invalid vault format".into());

    let value: serde_json::Value = serde_json::from_str(vault_json).map_err(|_| invalid())?;
    let entries = value.get("entries").ok_or_else(invalid)?;
    if !entries.is_array() {
        return Err(invalid());
    }

    serde_json::from_value(entries.clone()).map_err(|_| invalid())
}
