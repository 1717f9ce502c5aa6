//! Credential record and vault data model.
//!
//! Wire names are camelCase so exported blobs stay byte-compatible
//! with backups produced by older clients.  Timestamps are integer
//! milliseconds since the Unix epoch for the same reason.

use chrono::Utc;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// A single credential record stored in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque unique identifier, generated at creation, never changed.
    pub id: String,

    /// Display name for the credential (e.g. "Gmail").
    pub title: String,

    /// Login name.  May be empty.
    pub username: String,

    /// The stored secret value.
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Creation time in epoch milliseconds.  Set once, never changed.
    pub created_at: i64,

    /// Last mutation time in epoch milliseconds.
    pub updated_at: i64,
}

/// Input fields for a new entry.  `id` and the timestamps are filled
/// in by the store when the entry is created.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub username: String,
    pub password: String,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}

/// A partial update merged over an existing entry.
///
/// `None` fields are left untouched.  `id` and `created_at` are not
/// representable here, so an update can never change them.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}

impl Entry {
    /// Build a new entry from a draft with a fresh random id and
    /// `created_at == updated_at == now`.
    ///
    /// Fails only if the OS random source fails while generating the id.
    pub fn from_draft(draft: EntryDraft) -> Result<Self> {
        let now = now_millis();
        Ok(Self {
            id: generate_id()?,
            title: draft.title,
            username: draft.username,
            password: draft.password,
            website: draft.website,
            notes: draft.notes,
            category: draft.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a patch into this entry, refreshing `updated_at`.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(website) = patch.website {
            self.website = Some(website);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        self.updated_at = now_millis();
    }
}

/// The full set of credential records, persisted as one encrypted unit.
///
/// Entry order is insertion order; no sorting is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub entries: Vec<Entry>,
    /// Epoch milliseconds of the last vault-level write.
    pub last_modified: i64,
}

impl Vault {
    /// A vault with no entries, stamped now.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            last_modified: now_millis(),
        }
    }
}

/// The persisted account record.  Holds only the one-way digest of the
/// master passphrase — never anything recoverable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub hashed_master_password: String,
    /// Epoch milliseconds of account creation.
    pub created_at: i64,
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate an opaque unique entry id: 16 random bytes as hex.
fn generate_id() -> Result<String> {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PassVaultError::RngFailure(format!("entry id generation: {e}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
