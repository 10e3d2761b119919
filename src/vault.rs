//! In-memory table of saved passwords.
//!
//! Entries keep insertion order and live only as long as the [`Vault`].

use crate::error::{Error, Result};

/// One saved password and what it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaultEntry {
    /// Account, site or other label the password belongs to.
    pub purpose: String,
    /// The password.
    pub password: String,
}

/// Ordered list of saved passwords.
///
/// ```
/// use u_passgen::Vault;
///
/// let mut vault = Vault::new();
/// vault.save("mail", "aB3$aB3$aB3$").unwrap();
/// assert_eq!(vault.len(), 1);
/// assert!(vault.save("  ", "x").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vault {
    entries: Vec<VaultEntry>,
}

impl Vault {
    /// Creates an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// The purpose is trimmed; the password is stored exactly as given. A
    /// blank purpose fails with [`Error::EmptyPurpose`], a blank password
    /// with [`Error::MissingPassword`]. The vault is unchanged on error.
    pub fn save(&mut self, purpose: &str, password: &str) -> Result<&VaultEntry> {
        let purpose = purpose.trim();
        if purpose.is_empty() {
            return Err(Error::EmptyPurpose);
        }
        if password.trim().is_empty() {
            return Err(Error::MissingPassword);
        }

        self.entries.push(VaultEntry {
            purpose: purpose.to_owned(),
            password: password.to_owned(),
        });
        tracing::debug!(purpose, count = self.entries.len(), "password saved");
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, VaultEntry> {
        self.entries.iter()
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Vault {
    type Item = &'a VaultEntry;
    type IntoIter = std::slice::Iter<'a, VaultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
