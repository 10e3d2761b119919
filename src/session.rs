//! Generate-then-save workflow state.
//!
//! A [`Session`] is what a front end (terminal, browser, desktop) holds: the
//! evolver, the most recently generated password and the vault. Front ends
//! forward user actions to [`Session::generate`] and [`Session::save`] and
//! render [`Session::pending`] and [`Session::vault`].

use crate::error::{Error, Result};
use crate::password::PasswordEvolver;
use crate::vault::{Vault, VaultEntry};
use tracing::{debug, warn};

/// Interactive password session.
#[derive(Debug, Clone)]
pub struct Session {
    evolver: PasswordEvolver,
    pending: Option<String>,
    vault: Vault,
}

impl Session {
    /// Starts a session with an empty vault.
    pub fn new(evolver: PasswordEvolver) -> Self {
        Self {
            evolver,
            pending: None,
            vault: Vault::new(),
        }
    }

    /// Generates a new password and makes it the pending one, replacing any
    /// previous pending password.
    pub fn generate(&mut self) -> Result<&str> {
        let evolution = self.evolver.run()?;
        debug!(
            strength = evolution.strength,
            generations = evolution.generations,
            "password generated"
        );
        Ok(self.pending.insert(evolution.password).as_str())
    }

    /// The generated password awaiting a save, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Saves the pending password under `purpose`.
    ///
    /// Fails with [`Error::MissingPassword`] if nothing was generated and
    /// [`Error::EmptyPurpose`] if `purpose` is blank. On success the pending
    /// password is cleared; on failure nothing changes.
    pub fn save(&mut self, purpose: &str) -> Result<&VaultEntry> {
        let Some(password) = self.pending.as_deref() else {
            warn!("save requested before a password was generated");
            return Err(Error::MissingPassword);
        };
        if purpose.trim().is_empty() {
            warn!("save requested without a purpose");
            return Err(Error::EmptyPurpose);
        }
        let entry = self.vault.save(purpose, password)?;
        self.pending = None;
        Ok(entry)
    }

    /// Saved passwords.
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// The evolver used by [`generate`](Session::generate).
    pub fn evolver(&self) -> &PasswordEvolver {
        &self.evolver
    }
}
