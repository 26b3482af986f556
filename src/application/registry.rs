use crate::domain::ports::ProviderFamily;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps a provider name to its family of compatible capabilities.
///
/// Keys are normalized to lowercase on insert and lookup, so resolution is
/// case-insensitive. The registry is populated once at startup and only read
/// afterwards; `resolve` takes `&self` and families are shared via `Arc`, so
/// concurrent lookups need no locking.
#[derive(Default)]
pub struct ProviderRegistry {
    families: HashMap<String, Arc<ProviderFamily>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family under its provider name.
    ///
    /// Fails with `DuplicateProvider` if a family is already registered under
    /// the same name in any casing.
    pub fn register(&mut self, family: ProviderFamily) -> Result<()> {
        let key = family.provider().to_lowercase();
        if self.families.contains_key(&key) {
            return Err(PaymentError::DuplicateProvider(family.provider().into()));
        }
        self.families.insert(key, Arc::new(family));
        Ok(())
    }

    /// Looks up a family by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Result<Arc<ProviderFamily>> {
        self.families
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| PaymentError::UnknownProvider(name.into()))
    }

    /// Registered provider names, in registration-independent order.
    pub fn providers(&self) -> Vec<String> {
        self.families
            .values()
            .map(|f| f.provider().to_string())
            .collect()
    }
}
