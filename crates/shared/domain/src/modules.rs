//! Per-module options registry.
//!
//! Each module owns the shape of its own record; the registry only stores
//! and hands records back. Modules that want typed access implement
//! [`ModuleOptions`] and go through [`ModulesOptions::resolve`].

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Typed view of a module's options.
///
/// `Default` is what the module uses when the registry has no entry for it.
pub trait ModuleOptions: DeserializeOwned + Default {
    /// Registry identifier, e.g. `"@modules/app-menu"`
    const MODULE_ID: &'static str;
}

/// Open-ended options record of a single module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRecord(BTreeMap<String, Value>);

impl ModuleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string option (`None` if absent or not a string)
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the record into a module's own options type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let object: Map<String, Value> = self.0.clone().into_iter().collect();
        serde_json::from_value(Value::Object(object))
    }
}

/// Registry of module records keyed by module identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulesOptions(BTreeMap<String, ModuleRecord>);

impl ModulesOptions {
    pub fn builder() -> ModulesOptionsBuilder {
        ModulesOptionsBuilder::default()
    }

    /// Look up a module's record. `None` means the module uses its defaults.
    pub fn get(&self, module_id: &str) -> Option<&ModuleRecord> {
        self.0.get(module_id)
    }

    pub fn contains(&self, module_id: &str) -> bool {
        self.0.contains_key(module_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Typed options for module `T`, falling back to `T::default()` when the
    /// module has no entry.
    pub fn resolve<T: ModuleOptions>(&self) -> DomainResult<T> {
        match self.get(T::MODULE_ID) {
            Some(record) => record
                .decode()
                .map_err(|e| DomainError::module_decode(T::MODULE_ID, e)),
            None => {
                tracing::debug!(module = T::MODULE_ID, "No options registered, using defaults");
                Ok(T::default())
            }
        }
    }
}

impl FromIterator<(String, ModuleRecord)> for ModulesOptions {
    fn from_iter<I: IntoIterator<Item = (String, ModuleRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Programmatic construction of a [`ModulesOptions`] registry.
///
/// Registering the same identifier twice keeps the last record.
#[derive(Debug, Default)]
pub struct ModulesOptionsBuilder {
    modules: BTreeMap<String, ModuleRecord>,
}

impl ModulesOptionsBuilder {
    pub fn module(mut self, module_id: impl Into<String>, record: ModuleRecord) -> Self {
        let module_id = module_id.into();
        if self.modules.contains_key(&module_id) {
            tracing::debug!(module = %module_id, "Replacing previously registered options");
        }
        self.modules.insert(module_id, record);
        self
    }

    pub fn build(self) -> ModulesOptions {
        ModulesOptions(self.modules)
    }
}
