use std::collections::HashMap;

use super::catalog::{UnitCatalog, default_catalogs};
use super::spec::{Prefix, UnitSpec, UnitStandard};
use crate::errors::UnitError;

/// Symbol table for every unit a session can name.
///
/// Two layers are kept apart: `defaults`, built once from catalogs, and
/// session `overrides`, which are consulted first and can be dropped
/// wholesale with [`rollback_to_defaults`](UnitRegistry::rollback_to_defaults).
/// Each layer maps canonical symbols to specs and aliases to canonical
/// symbols.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    defaults: HashMap<String, UnitSpec>,
    default_aliases: HashMap<String, String>,
    overrides: HashMap<String, UnitSpec>,
    override_aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the SI, US and Imperial catalogs.
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.load_defaults(&default_catalogs());
        registry
    }

    /// Rebuild the default layer from `catalogs`, in order. Session
    /// overrides are left alone.
    #[tracing::instrument(level = "debug", skip_all, fields(catalogs = catalogs.len()))]
    pub fn load_defaults(&mut self, catalogs: &[&dyn UnitCatalog]) {
        self.defaults.clear();
        self.default_aliases.clear();

        for catalog in catalogs {
            let units = catalog.units();
            for spec in &units {
                self.add_default(spec.clone());
            }
            tracing::debug!(standard = %catalog.standard(), units = units.len(), "loaded catalog");

            if catalog.standard() == UnitStandard::Si {
                self.add_prefixed(&units, catalog.prefixes());
            }
        }

        self.add_micro_aliases();
        tracing::debug!(
            symbols = self.defaults.len(),
            aliases = self.default_aliases.len(),
            "default units ready"
        );
    }

    fn add_default(&mut self, spec: UnitSpec) {
        for alias in spec.aliases() {
            self.default_aliases
                .insert(alias.clone(), spec.symbol().to_string());
        }
        self.defaults.insert(spec.symbol().to_string(), spec);
    }

    fn add_prefixed(&mut self, units: &[UnitSpec], prefixes: &[Prefix]) {
        let mut added = 0usize;
        let mut skipped = 0usize;

        for base in units.iter().filter(|u| u.is_prefixable() && !u.is_affine()) {
            for prefix in prefixes.iter().filter(|p| !p.is_identity()) {
                let derived = base.with_prefix(prefix);
                if self.defaults.contains_key(derived.symbol())
                    || self.default_aliases.contains_key(derived.symbol())
                {
                    tracing::trace!(symbol = derived.symbol(), "prefixed symbol collides, skipped");
                    skipped += 1;
                    continue;
                }
                self.add_default(derived);
                added += 1;
            }
        }

        tracing::debug!(added, skipped, "synthesized prefixed units");
    }

    /// `uF` for `µF` and so on, where no such alias exists yet.
    fn add_micro_aliases(&mut self) {
        let micro: Vec<String> = self
            .defaults
            .keys()
            .filter(|symbol| symbol.starts_with('µ') && symbol.chars().count() >= 2)
            .cloned()
            .collect();

        for symbol in micro {
            let ascii = format!("u{}", &symbol['µ'.len_utf8()..]);
            self.default_aliases.entry(ascii).or_insert(symbol);
        }
    }

    /// Resolve a canonical symbol or alias, overrides first.
    pub fn try_get(&self, symbol: &str) -> Option<&UnitSpec> {
        let key = self
            .override_aliases
            .get(symbol)
            .map_or(symbol, String::as_str);
        if let Some(spec) = self.overrides.get(key) {
            return Some(spec);
        }

        let key = self
            .default_aliases
            .get(key)
            .map_or(key, String::as_str);
        self.defaults.get(key)
    }

    /// Like [`try_get`](Self::try_get), but a miss is an error.
    pub fn get(&self, symbol: &str) -> Result<&UnitSpec, UnitError> {
        self.try_get(symbol).ok_or_else(|| UnitError::UnknownSymbol {
            symbol: symbol.to_string(),
        })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.try_get(symbol).is_some()
    }

    /// Add or replace a session definition together with its aliases.
    pub fn override_unit(&mut self, spec: UnitSpec, overwrite: bool) -> Result<(), UnitError> {
        if !overwrite && self.overrides.contains_key(spec.symbol()) {
            return Err(UnitError::OverrideExists {
                symbol: spec.symbol().to_string(),
            });
        }

        tracing::debug!(symbol = spec.symbol(), "override unit");
        for alias in spec.aliases() {
            self.override_aliases
                .insert(alias.clone(), spec.symbol().to_string());
        }
        self.overrides.insert(spec.symbol().to_string(), spec);
        Ok(())
    }

    /// Point `alias` at `canonical` for this session. The target must be a
    /// canonical symbol of either layer, not another alias.
    pub fn override_alias(&mut self, alias: &str, canonical: &str) -> Result<(), UnitError> {
        if !self.overrides.contains_key(canonical) && !self.defaults.contains_key(canonical) {
            return Err(UnitError::UnknownSymbol {
                symbol: canonical.to_string(),
            });
        }

        tracing::debug!(alias, canonical, "override alias");
        self.override_aliases
            .insert(alias.to_string(), canonical.to_string());
        Ok(())
    }

    /// Drop every session override.
    pub fn rollback_to_defaults(&mut self) {
        tracing::debug!(
            units = self.overrides.len(),
            aliases = self.override_aliases.len(),
            "rollback to defaults"
        );
        self.overrides.clear();
        self.override_aliases.clear();
    }

    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty() || !self.override_aliases.is_empty()
    }

    /// Number of distinct canonical symbols across both layers.
    pub fn len(&self) -> usize {
        self.defaults.len()
            + self
                .overrides
                .keys()
                .filter(|symbol| !self.defaults.contains_key(*symbol))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.overrides.is_empty()
    }

    /// Canonical symbols of both layers, sorted and deduplicated.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .defaults
            .keys()
            .chain(self.overrides.keys())
            .map(String::as_str)
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    /// Every alias visible in this session with the canonical symbol it names.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.override_aliases
            .iter()
            .chain(
                self.default_aliases
                    .iter()
                    .filter(|(alias, _)| !self.override_aliases.contains_key(*alias)),
            )
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    pub(super) fn snapshot_overrides(&self) -> (HashMap<String, UnitSpec>, HashMap<String, String>) {
        (self.overrides.clone(), self.override_aliases.clone())
    }

    pub(super) fn restore_overrides(
        &mut self,
        (overrides, aliases): (HashMap<String, UnitSpec>, HashMap<String, String>),
    ) {
        self.overrides = overrides;
        self.override_aliases = aliases;
    }
}
