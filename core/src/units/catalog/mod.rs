mod imperial;
mod si;
mod us;

pub use imperial::ImperialCatalog;
pub use si::{SI_PREFIXES, SiCatalog};
pub use us::UsCatalog;

use super::spec::{Prefix, UnitSpec, UnitStandard};

/// A static table of unit definitions belonging to one measurement standard.
pub trait UnitCatalog {
    fn standard(&self) -> UnitStandard;

    /// Prefixes that may be applied to this catalog's prefixable units. Only
    /// SI has any.
    fn prefixes(&self) -> &'static [Prefix] {
        &[]
    }

    /// Explicitly declared units, without synthesized prefixed variants.
    fn units(&self) -> Vec<UnitSpec>;
}

/// SI, then US customary, then Imperial. Later catalogs replace same-symbol
/// entries of earlier ones.
pub fn default_catalogs() -> [&'static dyn UnitCatalog; 3] {
    [&SiCatalog, &UsCatalog, &ImperialCatalog]
}
