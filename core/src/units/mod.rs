pub mod catalog;
pub mod conversion;
pub mod dimension;
pub mod expr;
pub mod overrides;
pub mod quantity;
pub mod registry;
pub mod spec;

pub use catalog::{ImperialCatalog, SiCatalog, UnitCatalog, UsCatalog};
pub use conversion::{ResolvedUnit, convert};
pub use dimension::{MAX_POWER, Unit};
pub use expr::UnitExpr;
pub use registry::UnitRegistry;
pub use spec::{Prefix, UnitBehavior, UnitSpec, UnitStandard};
