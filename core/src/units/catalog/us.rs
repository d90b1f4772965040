use super::UnitCatalog;
use crate::units::quantity::{FORCE, LENGTH, MASS, PRESSURE, TEMPERATURE, VOLUME};
use crate::units::spec::{UnitSpec, UnitStandard};

pub(super) const INCH_TO_METRE: f64 = 0.0254;
pub(super) const FOOT_TO_METRE: f64 = 0.3048;
pub(super) const YARD_TO_METRE: f64 = 0.9144;
pub(super) const MILE_TO_METRE: f64 = 1609.344;
pub(super) const POUND_TO_KG: f64 = 0.453_592_37;
pub(super) const STANDARD_GRAVITY: f64 = 9.80665;
pub(super) const PSI_TO_PA: f64 = 6894.757_293_168_361;
const KSI_TO_PA: f64 = PSI_TO_PA * 1000.0;
const US_GALLON_TO_M3: f64 = 0.003_785_411_784;

pub struct UsCatalog;

impl UnitCatalog for UsCatalog {
    fn standard(&self) -> UnitStandard {
        UnitStandard::Us
    }

    fn units(&self) -> Vec<UnitSpec> {
        let unit = |quantity, name, symbol, dim, scale| {
            UnitSpec::multiplicative(UnitStandard::Us, quantity, name, symbol, dim, scale)
        };

        vec![
            unit("length", "inch", "in", LENGTH, INCH_TO_METRE),
            unit("length", "foot", "ft", LENGTH, FOOT_TO_METRE),
            unit("length", "yard", "yd", LENGTH, YARD_TO_METRE),
            unit("length", "mile", "mi", LENGTH, MILE_TO_METRE),
            unit("mass", "pound", "lb", MASS, POUND_TO_KG).with_aliases(["lbm"]),
            unit("force", "pound-force", "lbf", FORCE, POUND_TO_KG * STANDARD_GRAVITY),
            unit("pressure, stress", "pound per square inch", "psi", PRESSURE, PSI_TO_PA),
            unit("pressure, stress", "kip per square inch", "ksi", PRESSURE, KSI_TO_PA),
            unit("volume", "US gallon", "gal", VOLUME, US_GALLON_TO_M3),
            fahrenheit(UnitStandard::Us),
        ]
    }
}

/// K = °F × 5/9 + 255.372222…
pub(super) fn fahrenheit(standard: UnitStandard) -> UnitSpec {
    UnitSpec::affine(
        standard,
        "temperature",
        "degree Fahrenheit",
        "°F",
        TEMPERATURE,
        5.0 / 9.0,
        255.372_222_222_222_2,
    )
    .with_aliases(["degF", "fahrenheit"])
}
