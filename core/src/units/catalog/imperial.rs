use super::UnitCatalog;
use super::us::{
    FOOT_TO_METRE, INCH_TO_METRE, MILE_TO_METRE, POUND_TO_KG, PSI_TO_PA, STANDARD_GRAVITY,
    YARD_TO_METRE, fahrenheit,
};
use crate::units::quantity::{FORCE, LENGTH, MASS, PRESSURE, VOLUME};
use crate::units::spec::{UnitSpec, UnitStandard};

// 1 imperial gallon is exactly 4.54609 L.
const IMP_GALLON_TO_M3: f64 = 4.546_09e-3;
const IMP_QUART_TO_M3: f64 = IMP_GALLON_TO_M3 / 4.0;
const IMP_PINT_TO_M3: f64 = IMP_GALLON_TO_M3 / 8.0;
const IMP_FLUID_OUNCE_TO_M3: f64 = IMP_GALLON_TO_M3 / 160.0;

/// UK imperial units. Length, the pound and psi share the international
/// definitions used by the US catalog.
pub struct ImperialCatalog;

impl UnitCatalog for ImperialCatalog {
    fn standard(&self) -> UnitStandard {
        UnitStandard::Imperial
    }

    fn units(&self) -> Vec<UnitSpec> {
        let unit = |quantity, name, symbol, dim, scale| {
            UnitSpec::multiplicative(UnitStandard::Imperial, quantity, name, symbol, dim, scale)
        };

        vec![
            unit("length", "inch", "in", LENGTH, INCH_TO_METRE),
            unit("length", "foot", "ft", LENGTH, FOOT_TO_METRE),
            unit("length", "yard", "yd", LENGTH, YARD_TO_METRE),
            unit("length", "mile", "mi", LENGTH, MILE_TO_METRE),
            unit("mass", "ounce", "oz", MASS, POUND_TO_KG / 16.0),
            unit("mass", "pound", "lb", MASS, POUND_TO_KG).with_aliases(["lbm"]),
            unit("mass", "stone", "st", MASS, 14.0 * POUND_TO_KG),
            unit("mass", "long ton", "long ton", MASS, 2240.0 * POUND_TO_KG)
                .with_aliases(["imperial ton", "ton (imp)"]),
            unit("force", "pound-force", "lbf", FORCE, POUND_TO_KG * STANDARD_GRAVITY),
            unit("pressure, stress", "pound per square inch", "psi", PRESSURE, PSI_TO_PA),
            unit("volume", "imperial gallon", "imp gal", VOLUME, IMP_GALLON_TO_M3)
                .with_aliases(["gal (imp)", "UK gal"]),
            unit("volume", "imperial quart", "imp qt", VOLUME, IMP_QUART_TO_M3)
                .with_aliases(["qt (imp)"]),
            unit("volume", "imperial pint", "imp pt", VOLUME, IMP_PINT_TO_M3)
                .with_aliases(["pt (imp)"]),
            unit("volume", "imperial fluid ounce", "imp fl oz", VOLUME, IMP_FLUID_OUNCE_TO_M3)
                .with_aliases(["fl oz (imp)"]),
            fahrenheit(UnitStandard::Imperial),
        ]
    }
}
