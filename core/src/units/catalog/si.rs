use std::f64::consts::PI;

use super::UnitCatalog;
use crate::units::quantity::{
    CAPACITANCE, CHARGE, CONDUCTANCE, CURRENT, ENERGY, FORCE, FREQUENCY, INDUCTANCE, LENGTH,
    LUMINOSITY, MAGNETIC_FLUX, MAGNETIC_FLUX_DENSITY, MASS, POWER, PRESSURE, RESISTANCE, SCALAR,
    SUBSTANCE, TEMPERATURE, TIME, VOLTAGE, VOLUME,
};
use crate::units::spec::{Prefix, UnitSpec, UnitStandard};

/// Decimal prefixes from quetta down to quecto, with the empty prefix in
/// the middle.
pub static SI_PREFIXES: [Prefix; 25] = [
    Prefix::new("quetta", "Q", 1e30, 30),
    Prefix::new("ronna", "R", 1e27, 27),
    Prefix::new("yotta", "Y", 1e24, 24),
    Prefix::new("zetta", "Z", 1e21, 21),
    Prefix::new("exa", "E", 1e18, 18),
    Prefix::new("peta", "P", 1e15, 15),
    Prefix::new("tera", "T", 1e12, 12),
    Prefix::new("giga", "G", 1e9, 9),
    Prefix::new("mega", "M", 1e6, 6),
    Prefix::new("kilo", "k", 1e3, 3),
    Prefix::new("hecto", "h", 1e2, 2),
    Prefix::new("deca", "da", 1e1, 1),
    Prefix::new("", "", 1e0, 0),
    Prefix::new("deci", "d", 1e-1, -1),
    Prefix::new("centi", "c", 1e-2, -2),
    Prefix::new("milli", "m", 1e-3, -3),
    Prefix::new("micro", "µ", 1e-6, -6),
    Prefix::new("nano", "n", 1e-9, -9),
    Prefix::new("pico", "p", 1e-12, -12),
    Prefix::new("femto", "f", 1e-15, -15),
    Prefix::new("atto", "a", 1e-18, -18),
    Prefix::new("zepto", "z", 1e-21, -21),
    Prefix::new("yocto", "y", 1e-24, -24),
    Prefix::new("ronto", "r", 1e-27, -27),
    Prefix::new("quecto", "q", 1e-30, -30),
];

pub struct SiCatalog;

impl UnitCatalog for SiCatalog {
    fn standard(&self) -> UnitStandard {
        UnitStandard::Si
    }

    fn prefixes(&self) -> &'static [Prefix] {
        &SI_PREFIXES
    }

    fn units(&self) -> Vec<UnitSpec> {
        let unit = |quantity, name, symbol, dim, scale| {
            UnitSpec::multiplicative(UnitStandard::Si, quantity, name, symbol, dim, scale)
        };

        vec![
            // base
            unit("length", "metre", "m", LENGTH, 1.0)
                .prefixable()
                .with_aliases(["meter", "metre"]),
            unit("mass", "kilogram", "kg", MASS, 1.0).with_aliases(["kilogram"]),
            unit("time", "second", "s", TIME, 1.0)
                .prefixable()
                .with_aliases(["sec", "second"]),
            unit("current", "ampere", "A", CURRENT, 1.0).prefixable(),
            unit("temperature", "kelvin", "K", TEMPERATURE, 1.0).prefixable(),
            unit("substance", "mole", "mol", SUBSTANCE, 1.0).prefixable(),
            unit("luminous intensity", "candela", "cd", LUMINOSITY, 1.0).prefixable(),
            // prefixes attach to the gram, not the kilogram
            unit("mass", "gram", "g", MASS, 1e-3).prefixable(),
            // angles
            unit("plane angle", "radian", "rad", SCALAR, 1.0),
            unit("solid angle", "steradian", "sr", SCALAR, 1.0),
            unit("plane angle", "degree", "deg", SCALAR, PI / 180.0).with_aliases(["°"]),
            unit("plane angle", "revolution", "rev", SCALAR, 2.0 * PI),
            // time
            unit("time", "minute", "min", TIME, 60.0),
            unit("time", "hour", "h", TIME, 3600.0).with_aliases(["hr"]),
            unit("time", "day", "d", TIME, 86400.0),
            UnitSpec::affine(
                UnitStandard::Si,
                "temperature",
                "degree Celsius",
                "°C",
                TEMPERATURE,
                1.0,
                273.15,
            )
            .with_aliases(["degC", "celsius"]),
            // named derived
            unit("frequency", "hertz", "Hz", FREQUENCY, 1.0).prefixable(),
            unit("force", "newton", "N", FORCE, 1.0).prefixable(),
            unit("pressure, stress", "pascal", "Pa", PRESSURE, 1.0).prefixable(),
            unit("energy, work, heat", "joule", "J", ENERGY, 1.0).prefixable(),
            unit("power", "watt", "W", POWER, 1.0).prefixable(),
            unit("charge", "coulomb", "C", CHARGE, 1.0).prefixable(),
            unit("voltage", "volt", "V", VOLTAGE, 1.0).prefixable(),
            unit("capacitance", "farad", "F", CAPACITANCE, 1.0).prefixable(),
            unit("resistance", "ohm", "Ω", RESISTANCE, 1.0)
                .prefixable()
                .with_aliases(["ohm"]),
            unit("conductance", "siemens", "S", CONDUCTANCE, 1.0).prefixable(),
            unit("magnetic flux", "weber", "Wb", MAGNETIC_FLUX, 1.0).prefixable(),
            unit("magnetic flux density", "tesla", "T", MAGNETIC_FLUX_DENSITY, 1.0).prefixable(),
            unit("inductance", "henry", "H", INDUCTANCE, 1.0).prefixable(),
            // accepted for use with SI
            unit("volume", "litre", "L", VOLUME, 1e-3)
                .prefixable()
                .with_aliases(["l", "liter", "litre"]),
            unit("pressure", "bar", "bar", PRESSURE, 1e5).prefixable(),
            unit("pressure", "standard atmosphere", "atm", PRESSURE, 101_325.0),
            unit("mass", "tonne", "t", MASS, 1000.0).with_aliases([
                "tonne",
                "metric ton",
                "metric tonne",
            ]),
        ]
    }
}
