use unitscript::errors::UnitError;
use unitscript::units::catalog::SI_PREFIXES;
use unitscript::units::quantity::{FREQUENCY, LENGTH, MASS, PRESSURE, TEMPERATURE};
use unitscript::units::{Prefix, UnitCatalog, UnitRegistry, UnitSpec, UnitStandard};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

fn custom(symbol: &str, scale: f64) -> UnitSpec {
    UnitSpec::multiplicative(UnitStandard::Si, "length", symbol, symbol, LENGTH, scale)
}

struct TinySi(Vec<UnitSpec>);

impl UnitCatalog for TinySi {
    fn standard(&self) -> UnitStandard {
        UnitStandard::Si
    }

    fn prefixes(&self) -> &'static [Prefix] {
        &SI_PREFIXES
    }

    fn units(&self) -> Vec<UnitSpec> {
        self.0.clone()
    }
}

#[test]
fn prefixed_pressure_and_frequency() {
    let registry = UnitRegistry::create_default();
    let pascal = registry.try_get("Pa").unwrap();
    let kpa = registry.try_get("kPa").unwrap();
    assert_eq!(kpa.scale(), pascal.scale() * 1000.0);
    assert_eq!(kpa.dim(), PRESSURE);
    assert_eq!(kpa.name(), "kilopascal");
    assert!(!kpa.is_prefixable());
    assert!(kpa.aliases().is_empty());

    let hertz = registry.try_get("Hz").unwrap();
    let mhz = registry.try_get("MHz").unwrap();
    assert_eq!(mhz.scale(), hertz.scale() * 1e6);
    assert_eq!(mhz.dim(), FREQUENCY);
}

#[test]
fn gram_prefixes_and_explicit_kilogram() {
    let registry = UnitRegistry::create_default();
    assert!(close(registry.try_get("mg").unwrap().scale(), 1e-6));
    let kg = registry.try_get("kg").unwrap();
    assert_eq!(kg.scale(), 1.0);
    assert_eq!(kg.dim(), MASS);
    assert_eq!(kg.aliases(), ["kilogram".to_string()]);
}

#[test]
fn affine_units_are_never_prefixed() {
    let registry = UnitRegistry::create_default();
    let celsius = registry.try_get("°C").unwrap();
    assert!(celsius.is_affine());
    assert_eq!(celsius.offset(), 273.15);
    assert_eq!(celsius.dim(), TEMPERATURE);
    assert!(registry.try_get("k°C").is_none());
    assert!(registry.try_get("m°F").is_none());
}

#[test]
fn aliases_resolve_to_canonical() {
    let registry = UnitRegistry::create_default();
    assert_eq!(registry.try_get("meter").unwrap().symbol(), "m");
    assert_eq!(registry.try_get("degC").unwrap().symbol(), "°C");
    assert_eq!(registry.try_get("ohm").unwrap().symbol(), "Ω");
}

#[test]
fn micro_has_ascii_aliases() {
    let registry = UnitRegistry::create_default();
    assert_eq!(registry.try_get("uF").unwrap().symbol(), "µF");
    assert_eq!(registry.try_get("um").unwrap().symbol(), "µm");
    assert!(close(registry.try_get("us").unwrap().scale(), 1e-6));
}

#[test]
fn later_catalogs_replace_earlier_entries() {
    let registry = UnitRegistry::create_default();
    assert_eq!(registry.try_get("in").unwrap().standard(), UnitStandard::Imperial);
    assert_eq!(registry.try_get("°F").unwrap().standard(), UnitStandard::Imperial);
    assert_eq!(registry.try_get("gal").unwrap().standard(), UnitStandard::Us);
    assert_eq!(registry.try_get("ksi").unwrap().standard(), UnitStandard::Us);
}

#[test]
fn unknown_symbols() {
    let registry = UnitRegistry::create_default();
    assert!(registry.try_get("furlong").is_none());
    assert!(!registry.contains("furlong"));
    assert!(matches!(
        registry.get("furlong"),
        Err(UnitError::UnknownSymbol { symbol }) if symbol == "furlong"
    ));
}

#[test]
fn explicit_units_win_over_synthesized_ones() {
    let mut registry = UnitRegistry::new();
    let catalog = TinySi(vec![custom("m", 1.0).prefixable(), custom("km", 999.0)]);
    registry.load_defaults(&[&catalog]);

    assert_eq!(registry.try_get("km").unwrap().scale(), 999.0);
    assert!(close(registry.try_get("cm").unwrap().scale(), 0.01));
    assert_eq!(registry.try_get("km").unwrap().name(), "km");
}

#[test]
fn synthesized_symbols_skip_existing_aliases() {
    let mut registry = UnitRegistry::new();
    let catalog = TinySi(vec![
        custom("m", 1.0).prefixable(),
        custom("x", 7.0).with_aliases(["mm"]),
    ]);
    registry.load_defaults(&[&catalog]);

    assert_eq!(registry.try_get("mm").unwrap().symbol(), "x");
}

#[test]
fn identity_prefix_is_not_synthesized() {
    let mut registry = UnitRegistry::new();
    registry.load_defaults(&[&TinySi(vec![custom("m", 1.0).prefixable()])]);
    // 24 prefixed variants plus the unit itself
    assert_eq!(registry.len(), 25);
}

#[test]
fn override_then_rollback() {
    let mut registry = UnitRegistry::create_default();
    let default_scale = registry.try_get("ft").unwrap().scale();

    registry.override_unit(custom("ft", 0.5), false).unwrap();
    assert_eq!(registry.try_get("ft").unwrap().scale(), 0.5);
    assert!(registry.has_overrides());

    let again = registry.override_unit(custom("ft", 0.25), false);
    assert!(matches!(again, Err(UnitError::OverrideExists { symbol }) if symbol == "ft"));
    assert_eq!(registry.try_get("ft").unwrap().scale(), 0.5);

    registry.override_unit(custom("ft", 0.25), true).unwrap();
    assert_eq!(registry.try_get("ft").unwrap().scale(), 0.25);

    registry.rollback_to_defaults();
    assert!(!registry.has_overrides());
    assert_eq!(registry.try_get("ft").unwrap().scale(), default_scale);
}

#[test]
fn override_aliases() {
    let mut registry = UnitRegistry::create_default();
    registry
        .override_unit(custom("cubit", 0.4572).with_aliases(["cubits"]), true)
        .unwrap();
    registry.override_alias("elbow", "cubit").unwrap();
    registry.override_alias("metres", "m").unwrap();

    assert_eq!(registry.try_get("cubits").unwrap().symbol(), "cubit");
    assert_eq!(registry.try_get("elbow").unwrap().symbol(), "cubit");
    assert_eq!(registry.try_get("metres").unwrap().symbol(), "m");

    assert!(matches!(
        registry.override_alias("x", "meter"),
        Err(UnitError::UnknownSymbol { .. })
    ));
    assert!(matches!(
        registry.override_alias("x", "nothing"),
        Err(UnitError::UnknownSymbol { .. })
    ));

    registry.rollback_to_defaults();
    assert!(registry.try_get("elbow").is_none());
    assert!(registry.try_get("cubit").is_none());
}

#[test]
fn symbols_are_sorted_and_unique() {
    let mut registry = UnitRegistry::create_default();
    let before = registry.len();
    registry.override_unit(custom("ft", 0.3), true).unwrap();
    registry.override_unit(custom("cubit", 0.4572), true).unwrap();

    let symbols = registry.symbols();
    assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(symbols.len(), before + 1);
    assert_eq!(registry.len(), before + 1);
}

#[test]
fn unit_spec_display() {
    let registry = UnitRegistry::create_default();
    assert_eq!(
        registry.try_get("kPa").unwrap().to_string(),
        "kPa = 1000 m^-1 kg s^-2 (kilopascal, pressure, stress)"
    );
    assert_eq!(
        registry.try_get("°C").unwrap().to_string(),
        "°C = 1 K + 273.15 (degree Celsius, temperature)"
    );
}
