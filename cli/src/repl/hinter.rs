use unitscript::{ScanOptions, UnitRegistry};

use crate::quantity;

/// Preview the result of the line once the cursor sits at its end.
pub fn hint_for(
    registry: &UnitRegistry,
    options: ScanOptions,
    line: &str,
    pos: usize,
) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        return None;
    }

    let results = quantity::evaluate_line(trimmed, options, registry).ok()?;
    match results.as_slice() {
        [only] => Some(format!("  => {only}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_conversion() {
        let registry = UnitRegistry::create_default();
        let hint = hint_for(&registry, ScanOptions::default(), "1 km as m", 9);
        assert_eq!(hint.as_deref(), Some("  => 1000 m"));
    }

    #[test]
    fn no_hint_mid_line_or_on_error() {
        let registry = UnitRegistry::create_default();
        assert_eq!(hint_for(&registry, ScanOptions::default(), "1 km as m", 3), None);
        assert_eq!(hint_for(&registry, ScanOptions::default(), "1 km as s", 9), None);
    }
}
