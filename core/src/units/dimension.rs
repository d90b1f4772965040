use std::fmt;

use crate::errors::UnitError;

/// Largest magnitude any single exponent may reach.
pub const MAX_POWER: i8 = 16;

const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Exponents over the seven SI base quantities, in the order length, mass,
/// time, current, temperature, substance, luminosity.
///
/// Dimensions form an additive group: multiplying units adds exponents,
/// dividing subtracts them. Every exponent stays within
/// `[-MAX_POWER, MAX_POWER]`; operations that would leave that range fail
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unit {
    exponents: [i8; 7],
}

impl Unit {
    /// The dimensionless identity.
    pub const ONE: Unit = Unit { exponents: [0; 7] };

    pub fn try_new(exponents: [i64; 7]) -> Result<Self, UnitError> {
        let mut out = [0i8; 7];
        for (slot, &e) in out.iter_mut().zip(exponents.iter()) {
            *slot = narrow(e).ok_or(UnitError::ExponentOutOfRange { exponent: e })?;
        }
        Ok(Self { exponents: out })
    }

    /// Unit vector along base quantity `index` (0 = length .. 6 = luminosity).
    pub(crate) const fn base(index: usize) -> Self {
        let mut exponents = [0i8; 7];
        exponents[index] = 1;
        Self { exponents }
    }

    pub const fn exponents(self) -> [i8; 7] {
        self.exponents
    }

    pub const fn length(self) -> i8 {
        self.exponents[0]
    }

    pub const fn mass(self) -> i8 {
        self.exponents[1]
    }

    pub const fn time(self) -> i8 {
        self.exponents[2]
    }

    pub const fn current(self) -> i8 {
        self.exponents[3]
    }

    pub const fn temperature(self) -> i8 {
        self.exponents[4]
    }

    pub const fn substance(self) -> i8 {
        self.exponents[5]
    }

    pub const fn luminosity(self) -> i8 {
        self.exponents[6]
    }

    pub fn is_dimensionless(self) -> bool {
        self == Self::ONE
    }

    pub fn multiply(self, rhs: Unit) -> Result<Unit, UnitError> {
        combine(self, rhs, 1).map_err(|exponent| UnitError::ExponentOutOfRange { exponent })
    }

    pub fn divide(self, rhs: Unit) -> Result<Unit, UnitError> {
        combine(self, rhs, -1).map_err(|exponent| UnitError::ExponentOutOfRange { exponent })
    }

    /// Negate every exponent. Always in range because the range is
    /// symmetric.
    pub const fn invert(self) -> Unit {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < 7 {
            exponents[i] = -exponents[i];
            i += 1;
        }
        Unit { exponents }
    }

    pub fn pow(self, power: i32) -> Result<Unit, UnitError> {
        scale(self, i64::from(power)).map_err(|exponent| UnitError::ExponentOutOfRange { exponent })
    }

    /// Strict dimensional equivalence, required before converting values.
    pub fn same_dimensions(a: Unit, b: Unit) -> bool {
        a == b
    }

    /// Either side is dimensionless or both share a dimension: the rule that
    /// lets a scalar multiply a quantity but rejects adding unlike ones.
    pub fn same_or_scalar(a: Unit, b: Unit) -> bool {
        a == Self::ONE || b == Self::ONE || Self::same_dimensions(a, b)
    }

    // Table authoring. These run in const items, where an out-of-range
    // exponent stops compilation.

    pub(crate) const fn times(self, rhs: Unit) -> Unit {
        match combine(self, rhs, 1) {
            Ok(unit) => unit,
            Err(_) => panic!("dimension exponent out of range"),
        }
    }

    pub(crate) const fn per(self, rhs: Unit) -> Unit {
        match combine(self, rhs, -1) {
            Ok(unit) => unit,
            Err(_) => panic!("dimension exponent out of range"),
        }
    }

    pub(crate) const fn powi(self, power: i64) -> Unit {
        match scale(self, power) {
            Ok(unit) => unit,
            Err(_) => panic!("dimension exponent out of range"),
        }
    }
}

impl fmt::Display for Unit {
    /// Non-zero exponents only, e.g. `m^-1 kg s^-2`; `1` when dimensionless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, &e) in BASE_SYMBOLS.iter().zip(self.exponents.iter()) {
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if e == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{symbol}^{e}")?;
            }
        }
        Ok(())
    }
}

const fn narrow(e: i64) -> Option<i8> {
    if e < -(MAX_POWER as i64) || e > MAX_POWER as i64 {
        None
    } else {
        Some(e as i8)
    }
}

/// `a + sign * b`, component-wise. The error carries the first exponent that
/// left the valid range.
const fn combine(a: Unit, b: Unit, sign: i64) -> Result<Unit, i64> {
    let mut exponents = [0i8; 7];
    let mut i = 0;
    while i < 7 {
        let e = a.exponents[i] as i64 + sign * b.exponents[i] as i64;
        match narrow(e) {
            Some(v) => exponents[i] = v,
            None => return Err(e),
        }
        i += 1;
    }
    Ok(Unit { exponents })
}

const fn scale(a: Unit, power: i64) -> Result<Unit, i64> {
    let mut exponents = [0i8; 7];
    let mut i = 0;
    while i < 7 {
        let e = (a.exponents[i] as i64).saturating_mul(power);
        match narrow(e) {
            Some(v) => exponents[i] = v,
            None => return Err(e),
        }
        i += 1;
    }
    Ok(Unit { exponents })
}
