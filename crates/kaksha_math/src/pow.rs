//! Dual-path exponentiation for the propagation hot loops.
//!
//! The propagation equations raise radii and dimensionless ratios to a
//! small fixed set of exponents: 2, 3, 4, 1.5, 2/3 and 3.5. The original
//! code calls the general `powf` primitive for all of them;
//! [`PowVariant::Specialized`] replaces each with a direct multiplication
//! or square/cube-root composition.
//!
//! For non-negative bases the two paths agree to within 1e-9 relative
//! error (the operating domain never goes negative). Negative bases
//! follow whatever `powf` does and the paths are not required to match
//! there.

use kaksha_flags::{Flag, FlagSet};

/// The 2/3 exponent used by mean-motion recovery.
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Half-width of the interval around each specialized exponent that
/// [`PowVariant::pow`] treats as a match; exponents farther away fall
/// back to `powf`. Within the toolkit's operating domain (bases up to
/// about 100) an exponent perturbed by this much shifts the result by
/// under 5e-10 relative, well inside the 1e-9 agreement contract.
pub const EXPONENT_MATCH_TOLERANCE: f64 = 1e-10;

/// Which exponentiation implementation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowVariant {
    /// The general `powf` primitive for every exponent.
    General,
    /// Direct multiplication forms for the known exponents, `powf` for
    /// everything else.
    Specialized,
}

impl PowVariant {
    /// Resolve the active variant from a flag set.
    pub fn select(flags: FlagSet) -> Self {
        if flags.get(Flag::PowerOperations) {
            Self::Specialized
        } else {
            Self::General
        }
    }

    /// x².
    pub fn pow2(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(2.0),
            Self::Specialized => x * x,
        }
    }

    /// x³.
    pub fn pow3(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(3.0),
            Self::Specialized => x * x * x,
        }
    }

    /// x⁴, as (x²)² when specialized.
    pub fn pow4(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(4.0),
            Self::Specialized => {
                let x2 = x * x;
                x2 * x2
            }
        }
    }

    /// x^1.5, as x·√x when specialized.
    pub fn pow1_5(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(1.5),
            Self::Specialized => x * x.sqrt(),
        }
    }

    /// x^(2/3), as cbrt(x)² when specialized.
    ///
    /// The cube root has no multiplication form; the gain over `powf`
    /// comes from `cbrt` being the cheaper primitive.
    pub fn pow2_3(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(TWO_THIRDS),
            Self::Specialized => {
                let cbrt = x.cbrt();
                cbrt * cbrt
            }
        }
    }

    /// x^3.5, as x³·√x when specialized.
    pub fn pow3_5(self, x: f64) -> f64 {
        match self {
            Self::General => x.powf(3.5),
            Self::Specialized => {
                let x3 = x * x * x;
                x3 * x.sqrt()
            }
        }
    }

    /// x^n, routed to the matching specialized form when `n` lies within
    /// [`EXPONENT_MATCH_TOLERANCE`] of a known exponent.
    pub fn pow(self, x: f64, n: f64) -> f64 {
        if self == Self::General {
            return x.powf(n);
        }
        if (n - 2.0).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow2(x);
        }
        if (n - 3.0).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow3(x);
        }
        if (n - 4.0).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow4(x);
        }
        if (n - 1.5).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow1_5(x);
        }
        if (n - 3.5).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow3_5(x);
        }
        if (n - TWO_THIRDS).abs() < EXPONENT_MATCH_TOLERANCE {
            return self.pow2_3(x);
        }
        x.powf(n)
    }
}
