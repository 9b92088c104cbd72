//! Variant-selection flags for the kaksha numeric kernels.
//!
//! Every operation in the toolkit that keeps both an original and a
//! reworked implementation is switched by one of the flags defined here.
//! This crate provides the [`Flag`] enum naming each switch, the
//! [`FlagGroup`] split between performance work and behavioral
//! corrections, and [`FlagSet`], the immutable value kernels consult to
//! resolve their active variant.
//!
//! A [`FlagSet`] is plain `Copy` data. Callers build one (usually from a
//! preset such as [`FlagSet::all_bug_fixes`]), thread it to the kernels
//! that need it, and never mutate it behind anyone's back; concurrent
//! experiment runs each own their configuration.

use std::fmt::{Display, Formatter};

/// Which group a flag belongs to.
///
/// Optimizations keep the computed values identical and only change how
/// they are evaluated. Bug fixes are allowed to change the output, which
/// is why the equivalence harness treats the two groups differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagGroup {
    Optimization,
    BugFix,
}

/// A named switch selecting between an original and a reworked variant.
///
/// The enum is closed on purpose: a flag that does not exist cannot be
/// queried or set, so there is no "unknown flag" failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Replace general-exponent `powf` calls with direct multiplication
    /// forms for the fixed exponents the propagation math uses.
    PowerOperations,
    /// Reuse sin/cos pairs instead of recomputing them in hot loops.
    TrigCaching,
    /// Direct Kepler solution for near-circular orbits.
    CircularOrbitFastPath,
    /// Cache ground-station ECI conversions keyed by time.
    EciConversionCaching,
    /// Cache the prime-vertical radius and related geodetic terms.
    GeodeticCaching,
    /// Single-probe map lookups instead of contains-then-index pairs.
    LookupStrategy,
    /// Calendar-aware (Meeus) Julian dates instead of the linear day count.
    JulianDateAlgorithm,
    /// Signal delay as range over propagation speed instead of the
    /// inverted original formula.
    SignalDelayFormula,
    /// Quadrant-correct azimuth via `atan2` instead of `atan`.
    AzimuthQuadrant,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 9] = [
        Flag::PowerOperations,
        Flag::TrigCaching,
        Flag::CircularOrbitFastPath,
        Flag::EciConversionCaching,
        Flag::GeodeticCaching,
        Flag::LookupStrategy,
        Flag::JulianDateAlgorithm,
        Flag::SignalDelayFormula,
        Flag::AzimuthQuadrant,
    ];

    /// Group this flag belongs to.
    pub const fn group(self) -> FlagGroup {
        match self {
            Self::PowerOperations
            | Self::TrigCaching
            | Self::CircularOrbitFastPath
            | Self::EciConversionCaching
            | Self::GeodeticCaching
            | Self::LookupStrategy => FlagGroup::Optimization,
            Self::JulianDateAlgorithm | Self::SignalDelayFormula | Self::AzimuthQuadrant => {
                FlagGroup::BugFix
            }
        }
    }

    /// Stable kebab-case name, used for CLI arguments and report labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PowerOperations => "power-operations",
            Self::TrigCaching => "trig-caching",
            Self::CircularOrbitFastPath => "circular-orbit-fast-path",
            Self::EciConversionCaching => "eci-conversion-caching",
            Self::GeodeticCaching => "geodetic-caching",
            Self::LookupStrategy => "lookup-strategy",
            Self::JulianDateAlgorithm => "julian-date-algorithm",
            Self::SignalDelayFormula => "signal-delay-formula",
            Self::AzimuthQuadrant => "azimuth-quadrant",
        }
    }

    /// Convert a kebab-case name back into a [`Flag`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "power-operations" => Some(Self::PowerOperations),
            "trig-caching" => Some(Self::TrigCaching),
            "circular-orbit-fast-path" => Some(Self::CircularOrbitFastPath),
            "eci-conversion-caching" => Some(Self::EciConversionCaching),
            "geodetic-caching" => Some(Self::GeodeticCaching),
            "lookup-strategy" => Some(Self::LookupStrategy),
            "julian-date-algorithm" => Some(Self::JulianDateAlgorithm),
            "signal-delay-formula" => Some(Self::SignalDelayFormula),
            "azimuth-quadrant" => Some(Self::AzimuthQuadrant),
            _ => None,
        }
    }

    const fn mask(self) -> u16 {
        match self {
            Self::PowerOperations => 1 << 0,
            Self::TrigCaching => 1 << 1,
            Self::CircularOrbitFastPath => 1 << 2,
            Self::EciConversionCaching => 1 << 3,
            Self::GeodeticCaching => 1 << 4,
            Self::LookupStrategy => 1 << 5,
            Self::JulianDateAlgorithm => 1 << 6,
            Self::SignalDelayFormula => 1 << 7,
            Self::AzimuthQuadrant => 1 << 8,
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const OPTIMIZATION_BITS: u16 = Flag::PowerOperations.mask()
    | Flag::TrigCaching.mask()
    | Flag::CircularOrbitFastPath.mask()
    | Flag::EciConversionCaching.mask()
    | Flag::GeodeticCaching.mask()
    | Flag::LookupStrategy.mask();

const BUG_FIX_BITS: u16 = Flag::JulianDateAlgorithm.mask()
    | Flag::SignalDelayFormula.mask()
    | Flag::AzimuthQuadrant.mask();

/// An immutable set of enabled flags.
///
/// The default value has everything disabled, meaning every kernel runs
/// its original variant. Presets exist both as `const` factories for the
/// common configurations and as in-place mutators for building a set up
/// step by step before it is handed to the kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagSet {
    bits: u16,
}

impl FlagSet {
    /// Every flag disabled: original behavior throughout.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Every optimization flag enabled, bug-fix flags disabled.
    pub const fn all_optimizations() -> Self {
        Self {
            bits: OPTIMIZATION_BITS,
        }
    }

    /// Every bug-fix flag enabled, optimization flags disabled.
    pub const fn all_bug_fixes() -> Self {
        Self { bits: BUG_FIX_BITS }
    }

    /// Every flag enabled.
    pub const fn all() -> Self {
        Self {
            bits: OPTIMIZATION_BITS | BUG_FIX_BITS,
        }
    }

    /// Whether `flag` is enabled in this set.
    pub const fn get(self, flag: Flag) -> bool {
        self.bits & flag.mask() != 0
    }

    /// Copy of this set with `flag` switched to `enabled`.
    #[must_use]
    pub const fn with(self, flag: Flag, enabled: bool) -> Self {
        let bits = if enabled {
            self.bits | flag.mask()
        } else {
            self.bits & !flag.mask()
        };
        Self { bits }
    }

    /// Union of two sets: a flag is enabled if either side enables it.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Switch `flag` to `enabled` in place.
    pub fn set(&mut self, flag: Flag, enabled: bool) {
        *self = self.with(flag, enabled);
    }

    /// Enable every optimization flag, leaving bug-fix flags untouched.
    pub fn enable_all_optimizations(&mut self) {
        self.bits |= OPTIMIZATION_BITS;
    }

    /// Enable every bug-fix flag, leaving optimization flags untouched.
    pub fn enable_all_bug_fixes(&mut self) {
        self.bits |= BUG_FIX_BITS;
    }

    /// Enable every flag.
    pub fn enable_all(&mut self) {
        self.bits = OPTIMIZATION_BITS | BUG_FIX_BITS;
    }

    /// Disable every flag.
    pub fn disable_all(&mut self) {
        self.bits = 0;
    }

    /// Number of enabled flags.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether no flag is enabled.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Enabled flags in declaration order.
    pub fn enabled(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.get(*flag))
    }
}

impl Display for FlagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for flag in self.enabled() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(flag.name())?;
            first = false;
        }
        Ok(())
    }
}
