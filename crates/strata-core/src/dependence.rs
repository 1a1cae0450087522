//! Nonlinear-dependence metadata.
//!
//! A model declares, per coefficient, which solution fields that
//! coefficient depends on. The host trusts the declaration and skips
//! re-linearization for coefficients that depend on nothing.

/// A set of solution fields, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dependence {
    bits: u8,
}

impl Dependence {
    /// Depends on no solution field.
    pub const NONE: Self = Self { bits: 0 };
    /// Depends on temperature.
    pub const TEMPERATURE: Self = Self { bits: 1 << 0 };
    /// Depends on pressure.
    pub const PRESSURE: Self = Self { bits: 1 << 1 };
    /// Depends on the strain rate.
    pub const STRAIN_RATE: Self = Self { bits: 1 << 2 };
    /// Depends on compositional fields.
    pub const COMPOSITIONAL_FIELDS: Self = Self { bits: 1 << 3 };
    /// Depends on every solution field.
    pub const ALL: Self = Self { bits: 0b1111 };

    /// Return the union of two sets (`self | other`).
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Whether every field in `other` is in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Whether the set is empty.
    pub fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for Dependence {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Per-coefficient dependence declarations for a material model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelDependence {
    /// Fields the viscosity depends on.
    pub viscosity: Dependence,
    /// Fields the density depends on.
    pub density: Dependence,
    /// Fields the compressibility depends on.
    pub compressibility: Dependence,
    /// Fields the specific heat depends on.
    pub specific_heat: Dependence,
    /// Fields the thermal conductivity depends on.
    pub thermal_conductivity: Dependence,
}

impl ModelDependence {
    /// No coefficient depends on any solution field.
    pub const fn none() -> Self {
        Self {
            viscosity: Dependence::NONE,
            density: Dependence::NONE,
            compressibility: Dependence::NONE,
            specific_heat: Dependence::NONE,
            thermal_conductivity: Dependence::NONE,
        }
    }

    /// Every coefficient depends on every solution field.
    ///
    /// The safe assumption for a model that declares nothing.
    pub const fn all() -> Self {
        Self {
            viscosity: Dependence::ALL,
            density: Dependence::ALL,
            compressibility: Dependence::ALL,
            specific_heat: Dependence::ALL,
            thermal_conductivity: Dependence::ALL,
        }
    }

    /// Whether no coefficient depends on any solution field.
    pub fn is_independent(&self) -> bool {
        self.viscosity.is_none()
            && self.density.is_none()
            && self.compressibility.is_none()
            && self.specific_heat.is_none()
            && self.thermal_conductivity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_dependence() -> impl Strategy<Value = Dependence> {
        (0u8..16).prop_map(|bits| Dependence { bits })
    }

    #[test]
    fn all_contains_each_field() {
        for d in [
            Dependence::TEMPERATURE,
            Dependence::PRESSURE,
            Dependence::STRAIN_RATE,
            Dependence::COMPOSITIONAL_FIELDS,
        ] {
            assert!(Dependence::ALL.contains(d));
            assert!(!Dependence::NONE.contains(d));
        }
        assert_eq!(
            Dependence::TEMPERATURE
                | Dependence::PRESSURE
                | Dependence::STRAIN_RATE
                | Dependence::COMPOSITIONAL_FIELDS,
            Dependence::ALL
        );
    }

    #[test]
    fn none_is_independent() {
        assert!(ModelDependence::none().is_independent());
        assert!(!ModelDependence::all().is_independent());
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_dependence(), b in arb_dependence()) {
            prop_assert_eq!(a.union(b), b.union(a));
        }

        #[test]
        fn union_contains_operands(a in arb_dependence(), b in arb_dependence()) {
            let u = a | b;
            prop_assert!(u.contains(a));
            prop_assert!(u.contains(b));
        }

        #[test]
        fn union_with_none_is_identity(a in arb_dependence()) {
            prop_assert_eq!(a.union(Dependence::NONE), a);
        }
    }
}
