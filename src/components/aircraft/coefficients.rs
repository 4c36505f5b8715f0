use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a derived coefficient, e.g. `c17` or `e2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoefficientTag {
    C(u8),
    E(u8),
}

impl fmt::Display for CoefficientTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientTag::C(index) => write!(f, "c{}", index),
            CoefficientTag::E(index) => write!(f, "e{}", index),
        }
    }
}

/// Scalar coefficients of the linearized longitudinal equations.
///
/// Tags are identifiers, not positions: `c10..=c15` do not exist, and the set of
/// populated tags is [`DerivedCoefficients::C_TAGS`] and [`DerivedCoefficients::E_TAGS`].
/// Angle-carrying coefficients (`c6`, `c7`, `c8`, `c16`, `c19`, `e2`) are scaled per degree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedCoefficients {
    /// Pitch damping due to pitch rate.
    pub c1: f64,
    /// Static stability, pitch moment due to angle of attack.
    pub c2: f64,
    /// Elevator pitch moment effectiveness.
    pub c3: f64,
    /// Lift due to angle of attack, flight path rate per rad.
    pub c4: f64,
    /// Pitch damping due to angle of attack rate.
    pub c5: f64,
    pub c6: f64,
    /// Gravity coupling into speed, per degree of pitch.
    pub c7: f64,
    /// Drag change with angle of attack, per degree.
    pub c8: f64,
    /// Lift due to elevator, flight path rate per rad.
    pub c9: f64,
    pub c16: f64,
    /// Static stability shift from the CG offset.
    pub c17: f64,
    /// Elevator effectiveness shift from the CG offset.
    pub c18: f64,
    /// Thrust per unit throttle command.
    pub c19: f64,
    /// Speed damping.
    pub e1: f64,
    /// Lift change with speed.
    pub e2: f64,
    /// Pitch moment change with speed.
    pub e3: f64,
}

impl DerivedCoefficients {
    pub const C_TAGS: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 16, 17, 18, 19];
    pub const E_TAGS: [u8; 3] = [1, 2, 3];

    pub fn get(&self, tag: CoefficientTag) -> Option<f64> {
        match tag {
            CoefficientTag::C(1) => Some(self.c1),
            CoefficientTag::C(2) => Some(self.c2),
            CoefficientTag::C(3) => Some(self.c3),
            CoefficientTag::C(4) => Some(self.c4),
            CoefficientTag::C(5) => Some(self.c5),
            CoefficientTag::C(6) => Some(self.c6),
            CoefficientTag::C(7) => Some(self.c7),
            CoefficientTag::C(8) => Some(self.c8),
            CoefficientTag::C(9) => Some(self.c9),
            CoefficientTag::C(16) => Some(self.c16),
            CoefficientTag::C(17) => Some(self.c17),
            CoefficientTag::C(18) => Some(self.c18),
            CoefficientTag::C(19) => Some(self.c19),
            CoefficientTag::E(1) => Some(self.e1),
            CoefficientTag::E(2) => Some(self.e2),
            CoefficientTag::E(3) => Some(self.e3),
            _ => None,
        }
    }

    /// All populated coefficients, `c` tags first, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (CoefficientTag, f64)> + '_ {
        Self::C_TAGS
            .iter()
            .map(|&i| CoefficientTag::C(i))
            .chain(Self::E_TAGS.iter().map(|&i| CoefficientTag::E(i)))
            .filter_map(move |tag| self.get(tag).map(|value| (tag, value)))
    }
}
