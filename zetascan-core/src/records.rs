use crate::Real;
use serde::{Deserialize, Serialize};

/// A refined zero estimate, numbered in scan order starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZeroRecord {
    pub index: usize,
    /// Imaginary part of the zero `0.5 + t·i`.
    pub t: Real,
}

impl ZeroRecord {
    pub fn new(index: usize, t: Real) -> Self {
        Self { index, t }
    }
}

/// One point of the sampled Z curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub t: Real,
    pub z: Real,
}

impl SamplePoint {
    pub fn new(t: Real, z: Real) -> Self {
        Self { t, z }
    }

    /// False when Z overflowed or produced NaN at this point.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.z.is_finite()
    }
}

/// Interval handed to the bisector. Expected to straddle a sign change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub t1: Real,
    pub t2: Real,
}

impl Bracket {
    pub fn new(t1: Real, t2: Real) -> Self {
        Self { t1, t2 }
    }

    #[inline]
    pub fn midpoint(&self) -> Real {
        0.5 * (self.t1 + self.t2)
    }

    #[inline]
    pub fn width(&self) -> Real {
        (self.t2 - self.t1).abs()
    }

    /// Inclusive containment, independent of endpoint order.
    pub fn contains(&self, t: Real) -> bool {
        let (lo, hi) = if self.t1 <= self.t2 {
            (self.t1, self.t2)
        } else {
            (self.t2, self.t1)
        };
        t >= lo && t <= hi
    }
}
