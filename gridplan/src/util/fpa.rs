///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl FPA {
    /// Largest integer `n` such that `n ≤ self`, where values within tolerance of `n + 1` round up.
    /// Guards against quotients like `126.0 / 42.0` landing just below an integer.
    pub fn tolerant_floor(self) -> f32 {
        let ceil = self.0.ceil();
        match FPA(ceil) == self {
            true => ceil,
            false => self.0.floor(),
        }
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = 1e-4, ulps = 4)
    }
}
