use std::fmt;

/// Time evolution of a single reactant's concentration.
pub trait RateLaw: Send + Sync {
    /// Concentration (mol/L) at time `t` (s).
    fn concentration_at(&self, t: f64) -> f64;

    /// Evaluate the law at every sample time, preserving order.
    fn evaluate(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.concentration_at(t)).collect()
    }
}

/// `A0 * exp(-k * t)`.
///
/// Negative `k` gives exponential growth, which is well defined and allowed.
pub fn concentration(a0: f64, k: f64, t: f64) -> f64 {
    a0 * (-k * t).exp()
}

// --- first-order decay ---
#[derive(Clone, Copy, PartialEq)]
pub struct FirstOrder {
    /// initial concentration (mol/L)
    pub a0: f64,
    /// rate constant (1/s)
    pub k: f64,
}

impl FirstOrder {
    pub fn new(a0: f64, k: f64) -> Self {
        FirstOrder { a0, k }
    }

    /// Time for the concentration to halve. Only defined for decay (k > 0).
    pub fn half_life(&self) -> Option<f64> {
        if self.k > 0.0 {
            Some(std::f64::consts::LN_2 / self.k)
        } else {
            None
        }
    }
}

impl RateLaw for FirstOrder {
    fn concentration_at(&self, t: f64) -> f64 {
        concentration(self.a0, self.k, t)
    }
}

impl fmt::Debug for FirstOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FirstOrder(a0={}, k={})", self.a0, self.k)
    }
}
