//! Force / acceleration contributors for the n-body engine.
//!
//! Defines the 2D acceleration trait and the direct-summation
//! Newtonian gravity term. Terms operate on read-only position
//! snapshots decoded from the state vector, so every body's
//! acceleration at a given time is computed from the same positions.

use std::f64::consts::PI;

/// Gravitational constant in AU^3 yr^-2 M_sun^-1.
///
/// The AU / year / solar-mass unit system keeps representable
/// magnitudes near 1. Changing units means rederiving this value.
pub const G: f64 = 4.0 * PI * PI / 332946.0;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are
/// summed into a single acceleration per body.
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies.
    /// `ax[i]`/`ay[i]` are set to the sum of contributions from all terms.
    pub fn accumulate_accels(
        &self,
        t: f64,
        x: &[f64],
        y: &[f64],
        masses: &[f64],
        ax: &mut [f64],
        ay: &mut [f64],
    ) {
        // Zero buffers
        for a in ax.iter_mut() {
            *a = 0.0;
        }
        for a in ay.iter_mut() {
            *a = 0.0;
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, x, y, masses, ax, ay);
        }
    }
}

/// Trait for 2D acceleration sources.
///
/// `x`/`y` are the position snapshot for all bodies at time `t` and
/// `masses` their masses, all in system order. Implementations ADD
/// their contribution into `ax[i]`/`ay[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, t: f64, x: &[f64], y: &[f64], masses: &[f64], ax: &mut [f64], ay: &mut [f64]);
}

/// Direct O(n^2) Newtonian gravity, no softening.
///
/// Two bodies at the same position produce a division by zero and the
/// resulting Inf/NaN propagates through the solver. That singularity
/// is a known limitation of the model, kept on purpose: a softening
/// floor would silently change close-encounter dynamics.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, x: &[f64], y: &[f64], masses: &[f64], ax: &mut [f64], ay: &mut [f64]) {
        let n = masses.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = x[i];
            let yi = y[i];
            let mi = masses[i];

            for j in (i + 1)..n {
                let mj = masses[j];

                // Displacement from i to j: i is pulled along +r,
                // j is pulled along -r
                let rx = x[j] - xi;
                let ry = y[j] - yi;

                // 1 / |r|^3, the distance factor in a = r / |r|^3
                let r2 = rx * rx + ry * ry;
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r|^3
                let coef = self.g * inv_r3;

                // Newton's law, equal and opposite:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                ax[i] += coef * mj * rx;
                ay[i] += coef * mj * ry;
                ax[j] -= coef * mi * rx;
                ay[j] -= coef * mi * ry;
            }
        }
    }
}
