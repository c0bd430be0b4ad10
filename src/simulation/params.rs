//! Numerical and physical parameters for a simulation run.
//!
//! `Parameters` holds runtime settings:
//! - the simulated span in years and the daily sample grid,
//! - the solver step-size cap `h0`,
//! - the gravitational constant `g`.

/// Runtime parameters for one scenario.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub years: u32, // simulated span [yr]
    pub h0: f64, // max internal RK4 step [yr]
    pub g: f64, // gravitational constant
}

/// Number of daily samples over a span of whole years: 365 per year
/// plus one for every fourth year (leap days).
pub fn day_count(years: u32) -> usize {
    let mut days = years as usize * 365;
    for i in 0..years {
        if (i + 1) % 4 == 0 {
            days += 1;
        }
    }
    days
}

impl Parameters {
    pub fn day_count(&self) -> usize {
        day_count(self.years)
    }

    /// Strictly increasing sample times in years: `day_count()` points
    /// evenly spaced over `[0, years]`, one per simulated day.
    pub fn sample_times(&self) -> Vec<f64> {
        let n = self.day_count();
        if n < 2 {
            return vec![0.0];
        }
        let t_end = self.years as f64;
        let step = t_end / (n - 1) as f64;
        (0..n).map(|k| k as f64 * step).collect()
    }
}
