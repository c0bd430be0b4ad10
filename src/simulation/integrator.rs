//! Time integration for the N-body system.
//!
//! The solver is a classical fixed-step RK4 driven across a
//! caller-supplied increasing sequence of time samples: the state is
//! advanced interval by interval and recorded once per sample,
//! producing a [`Trajectory`] of shape (T, 4N) in the stride-4 layout
//! defined by `statevec`.

use super::forces::AccelSet;
use super::states::{System, NVec2};
use super::statevec::{self, STATE_STRIDE};

/// Time-derivative of the flattened state vector.
///
/// Decodes the state into per-body components, accumulates the
/// gravitational accelerations from that read-only position snapshot,
/// and re-encodes `[vx, vy, ax, ay]` per body: each body's velocity
/// becomes its position-derivative and the summed acceleration its
/// velocity-derivative. `t` is passed through to the force terms
/// (gravity ignores it).
pub fn dv_dt(states: &[f64], t: f64, masses: &[f64], forces: &AccelSet) -> Vec<f64> {
    let (x, y, vx, vy) = statevec::decode(states);

    let n = x.len();
    let mut ax = vec![0.0; n];
    let mut ay = vec![0.0; n];
    forces.accumulate_accels(t, &x, &y, masses, &mut ax, &mut ay);

    // Same interleave as the state vector, now carrying derivatives
    statevec::encode(&vx, &vy, &ax, &ay)
}

/// One classical RK4 step of size `dt` starting at time `t`.
fn rk4_step(states: &[f64], t: f64, dt: f64, masses: &[f64], forces: &AccelSet) -> Vec<f64> {
    let half_dt = 0.5 * dt;

    let k1 = dv_dt(states, t, masses, forces);

    let y2: Vec<f64> = states.iter().zip(&k1).map(|(s, k)| s + half_dt * k).collect();
    let k2 = dv_dt(&y2, t + half_dt, masses, forces);

    let y3: Vec<f64> = states.iter().zip(&k2).map(|(s, k)| s + half_dt * k).collect();
    let k3 = dv_dt(&y3, t + half_dt, masses, forces);

    let y4: Vec<f64> = states.iter().zip(&k3).map(|(s, k)| s + dt * k).collect();
    let k4 = dv_dt(&y4, t + dt, masses, forces);

    // y_n+1 = y_n + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
    let sixth_dt = dt / 6.0;
    states
        .iter()
        .enumerate()
        .map(|(i, s)| s + sixth_dt * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
        .collect()
}

/// Integrate the system across `t_samples`, recording one state vector
/// per sample.
///
/// The initial state is the system's `states_init()` snapshot taken at
/// `t_samples[0]`; the bodies themselves are never mutated. Each
/// inter-sample interval is subdivided into `ceil(span / h0)` equal
/// RK4 steps (at least one), so `h0` caps the internal step size.
/// Samples are assumed strictly increasing; the solver does not check.
pub fn rk4_solve(system: &System, forces: &AccelSet, t_samples: &[f64], h0: f64) -> Trajectory {
    let masses = system.masses();
    let mut states = system.states_init();
    let mut trajectory = Trajectory::new(system.len());

    let Some(&t0) = t_samples.first() else {
        return trajectory;
    };
    trajectory.push(t0, &states);

    for w in t_samples.windows(2) {
        let span = w[1] - w[0];
        let n_sub = if h0 > 0.0 {
            ((span / h0).ceil() as usize).max(1)
        } else {
            1
        };
        let dt = span / n_sub as f64;

        let mut t = w[0];
        for _ in 0..n_sub {
            states = rk4_step(&states, t, dt, &masses, forces);
            t += dt;
        }
        trajectory.push(w[1], &states);
    }

    trajectory
}

/// Position history produced by the solver: one state vector per time
/// sample, stored row-major as a (T, 4N) table. Positions live at
/// stride 4, offsets 0 and 1; that layout is the output contract
/// consumed by the playback viewer.
#[derive(Debug, Clone)]
pub struct Trajectory {
    n_bodies: usize,
    times: Vec<f64>,
    data: Vec<f64>, // row-major, row length 4 * n_bodies
}

impl Trajectory {
    pub fn new(n_bodies: usize) -> Self {
        Self {
            n_bodies,
            times: Vec::new(),
            data: Vec::new(),
        }
    }

    fn push(&mut self, t: f64, states: &[f64]) {
        debug_assert_eq!(states.len(), STATE_STRIDE * self.n_bodies);
        self.times.push(t);
        self.data.extend_from_slice(states);
    }

    /// Number of recorded time samples (T).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn n_bodies(&self) -> usize {
        self.n_bodies
    }

    pub fn time(&self, k: usize) -> f64 {
        self.times[k]
    }

    /// Full state vector at sample `k`.
    pub fn row(&self, k: usize) -> &[f64] {
        let w = STATE_STRIDE * self.n_bodies;
        &self.data[k * w..(k + 1) * w]
    }

    /// Position of body `i` at sample `k`.
    pub fn position(&self, k: usize, i: usize) -> NVec2 {
        let q = &self.row(k)[STATE_STRIDE * i..];
        NVec2::new(q[0], q[1])
    }

    /// Velocity of body `i` at sample `k`.
    pub fn velocity(&self, k: usize, i: usize) -> NVec2 {
        let q = &self.row(k)[STATE_STRIDE * i..];
        NVec2::new(q[2], q[3])
    }
}
