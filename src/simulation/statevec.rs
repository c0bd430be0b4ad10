//! Stride-4 state vector encoding.
//!
//! The solver works on one flat array holding `[x, y, vx, vy]` for
//! every body, in system order. `encode`/`decode` are the only two
//! places that know this layout; everything else goes through them.
//! The pair must be a bijection: decode(encode(..)) returns the
//! original per-body values for any body count.

/// Values per body in the flattened state vector.
pub const STATE_STRIDE: usize = 4;

/// Interleave per-body component arrays into one flat state vector.
/// All four slices must have the same length (one entry per body).
pub fn encode(x: &[f64], y: &[f64], vx: &[f64], vy: &[f64]) -> Vec<f64> {
    debug_assert_eq!(x.len(), y.len());
    debug_assert_eq!(x.len(), vx.len());
    debug_assert_eq!(x.len(), vy.len());

    let mut states = Vec::with_capacity(STATE_STRIDE * x.len());
    for i in 0..x.len() {
        states.push(x[i]);
        states.push(y[i]);
        states.push(vx[i]);
        states.push(vy[i]);
    }
    states
}

/// De-interleave a flat state vector back into per-body component
/// arrays `(x, y, vx, vy)`. The input length must be a multiple of 4.
pub fn decode(states: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    debug_assert_eq!(states.len() % STATE_STRIDE, 0);

    let n = states.len() / STATE_STRIDE;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut vx = Vec::with_capacity(n);
    let mut vy = Vec::with_capacity(n);

    for q in states.chunks_exact(STATE_STRIDE) {
        x.push(q[0]);
        y.push(q[1]);
        vx.push(q[2]);
        vy.push(q[3]);
    }
    (x, y, vx, vy)
}
