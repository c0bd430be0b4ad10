//! Core state types for the solar-system simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   one point mass with display attributes
//! - `System` the ordered collection of bodies
//!
//! The order in which bodies are added to a `System` is significant:
//! it defines the index mapping used by state vectors and trajectory
//! columns everywhere else in the crate.

use nalgebra::Vector2;

use super::statevec;

pub type NVec2 = Vector2<f64>;

/// One simulated point mass.
///
/// Units: mass in solar masses, position in AU, velocity in AU/year.
/// `diameter` and `color` are display attributes only; `diameter` is
/// unrelated to the physical radius and never enters the dynamics.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub mass: f64, // solar masses
    pub diameter: f64, // display size, not physical
    pub x: NVec2, // position [AU]
    pub v: NVec2, // velocity [AU/yr]
    pub color: String, // opaque display tag
}

impl Body {
    /// Pure value construction. No validation: a zero or negative mass
    /// is accepted and simply produces degenerate dynamics.
    pub fn new(name: &str, mass: f64, diameter: f64, x: NVec2, v: NVec2, color: &str) -> Self {
        Self {
            name: name.to_string(),
            mass,
            diameter,
            x,
            v,
            color: color.to_string(),
        }
    }
}

/// Ordered collection of bodies sharing one gravitational simulation.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>,
}

impl System {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Append a body. There is no duplicate detection and no removal;
    /// the insertion index is the body's index for the rest of its life.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Masses in system order, as consumed by the derivative function.
    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.mass).collect()
    }

    /// Flatten the initial positions and velocities of all bodies into
    /// a single state vector `[x, y, vx, vy]` per body, in system order.
    /// Length is exactly `4 * len()`.
    pub fn states_init(&self) -> Vec<f64> {
        let x: Vec<f64> = self.bodies.iter().map(|b| b.x.x).collect();
        let y: Vec<f64> = self.bodies.iter().map(|b| b.x.y).collect();
        let vx: Vec<f64> = self.bodies.iter().map(|b| b.v.x).collect();
        let vy: Vec<f64> = self.bodies.iter().map(|b| b.v.y).collect();
        statevec::encode(&x, &y, &vx, &vy)
    }
}
