//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   years: 5            # simulated span; samples are daily, leap days included
//!   # h0: 0.001         # optional max RK4 step [yr], default = sample spacing
//!   # g: 1.0            # optional override, default = 4*pi^2/332946
//!
//! bodies:
//!   - name: "Sun"
//!     mass: 332800.0    # solar masses
//!     diameter: 2.5     # display units
//!     x: [ 0.0, 0.0 ]   # AU
//!     v: [ 0.0, 0.0 ]   # AU/yr
//!     color: "gold"
//!   - name: "Earth"
//!     mass: 1.0
//!     diameter: 1.0
//!     x: [ 1.0, 0.0 ]
//!     v: [ 0.0, 6.283185307179586 ]
//!     color: "darkturquoise"
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! scenario representation.

use std::f64::consts::PI;

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub years: u32,      // simulated span in years
    pub h0: Option<f64>, // max internal step size, default = daily sample spacing
    pub g: Option<f64>,  // gravitational constant, default = AU/yr/M_sun value
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,     // mass in solar masses
    pub diameter: f64, // display size used by the viewer, not physical
    pub x: [f64; 2],   // initial position [AU]
    pub v: [f64; 2],   // initial velocity [AU/yr]
    pub color: String, // display color tag
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // bodies that define the initial state, in order
}

impl ScenarioConfig {
    /// Built-in Sun + rocky planets preset over five years.
    ///
    /// Masses, diameters, positions and velocities are relative to
    /// Earth (HyperPhysics data); the tangential start velocity of
    /// each planet is `2*pi*R / (orbit_days / 365)`. The gas planets
    /// are left out, their distances would dwarf everything else on
    /// screen.
    pub fn inner_planets() -> Self {
        let planet = |name: &str, mass: f64, diameter: f64, r: f64, orbit_days: f64, color: &str| BodyConfig {
            name: name.to_string(),
            mass,
            diameter,
            x: [r, 0.0],
            v: [0.0, 2.0 * PI * r / (orbit_days / 365.0)],
            color: color.to_string(),
        };

        Self {
            parameters: ParametersConfig {
                years: 5,
                h0: None,
                g: None,
            },
            bodies: vec![
                BodyConfig {
                    name: "Sun".to_string(),
                    mass: 332800.0,
                    diameter: 2.5,
                    x: [0.0, 0.0],
                    v: [0.0, 0.0],
                    color: "gold".to_string(),
                },
                planet("Mercury", 0.055, 0.382, 0.387, 88.0, "gray"),
                planet("Venus", 0.815, 0.949, 0.723, 243.0, "goldenrod"),
                planet("Earth", 1.0, 1.0, 1.0, 365.0, "darkturquoise"),
                planet("Mars", 0.107, 0.532, 1.524, 687.0, "firebrick"),
            ],
        }
    }
}
