//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle consumed by the solver and the viewer:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and read by the
//! playback systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity, G};
use crate::simulation::params::{self, Parameters};
use crate::simulation::states::{Body, NVec2, System};

/// Fully-initialized runtime bundle built from a [`ScenarioConfig`]:
/// parameters, initial system state, and the set of active force laws.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut system = System::new();
        for bc in &cfg.bodies {
            system.add_body(body_from_config(bc));
        }

        // Parameters (runtime) from ParametersConfig, with defaults:
        // h0 falls back to the daily sample spacing, g to the
        // AU/yr/M_sun constant
        let p_cfg = cfg.parameters;
        let years = p_cfg.years;
        let n = params::day_count(years);
        let default_h0 = if n > 1 { years as f64 / (n - 1) as f64 } else { 1.0 };
        let parameters = Parameters {
            years,
            h0: p_cfg.h0.unwrap_or(default_h0),
            g: p_cfg.g.unwrap_or(G),
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            system,
            forces,
        }
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(
        &bc.name,
        bc.mass,
        bc.diameter,
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        &bc.color,
    )
}
