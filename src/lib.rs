pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::statevec::{encode, decode, STATE_STRIDE};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, G};
pub use simulation::integrator::{dv_dt, rk4_solve, Trajectory};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use visualization::vis2d::run_2d;
