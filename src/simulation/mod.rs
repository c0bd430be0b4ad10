pub mod states;
pub mod statevec;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scenario;
