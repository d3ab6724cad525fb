pub mod signal;
pub mod simulation_input;
pub mod simulation_point;
pub mod simulation_result;

pub use signal::Signal;
pub use simulation_input::SimulationInput;
pub use simulation_point::SimulationPoint;
pub use simulation_result::SimulationResult;
