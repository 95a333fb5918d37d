pub mod diagnostics;
pub mod forces;
pub mod physics_world;
pub mod pruning;

pub use diagnostics::{InvariantViolation, StepReport, StepSnapshot};
pub use physics_world::{update, PhysicsWorld};
