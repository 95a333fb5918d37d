pub mod math;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod world;
pub mod common;

// Re-export key types for easier use
pub use math::{Point2, Vec2, EPSILON};
pub use objects::Disk;
pub use collision::{detect_collision, Collision};
pub use world::{update, InvariantViolation, PhysicsWorld, StepReport, StepSnapshot};
pub use common::{EngineError, WorldConfig};
