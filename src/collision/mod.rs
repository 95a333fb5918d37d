pub mod detection;
pub mod manifold;

// Re-export key types
pub use detection::*;
pub use manifold::Collision;
