//! Error type shared by the engine.

/// Errors raised by body construction and by a simulation step.
///
/// A step that returns an error has not modified any body.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Radius or mass was non-positive or not finite.
    InvalidBodyParameter { parameter: &'static str, value: f64 },
    /// A unit vector or projection was requested for a zero-length vector.
    DegenerateVector { operation: &'static str },
    /// Two bodies share the same center, so no direction exists between them.
    CoincidentCenters { first: usize, second: usize },
    /// The step duration was non-positive or not finite.
    InvalidTimeStep(f64),
    /// A configuration value is out of range.
    InvalidConfig { field: &'static str, value: f64 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidBodyParameter { parameter, value } => {
                write!(f, "invalid body {parameter}: {value} (must be positive and finite)")
            }
            EngineError::DegenerateVector { operation } => {
                write!(f, "{operation} is undefined for a zero-length vector")
            }
            EngineError::CoincidentCenters { first, second } => {
                write!(f, "bodies {first} and {second} have coincident centers")
            }
            EngineError::InvalidTimeStep(dt) => write!(f, "invalid time step: {dt}"),
            EngineError::InvalidConfig { field, value } => {
                write!(f, "invalid config value for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidBodyParameter { parameter: "radius", value: -1.0 };
        assert_eq!(err.to_string(), "invalid body radius: -1 (must be positive and finite)");

        let err = EngineError::CoincidentCenters { first: 0, second: 3 };
        assert_eq!(err.to_string(), "bodies 0 and 3 have coincident centers");

        let err = EngineError::DegenerateVector { operation: "unit" };
        assert_eq!(err.to_string(), "unit is undefined for a zero-length vector");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&EngineError::InvalidTimeStep(0.0));
    }
}
