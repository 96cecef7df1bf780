pub mod co_object;
pub mod logger;

pub use co_object::{
    CoObjectClassifier, FallbackCounter, Form7CoObjectRows, CO_FALLBACK_ROWS, CO_OBJECT_BASE_ROWS,
    CO_OTHER_ROWS,
};
pub use logger::{FallbackLogger, FallbackMetadata, SilentLogger, TracingLogger};
