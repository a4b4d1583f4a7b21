// Adapters layer: concrete implementations of the domain ports.

pub mod sink;

pub use sink::{MemorySink, StdoutSink, TracingSink};
