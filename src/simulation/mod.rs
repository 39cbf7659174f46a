pub mod connection;
pub mod random;
pub mod vitals;

pub use connection::ConnectionSimulator;
pub use random::{UniformSource, default_source};
pub use vitals::{VitalGenerator, WalkParams};
