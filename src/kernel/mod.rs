pub mod clock;
pub mod monitor;
pub mod observer;

pub use clock::{ClockHandle, ClockMessage, SimulationClock};
pub use monitor::{MonitorSnapshot, VitalsMonitor, VitalsUpdate};
pub use observer::{ChannelObserver, MonitorEvent, VitalsObserver};
