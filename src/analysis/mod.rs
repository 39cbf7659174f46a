pub mod exercise;
pub mod history;
pub mod risk;
pub mod status;
pub mod trend;

pub use history::{HEART_RATE_CAPACITY, VITALS_CAPACITY, ValueRange, VitalsHistoryBuffer};
pub use risk::{MAX_RISK_SCORE, RiskAssessment, RiskLevel, assess_risk, assess_sample};
pub use status::{StatusReport, VitalStatus};
pub use trend::{Trend, TrendTracker, VitalTrends};
