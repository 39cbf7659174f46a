//! Simulador de sinais vitais e avaliação de risco
//!
//! Na ausência de sensores reais, gera um fluxo contínuo e plausível de
//! frequência cardíaca, frequência respiratória, temperatura e pressão arterial,
//! acompanha tendências de curto prazo e converte as leituras mais o histórico
//! de exercícios numa pontuação de risco com fatores e recomendações.

pub mod analysis;
pub mod config;
pub mod error;
pub mod kernel;
pub mod model;
pub mod simulation;
pub mod tasks;
pub mod utils;

pub use analysis::{RiskAssessment, RiskLevel, Trend, VitalTrends, VitalsHistoryBuffer, assess_risk};
pub use config::MonitorConfig;
pub use error::{ClockError, ExportError};
pub use kernel::{ClockHandle, SimulationClock, VitalsMonitor, VitalsObserver, VitalsUpdate};
pub use model::{BloodPressure, ConnectionState, ExerciseSession, Intensity, VitalField, VitalSample};
