use std::fmt;

use chrono::NaiveDate;

use crate::utils::timing::Timestamp;

/// Pressão arterial em mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

/// Leitura instantânea de todos os sinais vitais
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalSample {
    /// Momento da leitura (não decrescente dentro de uma sessão)
    pub timestamp: Timestamp,
    /// Batimentos por minuto
    pub heart_rate: u32,
    /// Respirações por minuto
    pub respiratory_rate: u32,
    /// Temperatura em °F, uma casa decimal
    pub temperature: f64,
    pub blood_pressure: BloodPressure,
}

impl VitalSample {
    /// Leitura de repouso usada quando a sessão de monitoramento começa
    pub fn resting(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            heart_rate: 72,
            respiratory_rate: 16,
            temperature: 98.3,
            blood_pressure: BloodPressure {
                systolic: 118,
                diastolic: 78,
            },
        }
    }

    /// Valor de um campo como número real
    pub fn value(&self, field: VitalField) -> f64 {
        match field {
            VitalField::HeartRate => self.heart_rate as f64,
            VitalField::RespiratoryRate => self.respiratory_rate as f64,
            VitalField::Temperature => self.temperature,
            VitalField::Systolic => self.blood_pressure.systolic as f64,
            VitalField::Diastolic => self.blood_pressure.diastolic as f64,
        }
    }
}

/// Campos numéricos de uma leitura
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VitalField {
    HeartRate,
    RespiratoryRate,
    Temperature,
    Systolic,
    Diastolic,
}

impl VitalField {
    pub const ALL: [VitalField; 5] = [
        VitalField::HeartRate,
        VitalField::RespiratoryRate,
        VitalField::Temperature,
        VitalField::Systolic,
        VitalField::Diastolic,
    ];
}

/// Intensidade de uma sessão de exercício
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Peso usado no cálculo da intensidade média
    pub fn weight(self) -> u32 {
        match self {
            Intensity::Low => 1,
            Intensity::Medium => 2,
            Intensity::High => 3,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        };
        f.write_str(name)
    }
}

/// Sessão de exercício fornecida externamente (somente leitura)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSession {
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub kind: String,
    pub intensity: Intensity,
}

impl ExerciseSession {
    pub fn new(
        date: NaiveDate,
        duration_minutes: u32,
        kind: impl Into<String>,
        intensity: Intensity,
    ) -> Self {
        Self {
            date,
            duration_minutes,
            kind: kind.into(),
            intensity,
        }
    }
}

/// Estado da conexão simulada com os sensores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionState {
    pub connected: bool,
    pub last_update: Timestamp,
}

impl ConnectionState {
    pub fn connected(at: Timestamp) -> Self {
        Self {
            connected: true,
            last_update: at,
        }
    }

    pub fn disconnected(at: Timestamp) -> Self {
        Self {
            connected: false,
            last_update: at,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connected {
            write!(f, "Sensores conectados (atualizado {})", self.last_update)
        } else {
            write!(f, "Conexão perdida (atualizado {})", self.last_update)
        }
    }
}
