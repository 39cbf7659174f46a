use std::fmt;

use crate::model::VitalSample;

/// Classificação de um sinal em relação à faixa normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    Low,
    Normal,
    High,
    Abnormal,
}

impl VitalStatus {
    pub fn is_normal(self) -> bool {
        self == VitalStatus::Normal
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VitalStatus::Low => "Low",
            VitalStatus::Normal => "Normal",
            VitalStatus::High => "High",
            VitalStatus::Abnormal => "Abnormal",
        };
        f.write_str(name)
    }
}

pub fn heart_rate_status(bpm: u32) -> VitalStatus {
    if bpm < 60 {
        VitalStatus::Low
    } else if bpm > 100 {
        VitalStatus::High
    } else {
        VitalStatus::Normal
    }
}

pub fn respiratory_status(rpm: u32) -> VitalStatus {
    if !(12..=20).contains(&rpm) {
        VitalStatus::Abnormal
    } else {
        VitalStatus::Normal
    }
}

pub fn temperature_status(fahrenheit: f64) -> VitalStatus {
    if !(97.0..=99.0).contains(&fahrenheit) {
        VitalStatus::Abnormal
    } else {
        VitalStatus::Normal
    }
}

/// Pressão alta tem precedência sobre pressão baixa
pub fn blood_pressure_status(systolic: u32, diastolic: u32) -> VitalStatus {
    if systolic > 130 || diastolic > 80 {
        VitalStatus::High
    } else if systolic < 90 || diastolic < 60 {
        VitalStatus::Low
    } else {
        VitalStatus::Normal
    }
}

/// Situação dos quatro sinais de uma leitura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub heart_rate: VitalStatus,
    pub respiratory_rate: VitalStatus,
    pub temperature: VitalStatus,
    pub blood_pressure: VitalStatus,
}

impl StatusReport {
    pub fn of(sample: &VitalSample) -> Self {
        Self {
            heart_rate: heart_rate_status(sample.heart_rate),
            respiratory_rate: respiratory_status(sample.respiratory_rate),
            temperature: temperature_status(sample.temperature),
            blood_pressure: blood_pressure_status(
                sample.blood_pressure.systolic,
                sample.blood_pressure.diastolic,
            ),
        }
    }

    /// Sinais fora do normal, com nome e classificação
    pub fn alerts(&self) -> Vec<(&'static str, VitalStatus)> {
        [
            ("frequência cardíaca", self.heart_rate),
            ("frequência respiratória", self.respiratory_rate),
            ("temperatura", self.temperature),
            ("pressão arterial", self.blood_pressure),
        ]
        .into_iter()
        .filter(|(_, status)| !status.is_normal())
        .collect()
    }
}
