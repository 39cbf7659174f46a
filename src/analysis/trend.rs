use std::fmt;

use crate::analysis::history::VitalsHistoryBuffer;
use crate::model::VitalField;

/// Número de leituras examinadas para classificar a tendência
pub const TREND_WINDOW: usize = 5;

/// Direção de curto prazo de um sinal vital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Tendências dos quatro sinais (pressão arterial avaliada pela sistólica)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VitalTrends {
    pub heart_rate: Trend,
    pub respiratory_rate: Trend,
    pub temperature: Trend,
    pub blood_pressure: Trend,
}

/// Classificador de tendência por janela deslizante
///
/// Compara a média das últimas cinco leituras com a mais antiga delas. É uma
/// simplificação assimétrica, não uma regressão: basta uma leitura antiga fora
/// da curva para deslocar a classificação.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendTracker {
    pub heart_rate_threshold: f64,
    pub respiratory_rate_threshold: f64,
    pub temperature_threshold: f64,
    pub systolic_threshold: f64,
}

impl Default for TrendTracker {
    fn default() -> Self {
        Self {
            heart_rate_threshold: 3.0,
            respiratory_rate_threshold: 1.5,
            temperature_threshold: 0.3,
            systolic_threshold: 4.0,
        }
    }
}

impl TrendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recalcula as quatro tendências a partir do histórico
    pub fn evaluate(&self, history: &VitalsHistoryBuffer) -> VitalTrends {
        VitalTrends {
            heart_rate: self.evaluate_field(history, VitalField::HeartRate),
            respiratory_rate: self.evaluate_field(history, VitalField::RespiratoryRate),
            temperature: self.evaluate_field(history, VitalField::Temperature),
            blood_pressure: self.evaluate_field(history, VitalField::Systolic),
        }
    }

    pub fn evaluate_field(&self, history: &VitalsHistoryBuffer, field: VitalField) -> Trend {
        let recent: Vec<f64> = history
            .window(TREND_WINDOW)
            .map(|s| s.value(field))
            .collect();
        classify(&recent, self.threshold(field))
    }

    pub fn threshold(&self, field: VitalField) -> f64 {
        match field {
            VitalField::HeartRate => self.heart_rate_threshold,
            VitalField::RespiratoryRate => self.respiratory_rate_threshold,
            VitalField::Temperature => self.temperature_threshold,
            VitalField::Systolic | VitalField::Diastolic => self.systolic_threshold,
        }
    }
}

/// Classifica a série (ordem de inserção) usando suas últimas cinco posições
pub fn classify(values: &[f64], threshold: f64) -> Trend {
    if values.len() < TREND_WINDOW {
        return Trend::Stable;
    }
    let recent = &values[values.len() - TREND_WINDOW..];
    let average = recent.iter().sum::<f64>() / recent.len() as f64;
    let oldest = recent[0];

    if average > oldest + threshold {
        Trend::Rising
    } else if average < oldest - threshold {
        Trend::Falling
    } else {
        Trend::Stable
    }
}
