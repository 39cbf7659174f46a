use std::fmt;

use crate::analysis::exercise::{recent_sessions, total_minutes};
use crate::model::{ExerciseSession, Intensity, VitalSample};

/// Número de sessões recentes consideradas na análise de exercícios
pub const RECENT_SESSIONS: usize = 7;

/// Maior pontuação alcançável pela tabela de regras
///
/// Batimento (2) + respiração (2) + treinos intensos (2) + volume (1). As regras
/// de volume alto e baixo são exclusivas entre si, e o ramo "sem dados" exclui
/// as regras de exercício.
pub const MAX_RISK_SCORE: u32 = 7;

/// Nível de risco derivado da pontuação
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => RiskLevel::Low,
            3..=4 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        };
        f.write_str(name)
    }
}

/// Resultado de uma avaliação de risco
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Fração da barra de progresso, em [0, 1]
    pub fn progress(&self) -> f64 {
        (self.score.min(MAX_RISK_SCORE) as f64 / MAX_RISK_SCORE as f64).min(1.0)
    }
}

/// Acumulador interno das regras disparadas
#[derive(Default)]
struct Tally {
    score: u32,
    factors: Vec<String>,
    recommendations: Vec<String>,
}

impl Tally {
    fn fire(&mut self, points: u32, factor: &str, recommendation: &str) {
        self.score += points;
        self.factors.push(factor.to_string());
        self.recommendations.push(recommendation.to_string());
    }
}

/// Avalia o risco a partir dos sinais atuais e do histórico de exercícios
///
/// Função pura: entradas iguais produzem sempre a mesma avaliação. Valores fora
/// da faixa fisiológica (inclusive negativos) caem na regra mais próxima.
pub fn assess_risk(
    heart_rate: i64,
    respiratory_rate: i64,
    sessions: &[ExerciseSession],
) -> RiskAssessment {
    let mut tally = Tally::default();

    if heart_rate > 100 {
        tally.fire(
            2,
            "Elevated resting heart rate",
            "Consider cardio conditioning and stress management",
        );
    } else if heart_rate < 60 {
        tally.fire(
            1,
            "Low resting heart rate (could indicate overtraining)",
            "Monitor for signs of overtraining and ensure adequate rest",
        );
    }

    if respiratory_rate > 20 {
        tally.fire(
            2,
            "Elevated respiratory rate",
            "Focus on breathing exercises and relaxation techniques",
        );
    } else if respiratory_rate < 12 {
        tally.fire(
            1,
            "Low respiratory rate",
            "Monitor breathing patterns during exercise",
        );
    }

    let recent = recent_sessions(sessions, RECENT_SESSIONS);
    if recent.is_empty() {
        tally.fire(
            2,
            "No recent exercise data",
            "Start with light exercise and build gradually",
        );
    } else {
        let high_intensity = recent
            .iter()
            .filter(|s| s.intensity == Intensity::High)
            .count();
        let minutes = total_minutes(recent);

        if high_intensity > 4 {
            tally.fire(
                2,
                "High frequency of intense workouts",
                "Include more rest days between intense sessions",
            );
        }
        if minutes > 300 {
            tally.fire(
                1,
                "High exercise volume",
                "Gradually increase exercise duration to prevent injury",
            );
        } else if minutes < 60 {
            tally.fire(
                1,
                "Insufficient exercise volume",
                "Gradually increase exercise frequency for better health",
            );
        }
    }

    if tally.score <= 2 {
        tally
            .recommendations
            .push("Maintain your current healthy routine".to_string());
        tally
            .recommendations
            .push("Continue monitoring your vital signs regularly".to_string());
    }

    let score = tally.score.min(MAX_RISK_SCORE);
    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        factors: tally.factors,
        recommendations: tally.recommendations,
    }
}

/// Avalia o risco usando a leitura mais recente
pub fn assess_sample(sample: &VitalSample, sessions: &[ExerciseSession]) -> RiskAssessment {
    assess_risk(
        sample.heart_rate as i64,
        sample.respiratory_rate as i64,
        sessions,
    )
}
