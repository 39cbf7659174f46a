use crate::model::{BloodPressure, VitalSample};
use crate::simulation::random::UniformSource;
use crate::utils::timing::Timestamp;

/// Parâmetros do passeio aleatório com reversão à média de um sinal vital
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Valor de referência para o qual o sinal tende a voltar
    pub baseline: f64,
    /// Amplitude máxima da perturbação por tick
    pub amplitude: f64,
    /// Fração do desvio anterior que persiste no próximo tick, em (0, 1)
    pub momentum: f64,
    pub min: f64,
    pub max: f64,
}

impl WalkParams {
    pub const fn new(baseline: f64, amplitude: f64, momentum: f64, min: f64, max: f64) -> Self {
        Self {
            baseline,
            amplitude,
            momentum,
            min,
            max,
        }
    }

    /// Próximo valor bruto (limitado mas sem arredondamento)
    ///
    /// `draw` é um valor uniforme em [-1, 1). Sem leitura anterior o momento é zero.
    pub fn step(&self, previous: Option<f64>, draw: f64) -> f64 {
        let momentum = previous.map_or(0.0, |prev| (prev - self.baseline) * self.momentum);
        let raw = self.baseline + momentum + draw * self.amplitude;
        raw.clamp(self.min, self.max)
    }
}

pub const HEART_RATE: WalkParams = WalkParams::new(75.0, 15.0, 0.7, 50.0, 120.0);
pub const RESPIRATORY_RATE: WalkParams = WalkParams::new(16.0, 3.0, 0.6, 12.0, 20.0);
pub const TEMPERATURE: WalkParams = WalkParams::new(98.6, 0.8, 0.8, 97.0, 99.0);
pub const SYSTOLIC: WalkParams = WalkParams::new(120.0, 8.0, 0.7, 100.0, 140.0);
pub const DIASTOLIC: WalkParams = WalkParams::new(75.0, 8.0 * 0.6, 0.7, 60.0, 90.0);

/// Gerador de sinais vitais simulados
///
/// Cada sinal segue um passeio aleatório limitado: o desvio em relação à linha de
/// base decai pelo coeficiente de momento e recebe uma perturbação uniforme.
/// Sistólica e diastólica compartilham o mesmo sorteio em cada tick.
#[derive(Debug, Clone)]
pub struct VitalGenerator {
    pub heart_rate: WalkParams,
    pub respiratory_rate: WalkParams,
    pub temperature: WalkParams,
    pub systolic: WalkParams,
    pub diastolic: WalkParams,
}

impl Default for VitalGenerator {
    fn default() -> Self {
        Self {
            heart_rate: HEART_RATE,
            respiratory_rate: RESPIRATORY_RATE,
            temperature: TEMPERATURE,
            systolic: SYSTOLIC,
            diastolic: DIASTOLIC,
        }
    }
}

impl VitalGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gera a próxima leitura a partir da anterior
    ///
    /// Quando `heart_rate_override` é informado o valor é propagado sem alteração
    /// e nenhum sorteio é consumido para o batimento. Ordem dos sorteios:
    /// batimento (se gerado), respiração, temperatura, pressão arterial.
    pub fn next_sample(
        &self,
        previous: Option<&VitalSample>,
        heart_rate_override: Option<u32>,
        timestamp: Timestamp,
        rng: &mut dyn UniformSource,
    ) -> VitalSample {
        let heart_rate = match heart_rate_override {
            Some(bpm) => bpm,
            None => self.next_heart_rate(previous.map(|p| p.heart_rate), rng),
        };

        let respiratory_rate = self
            .respiratory_rate
            .step(previous.map(|p| p.respiratory_rate as f64), rng.next_signed())
            .round() as u32;

        let temperature = round_tenth(
            self.temperature
                .step(previous.map(|p| p.temperature), rng.next_signed()),
        );

        let bp_draw = rng.next_signed();
        let systolic = self
            .systolic
            .step(previous.map(|p| p.blood_pressure.systolic as f64), bp_draw)
            .round() as u32;
        let diastolic = self
            .diastolic
            .step(previous.map(|p| p.blood_pressure.diastolic as f64), bp_draw)
            .round() as u32;

        VitalSample {
            timestamp,
            heart_rate,
            respiratory_rate,
            temperature,
            blood_pressure: BloodPressure {
                systolic,
                diastolic,
            },
        }
    }

    /// Gera apenas o próximo batimento (fluxo dedicado de frequência cardíaca)
    pub fn next_heart_rate(&self, previous: Option<u32>, rng: &mut dyn UniformSource) -> u32 {
        self.heart_rate
            .step(previous.map(|bpm| bpm as f64), rng.next_signed())
            .round() as u32
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
