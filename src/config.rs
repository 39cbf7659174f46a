use std::time::Duration;

use crate::analysis::history::{HEART_RATE_CAPACITY, VITALS_CAPACITY};
use crate::model::VitalSample;
use crate::utils::timing::Timestamp;

/// Parâmetros de uma sessão de monitoramento
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Intervalo entre leituras dos sinais vitais
    pub tick_interval: Duration,
    /// Intervalo entre verificações de conexão (mais lento que as leituras)
    pub connection_interval: Duration,
    /// Semente do gerador; `None` usa entropia do sistema
    pub seed: Option<u64>,
    pub heart_rate_capacity: usize,
    pub vitals_capacity: usize,
    /// Leitura considerada "anterior" no primeiro tick
    pub initial: VitalSample,
    /// Batimento fornecido externamente, usado no lugar do gerado
    pub heart_rate_override: Option<u32>,
    /// Inicia com o monitoramento ativo
    pub monitoring: bool,
    /// Intervalo de conexão definido explicitamente (não derivado do tick)
    connection_interval_set: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            connection_interval: Duration::from_secs(10),
            seed: None,
            heart_rate_capacity: HEART_RATE_CAPACITY,
            vitals_capacity: VITALS_CAPACITY,
            initial: VitalSample::resting(Timestamp::now()),
            heart_rate_override: None,
            monitoring: true,
            connection_interval_set: false,
        }
    }
}

impl MonitorConfig {
    /// Define o intervalo de leitura
    ///
    /// Sem um intervalo de conexão explícito, a conexão passa a ser verificada
    /// 10x mais devagar que as leituras.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        if !self.connection_interval_set {
            self.connection_interval = interval * 10;
        }
        self
    }

    /// Fixa o intervalo de conexão, independente da ordem das demais chamadas
    pub fn with_connection_interval(mut self, interval: Duration) -> Self {
        self.connection_interval = interval;
        self.connection_interval_set = true;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial(mut self, initial: VitalSample) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_heart_rate_override(mut self, bpm: Option<u32>) -> Self {
        self.heart_rate_override = bpm;
        self
    }

    pub fn with_monitoring(mut self, monitoring: bool) -> Self {
        self.monitoring = monitoring;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.connection_interval, Duration::from_secs(10));
        assert_eq!(config.heart_rate_capacity, 60);
        assert_eq!(config.vitals_capacity, 30);
        assert_eq!(config.initial.heart_rate, 72);
        assert!(config.monitoring);
    }

    #[test]
    fn test_tick_interval_scales_connection() {
        let config = MonitorConfig::default().with_tick_interval(Duration::from_millis(200));
        assert_eq!(config.connection_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_explicit_connection_interval_survives_tick_change() {
        let before = MonitorConfig::default()
            .with_connection_interval(Duration::from_secs(3))
            .with_tick_interval(Duration::from_millis(200));
        let after = MonitorConfig::default()
            .with_tick_interval(Duration::from_millis(200))
            .with_connection_interval(Duration::from_secs(3));
        assert_eq!(before.connection_interval, Duration::from_secs(3));
        assert_eq!(after.connection_interval, Duration::from_secs(3));
        assert_eq!(before.tick_interval, Duration::from_millis(200));
    }
}
