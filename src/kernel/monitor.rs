use crate::analysis::history::VitalsHistoryBuffer;
use crate::analysis::risk::{RiskAssessment, assess_sample};
use crate::analysis::trend::{TrendTracker, VitalTrends};
use crate::config::MonitorConfig;
use crate::model::{ConnectionState, ExerciseSession, VitalSample};
use crate::simulation::connection::ConnectionSimulator;
use crate::simulation::random::UniformSource;
use crate::simulation::vitals::VitalGenerator;
use crate::utils::timing::Timestamp;

/// Nova leitura acompanhada das tendências recalculadas após a inserção
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalsUpdate {
    pub sample: VitalSample,
    pub trends: VitalTrends,
}

/// Cópia consistente do estado do monitor
#[derive(Debug, Clone)]
pub struct MonitorSnapshot {
    pub latest: VitalSample,
    pub trends: VitalTrends,
    pub connection: ConnectionState,
    pub monitoring: bool,
    pub ticks: u64,
    pub heart_rate_history: VitalsHistoryBuffer,
    pub vitals_history: VitalsHistoryBuffer,
}

/// Estado de uma sessão de monitoramento
///
/// Único dono do histórico, das tendências e da conexão. Todas as mutações
/// acontecem de forma sequencial por `&mut self`; quem precisa de acesso
/// concorrente deve passar pelo relógio (`SimulationClock`).
pub struct VitalsMonitor {
    generator: VitalGenerator,
    tracker: TrendTracker,
    connection: ConnectionSimulator,
    heart_rate_history: VitalsHistoryBuffer,
    vitals_history: VitalsHistoryBuffer,
    trends: VitalTrends,
    latest: VitalSample,
    heart_rate_override: Option<u32>,
    monitoring: bool,
    ticks: u64,
    rng: Box<dyn UniformSource + Send>,
}

impl VitalsMonitor {
    pub fn new(config: &MonitorConfig, rng: Box<dyn UniformSource + Send>) -> Self {
        let started_at = config.initial.timestamp;
        let mut connection = ConnectionSimulator::new(started_at);
        if !config.monitoring {
            connection.pause(started_at);
        }

        Self {
            generator: VitalGenerator::new(),
            tracker: TrendTracker::new(),
            connection,
            heart_rate_history: VitalsHistoryBuffer::new(config.heart_rate_capacity),
            vitals_history: VitalsHistoryBuffer::new(config.vitals_capacity),
            trends: VitalTrends::default(),
            latest: config.initial,
            heart_rate_override: config.heart_rate_override,
            monitoring: config.monitoring,
            ticks: 0,
            rng,
        }
    }

    /// Avança um tick de sinais vitais; `None` se o monitoramento estiver pausado
    ///
    /// A tendência é calculada somente depois que a leitura entra no histórico.
    pub fn tick(&mut self, now: Timestamp) -> Option<VitalsUpdate> {
        if !self.monitoring {
            return None;
        }

        let timestamp = now.not_before(self.latest.timestamp);
        let sample = self.generator.next_sample(
            Some(&self.latest),
            self.heart_rate_override,
            timestamp,
            self.rng.as_mut(),
        );

        self.heart_rate_history.append(sample);
        self.vitals_history.append(sample);
        self.trends = self.tracker.evaluate(&self.vitals_history);
        self.latest = sample;
        self.ticks += 1;

        log::debug!(
            "Tick #{}: FC={} FR={} T={:.1} PA={}/{}",
            self.ticks,
            sample.heart_rate,
            sample.respiratory_rate,
            sample.temperature,
            sample.blood_pressure.systolic,
            sample.blood_pressure.diastolic
        );

        Some(VitalsUpdate {
            sample,
            trends: self.trends,
        })
    }

    /// Avança uma verificação de conexão; `None` se pausado
    pub fn connection_tick(&mut self, now: Timestamp) -> Option<ConnectionState> {
        self.connection.tick(now, self.rng.as_mut())
    }

    /// Interrompe os ticks preservando histórico e tendências
    pub fn pause(&mut self, now: Timestamp) -> ConnectionState {
        if self.monitoring {
            log::info!("Monitoramento pausado após {} leituras", self.ticks);
        }
        self.monitoring = false;
        self.connection.pause(now)
    }

    /// Retoma a partir da última leitura conhecida
    pub fn resume(&mut self, now: Timestamp) -> ConnectionState {
        if !self.monitoring {
            log::info!("Monitoramento retomado");
        }
        self.monitoring = true;
        self.connection.resume(now)
    }

    pub fn set_heart_rate_override(&mut self, bpm: Option<u32>) {
        self.heart_rate_override = bpm;
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    pub fn latest(&self) -> &VitalSample {
        &self.latest
    }

    pub fn trends(&self) -> VitalTrends {
        self.trends
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection.state()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn heart_rate_history(&self) -> &VitalsHistoryBuffer {
        &self.heart_rate_history
    }

    pub fn vitals_history(&self) -> &VitalsHistoryBuffer {
        &self.vitals_history
    }

    /// Avalia o risco com a leitura mais recente
    pub fn assess_risk(&self, sessions: &[ExerciseSession]) -> RiskAssessment {
        assess_sample(&self.latest, sessions)
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            latest: self.latest,
            trends: self.trends,
            connection: self.connection.state(),
            monitoring: self.monitoring,
            ticks: self.ticks,
            heart_rate_history: self.heart_rate_history.clone(),
            vitals_history: self.vitals_history.clone(),
        }
    }

    /// Encerra a sessão descartando o histórico acumulado
    pub fn end_session(&mut self, now: Timestamp) {
        self.pause(now);
        self.heart_rate_history.clear();
        self.vitals_history.clear();
        self.trends = VitalTrends::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::trend::Trend;
    use crate::simulation::random::{ScriptedSource, default_source};

    fn config() -> MonitorConfig {
        MonitorConfig::default().with_initial(VitalSample::resting(Timestamp::from_micros(0)))
    }

    fn monitor(seed: u64) -> VitalsMonitor {
        VitalsMonitor::new(&config(), Box::new(default_source(Some(seed))))
    }

    fn at(secs: u64) -> Timestamp {
        Timestamp::from_micros(secs * 1_000_000)
    }

    #[test]
    fn test_tick_appends_to_both_streams() {
        let mut monitor = monitor(1);
        for i in 1..=75 {
            monitor.tick(at(i)).unwrap();
        }
        assert_eq!(monitor.heart_rate_history().len(), 60);
        assert_eq!(monitor.vitals_history().len(), 30);
        assert_eq!(monitor.ticks(), 75);
        assert_eq!(monitor.vitals_history().latest(), Some(monitor.latest()));
    }

    #[test]
    fn test_trend_stays_stable_until_five_samples() {
        let rng = ScriptedSource::constant(1.0);
        let mut monitor = VitalsMonitor::new(&config(), Box::new(rng));
        for i in 1..5 {
            let update = monitor.tick(at(i)).unwrap();
            assert_eq!(update.trends, VitalTrends::default());
        }
        // sorteios máximos empurram todos os sinais para cima
        let update = monitor.tick(at(5)).unwrap();
        assert_eq!(update.trends.heart_rate, Trend::Rising);
    }

    #[test]
    fn test_pause_keeps_history_and_resume_continues_walk() {
        let mut monitor = monitor(7);
        for i in 1..=10 {
            monitor.tick(at(i));
        }
        let before = monitor.snapshot();

        let state = monitor.pause(at(11));
        assert!(!state.connected);
        assert_eq!(monitor.tick(at(12)), None);
        assert_eq!(monitor.connection_tick(at(12)), None);

        let during = monitor.snapshot();
        assert_eq!(during.vitals_history.to_vec(), before.vitals_history.to_vec());
        assert_eq!(during.trends, before.trends);
        assert_eq!(during.latest, before.latest);

        assert!(monitor.resume(at(20)).connected);
        let update = monitor.tick(at(21)).unwrap();
        assert_eq!(monitor.vitals_history().len(), 11);
        assert!(update.sample.timestamp > before.latest.timestamp);
    }

    #[test]
    fn test_resume_uses_last_sample_as_previous() {
        // mesma semente com e sem pausa produz a mesma sequência
        let mut paused = monitor(3);
        let mut straight = monitor(3);
        for i in 1..=5 {
            paused.tick(at(i));
            straight.tick(at(i));
        }
        paused.pause(at(6));
        paused.resume(at(7));
        for i in 8..=12 {
            let a = paused.tick(at(i)).unwrap().sample;
            let b = straight.tick(at(i)).unwrap().sample;
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_starts_paused_without_ticks() {
        let config = config().with_monitoring(false);
        let mut monitor = VitalsMonitor::new(&config, Box::new(default_source(Some(1))));
        assert!(!monitor.connection().connected);
        assert_eq!(monitor.tick(at(1)), None);
        assert!(monitor.vitals_history().is_empty());
    }

    #[test]
    fn test_heart_rate_override() {
        let mut monitor = monitor(5);
        monitor.set_heart_rate_override(Some(105));
        let sample = monitor.tick(at(1)).unwrap().sample;
        assert_eq!(sample.heart_rate, 105);

        let risk = monitor.assess_risk(&[]);
        assert!(risk.factors.contains(&"Elevated resting heart rate".to_string()));

        monitor.set_heart_rate_override(None);
        let sample = monitor.tick(at(2)).unwrap().sample;
        assert!((50..=120).contains(&sample.heart_rate));
    }

    #[test]
    fn test_timestamps_never_go_backwards() {
        let mut monitor = monitor(11);
        let first = monitor.tick(at(10)).unwrap().sample.timestamp;
        let second = monitor.tick(at(5)).unwrap().sample.timestamp;
        assert!(second >= first);
    }

    #[test]
    fn test_end_session_clears_history() {
        let mut monitor = monitor(2);
        for i in 1..=8 {
            monitor.tick(at(i));
        }
        monitor.end_session(at(9));
        assert!(monitor.vitals_history().is_empty());
        assert!(monitor.heart_rate_history().is_empty());
        assert!(!monitor.is_monitoring());
    }
}
