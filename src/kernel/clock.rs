use std::time::Duration;

use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use super::monitor::{MonitorSnapshot, VitalsMonitor};
use super::observer::VitalsObserver;
use crate::analysis::risk::RiskAssessment;
use crate::config::MonitorConfig;
use crate::error::ClockError;
use crate::model::{ConnectionState, ExerciseSession};
use crate::simulation::random::{UniformSource, default_source};
use crate::utils::timing::{ExecutionTimer, Timestamp};

/// Mensagens que podem ser enviadas ao laço do relógio
#[derive(Debug)]
pub enum ClockMessage {
    /// Interrompe os ticks (histórico preservado)
    Pause,
    /// Retoma os ticks a partir da última leitura
    Resume,
    /// Define ou remove o batimento fornecido externamente
    SetHeartRate(Option<u32>),
    /// Solicita uma cópia do estado atual
    Snapshot(oneshot::Sender<MonitorSnapshot>),
    /// Avalia o risco com a leitura mais recente
    AssessRisk(Vec<ExerciseSession>, oneshot::Sender<RiskAssessment>),
    /// Encerra o relógio
    Shutdown,
}

/// Relógio de simulação
///
/// Dispara ticks de sinais vitais em intervalo fixo e, num temporizador mais
/// lento, as verificações de conexão. Um único laço é dono do `VitalsMonitor`;
/// o restante do sistema conversa com ele por mensagens.
pub struct SimulationClock {
    config: MonitorConfig,
    observers: Vec<Box<dyn VitalsObserver>>,
}

impl SimulationClock {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Registra um observador antes do início
    pub fn subscribe(&mut self, observer: Box<dyn VitalsObserver>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Inicia o laço com o gerador padrão (semeado se a configuração tiver semente)
    pub fn start(self) -> ClockHandle {
        let rng = default_source(self.config.seed);
        self.start_with_source(Box::new(rng))
    }

    /// Inicia o laço com uma fonte aleatória explícita
    pub fn start_with_source(self, rng: Box<dyn UniformSource + Send>) -> ClockHandle {
        let (tx, rx) = mpsc::channel(32);
        let monitor = VitalsMonitor::new(&self.config, rng);

        log::info!(
            "Relógio iniciado: leituras a cada {:?}, conexão a cada {:?}",
            self.config.tick_interval,
            self.config.connection_interval
        );

        let join = tokio::spawn(clock_loop(
            monitor,
            self.observers,
            rx,
            self.config.tick_interval,
            self.config.connection_interval,
        ));

        ClockHandle { tx, join }
    }
}

/// Controle de um relógio em execução
pub struct ClockHandle {
    tx: Sender<ClockMessage>,
    join: JoinHandle<VitalsMonitor>,
}

impl ClockHandle {
    pub async fn pause(&self) -> Result<(), ClockError> {
        self.send(ClockMessage::Pause).await
    }

    pub async fn resume(&self) -> Result<(), ClockError> {
        self.send(ClockMessage::Resume).await
    }

    pub async fn set_heart_rate(&self, bpm: Option<u32>) -> Result<(), ClockError> {
        self.send(ClockMessage::SetHeartRate(bpm)).await
    }

    pub async fn snapshot(&self) -> Result<MonitorSnapshot, ClockError> {
        let (reply, rx) = oneshot::channel();
        self.send(ClockMessage::Snapshot(reply)).await?;
        rx.await.map_err(|_| ClockError::NoReply)
    }

    pub async fn assess_risk(
        &self,
        sessions: Vec<ExerciseSession>,
    ) -> Result<RiskAssessment, ClockError> {
        let (reply, rx) = oneshot::channel();
        self.send(ClockMessage::AssessRisk(sessions, reply)).await?;
        rx.await.map_err(|_| ClockError::NoReply)
    }

    /// Encerra o relógio e devolve o estado acumulado
    pub async fn shutdown(self) -> Result<VitalsMonitor, ClockError> {
        // laço já encerrado: basta aguardar o resultado
        let _ = self.tx.send(ClockMessage::Shutdown).await;
        Ok(self.join.await?)
    }

    async fn send(&self, msg: ClockMessage) -> Result<(), ClockError> {
        self.tx
            .send(msg)
            .await
            .map_err(|e| ClockError::ChannelClosed(e.to_string()))
    }
}

fn timer(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

fn notify_connection(observers: &mut [Box<dyn VitalsObserver>], state: &ConnectionState) {
    for observer in observers.iter_mut() {
        observer.on_connection_change(state);
    }
}

/// Laço principal do relógio
async fn clock_loop(
    mut monitor: VitalsMonitor,
    mut observers: Vec<Box<dyn VitalsObserver>>,
    mut rx: Receiver<ClockMessage>,
    tick_interval: Duration,
    connection_interval: Duration,
) -> VitalsMonitor {
    let mut vitals_timer = timer(tick_interval);
    let mut connection_timer = timer(connection_interval);

    loop {
        tokio::select! {
            biased;

            msg = rx.recv() => {
                match msg {
                    Some(ClockMessage::Pause) => {
                        let state = monitor.pause(Timestamp::now());
                        notify_connection(&mut observers, &state);
                    }
                    Some(ClockMessage::Resume) => {
                        let was_monitoring = monitor.is_monitoring();
                        let state = monitor.resume(Timestamp::now());
                        if !was_monitoring {
                            vitals_timer.reset();
                            connection_timer.reset();
                        }
                        notify_connection(&mut observers, &state);
                    }
                    Some(ClockMessage::SetHeartRate(bpm)) => {
                        monitor.set_heart_rate_override(bpm);
                    }
                    Some(ClockMessage::Snapshot(reply)) => {
                        let _ = reply.send(monitor.snapshot());
                    }
                    Some(ClockMessage::AssessRisk(sessions, reply)) => {
                        let _ = reply.send(monitor.assess_risk(&sessions));
                    }
                    Some(ClockMessage::Shutdown) | None => {
                        log::info!("Relógio encerrando após {} leituras", monitor.ticks());
                        break;
                    }
                }
            }

            _ = vitals_timer.tick(), if monitor.is_monitoring() => {
                let _timer = ExecutionTimer::new("Tick de sinais vitais");
                if let Some(update) = monitor.tick(Timestamp::now()) {
                    for observer in observers.iter_mut() {
                        observer.on_sample(&update);
                    }
                }
            }

            _ = connection_timer.tick(), if monitor.is_monitoring() => {
                if let Some(state) = monitor.connection_tick(Timestamp::now()) {
                    notify_connection(&mut observers, &state);
                }
            }
        }
    }

    monitor
}
