use crate::analysis::status::StatusReport;
use crate::kernel::monitor::VitalsUpdate;
use crate::kernel::observer::VitalsObserver;
use crate::model::ConnectionState;

/// Observador de alarme
///
/// Emite um aviso para cada sinal fora da faixa normal e registra quedas de
/// conexão. Nunca altera o estado da simulação.
#[derive(Debug, Default)]
pub struct AlarmObserver {
    /// Contador de alarmes disparados
    pub alarm_count: u32,
    /// Quedas de conexão observadas
    pub disconnections: u32,
    last_connected: Option<bool>,
}

impl AlarmObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VitalsObserver for AlarmObserver {
    fn on_sample(&mut self, update: &VitalsUpdate) {
        let report = StatusReport::of(&update.sample);
        for (vital, status) in report.alerts() {
            self.alarm_count += 1;
            log::warn!(
                "⚠️ Alarme #{}: {} {} às {}",
                self.alarm_count,
                vital,
                status,
                update.sample.timestamp
            );
        }
    }

    fn on_connection_change(&mut self, state: &ConnectionState) {
        if !state.connected && self.last_connected != Some(false) {
            self.disconnections += 1;
            log::warn!("🔌 Sensores desconectados às {}", state.last_update);
        }
        self.last_connected = Some(state.connected);
    }
}
