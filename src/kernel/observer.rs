use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::kernel::monitor::VitalsUpdate;
use crate::model::ConnectionState;

/// Evento emitido pelo relógio de simulação
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    Sample(VitalsUpdate),
    Connection(ConnectionState),
}

/// Contrato de assinatura dos consumidores externos
///
/// Os callbacks executam no mesmo laço que avança a simulação e não podem
/// bloquear por muito tempo nem propagar erros para o tick.
pub trait VitalsObserver: Send {
    /// Chamado uma vez por tick de sinais vitais
    fn on_sample(&mut self, update: &VitalsUpdate);

    /// Chamado uma vez por verificação de conexão (e ao pausar/retomar)
    fn on_connection_change(&mut self, _state: &ConnectionState) {}
}

/// Observador que repassa os eventos para um canal tokio
pub struct ChannelObserver {
    tx: UnboundedSender<MonitorEvent>,
}

impl ChannelObserver {
    pub fn new() -> (Self, UnboundedReceiver<MonitorEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl VitalsObserver for ChannelObserver {
    fn on_sample(&mut self, update: &VitalsUpdate) {
        // receptor descartado: nada a fazer
        let _ = self.tx.send(MonitorEvent::Sample(*update));
    }

    fn on_connection_change(&mut self, state: &ConnectionState) {
        let _ = self.tx.send(MonitorEvent::Connection(*state));
    }
}
