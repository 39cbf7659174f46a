use crate::model::ConnectionState;
use crate::simulation::random::UniformSource;
use crate::utils::timing::Timestamp;

/// Probabilidade padrão de a conexão permanecer estável em cada verificação
pub const DEFAULT_STICKINESS: f64 = 0.95;

/// Simulador de conectividade intermitente dos sensores
///
/// A cada verificação lenta sorteia um valor uniforme: acima de `1 - stickiness`
/// os sensores ficam conectados, caso contrário o estado é invertido. Uma queda
/// portanto dura no máximo uma verificação.
#[derive(Debug, Clone)]
pub struct ConnectionSimulator {
    state: ConnectionState,
    stickiness: f64,
    paused: bool,
}

impl ConnectionSimulator {
    pub fn new(at: Timestamp) -> Self {
        Self::with_stickiness(at, DEFAULT_STICKINESS)
    }

    pub fn with_stickiness(at: Timestamp, stickiness: f64) -> Self {
        Self {
            state: ConnectionState::connected(at),
            stickiness: stickiness.clamp(0.0, 1.0),
            paused: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Executa uma verificação; retorna `None` enquanto o monitoramento está pausado
    pub fn tick(&mut self, at: Timestamp, rng: &mut dyn UniformSource) -> Option<ConnectionState> {
        if self.paused {
            return None;
        }

        let connected = if rng.next_unit() > 1.0 - self.stickiness {
            true
        } else {
            !self.state.connected
        };

        if connected != self.state.connected {
            if connected {
                log::info!("Sensores reconectados às {}", at);
            } else {
                log::warn!("Conexão com os sensores perdida às {}", at);
            }
        }

        self.state = ConnectionState {
            connected,
            last_update: at,
        };
        Some(self.state)
    }

    /// Força o estado desconectado e suspende os sorteios
    pub fn pause(&mut self, at: Timestamp) -> ConnectionState {
        self.paused = true;
        self.state = ConnectionState::disconnected(at);
        self.state
    }

    /// Retoma as verificações partindo do estado conectado
    pub fn resume(&mut self, at: Timestamp) -> ConnectionState {
        self.paused = false;
        self.state = ConnectionState::connected(at);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::{ScriptedSource, default_source};

    const T0: Timestamp = Timestamp::from_micros(0);

    #[test]
    fn test_connection_is_sticky() {
        let mut sim = ConnectionSimulator::new(T0);
        let mut rng = default_source(Some(99));
        let mut stayed = 0u64;
        let mut from_connected = 0u64;
        for _ in 0..1_000_000 {
            let was_connected = sim.state().connected;
            let state = sim.tick(T0, &mut rng).unwrap();
            if was_connected {
                from_connected += 1;
                if state.connected {
                    stayed += 1;
                }
            }
        }
        let ratio = stayed as f64 / from_connected as f64;
        assert!((0.94..=0.96).contains(&ratio), "ratio = {}", ratio);
    }

    #[test]
    fn test_low_draw_flips_state() {
        let mut sim = ConnectionSimulator::new(T0);
        let mut rng = ScriptedSource::constant(0.01);
        assert!(!sim.tick(T0, &mut rng).unwrap().connected);
        assert!(sim.tick(T0, &mut rng).unwrap().connected);
    }

    #[test]
    fn test_pause_forces_disconnect_and_skips_draws() {
        let mut sim = ConnectionSimulator::new(T0);
        let mut rng = ScriptedSource::new(vec![0.01, 0.99]);
        let at = Timestamp::from_micros(5);
        assert!(!sim.pause(at).connected);
        assert!(sim.is_paused());
        for _ in 0..10 {
            assert_eq!(sim.tick(at, &mut rng), None);
        }
        assert!(!sim.state().connected);

        assert!(sim.resume(at).connected);
        assert!(!sim.is_paused());
        // nenhum sorteio foi consumido durante a pausa
        assert!(!sim.tick(at, &mut rng).unwrap().connected);
    }

    #[test]
    fn test_tick_updates_last_update() {
        let mut sim = ConnectionSimulator::new(T0);
        let mut rng = ScriptedSource::constant(0.9);
        let at = Timestamp::from_micros(10_000_000);
        assert_eq!(sim.tick(at, &mut rng).unwrap().last_update, at);
    }
}
