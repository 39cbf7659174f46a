use std::fmt;
use std::time::{Duration, Instant, SystemTime};

/// Instante de uma leitura, em microssegundos desde o UNIX epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    microseconds: u64,
}

impl Timestamp {
    /// Cria um novo timestamp a partir do tempo do sistema
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0));

        Self {
            microseconds: now.as_micros() as u64,
        }
    }

    /// Cria um timestamp com valor explícito (útil para reprodutibilidade)
    pub const fn from_micros(microseconds: u64) -> Self {
        Self { microseconds }
    }

    pub fn as_micros(&self) -> u64 {
        self.microseconds
    }

    /// Garante a ordem monotônica: nunca retorna um instante anterior a `floor`
    pub fn not_before(self, floor: Timestamp) -> Self {
        self.max(floor)
    }

    /// Retorna a diferença em duração entre dois timestamps
    pub fn duration_since(&self, earlier: &Self) -> Duration {
        Duration::from_micros(self.microseconds.saturating_sub(earlier.microseconds))
    }

    /// Converte para DateTime do Chrono
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = (self.microseconds / 1_000_000) as i64;
        let nsecs = ((self.microseconds % 1_000_000) * 1000) as u32;

        chrono::DateTime::from_timestamp(secs, nsecs).unwrap_or_else(chrono::Utc::now)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Utilitário para medir a duração de um tick
pub struct ExecutionTimer {
    start: Instant,
    name: String,
}

impl ExecutionTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }
}

impl Drop for ExecutionTimer {
    fn drop(&mut self) {
        log::debug!("{} executou em {:?}", self.name, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_since_saturates() {
        let early = Timestamp::from_micros(1_000);
        let late = Timestamp::from_micros(3_500);
        assert_eq!(late.duration_since(&early), Duration::from_micros(2_500));
        assert_eq!(early.duration_since(&late), Duration::ZERO);
    }

    #[test]
    fn test_not_before_keeps_order() {
        let floor = Timestamp::from_micros(10);
        assert_eq!(Timestamp::from_micros(5).not_before(floor), floor);
        assert_eq!(Timestamp::from_micros(20).not_before(floor).as_micros(), 20);
    }

    #[test]
    fn test_display_format() {
        let ts = Timestamp::from_micros(1_500_000);
        assert_eq!(ts.to_string(), "1970-01-01 00:00:01.500");
    }
}
