use std::collections::VecDeque;

use crate::model::{VitalField, VitalSample};

/// Capacidade do fluxo dedicado de frequência cardíaca (últimos 60 segundos)
pub const HEART_RATE_CAPACITY: usize = 60;
/// Capacidade do fluxo combinado de sinais vitais
pub const VITALS_CAPACITY: usize = 30;

/// Mínimo e máximo de um campo no histórico
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Histórico FIFO de leituras com capacidade fixa
///
/// Ao exceder a capacidade a leitura mais antiga é descartada.
#[derive(Debug, Clone)]
pub struct VitalsHistoryBuffer {
    samples: VecDeque<VitalSample>,
    capacity: usize,
}

impl VitalsHistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&VitalSample> {
        self.samples.back()
    }

    /// Adiciona ao final; retorna a leitura descartada, se houver
    pub fn append(&mut self, sample: VitalSample) -> Option<VitalSample> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    /// Últimas `k` leituras em ordem de inserção (ou menos, se o histórico for menor)
    pub fn window(&self, k: usize) -> impl Iterator<Item = &VitalSample> + '_ {
        let skip = self.samples.len().saturating_sub(k);
        self.samples.iter().skip(skip)
    }

    /// Mínimo/máximo de um campo; `None` quando não há dados
    pub fn range(&self, field: VitalField) -> Option<ValueRange> {
        self.samples.iter().map(|s| s.value(field)).fold(None, |acc, v| {
            Some(match acc {
                None => ValueRange { min: v, max: v },
                Some(r) => ValueRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &VitalSample> + '_ {
        self.samples.iter()
    }

    /// Cópia do conteúdo atual, da mais antiga para a mais recente
    pub fn to_vec(&self) -> Vec<VitalSample> {
        self.samples.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timing::Timestamp;

    fn sample(i: u64, heart_rate: u32) -> VitalSample {
        VitalSample {
            heart_rate,
            ..VitalSample::resting(Timestamp::from_micros(i))
        }
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut buffer = VitalsHistoryBuffer::new(VITALS_CAPACITY);
        let k = 7;
        for i in 0..(VITALS_CAPACITY + k) as u64 {
            buffer.append(sample(i, 60));
            assert!(buffer.len() <= VITALS_CAPACITY);
        }
        assert_eq!(buffer.len(), VITALS_CAPACITY);
        let first = buffer.iter().next().unwrap().timestamp.as_micros();
        assert_eq!(first, k as u64);
        assert!(buffer.iter().all(|s| s.timestamp.as_micros() >= k as u64));
    }

    #[test]
    fn test_append_returns_evicted_head() {
        let mut buffer = VitalsHistoryBuffer::new(2);
        assert_eq!(buffer.append(sample(0, 70)), None);
        assert_eq!(buffer.append(sample(1, 71)), None);
        let evicted = buffer.append(sample(2, 72)).unwrap();
        assert_eq!(evicted.heart_rate, 70);
        assert_eq!(buffer.latest().unwrap().heart_rate, 72);
    }

    #[test]
    fn test_window_shorter_than_history() {
        let mut buffer = VitalsHistoryBuffer::new(10);
        for i in 0..3 {
            buffer.append(sample(i, 70 + i as u32));
        }
        let all: Vec<u32> = buffer.window(5).map(|s| s.heart_rate).collect();
        assert_eq!(all, vec![70, 71, 72]);
        let last_two: Vec<u32> = buffer.window(2).map(|s| s.heart_rate).collect();
        assert_eq!(last_two, vec![71, 72]);
    }

    #[test]
    fn test_range() {
        let mut buffer = VitalsHistoryBuffer::new(HEART_RATE_CAPACITY);
        assert_eq!(buffer.range(VitalField::HeartRate), None);
        for (i, bpm) in [80, 65, 101, 77].into_iter().enumerate() {
            buffer.append(sample(i as u64, bpm));
        }
        assert_eq!(
            buffer.range(VitalField::HeartRate),
            Some(ValueRange { min: 65.0, max: 101.0 })
        );
        assert_eq!(
            buffer.range(VitalField::Temperature),
            Some(ValueRange { min: 98.3, max: 98.3 })
        );
    }
}
