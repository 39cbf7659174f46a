use crate::model::{ExerciseSession, Intensity};

/// Últimas `n` sessões (ou todas, se houver menos)
pub fn recent_sessions(sessions: &[ExerciseSession], n: usize) -> &[ExerciseSession] {
    &sessions[sessions.len().saturating_sub(n)..]
}

/// Soma das durações em minutos
pub fn total_minutes(sessions: &[ExerciseSession]) -> u64 {
    sessions.iter().map(|s| s.duration_minutes as u64).sum()
}

/// Intensidade média ponderada (Low=1, Medium=2, High=3); `None` sem sessões
pub fn average_intensity(sessions: &[ExerciseSession]) -> Option<Intensity> {
    if sessions.is_empty() {
        return None;
    }
    let total: u32 = sessions.iter().map(|s| s.intensity.weight()).sum();
    let average = total as f64 / sessions.len() as f64;

    Some(if average <= 1.5 {
        Intensity::Low
    } else if average <= 2.5 {
        Intensity::Medium
    } else {
        Intensity::High
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session(minutes: u32, intensity: Intensity) -> ExerciseSession {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ExerciseSession::new(date, minutes, "Cycling", intensity)
    }

    #[test]
    fn test_recent_sessions_window() {
        let sessions: Vec<_> = (1..=10).map(|m| session(m, Intensity::Low)).collect();
        let recent = recent_sessions(&sessions, 7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].duration_minutes, 4);
        assert_eq!(recent_sessions(&sessions[..3], 7).len(), 3);
        assert!(recent_sessions(&[], 7).is_empty());
    }

    #[test]
    fn test_average_intensity() {
        assert_eq!(average_intensity(&[]), None);
        let mixed = [
            session(30, Intensity::High),
            session(45, Intensity::Medium),
            session(60, Intensity::High),
        ];
        // (3 + 2 + 3) / 3 = 2.67
        assert_eq!(average_intensity(&mixed), Some(Intensity::High));
        let easy = [session(30, Intensity::Low), session(30, Intensity::Medium)];
        assert_eq!(average_intensity(&easy), Some(Intensity::Low));
        assert_eq!(total_minutes(&mixed), 135);
    }
}
