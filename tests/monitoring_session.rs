use std::time::Duration;

use monitor_sinais_vitais::kernel::{ChannelObserver, MonitorEvent};
use monitor_sinais_vitais::tasks::{AlarmObserver, CsvLogger, export_history};
use monitor_sinais_vitais::{MonitorConfig, SimulationClock, Trend, VitalField};

#[tokio::test(start_paused = true)]
async fn full_session_logs_every_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.csv");

    let (events, mut rx) = ChannelObserver::new();
    let mut clock = SimulationClock::new(MonitorConfig::default().with_seed(7));
    clock
        .subscribe(Box::new(CsvLogger::create(&path).unwrap()))
        .subscribe(Box::new(AlarmObserver::new()))
        .subscribe(Box::new(events));
    let handle = clock.start();

    tokio::time::sleep(Duration::from_millis(45_500)).await;
    handle.pause().await.unwrap();
    tokio::time::sleep(Duration::from_secs(60)).await;
    let monitor = handle.shutdown().await.unwrap();

    assert_eq!(monitor.ticks(), 45);
    assert_eq!(monitor.heart_rate_history().len(), 45);
    assert_eq!(monitor.vitals_history().len(), 30);

    let logged = std::fs::read_to_string(&path).unwrap();
    assert_eq!(logged.lines().count(), 46);

    let mut samples = 0;
    let mut last_connection = None;
    while let Ok(event) = rx.try_recv() {
        match event {
            MonitorEvent::Sample(update) => {
                samples += 1;
                let s = update.sample;
                assert!((50..=120).contains(&s.heart_rate));
                assert!((12..=20).contains(&s.respiratory_rate));
                assert!((97.0..=99.0).contains(&s.temperature));
                assert!((100..=140).contains(&s.blood_pressure.systolic));
                assert!((60..=90).contains(&s.blood_pressure.diastolic));
                if samples < 5 {
                    assert_eq!(update.trends.heart_rate, Trend::Stable);
                }
            }
            MonitorEvent::Connection(state) => last_connection = Some(state),
        }
    }
    assert_eq!(samples, 45);
    // a pausa força o estado desconectado
    assert!(!last_connection.unwrap().connected);

    let range = monitor.vitals_history().range(VitalField::HeartRate).unwrap();
    assert!(range.min <= range.max);

    let mut exported = Vec::new();
    export_history(monitor.vitals_history(), &mut exported).unwrap();
    assert_eq!(String::from_utf8(exported).unwrap().lines().count(), 31);
}
