use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;

use monitor_sinais_vitais::analysis::exercise::{average_intensity, total_minutes};
use monitor_sinais_vitais::analysis::history::VitalsHistoryBuffer;
use monitor_sinais_vitais::analysis::risk::MAX_RISK_SCORE;
use monitor_sinais_vitais::model::{ExerciseSession, Intensity, VitalField};
use monitor_sinais_vitais::tasks::{AlarmObserver, CsvLogger};
use monitor_sinais_vitais::{MonitorConfig, SimulationClock};

/// Simulador de Sinais Vitais em Tempo Real
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Duração da simulação em segundos
    #[arg(short, long, default_value_t = 60)]
    duration: u64,

    /// Arquivo para salvar as leituras
    #[arg(short, long, default_value = "vitals_data.csv")]
    log_file: String,

    /// Semente do gerador (execução reproduzível)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Intervalo entre leituras em milissegundos
    #[arg(short, long, default_value_t = 1000)]
    tick_ms: u64,

    /// Intervalo entre verificações de conexão em milissegundos (padrão: 10x o tick)
    #[arg(short, long)]
    connection_ms: Option<u64>,

    /// Batimento fixo fornecido externamente (BPM)
    #[arg(long)]
    heart_rate: Option<u32>,

    /// Inicia com o monitoramento pausado
    #[arg(long)]
    paused: bool,
}

impl Args {
    fn to_config(&self) -> MonitorConfig {
        let mut config = MonitorConfig::default()
            .with_tick_interval(Duration::from_millis(self.tick_ms.max(1)))
            .with_heart_rate_override(self.heart_rate)
            .with_monitoring(!self.paused);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.connection_ms {
            config = config.with_connection_interval(Duration::from_millis(ms.max(1)));
        }
        config
    }
}

/// Histórico de exercícios de demonstração
fn sample_exercises() -> Vec<ExerciseSession> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default();
    vec![
        ExerciseSession::new(day(1), 30, "Running", Intensity::High),
        ExerciseSession::new(day(2), 45, "Cycling", Intensity::Medium),
        ExerciseSession::new(day(3), 60, "Swimming", Intensity::High),
    ]
}

fn log_ranges(history: &VitalsHistoryBuffer) {
    for field in VitalField::ALL {
        match history.range(field) {
            Some(range) => log::info!("{:?}: mín {:.1}, máx {:.1}", field, range.min, range.max),
            None => log::info!("{:?}: sem dados", field),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configurar logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let mut clock = SimulationClock::new(config);
    clock
        .subscribe(Box::new(CsvLogger::create(&args.log_file)?))
        .subscribe(Box::new(AlarmObserver::new()));

    log::info!("Simulador de Sinais Vitais iniciado");
    log::info!("Duração da simulação: {} segundos", args.duration);
    log::info!("Arquivo de log: {}", args.log_file);

    let handle = clock.start();
    if args.paused {
        log::info!("Monitoramento pausado; retomando na metade da simulação");
        tokio::time::sleep(Duration::from_secs(args.duration / 2)).await;
        handle.resume().await?;
        tokio::time::sleep(Duration::from_secs(args.duration - args.duration / 2)).await;
    } else {
        tokio::time::sleep(Duration::from_secs(args.duration)).await;
    }

    let exercises = sample_exercises();
    log::info!(
        "Exercícios: {} min no total, intensidade média {}",
        total_minutes(&exercises),
        average_intensity(&exercises).map_or("None".to_string(), |i| i.to_string())
    );

    let risk = handle.assess_risk(exercises).await?;
    log::info!(
        "Risco: {} ({}/{}, {:.0}%)",
        risk.level,
        risk.score,
        MAX_RISK_SCORE,
        risk.progress() * 100.0
    );
    for factor in &risk.factors {
        log::info!("Fator: {}", factor);
    }
    for recommendation in &risk.recommendations {
        log::info!("Recomendação: {}", recommendation);
    }

    let monitor = handle.shutdown().await?;
    log_ranges(monitor.vitals_history());
    log::info!("Simulação concluída com {} leituras", monitor.ticks());

    Ok(())
}
