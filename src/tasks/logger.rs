use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::history::VitalsHistoryBuffer;
use crate::analysis::trend::VitalTrends;
use crate::error::ExportError;
use crate::kernel::monitor::VitalsUpdate;
use crate::kernel::observer::VitalsObserver;
use crate::model::{ConnectionState, VitalSample};

const HEADER: [&str; 10] = [
    "timestamp",
    "heart_rate",
    "respiratory_rate",
    "temperature",
    "systolic",
    "diastolic",
    "hr_trend",
    "rr_trend",
    "temp_trend",
    "bp_trend",
];

fn record(sample: &VitalSample, trends: Option<&VitalTrends>) -> [String; 10] {
    let trend = |t: Option<String>| t.unwrap_or_default();
    [
        sample.timestamp.to_string(),
        sample.heart_rate.to_string(),
        sample.respiratory_rate.to_string(),
        format!("{:.1}", sample.temperature),
        sample.blood_pressure.systolic.to_string(),
        sample.blood_pressure.diastolic.to_string(),
        trend(trends.map(|t| t.heart_rate.to_string())),
        trend(trends.map(|t| t.respiratory_rate.to_string())),
        trend(trends.map(|t| t.temperature.to_string())),
        trend(trends.map(|t| t.blood_pressure.to_string())),
    ]
}

/// Grava o conteúdo atual do histórico em CSV (colunas de tendência vazias)
pub fn export_history<W: Write>(
    history: &VitalsHistoryBuffer,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for sample in history.iter() {
        csv.write_record(record(sample, None))?;
    }
    csv.flush()?;
    Ok(())
}

/// Observador que registra cada leitura em um arquivo CSV
pub struct CsvLogger<W: Write> {
    writer: csv::Writer<W>,
    /// Linhas gravadas com sucesso
    pub rows: u64,
}

impl CsvLogger<File> {
    /// Cria (ou sobrescreve) o arquivo e grava o cabeçalho
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        log::info!("Registrando leituras em {}", path.display());
        Self::new(file)
    }
}

impl<W: Write> CsvLogger<W> {
    pub fn new(writer: W) -> Result<Self, ExportError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    fn write(&mut self, update: &VitalsUpdate) -> Result<(), ExportError> {
        self.writer
            .write_record(record(&update.sample, Some(&update.trends)))?;
        self.writer.flush()?;
        Ok(())
    }

    /// Devolve o destino, descarregando o que estiver em buffer
    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl<W: Write + Send> VitalsObserver for CsvLogger<W> {
    fn on_sample(&mut self, update: &VitalsUpdate) {
        match self.write(update) {
            Ok(()) => {
                self.rows += 1;
                log::debug!(
                    "Log registrado: FC={} às {}",
                    update.sample.heart_rate,
                    update.sample.timestamp
                );
            }
            Err(e) => log::error!("Erro ao escrever no arquivo de log: {}", e),
        }
    }

    fn on_connection_change(&mut self, state: &ConnectionState) {
        if !state.connected {
            log::debug!("Sensores desconectados; leituras simuladas continuam sendo registradas");
        }
    }
}
