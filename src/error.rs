use thiserror::Error;

/// Falhas de controle do relógio de simulação
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("canal de controle fechado: {0}")]
    ChannelClosed(String),
    #[error("o laço do relógio terminou sem resposta")]
    NoReply,
    #[error("falha ao aguardar o laço do relógio: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Falhas ao gravar o histórico em CSV
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("erro de CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}
