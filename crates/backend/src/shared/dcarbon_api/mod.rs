pub mod http_client;

use async_trait::async_trait;
use contracts::domain::a001_commission_structure::CommissionStructurePayload;
use contracts::enums::PropertyCategory;
use once_cell::sync::OnceCell;
use thiserror::Error;

pub use http_client::HttpCommissionApi;

/// Ошибки обращения к удалённому API DCarbon
#[derive(Debug, Error)]
pub enum RemoteApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Cannot decode remote response: {0}")]
    Decode(String),

    #[error("Remote API client is not configured: {0}")]
    Config(String),
}

/// Удалённое хранилище структур комиссий (единственный источник истины)
#[async_trait]
pub trait CommissionApi: Send + Sync {
    /// Загрузить текущую структуру категории
    async fn fetch(
        &self,
        category: PropertyCategory,
        auth: Option<&str>,
    ) -> Result<CommissionStructurePayload, RemoteApiError>;

    /// Сохранить структуру категории
    async fn submit(
        &self,
        category: PropertyCategory,
        payload: &CommissionStructurePayload,
        auth: Option<&str>,
    ) -> Result<(), RemoteApiError>;
}

static CLIENT: OnceCell<Box<dyn CommissionApi>> = OnceCell::new();

/// Установить клиент API (один раз при старте)
pub fn initialize(client: Box<dyn CommissionApi>) -> anyhow::Result<()> {
    CLIENT
        .set(client)
        .map_err(|_| anyhow::anyhow!("DCarbon API client already initialized"))
}

/// Получить клиент API
pub fn client() -> Result<&'static dyn CommissionApi, RemoteApiError> {
    CLIENT
        .get()
        .map(|c| c.as_ref())
        .ok_or_else(|| RemoteApiError::Config("client not initialized".into()))
}
