use contracts::domain::a001_commission_structure::dto::{CommissionPreview, CommissionSubmitResponse};
use contracts::domain::a001_commission_structure::{
    remainder_table, split_revenue, validate_for_category, CommissionStructure,
    CommissionStructurePayload, ReferralScenario, RevenueSplit, ValidationFailure, ValidationReport,
};
use contracts::enums::PropertyCategory;
use thiserror::Error;

use crate::shared::dcarbon_api::{CommissionApi, RemoteApiError};

/// Ошибки сценариев работы со структурой комиссий
#[derive(Debug, Error)]
pub enum CommissionServiceError {
    #[error("Validation failed: {} problem(s)", .0.len())]
    Validation(Vec<ValidationFailure>),

    #[error("Category mismatch: path {path}, body {body}")]
    CategoryMismatch {
        path: PropertyCategory,
        body: PropertyCategory,
    },

    #[error("Scenario {scenario} does not belong to category {category}")]
    ScenarioMismatch {
        scenario: ReferralScenario,
        category: PropertyCategory,
    },

    #[error(transparent)]
    Remote(#[from] RemoteApiError),
}

/// Предпросмотр остатков для формы (на каждое изменение ввода)
pub fn preview(structure: &CommissionStructure) -> CommissionPreview {
    let scenarios = structure.category.scenarios();
    CommissionPreview {
        category: structure.category,
        remainders: remainder_table(structure, &scenarios),
        failures: validate_for_category(structure),
    }
}

/// Проверка структуры перед отправкой
pub fn validate(structure: &CommissionStructure) -> ValidationReport {
    ValidationReport::from(validate_for_category(structure))
}

/// Распределение выручки по участникам сценария
pub fn split(
    structure: &CommissionStructure,
    scenario: &ReferralScenario,
    revenue: f64,
) -> Result<RevenueSplit, CommissionServiceError> {
    if !scenario.fits(structure.category) {
        return Err(CommissionServiceError::ScenarioMismatch {
            scenario: *scenario,
            category: structure.category,
        });
    }
    Ok(split_revenue(structure, scenario, revenue))
}

/// Загрузить структуру категории из удалённого API
pub async fn fetch(
    api: &dyn CommissionApi,
    category: PropertyCategory,
    auth: Option<&str>,
) -> Result<CommissionStructure, CommissionServiceError> {
    let payload = api.fetch(category, auth).await?;
    Ok(payload.to_structure(category))
}

/// Проверить и отправить структуру в удалённый API
///
/// При любом нарушении запрос в API не выполняется.
pub async fn submit(
    api: &dyn CommissionApi,
    category: PropertyCategory,
    structure: &CommissionStructure,
    auth: Option<&str>,
) -> Result<CommissionSubmitResponse, CommissionServiceError> {
    if structure.category != category {
        return Err(CommissionServiceError::CategoryMismatch {
            path: category,
            body: structure.category,
        });
    }

    let failures = validate_for_category(structure);
    if !failures.is_empty() {
        tracing::info!(
            "Commission structure {} rejected: {} validation failure(s)",
            category,
            failures.len()
        );
        return Err(CommissionServiceError::Validation(failures));
    }

    let payload = CommissionStructurePayload::from_structure(structure);
    api.submit(category, &payload, auth).await?;
    tracing::info!("Commission structure {} submitted", category);

    Ok(CommissionSubmitResponse {
        status: "submitted".into(),
        category,
    })
}
