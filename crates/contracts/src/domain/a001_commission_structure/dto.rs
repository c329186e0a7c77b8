use super::aggregate::CommissionStructure;
use super::calculator::RemainderRow;
use super::scenario::ReferralScenario;
use super::validation::ValidationFailure;
use crate::enums::{PropertyCategory, StakeholderRole};
use serde::{Deserialize, Serialize};

/// Живой предпросмотр формы: остатки + текущие нарушения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPreview {
    pub category: PropertyCategory,
    pub remainders: Vec<RemainderRow>,
    pub failures: Vec<ValidationFailure>,
}

/// Запрос на распределение выручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSplitRequest {
    pub structure: CommissionStructure,
    pub scenario: ReferralScenario,
    /// Годовая выручка, $
    pub revenue: f64,
}

/// Описание категории для построения формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: PropertyCategory,
    pub path: String,
    pub display_name: String,
    pub roles: Vec<StakeholderRole>,
    pub scenarios: Vec<ReferralScenario>,
}

impl From<PropertyCategory> for CategoryInfo {
    fn from(category: PropertyCategory) -> Self {
        Self {
            category,
            path: category.path().to_string(),
            display_name: category.display_name().to_string(),
            roles: category.roles().to_vec(),
            scenarios: category.scenarios(),
        }
    }
}

/// Ответ после отправки структуры в API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSubmitResponse {
    pub status: String, // "submitted"
    pub category: PropertyCategory,
}
