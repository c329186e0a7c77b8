use super::percent::Percent;
use crate::enums::{PropertyCategory, StakeholderRole, Tier};
use crate::shared::loose_number::de_loose_f64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Terms
// ============================================================================

/// Условия договора, редактируемые в той же форме
///
/// Значения хранятся как пришли из формы, целостность проверяет валидатор.
/// Пропущенное поле равно 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommissionTerms {
    /// Максимальный срок, лет
    #[serde(deserialize_with = "de_loose_f64")]
    pub max_duration: f64,
    /// Срок соглашения, лет
    #[serde(deserialize_with = "de_loose_f64")]
    pub agreement_duration: f64,
    /// Штраф за расторжение, $
    #[serde(deserialize_with = "de_loose_f64")]
    pub cancellation_fee: f64,
}

/// Поле условий договора (для сообщений валидации)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermField {
    MaxDuration,
    AgreementDuration,
    CancellationFee,
}

impl TermField {
    pub const ALL: [TermField; 3] = [
        TermField::MaxDuration,
        TermField::AgreementDuration,
        TermField::CancellationFee,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TermField::MaxDuration => "max duration",
            TermField::AgreementDuration => "agreement duration",
            TermField::CancellationFee => "cancellation fee",
        }
    }
}

impl CommissionTerms {
    pub fn value(&self, field: TermField) -> f64 {
        match field {
            TermField::MaxDuration => self.max_duration,
            TermField::AgreementDuration => self.agreement_duration,
            TermField::CancellationFee => self.cancellation_fee,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Доли одной роли по тирам
pub type TierShares = BTreeMap<Tier, Percent>;

/// Структура комиссий одной категории
///
/// Источник истины хранится в удалённом API, здесь только снимок состояния формы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionStructure {
    pub category: PropertyCategory,

    #[serde(default)]
    pub shares: BTreeMap<StakeholderRole, TierShares>,

    #[serde(default)]
    pub terms: CommissionTerms,
}

impl CommissionStructure {
    /// Пустая структура: все доли 0, условия 0
    pub fn new(category: PropertyCategory) -> Self {
        Self {
            category,
            shares: BTreeMap::new(),
            terms: CommissionTerms::default(),
        }
    }

    /// Доля роли в тире; отсутствующая доля равна 0
    pub fn share(&self, role: StakeholderRole, tier: Tier) -> Percent {
        self.shares
            .get(&role)
            .and_then(|by_tier| by_tier.get(&tier))
            .copied()
            .unwrap_or(Percent::ZERO)
    }

    /// Установить долю как есть (без ограничения диапазона)
    pub fn set_share(&mut self, role: StakeholderRole, tier: Tier, value: Percent) {
        self.shares.entry(role).or_default().insert(tier, value);
    }

    /// Установить долю с ограничением [0, 100], как при вводе в форме
    pub fn set_share_clamped(&mut self, role: StakeholderRole, tier: Tier, value: f64) {
        self.set_share(role, tier, Percent::from_f64(value).clamped());
    }

    /// Builder-вариант `set_share` для тестов и тестовых данных
    pub fn with_share(mut self, role: StakeholderRole, tier: Tier, value: f64) -> Self {
        self.set_share(role, tier, Percent::from_f64(value));
        self
    }

    pub fn with_terms(mut self, terms: CommissionTerms) -> Self {
        self.terms = terms;
        self
    }

    /// Все явно заданные доли: (роль, тир, значение)
    pub fn iter_shares(&self) -> impl Iterator<Item = (StakeholderRole, Tier, Percent)> + '_ {
        self.shares.iter().flat_map(|(role, by_tier)| {
            by_tier
                .iter()
                .map(move |(tier, value)| (*role, *tier, *value))
        })
    }
}
