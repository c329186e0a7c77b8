//! Проверка структуры комиссий перед отправкой в API
//!
//! Валидатор не бросает ошибок: результат это список проблем, пустой список
//! означает, что структуру можно отправлять. Правила проверяются все сразу,
//! чтобы пользователь увидел каждую проблему.

use super::aggregate::{CommissionStructure, TermField};
use super::calculator::remainder_percent;
use super::percent::Percent;
use super::scenario::ReferralScenario;
use crate::enums::{StakeholderRole, Tier};
use serde::{Deserialize, Serialize};

/// Вид нарушения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// Доля вне диапазона [0, 100]
    OutOfRange,
    /// Сумма долей сценария больше 100%
    ExceedsTotal,
    /// Некорректный срок или штраф
    InvalidTerm,
}

/// Одно нарушение с контекстом для вывода рядом с полем формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ReferralScenario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StakeholderRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<TermField>,
}

impl ValidationFailure {
    fn out_of_range(role: StakeholderRole, tier: Tier, value: Percent) -> Self {
        Self {
            kind: FailureKind::OutOfRange,
            message: format!(
                "percentage out of range: {} in tier {} is {}, expected 0-100%",
                role.display_name(),
                tier.display_name(),
                value
            ),
            tier: Some(tier),
            scenario: None,
            role: Some(role),
            field: None,
        }
    }

    fn exceeds_total(tier: Tier, scenario: ReferralScenario, remainder: Percent) -> Self {
        Self {
            kind: FailureKind::ExceedsTotal,
            message: format!(
                "combined shares exceed 100% in tier {} under scenario {} (remainder {})",
                tier.display_name(),
                scenario,
                remainder
            ),
            tier: Some(tier),
            scenario: Some(scenario),
            role: None,
            field: None,
        }
    }

    fn invalid_term(field: TermField, value: f64) -> Self {
        Self {
            kind: FailureKind::InvalidTerm,
            message: format!("invalid duration/fee: {} is {}", field.display_name(), value),
            tier: None,
            scenario: None,
            role: None,
            field: Some(field),
        }
    }
}

/// Итог проверки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub failures: Vec<ValidationFailure>,
}

impl From<Vec<ValidationFailure>> for ValidationReport {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self {
            is_valid: failures.is_empty(),
            failures,
        }
    }
}

/// Проверить структуру против заданного списка сценариев
pub fn validate(
    structure: &CommissionStructure,
    scenarios: &[ReferralScenario],
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    // 1. Диапазон каждой заданной доли
    for (role, tier, value) in structure.iter_shares() {
        if !value.is_in_range() {
            failures.push(ValidationFailure::out_of_range(role, tier, value));
        }
    }

    // 2. Остаток по каждой паре (тир, сценарий)
    for tier in Tier::ALL {
        for scenario in scenarios {
            let rest = remainder_percent(structure, tier, scenario);
            if rest < Percent::ZERO {
                failures.push(ValidationFailure::exceeds_total(tier, *scenario, rest));
            }
        }
    }

    // 3. Сроки целые неотрицательные, штраф конечный неотрицательный
    for field in TermField::ALL {
        let value = structure.terms.value(field);
        let ok = match field {
            TermField::MaxDuration | TermField::AgreementDuration => {
                value.is_finite() && value >= 0.0 && value.fract() == 0.0
            }
            TermField::CancellationFee => value.is_finite() && value >= 0.0,
        };
        if !ok {
            failures.push(ValidationFailure::invalid_term(field, value));
        }
    }

    failures
}

/// Проверить структуру против каталога сценариев её категории
pub fn validate_for_category(structure: &CommissionStructure) -> Vec<ValidationFailure> {
    validate(structure, &structure.category.scenarios())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_commission_structure::aggregate::CommissionTerms;
    use crate::enums::PropertyCategory;
    use StakeholderRole::*;

    fn terms() -> CommissionTerms {
        CommissionTerms {
            max_duration: 15.0,
            agreement_duration: 10.0,
            cancellation_fee: 500.0,
        }
    }

    fn structure() -> CommissionStructure {
        CommissionStructure::new(PropertyCategory::Commercial).with_terms(terms())
    }

    #[test]
    fn test_valid_structure_has_no_failures() {
        let s = structure()
            .with_share(Customer, Tier::Below500k, 20.0)
            .with_share(InstallerEpc, Tier::Below500k, 15.0)
            .with_share(FinanceCompany, Tier::Below500k, 10.0)
            .with_share(Customer, Tier::Above2_5m, 30.0);
        assert!(validate_for_category(&s).is_empty());
        assert!(validate_for_category(&structure()).is_empty());
    }

    #[test]
    fn test_exactly_hundred_is_valid() {
        let s = structure()
            .with_share(Customer, Tier::Between500k2_5m, 50.0)
            .with_share(InstallerEpc, Tier::Between500k2_5m, 30.0)
            .with_share(FinanceCompany, Tier::Between500k2_5m, 20.0);
        assert!(validate_for_category(&s).is_empty());
    }

    #[test]
    fn test_hundred_point_one_fails_once_per_pair() {
        let s = structure()
            .with_share(Customer, Tier::Below500k, 60.1)
            .with_share(InstallerEpc, Tier::Below500k, 40.0);
        let pair = ReferralScenario::from_name("customer+installer").unwrap();
        let failures = validate(&s, &[pair]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, FailureKind::ExceedsTotal);
        assert_eq!(failures[0].tier, Some(Tier::Below500k));
        assert_eq!(failures[0].scenario, Some(pair));
        assert!(failures[0].message.contains("customer+installer"));
        assert!(failures[0].message.contains("-0.1%"));

        let full = validate_for_category(&s);
        let for_pair = full
            .iter()
            .filter(|f| f.tier == Some(Tier::Below500k) && f.scenario == Some(pair))
            .count();
        assert_eq!(for_pair, 1);
    }

    #[test]
    fn test_out_of_range_is_reported_not_clamped() {
        let s = structure()
            .with_share(Customer, Tier::Below500k, -5.0)
            .with_share(InstallerEpc, Tier::Above2_5m, 150.0);
        let failures = validate_for_category(&s);
        let out_of_range: Vec<_> = failures
            .iter()
            .filter(|f| f.kind == FailureKind::OutOfRange)
            .collect();
        assert_eq!(out_of_range.len(), 2);
        assert_eq!(out_of_range[0].role, Some(Customer));
        assert_eq!(out_of_range[0].tier, Some(Tier::Below500k));
        assert_eq!(out_of_range[1].role, Some(InstallerEpc));
        assert_eq!(out_of_range[1].tier, Some(Tier::Above2_5m));
        assert_eq!(s.share(InstallerEpc, Tier::Above2_5m).tenths(), 1500);
        // 150% у установщика переполняет все сценарии с его участием
        assert!(failures
            .iter()
            .any(|f| f.kind == FailureKind::ExceedsTotal && f.tier == Some(Tier::Above2_5m)));
    }

    #[test]
    fn test_all_rules_are_evaluated() {
        let s = CommissionStructure::new(PropertyCategory::Partner)
            .with_share(InstallerEpc, Tier::Below500k, 101.0)
            .with_terms(CommissionTerms {
                max_duration: 2.5,
                agreement_duration: -1.0,
                cancellation_fee: f64::NAN,
            });
        let failures = validate_for_category(&s);
        let kinds: Vec<FailureKind> = failures.iter().map(|f| f.kind).collect();
        assert_eq!(kinds[0], FailureKind::OutOfRange);
        assert!(kinds.contains(&FailureKind::ExceedsTotal));
        let terms: Vec<_> = failures.iter().filter_map(|f| f.field).collect();
        assert_eq!(
            terms,
            vec![
                TermField::MaxDuration,
                TermField::AgreementDuration,
                TermField::CancellationFee
            ]
        );
        let last = failures.last().unwrap();
        assert!(last.message.starts_with("invalid duration/fee"));
    }

    #[test]
    fn test_fractional_fee_is_allowed() {
        let s = structure().with_terms(CommissionTerms {
            cancellation_fee: 99.99,
            ..terms()
        });
        assert!(validate_for_category(&s).is_empty());
    }

    #[test]
    fn test_report_from_failures() {
        let report = ValidationReport::from(validate_for_category(&structure()));
        assert!(report.is_valid);
        let bad = structure().with_share(Customer, Tier::Below500k, 120.0);
        let report = ValidationReport::from(validate_for_category(&bad));
        assert!(!report.is_valid);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failures"][0]["kind"], "outOfRange");
        assert_eq!(json["failures"][0]["role"], "customer");
        assert!(json["failures"][0].get("scenario").is_none());
    }
}
