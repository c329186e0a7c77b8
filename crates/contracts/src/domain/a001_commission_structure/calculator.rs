//! Расчёт остатка платформы (DCarbon remainder)
//!
//! Все функции чистые: результат зависит только от переданного снимка формы.

use super::aggregate::CommissionStructure;
use super::percent::Percent;
use super::scenario::ReferralScenario;
use crate::enums::{StakeholderRole, Tier};
use serde::{Deserialize, Serialize};

/// Сумма долей ролей сценария в тире
pub fn scenario_total(structure: &CommissionStructure, tier: Tier, scenario: &ReferralScenario) -> Percent {
    scenario
        .roles()
        .map(|role| structure.share(role, tier))
        .sum()
}

/// Остаток платформы в десятых процента; может быть отрицательным
pub fn remainder_percent(
    structure: &CommissionStructure,
    tier: Tier,
    scenario: &ReferralScenario,
) -> Percent {
    Percent::HUNDRED - scenario_total(structure, tier, scenario)
}

/// Остаток платформы, округлённый до одного знака: `100 - Σ долей`
///
/// Отрицательное значение означает некорректную конфигурацию.
pub fn remainder(structure: &CommissionStructure, tier: Tier, scenario: &ReferralScenario) -> f64 {
    remainder_percent(structure, tier, scenario).as_f64()
}

/// Строка таблицы предпросмотра остатков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainderRow {
    pub tier: Tier,
    pub scenario: ReferralScenario,
    pub total: f64,
    pub remainder: f64,
}

/// Таблица остатков для всех пар (тир, сценарий), тиры по возрастанию
pub fn remainder_table(
    structure: &CommissionStructure,
    scenarios: &[ReferralScenario],
) -> Vec<RemainderRow> {
    Tier::ALL
        .iter()
        .flat_map(|tier| {
            scenarios.iter().map(move |scenario| {
                let total = scenario_total(structure, *tier, scenario);
                RemainderRow {
                    tier: *tier,
                    scenario: *scenario,
                    total: total.as_f64(),
                    remainder: (Percent::HUNDRED - total).as_f64(),
                }
            })
        })
        .collect()
}

// ============================================================================
// Revenue split
// ============================================================================

/// Сумма, причитающаяся одной роли
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAmount {
    pub role: StakeholderRole,
    pub share: Percent,
    pub amount_cents: i64,
}

/// Распределение выручки по участникам сценария
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSplit {
    pub tier: Tier,
    pub scenario: ReferralScenario,
    pub revenue_cents: i64,
    pub allocations: Vec<RoleAmount>,
    pub remainder_share: Percent,
    pub remainder_cents: i64,
}

/// Перевести сумму в центы; нечисловые и отрицательные значения дают 0
pub fn to_cents(amount: f64) -> i64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    (amount * 100.0).round() as i64
}

/// Сумма в центах, ограниченная диапазоном i64
fn saturate_cents(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Распределить выручку между участниками сценария
///
/// Тир выбирается по размеру выручки. Доли ролей округляются вниз до цента,
/// остаток платформы получает всё, что не распределено, поэтому сумма частей
/// всегда равна выручке. Промежуточные суммы считаются в i128, результат
/// насыщается на границах i64.
pub fn split_revenue(
    structure: &CommissionStructure,
    scenario: &ReferralScenario,
    revenue: f64,
) -> RevenueSplit {
    let tier = Tier::for_revenue(revenue);
    let revenue_cents = to_cents(revenue);

    let mut allocated: i128 = 0;
    let allocations: Vec<RoleAmount> = scenario
        .roles()
        .map(|role| {
            let share = structure.share(role, tier);
            let amount =
                (i128::from(revenue_cents) * i128::from(share.tenths())).div_euclid(1000);
            allocated += amount;
            RoleAmount {
                role,
                share,
                amount_cents: saturate_cents(amount),
            }
        })
        .collect();

    RevenueSplit {
        tier,
        scenario: *scenario,
        revenue_cents,
        remainder_share: remainder_percent(structure, tier, scenario),
        remainder_cents: saturate_cents(i128::from(revenue_cents) - allocated),
        allocations,
    }
}
