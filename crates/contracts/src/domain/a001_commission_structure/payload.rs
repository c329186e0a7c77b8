//! JSON-формат удалённого API (services.dcarbon.solutions)
//!
//! API принимает и отдаёт числа строками: `{ "lessThan500k": "20", ... }`.
//! При чтении нечисловые строки превращаются в 0.

use super::aggregate::{CommissionStructure, CommissionTerms};
use super::percent::Percent;
use crate::enums::{PropertyCategory, StakeholderRole, Tier};
use crate::shared::format::{format_amount, format_percent, parse_number};
use crate::shared::loose_number::de_loose_string;
use serde::{Deserialize, Serialize};

/// Доли одной роли по тирам в формате API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TierValuesPayload {
    #[serde(rename = "lessThan500k", default, deserialize_with = "de_loose_string")]
    pub less_than_500k: String,
    #[serde(rename = "between500kTo2_5m", default, deserialize_with = "de_loose_string")]
    pub between_500k_to_2_5m: String,
    #[serde(rename = "moreThan2_5m", default, deserialize_with = "de_loose_string")]
    pub more_than_2_5m: String,
}

impl TierValuesPayload {
    pub fn get(&self, tier: Tier) -> &str {
        match tier {
            Tier::Below500k => &self.less_than_500k,
            Tier::Between500k2_5m => &self.between_500k_to_2_5m,
            Tier::Above2_5m => &self.more_than_2_5m,
        }
    }

    fn slot(&mut self, tier: Tier) -> &mut String {
        match tier {
            Tier::Below500k => &mut self.less_than_500k,
            Tier::Between500k2_5m => &mut self.between_500k_to_2_5m,
            Tier::Above2_5m => &mut self.more_than_2_5m,
        }
    }
}

/// Тело запроса/ответа API для структуры комиссий
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionStructurePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<TierValuesPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_epc: Option<TierValuesPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_company: Option<TierValuesPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_agent: Option<TierValuesPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_partner: Option<TierValuesPayload>,

    #[serde(default, deserialize_with = "de_loose_string")]
    pub max_duration: String,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub agreement_duration: String,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub cancellation_fee: String,
}

impl CommissionStructurePayload {
    pub fn role(&self, role: StakeholderRole) -> Option<&TierValuesPayload> {
        match role {
            StakeholderRole::Customer => self.customer.as_ref(),
            StakeholderRole::InstallerEpc => self.installer_epc.as_ref(),
            StakeholderRole::FinanceCompany => self.finance_company.as_ref(),
            StakeholderRole::SalesAgent => self.sales_agent.as_ref(),
            StakeholderRole::MasterPartner => self.master_partner.as_ref(),
        }
    }

    fn role_slot(&mut self, role: StakeholderRole) -> &mut Option<TierValuesPayload> {
        match role {
            StakeholderRole::Customer => &mut self.customer,
            StakeholderRole::InstallerEpc => &mut self.installer_epc,
            StakeholderRole::FinanceCompany => &mut self.finance_company,
            StakeholderRole::SalesAgent => &mut self.sales_agent,
            StakeholderRole::MasterPartner => &mut self.master_partner,
        }
    }

    /// Сформировать тело запроса из структуры
    ///
    /// Выводятся только роли категории; отсутствующие доли пишутся как "0".
    pub fn from_structure(structure: &CommissionStructure) -> Self {
        let mut payload = Self {
            max_duration: format_amount(structure.terms.max_duration),
            agreement_duration: format_amount(structure.terms.agreement_duration),
            cancellation_fee: format_amount(structure.terms.cancellation_fee),
            ..Default::default()
        };

        for role in structure.category.roles() {
            let mut values = TierValuesPayload::default();
            for tier in Tier::ALL {
                *values.slot(tier) = format_percent(structure.share(*role, tier).as_f64());
            }
            *payload.role_slot(*role) = Some(values);
        }

        payload
    }

    /// Разобрать ответ API в структуру указанной категории
    ///
    /// Блоки ролей вне категории игнорируются.
    pub fn to_structure(&self, category: PropertyCategory) -> CommissionStructure {
        let mut structure = CommissionStructure::new(category).with_terms(CommissionTerms {
            max_duration: parse_number(&self.max_duration),
            agreement_duration: parse_number(&self.agreement_duration),
            cancellation_fee: parse_number(&self.cancellation_fee),
        });

        for role in category.roles() {
            if let Some(values) = self.role(*role) {
                for tier in Tier::ALL {
                    let value = Percent::from_f64(parse_number(values.get(tier)));
                    structure.set_share(*role, tier, value);
                }
            }
        }

        structure
    }
}

impl From<&CommissionStructure> for CommissionStructurePayload {
    fn from(structure: &CommissionStructure) -> Self {
        CommissionStructurePayload::from_structure(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use StakeholderRole::*;

    fn commercial() -> CommissionStructure {
        CommissionStructure::new(PropertyCategory::Commercial)
            .with_share(Customer, Tier::Below500k, 20.0)
            .with_share(Customer, Tier::Between500k2_5m, 15.0)
            .with_share(Customer, Tier::Above2_5m, 12.5)
            .with_share(InstallerEpc, Tier::Below500k, 10.0)
            .with_terms(CommissionTerms {
                max_duration: 15.0,
                agreement_duration: 10.0,
                cancellation_fee: 500.0,
            })
    }

    #[test]
    fn test_serialized_shape() {
        let payload = CommissionStructurePayload::from_structure(&commercial());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["customer"],
            json!({"lessThan500k": "20", "between500kTo2_5m": "15", "moreThan2_5m": "12.5"})
        );
        assert_eq!(value["installerEpc"]["moreThan2_5m"], "0");
        assert_eq!(value["financeCompany"]["lessThan500k"], "0");
        assert!(value.get("salesAgent").is_none());
        assert!(value.get("masterPartner").is_none());
        assert_eq!(value["maxDuration"], "15");
        assert_eq!(value["cancellationFee"], "500");
    }

    #[test]
    fn test_round_trip_keeps_shares() {
        let original = commercial();
        let payload = CommissionStructurePayload::from(&original);
        let restored = payload.to_structure(PropertyCategory::Commercial);
        for role in PropertyCategory::Commercial.roles() {
            for tier in Tier::ALL {
                assert_eq!(restored.share(*role, tier), original.share(*role, tier));
            }
        }
        assert_eq!(restored.terms, original.terms);
    }

    #[test]
    fn test_decode_is_lenient() {
        let payload: CommissionStructurePayload = serde_json::from_value(json!({
            "installerEpc": {"lessThan500k": "abc", "between500kTo2_5m": 7.5, "moreThan2_5m": null},
            "financeCompany": {"lessThan500k": " 12.5% "},
            "customer": {"lessThan500k": "99"},
            "maxDuration": 20,
            "cancellationFee": "$1,250.50"
        }))
        .unwrap();

        let s = payload.to_structure(PropertyCategory::Partner);
        assert_eq!(s.share(InstallerEpc, Tier::Below500k), Percent::ZERO);
        assert_eq!(s.share(InstallerEpc, Tier::Between500k2_5m).tenths(), 75);
        assert_eq!(s.share(InstallerEpc, Tier::Above2_5m), Percent::ZERO);
        assert_eq!(s.share(FinanceCompany, Tier::Below500k).tenths(), 125);
        // у партнёрской категории нет роли клиента
        assert_eq!(s.share(Customer, Tier::Below500k), Percent::ZERO);
        assert!(!s.shares.contains_key(&Customer));
        assert_eq!(s.terms.max_duration, 20.0);
        assert_eq!(s.terms.agreement_duration, 0.0);
        assert_eq!(s.terms.cancellation_fee, 1250.5);
    }
}
