use crate::enums::{PropertyCategory, StakeholderRole};
use serde::{Deserialize, Serialize};

/// Реферальный сценарий: набор ролей, одновременно участвующих в сделке
///
/// Хранится битовой маской, поэтому порядок ролей не влияет на равенство.
/// Имя сценария строится из коротких меток ролей в порядке enum:
/// `customer-only`, `customer+installer`, `customer+installer+finance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferralScenario {
    mask: u8,
}

impl ReferralScenario {
    /// Создать сценарий из набора ролей. Пустой набор не является сценарием.
    pub fn new(roles: &[StakeholderRole]) -> Option<Self> {
        let mask = roles.iter().fold(0u8, |acc, r| acc | r.bit());
        if mask == 0 {
            None
        } else {
            Some(Self { mask })
        }
    }

    pub fn only(role: StakeholderRole) -> Self {
        Self { mask: role.bit() }
    }

    pub fn contains(&self, role: StakeholderRole) -> bool {
        self.mask & role.bit() != 0
    }

    /// Роли сценария в порядке enum
    pub fn roles(&self) -> impl Iterator<Item = StakeholderRole> + '_ {
        StakeholderRole::ALL
            .into_iter()
            .filter(move |r| self.contains(*r))
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn name(&self) -> String {
        let labels: Vec<&str> = self.roles().map(|r| r.short_label()).collect();
        match labels.as_slice() {
            [single] => format!("{}-only", single),
            _ => labels.join("+"),
        }
    }

    /// Парсинг из имени сценария
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(label) = name.strip_suffix("-only") {
            return StakeholderRole::from_short_label(label).map(Self::only);
        }
        let roles = name
            .split('+')
            .map(StakeholderRole::from_short_label)
            .collect::<Option<Vec<_>>>()?;
        if roles.len() < 2 {
            return None;
        }
        // повтор роли ("customer+customer") не является именем сценария
        Self::new(&roles).filter(|scenario| scenario.len() == roles.len())
    }

    /// Все сценарии категории: каждое непустое подмножество её ролей,
    /// сначала по числу ролей, затем по порядку ролей
    pub fn catalog(category: PropertyCategory) -> Vec<ReferralScenario> {
        let roles = category.roles();
        let mut scenarios: Vec<ReferralScenario> = (1u32..(1 << roles.len()))
            .filter_map(|subset| {
                let picked: Vec<StakeholderRole> = roles
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset & (1 << i) != 0)
                    .map(|(_, r)| *r)
                    .collect();
                ReferralScenario::new(&picked)
            })
            .collect();
        scenarios.sort_by_key(|s| (s.len(), s.roles().collect::<Vec<_>>()));
        scenarios
    }

    /// Все ли роли сценария относятся к категории
    pub fn fits(&self, category: PropertyCategory) -> bool {
        self.roles().all(|r| category.has_role(r))
    }
}

impl std::fmt::Display for ReferralScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<ReferralScenario> for String {
    fn from(value: ReferralScenario) -> Self {
        value.name()
    }
}

impl TryFrom<String> for ReferralScenario {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ReferralScenario::from_name(&value)
            .ok_or_else(|| format!("Unknown referral scenario: {}", value))
    }
}

impl PropertyCategory {
    /// Каталог реферальных сценариев категории
    pub fn scenarios(&self) -> Vec<ReferralScenario> {
        ReferralScenario::catalog(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StakeholderRole::*;

    #[test]
    fn test_names() {
        assert_eq!(ReferralScenario::only(Customer).name(), "customer-only");
        let pair = ReferralScenario::new(&[InstallerEpc, Customer]).unwrap();
        assert_eq!(pair.name(), "customer+installer");
        let all = ReferralScenario::new(&[Customer, InstallerEpc, FinanceCompany]).unwrap();
        assert_eq!(all.name(), "customer+installer+finance");
        assert_eq!(ReferralScenario::only(MasterPartner).name(), "master-partner-only");
    }

    #[test]
    fn test_from_name() {
        let parsed = ReferralScenario::from_name("installer+finance").unwrap();
        assert!(parsed.contains(InstallerEpc));
        assert!(parsed.contains(FinanceCompany));
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            ReferralScenario::from_name("sales-agent-only"),
            Some(ReferralScenario::only(SalesAgent))
        );
        assert_eq!(ReferralScenario::from_name("customer"), None);
        assert_eq!(ReferralScenario::from_name("customer+plumber"), None);
        assert_eq!(ReferralScenario::from_name(""), None);
    }

    #[test]
    fn test_from_name_rejects_repeated_roles() {
        assert_eq!(ReferralScenario::from_name("customer+customer"), None);
        assert_eq!(ReferralScenario::from_name("customer+installer+customer"), None);
        assert!(ReferralScenario::from_name("customer+installer").is_some());
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert_eq!(ReferralScenario::new(&[]), None);
    }

    #[test]
    fn test_commercial_catalog() {
        let names: Vec<String> = PropertyCategory::Commercial
            .scenarios()
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "customer-only",
                "installer-only",
                "finance-only",
                "customer+installer",
                "customer+finance",
                "installer+finance",
                "customer+installer+finance",
            ]
        );
    }

    #[test]
    fn test_catalog_fits_category() {
        for category in PropertyCategory::ALL {
            let catalog = category.scenarios();
            assert_eq!(catalog.len(), (1 << category.roles().len()) - 1);
            assert!(catalog.iter().all(|s| s.fits(category)));
        }
        let with_agent = ReferralScenario::only(SalesAgent);
        assert!(!with_agent.fits(PropertyCategory::Commercial));
    }

    #[test]
    fn test_serde_by_name() {
        let s = ReferralScenario::new(&[Customer, InstallerEpc]).unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"customer+installer\"");
        let back: ReferralScenario = serde_json::from_str("\"customer+installer\"").unwrap();
        assert_eq!(back, s);
        assert!(serde_json::from_str::<ReferralScenario>("\"nobody\"").is_err());
    }
}
