use super::StakeholderRole;
use serde::{Deserialize, Serialize};

/// Категория структуры комиссий (отдельная форма настройки в админке)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyCategory {
    Commercial,
    Residential,
    AccountLevel,
    Partner,
    SalesAgent,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 5] = [
        PropertyCategory::Commercial,
        PropertyCategory::Residential,
        PropertyCategory::AccountLevel,
        PropertyCategory::Partner,
        PropertyCategory::SalesAgent,
    ];

    /// Сегмент пути в удалённом API и в роутах бэкенда
    pub fn path(&self) -> &'static str {
        match self {
            PropertyCategory::Commercial => "commercial",
            PropertyCategory::Residential => "residential",
            PropertyCategory::AccountLevel => "account-level",
            PropertyCategory::Partner => "partner",
            PropertyCategory::SalesAgent => "sales-agent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyCategory::Commercial => "Commercial",
            PropertyCategory::Residential => "Residential",
            PropertyCategory::AccountLevel => "Account Level",
            PropertyCategory::Partner => "Partner",
            PropertyCategory::SalesAgent => "Sales Agent",
        }
    }

    /// Роли, участвующие в распределении для категории (в порядке enum)
    pub fn roles(&self) -> &'static [StakeholderRole] {
        use StakeholderRole::*;
        match self {
            PropertyCategory::Commercial | PropertyCategory::Residential => {
                &[Customer, InstallerEpc, FinanceCompany]
            }
            PropertyCategory::AccountLevel => &[InstallerEpc, FinanceCompany, MasterPartner],
            PropertyCategory::Partner => &[InstallerEpc, FinanceCompany],
            PropertyCategory::SalesAgent => &[Customer, SalesAgent],
        }
    }

    pub fn has_role(&self, role: StakeholderRole) -> bool {
        self.roles().contains(&role)
    }

    /// Парсинг из сегмента пути
    pub fn from_path(path: &str) -> Option<Self> {
        PropertyCategory::ALL.into_iter().find(|c| c.path() == path)
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            PropertyCategory::from_path("account-level"),
            Some(PropertyCategory::AccountLevel)
        );
        assert_eq!(PropertyCategory::from_path("accountLevel"), None);
        for category in PropertyCategory::ALL {
            assert_eq!(PropertyCategory::from_path(category.path()), Some(category));
        }
    }

    #[test]
    fn test_roles_are_sorted_and_non_empty() {
        for category in PropertyCategory::ALL {
            let roles = category.roles();
            assert!(!roles.is_empty());
            assert!(roles.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(PropertyCategory::Commercial.has_role(StakeholderRole::FinanceCompany));
        assert!(!PropertyCategory::Partner.has_role(StakeholderRole::Customer));
    }
}
