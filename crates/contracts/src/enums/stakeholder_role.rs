use serde::{Deserialize, Serialize};

/// Участник сделки, получающий долю комиссии
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StakeholderRole {
    /// Клиент / владелец объекта
    Customer,
    /// Установщик (EPC)
    InstallerEpc,
    FinanceCompany,
    SalesAgent,
    MasterPartner,
}

impl StakeholderRole {
    pub const ALL: [StakeholderRole; 5] = [
        StakeholderRole::Customer,
        StakeholderRole::InstallerEpc,
        StakeholderRole::FinanceCompany,
        StakeholderRole::SalesAgent,
        StakeholderRole::MasterPartner,
    ];

    /// Код роли (совпадает с именем поля в JSON)
    pub fn code(&self) -> &'static str {
        match self {
            StakeholderRole::Customer => "customer",
            StakeholderRole::InstallerEpc => "installerEpc",
            StakeholderRole::FinanceCompany => "financeCompany",
            StakeholderRole::SalesAgent => "salesAgent",
            StakeholderRole::MasterPartner => "masterPartner",
        }
    }

    /// Короткая метка для имени сценария
    pub fn short_label(&self) -> &'static str {
        match self {
            StakeholderRole::Customer => "customer",
            StakeholderRole::InstallerEpc => "installer",
            StakeholderRole::FinanceCompany => "finance",
            StakeholderRole::SalesAgent => "sales-agent",
            StakeholderRole::MasterPartner => "master-partner",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            StakeholderRole::Customer => "Customer",
            StakeholderRole::InstallerEpc => "Installer / EPC",
            StakeholderRole::FinanceCompany => "Finance Company",
            StakeholderRole::SalesAgent => "Sales Agent",
            StakeholderRole::MasterPartner => "Master Partner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        StakeholderRole::ALL.into_iter().find(|r| r.code() == code)
    }

    pub fn from_short_label(label: &str) -> Option<Self> {
        StakeholderRole::ALL
            .into_iter()
            .find(|r| r.short_label() == label)
    }

    /// Бит роли для `RoleSet`
    pub(crate) fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for StakeholderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_back() {
        for role in StakeholderRole::ALL {
            assert_eq!(StakeholderRole::from_code(role.code()), Some(role));
            assert_eq!(StakeholderRole::from_short_label(role.short_label()), Some(role));
        }
        assert_eq!(StakeholderRole::from_code("installer"), None);
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u8;
        for role in StakeholderRole::ALL {
            assert_eq!(seen & role.bit(), 0);
            seen |= role.bit();
        }
        assert_eq!(seen, 0b1_1111);
    }

    #[test]
    fn test_serde_matches_code() {
        let json = serde_json::to_string(&StakeholderRole::InstallerEpc).unwrap();
        assert_eq!(json, "\"installerEpc\"");
    }
}
