use serde::{Deserialize, Serialize};

/// Порог первого тира, $
pub const TIER_1_UPPER: f64 = 500_000.0;
/// Порог второго тира (включительно), $
pub const TIER_2_UPPER: f64 = 2_500_000.0;

/// Тир по объёму выручки
///
/// Порядок вариантов совпадает с порядком колонок в форме настройки комиссий.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "BELOW_500K")]
    Below500k,
    #[serde(rename = "BETWEEN_500K_2_5M")]
    Between500k2_5m,
    #[serde(rename = "ABOVE_2_5M")]
    Above2_5m,
}

impl Tier {
    /// Все тиры в порядке возрастания
    pub const ALL: [Tier; 3] = [Tier::Below500k, Tier::Between500k2_5m, Tier::Above2_5m];

    /// Получить код тира
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Below500k => "BELOW_500K",
            Tier::Between500k2_5m => "BETWEEN_500K_2_5M",
            Tier::Above2_5m => "ABOVE_2_5M",
        }
    }

    /// Подпись колонки для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Below500k => "<$500k",
            Tier::Between500k2_5m => "$500k - $2.5M",
            Tier::Above2_5m => ">$2.5M",
        }
    }

    /// Имя поля в JSON удалённого API
    pub fn api_key(&self) -> &'static str {
        match self {
            Tier::Below500k => "lessThan500k",
            Tier::Between500k2_5m => "between500kTo2_5m",
            Tier::Above2_5m => "moreThan2_5m",
        }
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        Tier::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Определить тир по годовой выручке
    ///
    /// Отрицательные и нечисловые значения попадают в первый тир.
    pub fn for_revenue(amount: f64) -> Self {
        if !amount.is_finite() || amount < TIER_1_UPPER {
            Tier::Below500k
        } else if amount <= TIER_2_UPPER {
            Tier::Between500k2_5m
        } else {
            Tier::Above2_5m
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
