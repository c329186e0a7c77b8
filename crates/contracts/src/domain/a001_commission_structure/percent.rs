use crate::shared::loose_number::de_loose_f64;
use serde::{Deserialize, Deserializer, Serialize};

/// Процент с точностью до одного знака после запятой
///
/// Хранится в десятых долях процента, поэтому суммы долей точные:
/// `100.1%` это `1001`, а `20% + 10%` всегда ровно `300`.
/// В JSON сериализуется как обычное число (`12.5`). При чтении принимаются
/// также строки формы (`"20"`, `" 12.5% "`): нечисловое значение и `null` дают 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "f64")]
pub struct Percent(i64);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const HUNDRED: Percent = Percent(1000);

    /// Создать из десятых долей процента
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// Создать из числа с округлением до десятых
    ///
    /// NaN и бесконечность превращаются в 0.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        // `as` насыщается на границах i64
        Self((value * 10.0).round() as i64)
    }

    pub const fn tenths(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub fn is_in_range(&self) -> bool {
        (Self::ZERO..=Self::HUNDRED).contains(self)
    }

    /// Ограничить диапазоном [0, 100] (для живого редактирования формы)
    pub fn clamped(&self) -> Self {
        Self(self.0.clamp(Self::ZERO.0, Self::HUNDRED.0))
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Percent::from_f64(value)
    }
}

impl From<Percent> for f64 {
    fn from(value: Percent) -> Self {
        value.as_f64()
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_loose_f64(deserializer).map(Percent::from_f64)
    }
}

impl std::ops::Add for Percent {
    type Output = Percent;

    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Percent {
    type Output = Percent;

    fn sub(self, rhs: Percent) -> Percent {
        Percent(self.0.saturating_sub(rhs.0))
    }
}

impl std::iter::Sum for Percent {
    fn sum<I: Iterator<Item = Percent>>(iter: I) -> Self {
        iter.fold(Percent::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", crate::shared::format::format_percent(self.as_f64()))
    }
}
