pub mod aggregate;
pub mod calculator;
pub mod dto;
pub mod payload;
pub mod percent;
pub mod scenario;
pub mod validation;

pub use aggregate::{CommissionStructure, CommissionTerms, TermField, TierShares};
pub use calculator::{remainder, remainder_table, split_revenue, RemainderRow, RevenueSplit, RoleAmount};
pub use payload::{CommissionStructurePayload, TierValuesPayload};
pub use percent::Percent;
pub use scenario::ReferralScenario;
pub use validation::{validate, validate_for_category, FailureKind, ValidationFailure, ValidationReport};
