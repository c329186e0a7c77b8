pub mod property_category;
pub mod stakeholder_role;
pub mod tier;

pub use property_category::PropertyCategory;
pub use stakeholder_role::StakeholderRole;
pub use tier::Tier;
