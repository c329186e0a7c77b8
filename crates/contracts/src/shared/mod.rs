pub mod format;
pub mod loose_number;
