//! Общие типы и чистая логика структур комиссий DCarbon
//!
//! Крейт не выполняет I/O: бэкенд и UI передают снимок формы и получают
//! остатки, нарушения и тела запросов для удалённого API.

pub mod domain;
pub mod enums;
pub mod shared;
