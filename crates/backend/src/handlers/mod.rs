pub mod a001_commission_structure;
