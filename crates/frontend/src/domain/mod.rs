pub mod a001_category;
pub mod a002_equipment;
pub mod a003_unit;
pub mod a004_company;
