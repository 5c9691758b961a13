pub mod dictionaries;
pub mod format;
