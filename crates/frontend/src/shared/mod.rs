pub mod collator;
pub mod icons;
pub mod list_utils;
