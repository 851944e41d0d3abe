//! Domain types: instrument rows and screener tabs.

pub mod row;
pub mod tab;

pub use row::{parse_volume, Row};
pub use tab::{Tab, UnknownTab};
