pub mod charset;
pub mod rom;
pub mod save;
