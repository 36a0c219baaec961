pub mod check;
pub mod config;
pub mod menu;
pub mod replay;
pub mod utils;
