pub mod activity;
pub mod config;
pub mod goal;
pub mod init;
pub mod plan;
pub mod reset;
pub mod rewards;
