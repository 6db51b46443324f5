pub mod config;
pub mod ports;
pub mod replay;
pub mod run;
