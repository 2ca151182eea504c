pub mod action;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod executor;
pub mod export;
pub mod mode;
pub mod storage;
pub mod tui;
pub mod utils;
