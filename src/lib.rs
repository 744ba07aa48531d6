pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod i18n;
pub mod insight;
pub mod miniboard;
pub mod nav;
pub mod puzzle;
pub mod tree;
pub mod tui;
pub mod types;
pub mod vdom;
