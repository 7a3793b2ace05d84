// ABOUTME: Library crate for setupwiz exposing the wizard core, TUI, and CLI for testing and reuse

#![allow(missing_docs)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod storage;
pub mod wizard;
