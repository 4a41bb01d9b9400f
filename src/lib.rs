//! Bookshelf — a personal library manager.
//!
//! An interactive, menu-driven shelf of books held in memory for the length
//! of a session and written back to a JSON file on exit.

pub mod book;
pub mod config;
pub mod display;
pub mod error;
pub mod library;
pub mod logger;
pub mod shell;
pub mod storage;
