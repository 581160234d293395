//! # Connect Four
//!
//! Connect Four (7 columns × 6 rows) against a computer opponent whose hard
//! setting is a fixed-depth minimax search with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`]: Board with reversible place/unplace, win detection, game state
//! - [`ai`]: Agent trait, evaluator, move ordering, minimax engine, easy and
//!   random opponents
//! - [`console`]: Headless text front end and game loop
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
