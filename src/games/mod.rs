//! Game implementations.

pub mod othello;
