#![warn(missing_docs)]
//! An interactive sketch board: hover cells to paint them, one shade darker per pass.

pub mod grid;
pub mod gui;
