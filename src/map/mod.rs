//! The self-organizing map and its training loop.

pub mod som;
