//! Calculations like metrics, decay schedules, neighborhood fields, ...

pub mod decay;
pub mod metric;
pub mod neighborhood;
