//! Read-only views computed from [`crate::model::State`]. Nothing here
//! mutates; every helper is a pure function of its inputs so callers can
//! recompute freely.

pub mod finance;
pub mod habits;
pub mod quran;
pub mod todos;
