//! Pure wagering logic: no HTTP, no database.

pub mod money;
pub mod odds;
pub mod selections;
