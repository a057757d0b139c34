//! Command implementations for towngraph

pub mod dispatch;
pub mod list;
pub mod load;
pub mod path;
