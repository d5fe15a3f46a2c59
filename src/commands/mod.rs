//! CLI commands for fringe

pub mod dispatch;
pub mod make;
pub mod trip;
