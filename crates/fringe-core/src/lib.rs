//! Fringe Core Library
//!
//! A pausable graph traversal engine (depth-first, breadth-first and
//! comparator-ordered) driven by visitor hooks, plus two clients built on it:
//! a timestamp-based rebuild planner and a road-map route planner.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod make;
pub mod traversal;
pub mod trip;
