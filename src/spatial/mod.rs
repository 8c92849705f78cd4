//! Spatial structures: the fixed world grid and its slots

pub mod grid;
