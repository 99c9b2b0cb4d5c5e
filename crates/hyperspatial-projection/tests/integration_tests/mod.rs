//! Integration tests for the projection engine.

pub mod batch_tests;
pub mod configuration_tests;
pub mod distance_tests;
pub mod edge_case_tests;
pub mod grid_tests;
pub mod round_trip_tests;
