//! Domain logic for the CellML simulation gateway.
//!
//! Holds everything between an inbound simulation request and the external
//! simulator process: request validation, command construction, pipeline
//! execution and the result model. Nothing here knows about HTTP.

pub mod error;
pub mod simulation;
