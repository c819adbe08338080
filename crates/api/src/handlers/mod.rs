//! Request handlers.
//!
//! Handlers validate input, delegate to `cellsim_core`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod simulation;
