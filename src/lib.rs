#![allow(missing_docs)]

pub mod config;
pub(crate) mod handlers;

pub mod error;
pub mod models;
pub mod processor;
pub mod relay;
pub mod router;
pub mod routes;
pub mod telemetry;
