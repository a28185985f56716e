// Library for the service binary, the generator binary and tests

pub mod aggregation;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod resolution;
pub mod routes;
pub mod service;
pub mod telemetry_repo;
pub mod validator;
