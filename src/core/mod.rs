//! Configuration and request/response models shared by both Lambdas

pub mod config;
pub mod models;
