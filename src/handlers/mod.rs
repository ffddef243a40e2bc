// src/handlers/mod.rs

pub mod analytics;
pub mod grading;
pub mod health;
