// src/models/mod.rs

pub mod attempt;
pub mod challenge;
pub mod request;
pub mod subject;
