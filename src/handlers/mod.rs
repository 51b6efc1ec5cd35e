// src/handlers/mod.rs

pub mod submission;
