// src/ui/mod.rs
pub mod catalog;
pub mod comparison;
pub mod dialog;
