// src/util/mod.rs
pub mod date;
pub mod testing;
pub mod text;
