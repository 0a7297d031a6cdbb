// src/models/mod.rs

pub mod form;
pub mod post;
