// src/views/mod.rs

//! Server-rendered HTML for the admin pages.

pub mod components;
pub mod layout;
pub mod pages;
