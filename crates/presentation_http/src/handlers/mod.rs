//! HTTP request handlers

pub mod ask;
pub mod health;
pub mod page;
pub mod system;
