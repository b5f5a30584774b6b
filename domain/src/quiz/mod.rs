//! Quiz round entities

pub mod entities;
