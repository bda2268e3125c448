// Game modules: character, level, input control and the tick pipeline

pub mod characters;
pub mod config;
pub mod controller;
pub mod level;
pub mod simulation;
