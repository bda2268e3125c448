// Engine modules: assets, input, physics, renderer, tick clock

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
