// Engine modules: assets, audio, input, renderer, scheduling

pub mod assets;
pub mod audio;
pub mod input;
pub mod renderer;
pub mod scheduler;
