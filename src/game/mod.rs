// Game-side logic: the pet itself, independent of windows and GPUs

pub mod pet;
