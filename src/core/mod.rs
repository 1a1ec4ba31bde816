// Core helpers shared by the engine and the pet

pub mod math;
