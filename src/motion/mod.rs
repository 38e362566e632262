pub mod sampler;
pub mod state;
