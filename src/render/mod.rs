pub mod backend;
pub mod compose;
pub mod cpu;
pub mod plan;
pub mod text;
