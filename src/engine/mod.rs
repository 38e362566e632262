pub mod background;
pub mod config;
pub mod lifecycle;
pub mod pointer;
