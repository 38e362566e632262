pub mod arclen;
pub mod curve;
pub mod generator;
