pub mod hit;
pub mod machine;
