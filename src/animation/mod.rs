pub mod mapping;
pub mod shape;
