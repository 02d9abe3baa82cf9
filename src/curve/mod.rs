pub mod merge;
pub mod path;
pub mod sampler;
