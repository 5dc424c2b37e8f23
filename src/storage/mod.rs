pub mod codec;
pub mod paths;
