pub mod version;
pub mod wire;
