pub mod writer;

pub use writer::to_toml;
