mod error;

pub mod config_file;
pub mod grid;
pub mod path_parts;
pub mod sampling;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
