pub mod compression;
pub mod download;
pub mod progress;

pub use download::download_file;
