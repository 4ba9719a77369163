pub mod catalog_io;
pub mod config_io;
pub mod progress_io;
pub mod state;
