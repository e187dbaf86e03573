//! Platform glue
//!
//! Translates host input into simulation commands and turns variable
//! frame times into fixed simulation ticks and spawner firings.

pub mod driver;
pub mod keys;

pub use driver::{FrameDriver, FrameReport};
pub use keys::{Key, KeyMap};
