pub mod index;
pub mod loader;

pub use index::{CorpusIndex, IndexError};
pub use loader::{load_directory, LoadError};
