pub mod genome;
pub mod tree;

// re-export for cleaner imports
pub use self::genome::{ChromosomeConfig, ChromosomeEntry, GenomeConfig, GenomeConfigFileType};
pub use self::tree::{DeepCopy, Node, PhyloTree};
