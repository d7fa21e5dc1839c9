//! # Core models for phylosim
//!
//! The inputs every simulation stage shares: the [`GenomeConfig`](models::GenomeConfig) describing
//! chromosomes and their haplotypes, and the [`PhyloTree`](models::PhyloTree) the tumor evolves
//! along. Trees carry an explicit [`DeepCopy`](models::DeepCopy) contract so that every new copy
//! of an amplified segment can evolve independently.
//!
//! ```rust
//! use phylosim_core::models::{DeepCopy, GenomeConfig, PhyloTree};
//!
//! let mut genome = GenomeConfig::new();
//! genome.add_chromosome("chr1", "01", 1_000_000).unwrap();
//!
//! let tree: PhyloTree = "((A:1,B:1):0.5,C:1.5);".parse().unwrap();
//! let copy = tree.deep_copy();
//! assert_eq!(copy.leaves_count(), 3);
//! ```
pub mod errors;
pub mod models;
pub mod utils;
