//! # Truncal variant classification
//!
//! Truncal variants are present in the common ancestor of every simulated tumor cell, so they
//! are applied before any variant is dropped along the phylogenetic tree. This crate reads them
//! from a user supplied file, validates every record against the [`GenomeConfig`], sorts them
//! into SNVs and CNVs per chromosome and haplotype, and rejects placements that contradict each
//! other (an SNV or amplification inside a deletion, overlapping deletions).
//!
//! Any problem with the file is a [`TrunkVarError`] and nothing is returned for the valid lines.
//!
//! ```rust
//! use phylosim_core::models::{GenomeConfig, PhyloTree};
//! use phylosim_trunk::classify_reader;
//!
//! let mut genome = GenomeConfig::new();
//! genome.add_chromosome("chr1", "01", 1000).unwrap();
//! let tree: PhyloTree = "(A:1,B:1);".parse().unwrap();
//!
//! let input = "chr1\t0\t5\t6\t1\nchr1\t1\t100\t200\t+2\n";
//! let vars = classify_reader(input.as_bytes(), &genome, tree.leaves_count(), &tree).unwrap();
//!
//! assert_eq!(vars.snvs.get("chr1", 0).len(), 1);
//! assert_eq!(vars.cnvs.get("chr1", 1)[0].new_copies.len(), 2);
//! ```
//!
//! [`GenomeConfig`]: phylosim_core::models::GenomeConfig
pub mod check;
pub mod classify;
pub mod errors;
pub mod models;

// re-exports
pub use self::check::check_vars;
pub use self::classify::{classify_reader, classify_vars, parse_record};
pub use self::errors::{Result, TrunkVarError};
pub use self::models::{
    Amplification, Cnv, CnvKind, Deletion, HaplotypeMap, Snv, TrunkRecord, TrunkVariants,
};
