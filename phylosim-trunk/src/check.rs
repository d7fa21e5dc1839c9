//! Consistency checks between truncal variants.
//!
//! Only deletions are checked: on each haplotype no SNV may sit inside a deletion, no
//! amplification may start or end inside one, and no two deletions may overlap. Amplifications
//! are free to overlap each other, and so are SNVs.

use crate::errors::{Result, TrunkVarError};
use crate::models::{Amplification, Deletion, HaplotypeMap, Snv, TrunkRecord};

///
/// Check the classified trunk variants for conflicts, failing on the first one found.
///
/// Haplotypes are visited in sorted `(chrom, hap)` order and deletions in file order, so the
/// reported pair is reproducible.
///
pub fn check_vars(
    snvs: &HaplotypeMap<Snv>,
    amps: &HaplotypeMap<Amplification>,
    dels: &HaplotypeMap<Deletion>,
) -> Result<()> {
    for (chrom, hap, deletions) in dels.iter() {
        let hap_snvs = snvs.get(chrom, hap);
        let hap_amps = amps.get(chrom, hap);

        for (i, deletion) in deletions.iter().enumerate() {
            if let Some(snv) = hap_snvs.iter().find(|snv| deletion.contains(snv.start)) {
                return Err(conflict(chrom, hap, snv, deletion));
            }

            if let Some(amp) = hap_amps
                .iter()
                .find(|amp| deletion.overlaps_boundary(amp.start, amp.end))
            {
                return Err(conflict(chrom, hap, amp, deletion));
            }

            // earlier pairs were already seen from the other side
            if let Some(later) = deletions[i + 1..]
                .iter()
                .find(|later| deletion.overlaps_boundary(later.start, later.end))
            {
                return Err(conflict(chrom, hap, later, deletion));
            }
        }
    }

    Ok(())
}

fn conflict<R: TrunkRecord>(chrom: &str, hap: usize, other: &R, deletion: &Deletion) -> TrunkVarError {
    TrunkVarError::Conflict {
        first: other.as_record(chrom, hap),
        second: deletion.as_record(chrom, hap),
    }
}
