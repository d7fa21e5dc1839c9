//! Parsing and classification of trunk variant files.
//!
//! A trunk variant file holds one variant per line, `#` lines being comments:
//!
//! ```text
//! <chrom> <hap> <start> <end> <code> [bearer]
//! ```
//!
//! `start`/`end` are 0 based and the region is `[start, end)` like in bed. `code` is `0`, `1`
//! or `2` for an SNV (its mutation form), `-1` for a deletion and `+N` for an amplification
//! adding `N` copies. The optional `bearer` column is only allowed for SNVs and lists the copies
//! of the segment carrying it (`0` is the original copy, the default).

use std::io::BufRead;
use std::path::Path;

use log::{Level, debug, info, log_enabled};

use phylosim_core::models::{DeepCopy, GenomeConfig};
use phylosim_core::utils::get_dynamic_reader;

use crate::check::check_vars;
use crate::errors::{Result, TrunkVarError};
use crate::models::{
    Amplification, Cnv, DELETION_COPY, Deletion, HaplotypeMap, SNV_CODES, Snv, TrunkVariants,
};

/// What a validated record turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVariant {
    Snv { mutation: u8, bearer: Vec<u32> },
    Deletion,
    Amplification { copies: u32 },
}

/// One validated line of a trunk variant file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub chrom: String,
    pub chrom_length: u32,
    pub hap: usize,
    pub start: u32,
    pub end: u32,
    pub variant: ParsedVariant,
}

fn is_snv_code(code: &str) -> bool {
    SNV_CODES.contains(&code)
}

fn parse_int(value: &str, field: &'static str, line: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| TrunkVarError::InvalidInteger {
        field,
        line: line.to_string(),
    })
}

fn parse_bearer(value: &str, line: &str) -> Result<Vec<u32>> {
    value
        .split(',')
        .map(|copy| copy.parse::<u32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| TrunkVarError::InvalidBearer(line.to_string()))
}

///
/// Validate a single (non comment) line of a trunk variant file against the genome.
///
/// Checks run in a fixed order: column count, bearer usage, integer fields, chromosome,
/// haplotype, coordinates, `start < end`, and finally the variant code.
///
pub fn parse_record(line: &str, genome: &GenomeConfig) -> Result<ParsedRecord> {
    let record = line.trim_end();
    let cols: Vec<&str> = line.split_whitespace().collect();

    let (chrom, hap, start, end, code, bearer) = match cols.as_slice() {
        [chrom, hap, start, end, code] => (*chrom, *hap, *start, *end, *code, None),
        [chrom, hap, start, end, code, bearer] => {
            if !is_snv_code(code) {
                return Err(TrunkVarError::BearerNotAllowed(record.to_string()));
            }
            (*chrom, *hap, *start, *end, *code, Some(*bearer))
        }
        _ => return Err(TrunkVarError::ColumnCount(record.to_string())),
    };

    let hap = parse_int(hap, "haplotype", record)?;
    let start = parse_int(start, "start", record)?;
    let end = parse_int(end, "end", record)?;

    let chrom_cfg = genome
        .get(chrom)
        .ok_or_else(|| TrunkVarError::UnknownChromosome(record.to_string()))?;
    if !(0..chrom_cfg.haplotype_count() as i64).contains(&hap) {
        return Err(TrunkVarError::HaplotypeOutOfRange(record.to_string()));
    }
    let coords = 0..i64::from(chrom_cfg.length);
    if !(coords.contains(&start) && coords.contains(&end)) {
        return Err(TrunkVarError::CoordinateOutOfRange(record.to_string()));
    }
    if start >= end {
        return Err(TrunkVarError::StartNotBeforeEnd(record.to_string()));
    }
    // all three are bounded by the chromosome config now
    let (hap, start, end) = (hap as usize, start as u32, end as u32);

    let variant = if code.starts_with(['+', '-']) {
        match code.parse::<i64>() {
            Ok(DELETION_COPY) => ParsedVariant::Deletion,
            Ok(copy) if copy > 0 => {
                let copies = u32::try_from(copy)
                    .map_err(|_| TrunkVarError::InvalidCopyNumber(record.to_string()))?;
                ParsedVariant::Amplification { copies }
            }
            _ => return Err(TrunkVarError::InvalidCopyNumber(record.to_string())),
        }
    } else {
        if end - start != 1 {
            return Err(TrunkVarError::InvalidSnvSpan(record.to_string()));
        }
        let mutation = match code {
            "0" => 0,
            "1" => 1,
            "2" => 2,
            _ => return Err(TrunkVarError::InvalidMutationForm(record.to_string())),
        };
        let bearer = match bearer {
            Some(value) => parse_bearer(value, record)?,
            None => vec![0],
        };
        ParsedVariant::Snv { mutation, bearer }
    };

    Ok(ParsedRecord {
        chrom: chrom.to_string(),
        chrom_length: chrom_cfg.length,
        hap,
        start,
        end,
        variant,
    })
}

///
/// Classify the trunk variants of a file into SNVs and CNVs and check them for conflicts.
///
/// # Arguments
/// - path: trunk variant file, gzip'd if it ends with `.gz`
/// - genome: chromosomes and haplotypes the variants must fit in
/// - leaves_count: number of tip nodes of the simulated tree
/// - tree: segment tree handed out, deep copied, to every new copy made by an amplification
///
pub fn classify_vars<P, T>(
    path: P,
    genome: &GenomeConfig,
    leaves_count: usize,
    tree: &T,
) -> Result<TrunkVariants<T>>
where
    P: AsRef<Path>,
    T: DeepCopy,
{
    let reader = get_dynamic_reader(path.as_ref())?;
    classify_reader(reader, genome, leaves_count, tree)
}

///
/// Same as [`classify_vars`], reading the records from any buffered reader.
///
pub fn classify_reader<R, T>(
    reader: R,
    genome: &GenomeConfig,
    leaves_count: usize,
    tree: &T,
) -> Result<TrunkVariants<T>>
where
    R: BufRead,
    T: DeepCopy,
{
    let mut snvs: HaplotypeMap<Snv> = HaplotypeMap::new();
    let mut amps: HaplotypeMap<Amplification> = HaplotypeMap::new();
    let mut dels: HaplotypeMap<Deletion> = HaplotypeMap::new();
    let mut cnvs: HaplotypeMap<Cnv<T>> = HaplotypeMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }

        let ParsedRecord {
            chrom,
            chrom_length,
            hap,
            start,
            end,
            variant,
        } = parse_record(&line, genome)?;

        match variant {
            ParsedVariant::Snv { mutation, bearer } => {
                snvs.push(
                    &chrom,
                    hap,
                    Snv {
                        start,
                        end,
                        mutation,
                        bearer,
                    },
                );
            }
            ParsedVariant::Deletion => {
                let deletion = Deletion { start, end };
                cnvs.push(&chrom, hap, Cnv::deletion(chrom_length, &deletion, leaves_count));
                dels.push(&chrom, hap, deletion);
            }
            ParsedVariant::Amplification { copies } => {
                let amplification = Amplification { start, end, copies };
                let new_copies = (0..copies).map(|_| tree.deep_copy()).collect();
                cnvs.push(
                    &chrom,
                    hap,
                    Cnv::amplification(chrom_length, &amplification, leaves_count, new_copies),
                );
                amps.push(&chrom, hap, amplification);
            }
        }
    }

    check_vars(&snvs, &amps, &dels)?;

    if log_enabled!(Level::Debug) {
        debug!("trunk SNVs: {:?}", snvs);
        debug!("trunk AMPs: {:?}", amps);
        debug!("trunk DELs: {:?}", dels);
        for (chrom, hap, chrom_cnvs) in cnvs.iter() {
            for cnv in chrom_cnvs {
                debug!(
                    "trunk CNV: {}\t{}\t{}\t{}\t{}\t{:?}",
                    chrom, hap, cnv.start, cnv.end, cnv.copy, cnv.kind
                );
            }
        }
    }
    info!(
        "classified {} trunk SNVs, {} amplifications and {} deletions",
        snvs.len(),
        amps.len(),
        dels.len()
    );

    Ok(TrunkVariants { snvs, cnvs })
}
