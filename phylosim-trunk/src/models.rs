use std::collections::BTreeMap;

use serde::Serialize;

/// Variant codes that mark a record as an SNV. Only these records may carry a bearer column.
pub const SNV_CODES: [&str; 3] = ["0", "1", "2"];

/// Code written for a deletion.
pub const DELETION_COPY: i64 = -1;

///
/// Common view over the trunk variant kinds, used to print a variant back as a record line.
///
pub trait TrunkRecord {
    fn start(&self) -> u32;
    fn end(&self) -> u32;

    /// The fifth column of the record, as it appears in a trunk variant file.
    fn code(&self) -> String;

    ///
    /// Tab separated `chrom hap start end code` line.
    ///
    fn as_record(&self, chrom: &str, hap: usize) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            chrom,
            hap,
            self.start(),
            self.end(),
            self.code()
        )
    }
}

///
/// A truncal point mutation.
///
/// `bearer` lists the copies of the segment carrying the SNV, `0` being the original copy.
///
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename = "SNV")]
pub struct Snv {
    pub start: u32,
    pub end: u32,
    pub mutation: u8,
    pub bearer: Vec<u32>,
}

impl TrunkRecord for Snv {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }

    fn code(&self) -> String {
        self.mutation.to_string()
    }
}

/// A truncal deletion of `[start, end)`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    pub start: u32,
    pub end: u32,
}

impl Deletion {
    pub fn contains(&self, pos: u32) -> bool {
        self.start <= pos && pos < self.end
    }

    ///
    /// Whether `[start, end)` begins or ends inside this deletion.
    ///
    /// A span reaching past the deletion on both sides is not reported.
    ///
    pub fn overlaps_boundary(&self, start: u32, end: u32) -> bool {
        self.contains(start) || (self.start < end && end <= self.end)
    }
}

impl TrunkRecord for Deletion {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }

    fn code(&self) -> String {
        DELETION_COPY.to_string()
    }
}

/// A truncal amplification adding `copies` copies of `[start, end)`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amplification {
    pub start: u32,
    pub end: u32,
    pub copies: u32,
}

impl TrunkRecord for Amplification {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }

    fn code(&self) -> String {
        format!("+{}", self.copies)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CnvKind {
    Del,
    Amp,
}

///
/// A truncal copy number variant, ready to be attached to the root of the simulation.
///
/// For amplifications, `new_copies` holds one independent copy of the segment tree per added
/// copy. `pre_snvs` starts empty and is filled by later stages.
///
#[derive(Serialize, Debug, PartialEq)]
pub struct Cnv<T> {
    pub segment: (u32, u32),
    pub start: u32,
    pub end: u32,
    pub copy: i64,
    pub leaves_count: usize,
    pub pre_snvs: Vec<Snv>,
    pub new_copies: Vec<T>,
    #[serde(rename = "type")]
    pub kind: CnvKind,
}

impl<T> Cnv<T> {
    pub fn deletion(chrom_length: u32, deletion: &Deletion, leaves_count: usize) -> Self {
        Cnv {
            segment: (0, chrom_length),
            start: deletion.start,
            end: deletion.end,
            copy: DELETION_COPY,
            leaves_count,
            pre_snvs: Vec::new(),
            new_copies: Vec::new(),
            kind: CnvKind::Del,
        }
    }

    pub fn amplification(
        chrom_length: u32,
        amplification: &Amplification,
        leaves_count: usize,
        new_copies: Vec<T>,
    ) -> Self {
        Cnv {
            segment: (0, chrom_length),
            start: amplification.start,
            end: amplification.end,
            copy: i64::from(amplification.copies),
            leaves_count,
            pre_snvs: Vec::new(),
            new_copies,
            kind: CnvKind::Amp,
        }
    }
}

///
/// Variants grouped by chromosome, then haplotype index.
///
/// Keys iterate in sorted order; variants of one haplotype keep the order they were pushed in.
///
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct HaplotypeMap<V> {
    inner: BTreeMap<String, BTreeMap<usize, Vec<V>>>,
}

impl<V> Default for HaplotypeMap<V> {
    fn default() -> Self {
        HaplotypeMap {
            inner: BTreeMap::new(),
        }
    }
}

impl<V> HaplotypeMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chrom: &str, hap: usize, value: V) {
        self.inner
            .entry(chrom.to_string())
            .or_default()
            .entry(hap)
            .or_default()
            .push(value);
    }

    /// Variants of one haplotype, empty if there are none.
    pub fn get(&self, chrom: &str, hap: usize) -> &[V] {
        self.inner
            .get(chrom)
            .and_then(|haps| haps.get(&hap))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get_mut(&mut self, chrom: &str, hap: usize) -> Option<&mut Vec<V>> {
        self.inner.get_mut(chrom).and_then(|haps| haps.get_mut(&hap))
    }

    pub fn chromosome(&self, chrom: &str) -> Option<&BTreeMap<usize, Vec<V>>> {
        self.inner.get(chrom)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterate `(chrom, hap, variants)` in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, &[V])> {
        self.inner.iter().flat_map(|(chrom, haps)| {
            haps.iter()
                .map(move |(hap, values)| (chrom.as_str(), *hap, values.as_slice()))
        })
    }

    /// Total number of variants over all chromosomes and haplotypes.
    pub fn len(&self) -> usize {
        self.inner
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

///
/// The outcome of classifying a trunk variant file.
///
#[derive(Serialize, Debug, PartialEq)]
pub struct TrunkVariants<T> {
    pub snvs: HaplotypeMap<Snv>,
    pub cnvs: HaplotypeMap<Cnv<T>>,
}
