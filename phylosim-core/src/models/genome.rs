use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{GenomeConfigError, GenomeConfigResult};
use crate::utils::get_chrom_sizes;

///
/// Per-chromosome settings: which parents the haplotypes come from and how long the chromosome is.
///
/// `parental` holds one label per haplotype (`0` maternal, `1` paternal), so `"01"` is a
/// normal diploid chromosome and `"011"` a trisomy with two paternal copies.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeConfig {
    pub parental: String,
    pub length: u32,
}

impl ChromosomeConfig {
    /// Number of haplotypes of this chromosome.
    pub fn haplotype_count(&self) -> usize {
        self.parental.chars().count()
    }
}

/// One chromosome as written in a genome config file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeEntry {
    pub name: String,
    pub parental: String,
    pub length: u32,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
struct GenomeConfigFile {
    chromosomes: Vec<ChromosomeEntry>,
}

#[derive(Debug)]
pub enum GenomeConfigFileType {
    Yaml,
    Toml,
}

impl GenomeConfigFileType {
    ///
    /// Determine the type of the genome config file based on its extension.
    ///
    pub fn from_path(path: &Path) -> GenomeConfigResult<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("yaml") | Some("yml") => Ok(GenomeConfigFileType::Yaml),
            Some("toml") => Ok(GenomeConfigFileType::Toml),
            _ => Err(GenomeConfigError::InvalidFileType),
        }
    }
}

///
/// GenomeConfig struct, the chromosome layout the simulated genomes are built on.
///
/// Chromosomes keep the order in which they were added.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenomeConfig {
    order: Vec<String>,
    chroms: HashMap<String, ChromosomeConfig>,
}

impl GenomeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Append a chromosome to the configuration.
    ///
    /// # Arguments
    /// - name: chromosome name, must not already be present
    /// - parental: one `0`/`1` label per haplotype, must not be empty
    /// - length: chromosome length, must be positive
    ///
    pub fn add_chromosome<N, P>(&mut self, name: N, parental: P, length: u32) -> GenomeConfigResult<()>
    where
        N: Into<String>,
        P: Into<String>,
    {
        let name = name.into();
        let parental = parental.into();

        if self.chroms.contains_key(&name) {
            return Err(GenomeConfigError::DuplicateChromosome(name));
        }
        if parental.is_empty() || !parental.chars().all(|c| c == '0' || c == '1') {
            return Err(GenomeConfigError::InvalidParental {
                chrom: name,
                parental,
            });
        }
        if length == 0 {
            return Err(GenomeConfigError::ZeroLength(name));
        }

        self.order.push(name.clone());
        self.chroms
            .insert(name, ChromosomeConfig { parental, length });
        Ok(())
    }

    ///
    /// Build a configuration from a chrom sizes file.
    ///
    /// Every autosome is diploid (`"01"`). Each occurrence of a name in `sex_chroms` appends one
    /// parental label in turn, so `["X", "Y"]` gives X `"0"` and Y `"1"` while `["X", "X"]`
    /// gives X `"01"`. Chromosomes of the sizes file that are not listed are ignored.
    ///
    pub fn from_chrom_sizes<P, S>(path: P, autosomes: &[S], sex_chroms: &[S]) -> GenomeConfigResult<Self>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let sizes: HashMap<String, u32> = get_chrom_sizes(path)?.into_iter().collect();
        let length_of = |chrom: &str| {
            sizes
                .get(chrom)
                .copied()
                .ok_or_else(|| GenomeConfigError::MissingChromosome(chrom.to_string()))
        };

        let mut config = GenomeConfig::new();
        for chrom in autosomes {
            let chrom = chrom.as_ref();
            config.add_chromosome(chrom, "01", length_of(chrom)?)?;
        }

        let mut sex_parental: Vec<(String, String)> = Vec::new();
        for (i, chrom) in sex_chroms.iter().enumerate() {
            let chrom = chrom.as_ref();
            let label = if i == 0 { '0' } else { '1' };
            match sex_parental.iter_mut().find(|(name, _)| name == chrom) {
                Some((_, parental)) => parental.push(label),
                None => sex_parental.push((chrom.to_string(), label.to_string())),
            }
        }
        for (chrom, parental) in sex_parental {
            let length = length_of(chrom.as_str())?;
            config.add_chromosome(chrom, parental, length)?;
        }

        Ok(config)
    }

    /// Chromosome names in configuration order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, chrom: &str) -> Option<&ChromosomeConfig> {
        self.chroms.get(chrom)
    }

    pub fn contains(&self, chrom: &str) -> bool {
        self.chroms.contains_key(chrom)
    }

    pub fn haplotype_count(&self, chrom: &str) -> Option<usize> {
        self.get(chrom).map(ChromosomeConfig::haplotype_count)
    }

    pub fn length(&self, chrom: &str) -> Option<u32> {
        self.get(chrom).map(|c| c.length)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(name, config)` pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChromosomeConfig)> {
        self.order
            .iter()
            .filter_map(|name| self.chroms.get(name).map(|cfg| (name.as_str(), cfg)))
    }
}

impl TryFrom<Vec<ChromosomeEntry>> for GenomeConfig {
    type Error = GenomeConfigError;

    fn try_from(entries: Vec<ChromosomeEntry>) -> GenomeConfigResult<Self> {
        let mut config = GenomeConfig::new();
        for entry in entries {
            config.add_chromosome(entry.name, entry.parental, entry.length)?;
        }
        Ok(config)
    }
}

impl TryFrom<&Path> for GenomeConfig {
    type Error = GenomeConfigError;

    ///
    /// Load a genome config from a `yaml`/`yml` or `toml` file.
    ///
    fn try_from(path: &Path) -> GenomeConfigResult<Self> {
        let file_type = GenomeConfigFileType::from_path(path)?;
        let content = read_to_string(path)?;
        let file: GenomeConfigFile = match file_type {
            GenomeConfigFileType::Yaml => serde_yaml::from_str(&content)?,
            GenomeConfigFileType::Toml => toml::from_str(&content)?,
        };
        GenomeConfig::try_from(file.chromosomes)
    }
}

impl TryFrom<&str> for GenomeConfig {
    type Error = GenomeConfigError;

    fn try_from(value: &str) -> GenomeConfigResult<Self> {
        GenomeConfig::try_from(Path::new(value))
    }
}
