use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{GenomeConfigError, GenomeConfigResult};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {}: {}", path.display(), e))
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read a chrom sizes file (`name<whitespace>length` per line) into an ordered list.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Arguments
///
/// - path: path to the chrom sizes file, optionally gzip'd
///
pub fn get_chrom_sizes<T: AsRef<Path>>(path: T) -> GenomeConfigResult<Vec<(String, u32)>> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut chrom_sizes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(GenomeConfigError::ChromSizesLine(line));
        }
        let length = parts[1]
            .parse::<u32>()
            .map_err(|_| GenomeConfigError::ChromSizesLine(line.clone()))?;

        chrom_sizes.push((parts[0].to_string(), length));
    }

    Ok(chrom_sizes)
}
