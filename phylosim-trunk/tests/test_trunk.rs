//! Classification of trunk variant files read from disk.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use phylosim_core::models::{DeepCopy, GenomeConfig, PhyloTree};
use phylosim_trunk::{CnvKind, Snv, TrunkVarError, classify_vars};

#[fixture]
fn path_to_trunk_vars() -> PathBuf {
    PathBuf::from("../tests/data/trunk/trunk_vars.txt")
}

#[fixture]
fn genome() -> GenomeConfig {
    GenomeConfig::try_from("../tests/data/genome/genome.yaml").unwrap()
}

#[fixture]
fn tree() -> PhyloTree {
    PhyloTree::from_path("../tests/data/tree/tree.nwk").unwrap()
}

#[rstest]
fn test_classify_trunk_vars_file(
    path_to_trunk_vars: PathBuf,
    genome: GenomeConfig,
    tree: PhyloTree,
) -> anyhow::Result<()> {
    let vars = classify_vars(&path_to_trunk_vars, &genome, tree.leaves_count(), &tree)?;

    assert_eq!(
        vars.snvs.get("chr1", 0),
        &[
            Snv {
                start: 5,
                end: 6,
                mutation: 1,
                bearer: vec![0],
            },
            Snv {
                start: 10,
                end: 11,
                mutation: 0,
                bearer: vec![1, 2],
            },
        ]
    );
    assert_eq!(vars.snvs.get("chr2", 2).len(), 1);
    assert_eq!(vars.snvs.len(), 3);

    let amps = vars.cnvs.get("chr1", 0);
    assert_eq!(amps.len(), 2);
    assert!(amps.iter().all(|cnv| cnv.kind == CnvKind::Amp));
    assert_eq!(amps[0].new_copies.len(), 2);
    assert_eq!(amps[1].new_copies.len(), 1);
    assert_eq!(amps[0].leaves_count, 4);

    let dels = vars.cnvs.get("chr1", 1);
    assert_eq!(
        dels.iter().map(|cnv| (cnv.start, cnv.end, cnv.kind)).collect::<Vec<_>>(),
        vec![(300, 400, CnvKind::Del), (400, 500, CnvKind::Del)]
    );
    assert_eq!(vars.cnvs.get("chr2", 0)[0].segment, (0, 500));
    assert_eq!(vars.cnvs.len(), 5);

    Ok(())
}

#[rstest]
fn test_classify_gzipped_file(
    path_to_trunk_vars: PathBuf,
    genome: GenomeConfig,
    tree: PhyloTree,
) -> anyhow::Result<()> {
    let tempdir = tempfile::tempdir()?;
    let gz_path = tempdir.path().join("trunk_vars.txt.gz");

    let mut encoder = GzEncoder::new(File::create(&gz_path)?, Compression::default());
    encoder.write_all(&std::fs::read(&path_to_trunk_vars)?)?;
    encoder.finish()?;

    let plain = classify_vars(&path_to_trunk_vars, &genome, 4, &tree)?;
    let gzipped = classify_vars(&gz_path, &genome, 4, &tree)?;
    assert_eq!(plain, gzipped);

    Ok(())
}

#[rstest]
fn test_amplification_copies_are_independent(
    path_to_trunk_vars: PathBuf,
    genome: GenomeConfig,
    tree: PhyloTree,
) -> anyhow::Result<()> {
    let mut vars = classify_vars(&path_to_trunk_vars, &genome, 4, &tree)?;
    let reference = tree.deep_copy();

    let cnvs = vars
        .cnvs
        .get_mut("chr1", 0)
        .ok_or_else(|| anyhow::anyhow!("no CNVs on chr1 haplotype 0"))?;
    cnvs[0].new_copies[0].root.children.truncate(1);

    assert_eq!(cnvs[0].new_copies[0].leaves_count(), 2);
    assert_eq!(cnvs[0].new_copies[1], reference);
    assert_eq!(cnvs[1].new_copies[0], reference);
    assert_eq!(tree, reference);

    Ok(())
}

#[rstest]
fn test_conflicting_file_is_rejected(genome: GenomeConfig, tree: PhyloTree) {
    let path = PathBuf::from("../tests/data/trunk/trunk_vars_conflict.txt");
    let err = classify_vars(&path, &genome, 4, &tree).unwrap_err();

    assert_eq!(
        err.to_string(),
        "These variants below are in conflict with each other:\nchr1\t0\t50\t60\t+2\nchr1\t0\t0\t100\t-1"
    );
}

#[rstest]
fn test_bearer_on_amplification_is_rejected(genome: GenomeConfig, tree: PhyloTree) {
    let path = PathBuf::from("../tests/data/trunk/trunk_vars_bad_bearer.txt");
    let result = classify_vars(&path, &genome, 4, &tree);

    assert!(
        matches!(result, Err(TrunkVarError::BearerNotAllowed(line)) if line == "chr1\t0\t100\t200\t+2\t1")
    );
}

#[rstest]
fn test_missing_file_is_an_io_error(genome: GenomeConfig, tree: PhyloTree) {
    let result = classify_vars("../tests/data/trunk/missing.txt", &genome, 4, &tree);
    assert!(matches!(result, Err(TrunkVarError::Io(_))));
}

#[rstest]
fn test_genome_from_chrom_sizes_accepts_sex_chromosomes(tree: PhyloTree) -> anyhow::Result<()> {
    let genome = GenomeConfig::from_chrom_sizes(
        "../tests/data/genome/genome.chrom.sizes",
        &["chr1", "chr2"],
        &["chrX", "chrY"],
    )?;

    let tempdir = tempfile::tempdir()?;
    let path = tempdir.path().join("sex_chroms.txt");
    std::fs::write(&path, "chrX\t0\t10\t11\t0\nchrY\t0\t10\t20\t-1\n")?;
    let vars = classify_vars(&path, &genome, 4, &tree)?;
    assert_eq!(vars.snvs.get("chrX", 0).len(), 1);
    assert_eq!(vars.cnvs.get("chrY", 0).len(), 1);

    std::fs::write(&path, "chrX\t1\t10\t11\t0\n")?;
    let result = classify_vars(&path, &genome, 4, &tree);
    assert!(matches!(result, Err(TrunkVarError::HaplotypeOutOfRange(_))));

    Ok(())
}
