use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeConfigError {
    #[error(
        "Missing or invalid file extension in genome config file. It must be `yaml`, `yml` or `toml`"
    )]
    InvalidFileType,

    #[error("Chromosome listed more than once in genome config: {0}")]
    DuplicateChromosome(String),

    #[error("Invalid parental string for chromosome {chrom}: {parental:?}")]
    InvalidParental { chrom: String, parental: String },

    #[error("Chromosome {0} has zero length")]
    ZeroLength(String),

    #[error("Chromosome {0} is not present in the chrom sizes file")]
    MissingChromosome(String),

    #[error("Malformed line in chrom sizes file: {0}")]
    ChromSizesLine(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum NewickError {
    #[error("Empty newick input")]
    Empty,

    #[error("Unexpected character {found:?} at byte {pos} of newick input")]
    UnexpectedChar { found: char, pos: usize },

    #[error("Unexpected end of newick input at byte {0}, a tree must end with `;`")]
    UnexpectedEnd(usize),

    #[error("Invalid branch length {value:?} at byte {pos} of newick input")]
    InvalidBranchLength { value: String, pos: usize },

    #[error("Trailing content after `;` at byte {0} of newick input")]
    TrailingContent(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GenomeConfigResult<T> = std::result::Result<T, GenomeConfigError>;
pub type NewickResult<T> = std::result::Result<T, NewickError>;
