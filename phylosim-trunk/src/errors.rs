use thiserror::Error;

/// Error type for everything that can go wrong with a trunk variant file.
///
/// Every variant is fatal for the whole file; the message embeds the offending record.
#[derive(Error, Debug)]
pub enum TrunkVarError {
    #[error("There should be 5 or 6 columns in the trunk variant file.\nCheck the record below:\n{0}")]
    ColumnCount(String),

    #[error("Only the record of SNV can have the bearer (6th) column.\nCheck the record below:\n{0}")]
    BearerNotAllowed(String),

    #[error("The bearer of the SNV below is not correct:\n{0}")]
    InvalidBearer(String),

    #[error("The {field} of the variant below is not an integer:\n{line}")]
    InvalidInteger { field: &'static str, line: String },

    #[error("The chr of the variant below is not in the genome:\n{0}")]
    UnknownChromosome(String),

    #[error("The haplotype of the variant below is out of range:\n{0}")]
    HaplotypeOutOfRange(String),

    #[error("The coordinate of the variant below is out of range:\n{0}")]
    CoordinateOutOfRange(String),

    #[error("The start of the variant should be less than its end:\n{0}")]
    StartNotBeforeEnd(String),

    #[error("The copy number of the CNV below is invalid:\n{0}")]
    InvalidCopyNumber(String),

    #[error("The coordinate of the SNV below is not correct:\n{0}")]
    InvalidSnvSpan(String),

    #[error("The mutation form of the SNV below is not correct:\n{0}")]
    InvalidMutationForm(String),

    #[error("These variants below are in conflict with each other:\n{first}\n{second}")]
    Conflict { first: String, second: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for trunk variant operations.
pub type Result<T> = std::result::Result<T, TrunkVarError>;
