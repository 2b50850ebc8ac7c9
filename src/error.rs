use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClumpyError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty playlist: nothing to reorder")]
    EmptyPlaylist,

    #[error("Mutation range invalid: low {lo} is greater than high {hi}")]
    MutationRange { lo: u32, hi: u32 },

    #[error("Unknown word {0}: not present in the word table")]
    UnknownWord(u32),
}

pub type ClumpyResult<T> = Result<T, ClumpyError>;
