use thiserror::Error;

/// result type of the readers
pub type InputResult<T> = Result<T, InputError>;

/** errors raised while reading problem sets and answer files */
#[derive(Error, Debug)]
pub enum InputError {
    /// the header of the problem set is missing
    #[error("unable to read the number of test cases")]
    MissingCaseCount,

    /// the input ends (or is not a number) in the middle of a case
    #[error("case #{case}: expected {what}")]
    Truncated { case: usize, what: &'static str },

    /// a case declares 0 nodes
    #[error("case #{case}: a maze needs at least one node")]
    EmptyMaze { case: usize },

    /// a successor (1-indexed) does not designate a node
    #[error("case #{case}: node {node} has successor {target} outside [1, {n}]")]
    SuccessorOutOfRange { case: usize, node: usize, target: usize, n: usize },

    /// an answer line is not of the form `Case #k: ...`
    #[error("line {line}: malformed answer {content:?}")]
    MalformedAnswer { line: usize, content: String },

    /// tokens remain after the last case
    #[error("unexpected data after the last case: {0:?}")]
    TrailingData(String),

    /// the input could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
