#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("integer overflow adding {a} and {b}")]
    Overflow { a: i64, b: i64 },
    #[error("recorded result {recorded} does not match computed sum {computed}")]
    Mismatch { recorded: i64, computed: i64 },
    #[error("result {actual} does not match expected value {expected}")]
    Unexpected { expected: i64, actual: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
