use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("empty domain name")]
    EmptyName,

    #[error("empty label in domain name: {0:?}")]
    EmptyLabel(String),

    #[error("label {label:?} is {len} bytes, at most 63 allowed")]
    LabelTooLong { label: String, len: usize },

    #[error("encoded domain name is {0} bytes, at most 255 allowed")]
    NameTooLong(usize),

    #[error("failed to write query: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },
}
