use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("invalid column type '{0}'")]
    InvalidColumnType(String),

    #[error("invalid view type '{0}'")]
    InvalidViewType(String),

    #[error("invalid sort '{0}'")]
    InvalidSortBy(String),

    #[error("invalid member role '{0}'")]
    InvalidMemberRole(String),

    #[error("invalid arrow key '{0}'")]
    InvalidArrowKey(String),

    #[error("invalid pagination query: {0}")]
    InvalidPagination(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("view '{0}' not found on this board")]
    ViewNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
