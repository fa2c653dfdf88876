use std::path::PathBuf;

/// Reasons a document cannot be compiled. None of these leave partial output.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("duplicate check id(s): {}", join_ids(.0))]
    DuplicateIds(Vec<i64>),

    #[error(
        "check {check_id}: expected value `{value}` is not a number; \
         use `.` instead of `,` as the decimal separator"
    )]
    NotNumeric { check_id: i64, value: String },

    #[error("`requiredFiles` is empty; at least one file name is needed to run the checks against")]
    NoRequiredFiles,

    #[error("backend `{0}` is not implemented")]
    UnsupportedBackend(String),
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

/// Failures while turning a file into a [`crate::model::TslDocument`].
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Syntax(String),

    #[error("jq filter failed: {0}")]
    Filter(String),
}
