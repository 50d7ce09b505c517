use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("type {qualified_name} is declared in more than one package")]
    DuplicateType { qualified_name: String },
    #[error("vararg parameter of {owner}.{member} must have an array type")]
    VarargWithoutArray { owner: String, member: String },
    #[error("vararg parameter of {owner}.{member} must be the last parameter")]
    VarargNotLast { owner: String, member: String },
    #[error("failed to parse symbol tree: {0}")]
    Json(#[from] serde_json::Error),
}
