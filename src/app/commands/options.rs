//! Listing of enumerated form values.

use serde::Serialize;

use crate::domain::{AppError, OptionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    pub kind: &'static str,
    pub values: Vec<String>,
}

/// List values for `kind`, or for every kind when `None`.
pub fn execute(kind: Option<&str>) -> Result<Vec<OptionList>, AppError> {
    let kinds = match kind {
        Some(name) => vec![
            OptionKind::from_name(name)
                .ok_or_else(|| AppError::UnknownOptionKind(name.to_string()))?,
        ],
        None => OptionKind::ALL.to_vec(),
    };

    Ok(kinds.into_iter().map(|k| OptionList { kind: k.name(), values: k.labels() }).collect())
}
