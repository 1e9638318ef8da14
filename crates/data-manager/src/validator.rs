//! Payload shape validation
//!
//! Checks run before any transformation: the default row table must exist,
//! field metadata must exist, and each required role must be bound to at
//! least one column. Failures log a diagnostic and halt the pipeline
//! before the transform stage; they never panic.

use creative_scatter_shared::{roles, DataPayload, ScatterError, ScatterResult};

/// Validate a raw host payload.
///
/// The boolean contract of the host protocol is `validate(..).is_ok()`;
/// the error variant carries which check failed for banner reporting.
pub fn validate(payload: &DataPayload) -> ScatterResult<()> {
    if payload.rows().is_none() {
        log::error!("payload has no default data table");
        return Err(ScatterError::MissingTable);
    }

    let Some(fields) = payload.fields.as_ref() else {
        log::error!("payload has no field metadata");
        return Err(ScatterError::MissingFields);
    };

    for role in roles::REQUIRED {
        let bound = fields.get(role).map(|cols| !cols.is_empty()).unwrap_or(false);
        if !bound {
            log::error!("required field role {role} is not bound to any column");
            return Err(ScatterError::MissingRole {
                role: role.to_string(),
            });
        }
    }

    Ok(())
}
