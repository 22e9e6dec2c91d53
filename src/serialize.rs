use anyhow::Result;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::store::Stored;

/// Transport-safe form of a stored record: the store identifier exposed as a
/// plain string `id`, the creation stamp rendered RFC 3339, and the entity
/// fields flattened alongside.
#[derive(Serialize, Debug, Clone)]
pub struct Public<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
    pub created_at: String,
}

pub fn to_public<T: Serialize>(stored: Stored<T>) -> Result<Public<T>> {
    let created_at =
        OffsetDateTime::from_unix_timestamp_nanos(stored.created_at as i128)?.format(&Rfc3339)?;

    Ok(Public {
        id: stored.id,
        data: stored.data,
        created_at,
    })
}

pub fn to_public_all<T: Serialize>(stored: Vec<Stored<T>>) -> Result<Vec<Public<T>>> {
    stored.into_iter().map(to_public).collect()
}
