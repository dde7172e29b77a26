use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comparison::Comparison as DomainComparison;

/// Row of the `comparisons` table. Custom option ids are stored as a JSON array.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::comparisons)]
pub struct Comparison {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub custom_option_ids: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::comparisons)]
pub struct UpdateComparison<'a> {
    pub name: &'a str,
    pub custom_option_ids: String,
}

impl TryFrom<Comparison> for DomainComparison {
    type Error = serde_json::Error;

    fn try_from(value: Comparison) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            custom_option_ids: serde_json::from_str(&value.custom_option_ids)?,
        })
    }
}

impl TryFrom<&DomainComparison> for Comparison {
    type Error = serde_json::Error;

    fn try_from(value: &DomainComparison) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.clone(),
            name: value.name.clone(),
            created_at: value.created_at,
            custom_option_ids: serde_json::to_string(&value.custom_option_ids)?,
        })
    }
}

impl<'a> TryFrom<&'a DomainComparison> for UpdateComparison<'a> {
    type Error = serde_json::Error;

    fn try_from(value: &'a DomainComparison) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name.as_str(),
            custom_option_ids: serde_json::to_string(&value.custom_option_ids)?,
        })
    }
}
