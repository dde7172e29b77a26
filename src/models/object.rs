use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::object::Object as DomainObject;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::objects)]
pub struct Object {
    pub id: String,
    pub name: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub advantages: String,
    pub disadvantages: String,
    pub photo_path: Option<String>,
    pub comparison_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::objects)]
pub struct NewObject<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub advantages: &'a str,
    pub disadvantages: &'a str,
    pub photo_path: Option<&'a str>,
    pub comparison_id: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::objects)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateObject<'a> {
    pub name: &'a str,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub advantages: &'a str,
    pub disadvantages: &'a str,
    pub photo_path: Option<&'a str>,
    pub comparison_id: &'a str,
}

impl From<Object> for DomainObject {
    fn from(value: Object) -> Self {
        Self {
            id: value.id,
            name: value.name,
            rating: value.rating,
            created_at: value.created_at,
            advantages: value.advantages,
            disadvantages: value.disadvantages,
            photo_path: value.photo_path,
            comparison_id: value.comparison_id,
            associations: Vec::new(),
        }
    }
}

impl<'a> From<&'a DomainObject> for NewObject<'a> {
    fn from(value: &'a DomainObject) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            rating: value.rating,
            created_at: value.created_at,
            advantages: value.advantages.as_str(),
            disadvantages: value.disadvantages.as_str(),
            photo_path: value.photo_path.as_deref(),
            comparison_id: value.comparison_id.as_str(),
        }
    }
}

impl<'a> From<&'a DomainObject> for UpdateObject<'a> {
    fn from(value: &'a DomainObject) -> Self {
        Self {
            name: value.name.as_str(),
            rating: value.rating,
            created_at: value.created_at,
            advantages: value.advantages.as_str(),
            disadvantages: value.disadvantages.as_str(),
            photo_path: value.photo_path.as_deref(),
            comparison_id: value.comparison_id.as_str(),
        }
    }
}
