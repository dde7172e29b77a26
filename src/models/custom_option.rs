use diesel::prelude::*;

use crate::domain::custom_option::CustomOption as DomainCustomOption;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::custom_options)]
pub struct CustomOption {
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::custom_options)]
pub struct NewCustomOption<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl From<CustomOption> for DomainCustomOption {
    fn from(value: CustomOption) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl<'a> From<&'a DomainCustomOption> for NewCustomOption<'a> {
    fn from(value: &'a DomainCustomOption) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
        }
    }
}
