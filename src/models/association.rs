use diesel::prelude::*;

use crate::domain::association::Association as DomainAssociation;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::object_custom_options)]
pub struct Association {
    pub object_id: String,
    pub custom_option_id: String,
    pub value: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::object_custom_options)]
pub struct NewAssociation<'a> {
    pub object_id: &'a str,
    pub custom_option_id: &'a str,
    pub value: &'a str,
}

impl From<Association> for DomainAssociation {
    fn from(value: Association) -> Self {
        Self {
            object_id: value.object_id,
            custom_option_id: value.custom_option_id,
            value: value.value,
        }
    }
}

impl<'a> From<&'a DomainAssociation> for NewAssociation<'a> {
    fn from(value: &'a DomainAssociation) -> Self {
        Self {
            object_id: value.object_id.as_str(),
            custom_option_id: value.custom_option_id.as_str(),
            value: value.value.as_str(),
        }
    }
}
