use diesel::prelude::*;

use crate::domain::association::Association as DomainAssociation;
use crate::models::association::{
    Association as DbAssociation, NewAssociation as DbNewAssociation,
};
use crate::repository::{
    AssociationReader, AssociationWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl AssociationReader for DieselRepository {
    fn list_associations_by_object_id(
        &self,
        object_id: &str,
    ) -> RepositoryResult<Vec<DomainAssociation>> {
        use crate::schema::object_custom_options;

        let mut conn = self.conn()?;

        let rows = object_custom_options::table
            .filter(object_custom_options::object_id.eq(object_id))
            .order(object_custom_options::custom_option_id.asc())
            .load::<DbAssociation>(&mut conn)?;

        Ok(rows.into_iter().map(DomainAssociation::from).collect())
    }
}

impl AssociationWriter for DieselRepository {
    fn add_association(&self, association: &DomainAssociation) -> RepositoryResult<()> {
        use crate::schema::object_custom_options;

        let mut conn = self.conn()?;
        let insertable = DbNewAssociation::from(association);

        diesel::insert_into(object_custom_options::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_association(&self, association: &DomainAssociation) -> RepositoryResult<()> {
        use crate::schema::object_custom_options;

        let mut conn = self.conn()?;

        let target = object_custom_options::table
            .filter(object_custom_options::object_id.eq(association.object_id.as_str()))
            .filter(
                object_custom_options::custom_option_id.eq(association.custom_option_id.as_str()),
            );

        let updated = diesel::update(target)
            .set(object_custom_options::value.eq(association.value.as_str()))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
