use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::filter::{ObjectFilter, ObjectOrder};
use crate::domain::object::Object as DomainObject;
use crate::models::object::{
    NewObject as DbNewObject, Object as DbObject, UpdateObject as DbUpdateObject,
};
use crate::repository::{
    DieselRepository, LIKE_ESCAPE, ObjectReader, ObjectWriter, RepositoryError, RepositoryResult,
    contains_pattern,
};

impl ObjectReader for DieselRepository {
    fn list_objects(&self, filter: &ObjectFilter) -> RepositoryResult<Vec<DomainObject>> {
        use crate::schema::objects;

        let mut conn = self.conn()?;

        let mut items = objects::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(name) = filter.name.as_ref() {
            items = items.filter(
                unicode_lower(objects::name)
                    .like(contains_pattern(name))
                    .escape(LIKE_ESCAPE),
            );
        }

        if let Some(comparison_id) = filter.comparison_id.as_ref() {
            items = items.filter(objects::comparison_id.eq(comparison_id));
        }

        items = match filter.order_by {
            ObjectOrder::CreatedAt => items.order(objects::created_at.asc()),
            ObjectOrder::Name => items.order(objects::name.asc()),
            ObjectOrder::Rating => items.order(objects::rating.asc()),
        };

        let rows = items
            .then_order_by(objects::id.asc())
            .offset(filter.pagination.offset)
            .limit(filter.pagination.limit)
            .load::<DbObject>(&mut conn)?;

        Ok(rows.into_iter().map(DomainObject::from).collect())
    }

    fn get_object_by_id(&self, id: &str) -> RepositoryResult<Option<DomainObject>> {
        use crate::schema::objects;

        let mut conn = self.conn()?;

        let row = objects::table
            .find(id)
            .first::<DbObject>(&mut conn)
            .optional()?;

        Ok(row.map(DomainObject::from))
    }
}

impl ObjectWriter for DieselRepository {
    fn create_object(&self, object: &DomainObject) -> RepositoryResult<()> {
        use crate::schema::objects;

        let mut conn = self.conn()?;
        let insertable = DbNewObject::from(object);

        diesel::insert_into(objects::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_object(&self, object: &DomainObject) -> RepositoryResult<()> {
        use crate::schema::objects;

        let mut conn = self.conn()?;
        let changes = DbUpdateObject::from(object);

        let updated = diesel::update(objects::table.find(object.id.as_str()))
            .set(&changes)
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_object(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::objects;

        let mut conn = self.conn()?;

        // Association rows are removed by the ON DELETE CASCADE foreign key.
        let deleted = diesel::delete(objects::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
