use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::custom_option::CustomOption as DomainCustomOption;
use crate::domain::filter::CustomOptionFilter;
use crate::models::custom_option::{
    CustomOption as DbCustomOption, NewCustomOption as DbNewCustomOption,
};
use crate::repository::{
    CustomOptionReader, CustomOptionWriter, DieselRepository, LIKE_ESCAPE, RepositoryError,
    RepositoryResult, contains_pattern,
};

impl CustomOptionReader for DieselRepository {
    fn list_custom_options(
        &self,
        filter: &CustomOptionFilter,
    ) -> RepositoryResult<Vec<DomainCustomOption>> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;

        let mut items = custom_options::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(name) = filter.name.as_ref() {
            items = items.filter(
                unicode_lower(custom_options::name)
                    .like(contains_pattern(name))
                    .escape(LIKE_ESCAPE),
            );
        }

        let rows = items
            .order(custom_options::name.asc())
            .offset(filter.pagination.offset)
            .limit(filter.pagination.limit)
            .load::<DbCustomOption>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCustomOption::from).collect())
    }

    fn get_custom_option_by_id(&self, id: &str) -> RepositoryResult<Option<DomainCustomOption>> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;

        let row = custom_options::table
            .find(id)
            .first::<DbCustomOption>(&mut conn)
            .optional()?;

        Ok(row.map(DomainCustomOption::from))
    }

    fn get_custom_option_by_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Option<DomainCustomOption>> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;

        let row = custom_options::table
            .filter(custom_options::name.eq(name))
            .first::<DbCustomOption>(&mut conn)
            .optional()?;

        Ok(row.map(DomainCustomOption::from))
    }
}

impl CustomOptionWriter for DieselRepository {
    fn create_custom_option(&self, custom_option: &DomainCustomOption) -> RepositoryResult<()> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;
        let insertable = DbNewCustomOption::from(custom_option);

        diesel::insert_into(custom_options::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_custom_option(&self, custom_option: &DomainCustomOption) -> RepositoryResult<()> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;

        let updated = diesel::update(custom_options::table.find(custom_option.id.as_str()))
            .set(custom_options::name.eq(custom_option.name.as_str()))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_custom_option(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::custom_options;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(custom_options::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
