use diesel::prelude::*;

use crate::domain::comparison::Comparison as DomainComparison;
use crate::domain::filter::{ComparisonFilter, ComparisonOrder};
use crate::models::comparison::{Comparison as DbComparison, UpdateComparison as DbUpdateComparison};
use crate::repository::{
    ComparisonReader, ComparisonWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl ComparisonReader for DieselRepository {
    fn list_comparisons(
        &self,
        filter: &ComparisonFilter,
    ) -> RepositoryResult<Vec<DomainComparison>> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;

        let mut items = comparisons::table.into_boxed::<diesel::sqlite::Sqlite>();

        items = match filter.order_by {
            ComparisonOrder::CreatedAt => items.order(comparisons::created_at.asc()),
        };

        let rows = items
            .then_order_by(comparisons::id.asc())
            .offset(filter.pagination.offset)
            .limit(filter.pagination.limit)
            .load::<DbComparison>(&mut conn)?;

        let comparisons = rows
            .into_iter()
            .map(DomainComparison::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comparisons)
    }

    fn get_comparison_by_id(&self, id: &str) -> RepositoryResult<Option<DomainComparison>> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;

        let row = comparisons::table
            .find(id)
            .first::<DbComparison>(&mut conn)
            .optional()?;

        Ok(row.map(DomainComparison::try_from).transpose()?)
    }

    fn get_comparison_by_name(&self, name: &str) -> RepositoryResult<Option<DomainComparison>> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;

        let row = comparisons::table
            .filter(comparisons::name.eq(name))
            .first::<DbComparison>(&mut conn)
            .optional()?;

        Ok(row.map(DomainComparison::try_from).transpose()?)
    }
}

impl ComparisonWriter for DieselRepository {
    fn create_comparison(&self, comparison: &DomainComparison) -> RepositoryResult<()> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;
        let insertable = DbComparison::try_from(comparison)?;

        diesel::insert_into(comparisons::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_comparison(&self, comparison: &DomainComparison) -> RepositoryResult<()> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;
        let changes = DbUpdateComparison::try_from(comparison)?;

        let updated = diesel::update(comparisons::table.find(comparison.id.as_str()))
            .set(&changes)
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_comparison(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::comparisons;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(comparisons::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
