use chrono::Utc;
use serde::Deserialize;

use crate::domain::comparison::Comparison;
use crate::domain::filter::ComparisonFilter;
use crate::forms::comparisons::ComparisonForm;
use crate::ids::IdGenerator;
use crate::repository::{ComparisonReader, ComparisonWriter};
use crate::services::{ServiceError, ServiceResult};

/// Raw query parameters accepted when listing comparisons.
#[derive(Debug, Default, Deserialize)]
pub struct ComparisonQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<String>,
}

/// Lists comparisons after validating pagination and ordering.
pub fn list_comparisons<R>(repo: &R, query: ComparisonQuery) -> ServiceResult<Vec<Comparison>>
where
    R: ComparisonReader + ?Sized,
{
    let filter = ComparisonFilter::new(query.limit, query.offset, query.order_by.as_deref())?;

    repo.list_comparisons(&filter)
        .map_err(ServiceError::context("failed to get comparisons"))
}

/// Fetches a single comparison.
pub fn get_comparison<R>(repo: &R, id: &str) -> ServiceResult<Comparison>
where
    R: ComparisonReader + ?Sized,
{
    repo.get_comparison_by_id(id)
        .map_err(ServiceError::context("failed to get comparison"))?
        .ok_or(ServiceError::NotFound {
            context: "failed to get comparison",
        })
}

/// Creates a comparison with a generated id and the current timestamp.
pub fn create_comparison<R, G>(repo: &R, ids: &G, form: ComparisonForm) -> ServiceResult<Comparison>
where
    R: ComparisonReader + ComparisonWriter + ?Sized,
    G: IdGenerator + ?Sized,
{
    let new_comparison = form
        .into_new_comparison()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    // Early fail only; the unique index decides under concurrent creates.
    let taken = repo
        .get_comparison_by_name(&new_comparison.name)
        .map_err(ServiceError::context("failed to create comparison"))?;
    if taken.is_some() {
        return Err(ServiceError::AlreadyExists {
            context: "failed to create comparison",
        });
    }

    let comparison = Comparison {
        id: ids.generate_id(),
        name: new_comparison.name,
        created_at: Utc::now().naive_utc(),
        custom_option_ids: new_comparison.custom_option_ids,
    };

    repo.create_comparison(&comparison)
        .map_err(ServiceError::context("failed to create comparison"))?;

    log::debug!("created comparison {}", comparison.id);

    Ok(comparison)
}

/// Updates the name and custom options of a comparison. The stored id and
/// creation time always win over the caller's payload.
pub fn update_comparison<R>(repo: &R, id: &str, form: ComparisonForm) -> ServiceResult<Comparison>
where
    R: ComparisonReader + ComparisonWriter + ?Sized,
{
    let update = form
        .into_update_comparison()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let existing = repo
        .get_comparison_by_id(id)
        .map_err(ServiceError::context("failed to get existing comparison"))?
        .ok_or(ServiceError::NotFound {
            context: "failed to get existing comparison",
        })?;

    let holder = repo
        .get_comparison_by_name(&update.name)
        .map_err(ServiceError::context("failed to update comparison"))?;
    if holder.is_some_and(|other| other.id != existing.id) {
        return Err(ServiceError::AlreadyExists {
            context: "failed to update comparison",
        });
    }

    let comparison = Comparison {
        id: existing.id,
        name: update.name,
        created_at: existing.created_at,
        custom_option_ids: update.custom_option_ids,
    };

    repo.update_comparison(&comparison)
        .map_err(ServiceError::context("failed to update comparison"))?;

    Ok(comparison)
}

/// Deletes a comparison; a missing record is reported as `NotFound`.
pub fn delete_comparison<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ComparisonWriter + ?Sized,
{
    repo.delete_comparison(id)
        .map_err(ServiceError::context("failed to delete comparison"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::filter::{ComparisonOrder, DEFAULT_LIMIT};
    use crate::repository::mock::{MockComparisonReader, MockComparisonWriter, MockIdGenerator};
    use crate::repository::{RepositoryError, RepositoryResult};

    const OPTION_ID: &str = "5f0c7d3e-8a4b-4c1d-9e2f-3a4b5c6d7e8f";

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_comparison(id: &str, name: &str) -> Comparison {
        Comparison {
            id: id.to_string(),
            name: name.to_string(),
            created_at: fixed_datetime(),
            custom_option_ids: Vec::new(),
        }
    }

    struct MockComparisonRepo {
        reader: MockComparisonReader,
        writer: MockComparisonWriter,
    }

    impl MockComparisonRepo {
        fn new() -> Self {
            Self {
                reader: MockComparisonReader::new(),
                writer: MockComparisonWriter::new(),
            }
        }
    }

    impl ComparisonReader for MockComparisonRepo {
        fn list_comparisons(
            &self,
            filter: &ComparisonFilter,
        ) -> RepositoryResult<Vec<Comparison>> {
            self.reader.list_comparisons(filter)
        }

        fn get_comparison_by_id(&self, id: &str) -> RepositoryResult<Option<Comparison>> {
            self.reader.get_comparison_by_id(id)
        }

        fn get_comparison_by_name(&self, name: &str) -> RepositoryResult<Option<Comparison>> {
            self.reader.get_comparison_by_name(name)
        }
    }

    impl ComparisonWriter for MockComparisonRepo {
        fn create_comparison(&self, comparison: &Comparison) -> RepositoryResult<()> {
            self.writer.create_comparison(comparison)
        }

        fn update_comparison(&self, comparison: &Comparison) -> RepositoryResult<()> {
            self.writer.update_comparison(comparison)
        }

        fn delete_comparison(&self, id: &str) -> RepositoryResult<()> {
            self.writer.delete_comparison(id)
        }
    }

    fn form(name: &str) -> ComparisonForm {
        ComparisonForm {
            name: name.to_string(),
            custom_option_ids: vec![OPTION_ID.to_string()],
        }
    }

    #[test]
    fn list_comparisons_applies_default_filter() {
        let mut repo = MockComparisonReader::new();

        repo.expect_list_comparisons()
            .times(1)
            .withf(|filter| {
                assert_eq!(filter.pagination.limit, DEFAULT_LIMIT);
                assert_eq!(filter.pagination.offset, 0);
                assert_eq!(filter.order_by, ComparisonOrder::CreatedAt);
                true
            })
            .returning(|_| Ok(vec![sample_comparison("c-1", "Cars")]));

        let comparisons =
            list_comparisons(&repo, ComparisonQuery::default()).expect("expected success");

        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].name, "Cars");
    }

    #[test]
    fn list_comparisons_rejects_invalid_filter_without_storage_call() {
        let repo = MockComparisonReader::new();

        let negative = ComparisonQuery {
            offset: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            list_comparisons(&repo, negative),
            Err(ServiceError::Validation(_))
        ));

        let unsupported = ComparisonQuery {
            order_by: Some("rating".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            list_comparisons(&repo, unsupported),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn get_comparison_reports_missing_record() {
        let mut repo = MockComparisonReader::new();

        repo.expect_get_comparison_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_comparison(&repo, "missing");

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[test]
    fn create_comparison_assigns_id_and_timestamp() {
        let mut repo = MockComparisonRepo::new();
        let mut ids = MockIdGenerator::new();

        ids.expect_generate_id()
            .times(1)
            .returning(|| "generated-id".to_string());
        repo.reader
            .expect_get_comparison_by_name()
            .times(1)
            .withf(|name| name == "Cars")
            .returning(|_| Ok(None));
        repo.writer
            .expect_create_comparison()
            .times(1)
            .withf(|comparison| {
                assert_eq!(comparison.id, "generated-id");
                assert_eq!(comparison.name, "Cars");
                assert_eq!(comparison.custom_option_ids, vec![OPTION_ID.to_string()]);
                true
            })
            .returning(|_| Ok(()));

        let before = Utc::now().naive_utc();
        let created = create_comparison(&repo, &ids, form("Cars")).expect("expected success");
        let after = Utc::now().naive_utc();

        assert_eq!(created.id, "generated-id");
        assert!(created.created_at >= before && created.created_at <= after);
    }

    #[test]
    fn create_comparison_twice_reports_already_exists() {
        let mut repo = MockComparisonRepo::new();
        let mut ids = MockIdGenerator::new();

        ids.expect_generate_id()
            .times(1)
            .returning(|| "generated-id".to_string());

        let mut seq = mockall::Sequence::new();
        repo.reader
            .expect_get_comparison_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.reader
            .expect_get_comparison_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|name| Ok(Some(sample_comparison("generated-id", name))));
        repo.writer
            .expect_create_comparison()
            .times(1)
            .returning(|_| Ok(()));

        assert!(create_comparison(&repo, &ids, form("Cars")).is_ok());

        let second = create_comparison(&repo, &ids, form("Cars"));

        assert!(matches!(second, Err(ServiceError::AlreadyExists { .. })));
    }

    #[test]
    fn create_comparison_surfaces_storage_duplicate() {
        let mut repo = MockComparisonRepo::new();
        let mut ids = MockIdGenerator::new();

        ids.expect_generate_id().returning(|| "id".to_string());
        repo.reader
            .expect_get_comparison_by_name()
            .returning(|_| Ok(None));
        repo.writer
            .expect_create_comparison()
            .times(1)
            .returning(|_| Err(RepositoryError::AlreadyExists));

        let result = create_comparison(&repo, &ids, form("Cars"));

        assert!(matches!(result, Err(ServiceError::AlreadyExists { .. })));
    }

    #[test]
    fn create_comparison_validates_form_before_storage() {
        let repo = MockComparisonRepo::new();
        let ids = MockIdGenerator::new();

        let result = create_comparison(&repo, &ids, form(""));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_comparison_preserves_identity_and_creation_time() {
        let mut repo = MockComparisonRepo::new();

        repo.reader
            .expect_get_comparison_by_id()
            .times(1)
            .withf(|id| id == "c-1")
            .returning(|id| Ok(Some(sample_comparison(id, "Cars"))));
        repo.reader
            .expect_get_comparison_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repo.writer
            .expect_update_comparison()
            .times(1)
            .withf(|comparison| {
                assert_eq!(comparison.id, "c-1");
                assert_eq!(comparison.created_at, fixed_datetime());
                assert_eq!(comparison.name, "Trucks");
                true
            })
            .returning(|_| Ok(()));

        let updated = update_comparison(&repo, "c-1", form("Trucks")).expect("expected success");

        assert_eq!(updated.id, "c-1");
        assert_eq!(updated.created_at, fixed_datetime());
    }

    #[test]
    fn update_comparison_allows_keeping_own_name() {
        let mut repo = MockComparisonRepo::new();

        repo.reader
            .expect_get_comparison_by_id()
            .returning(|id| Ok(Some(sample_comparison(id, "Cars"))));
        repo.reader
            .expect_get_comparison_by_name()
            .returning(|name| Ok(Some(sample_comparison("c-1", name))));
        repo.writer
            .expect_update_comparison()
            .times(1)
            .returning(|_| Ok(()));

        assert!(update_comparison(&repo, "c-1", form("Cars")).is_ok());
    }

    #[test]
    fn update_comparison_rejects_name_of_another_record() {
        let mut repo = MockComparisonRepo::new();

        repo.reader
            .expect_get_comparison_by_id()
            .returning(|id| Ok(Some(sample_comparison(id, "Cars"))));
        repo.reader
            .expect_get_comparison_by_name()
            .returning(|name| Ok(Some(sample_comparison("c-2", name))));
        repo.writer.expect_update_comparison().times(0);

        let result = update_comparison(&repo, "c-1", form("Trucks"));

        assert!(matches!(result, Err(ServiceError::AlreadyExists { .. })));
    }

    #[test]
    fn update_comparison_reports_missing_record() {
        let mut repo = MockComparisonRepo::new();

        repo.reader
            .expect_get_comparison_by_id()
            .returning(|_| Ok(None));
        repo.writer.expect_update_comparison().times(0);

        let result = update_comparison(&repo, "missing", form("Cars"));

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[test]
    fn delete_comparison_surfaces_not_found() {
        let mut repo = MockComparisonWriter::new();

        repo.expect_delete_comparison()
            .times(1)
            .withf(|id| id == "missing")
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_comparison(&repo, "missing");

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }
}
