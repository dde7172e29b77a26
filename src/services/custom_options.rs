use serde::Deserialize;

use crate::domain::custom_option::CustomOption;
use crate::domain::filter::CustomOptionFilter;
use crate::forms::custom_options::CustomOptionForm;
use crate::ids::IdGenerator;
use crate::repository::{CustomOptionReader, CustomOptionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Raw query parameters accepted when listing custom options.
#[derive(Debug, Default, Deserialize)]
pub struct CustomOptionQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub name: Option<String>,
}

pub fn list_custom_options<R>(
    repo: &R,
    query: CustomOptionQuery,
) -> ServiceResult<Vec<CustomOption>>
where
    R: CustomOptionReader + ?Sized,
{
    let filter = CustomOptionFilter::new(query.limit, query.offset, query.name)?;

    repo.list_custom_options(&filter)
        .map_err(ServiceError::context("failed to get custom options"))
}

pub fn get_custom_option<R>(repo: &R, id: &str) -> ServiceResult<CustomOption>
where
    R: CustomOptionReader + ?Sized,
{
    repo.get_custom_option_by_id(id)
        .map_err(ServiceError::context("failed to get custom option"))?
        .ok_or(ServiceError::NotFound {
            context: "failed to get custom option",
        })
}

/// Creates a custom option with a generated id.
pub fn create_custom_option<R, G>(
    repo: &R,
    ids: &G,
    form: CustomOptionForm,
) -> ServiceResult<CustomOption>
where
    R: CustomOptionReader + CustomOptionWriter + ?Sized,
    G: IdGenerator + ?Sized,
{
    let new_option = form
        .into_new_custom_option()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let taken = repo
        .get_custom_option_by_name(&new_option.name)
        .map_err(ServiceError::context("failed to create custom option"))?;
    if taken.is_some() {
        return Err(ServiceError::AlreadyExists {
            context: "failed to create custom option",
        });
    }

    let custom_option = CustomOption {
        id: ids.generate_id(),
        name: new_option.name,
    };

    repo.create_custom_option(&custom_option)
        .map_err(ServiceError::context("failed to create custom option"))?;

    Ok(custom_option)
}

/// Renames a custom option, keeping its id.
pub fn update_custom_option<R>(
    repo: &R,
    id: &str,
    form: CustomOptionForm,
) -> ServiceResult<CustomOption>
where
    R: CustomOptionReader + CustomOptionWriter + ?Sized,
{
    let update = form
        .into_update_custom_option()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let existing = repo
        .get_custom_option_by_id(id)
        .map_err(ServiceError::context("failed to get existing custom option"))?
        .ok_or(ServiceError::NotFound {
            context: "failed to get existing custom option",
        })?;

    let holder = repo
        .get_custom_option_by_name(&update.name)
        .map_err(ServiceError::context("failed to update custom option"))?;
    if holder.is_some_and(|other| other.id != existing.id) {
        return Err(ServiceError::AlreadyExists {
            context: "failed to update custom option",
        });
    }

    let custom_option = CustomOption {
        id: existing.id,
        name: update.name,
    };

    repo.update_custom_option(&custom_option)
        .map_err(ServiceError::context("failed to update custom option"))?;

    Ok(custom_option)
}

/// Deletes a custom option together with its associations.
pub fn delete_custom_option<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: CustomOptionWriter + ?Sized,
{
    repo.delete_custom_option(id)
        .map_err(ServiceError::context("failed to delete custom option"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::filter::DEFAULT_LIMIT;
    use crate::repository::mock::{
        MockCustomOptionReader, MockCustomOptionWriter, MockIdGenerator,
    };
    use crate::repository::{RepositoryError, RepositoryResult};

    struct MockCustomOptionRepo {
        reader: MockCustomOptionReader,
        writer: MockCustomOptionWriter,
    }

    impl MockCustomOptionRepo {
        fn new() -> Self {
            Self {
                reader: MockCustomOptionReader::new(),
                writer: MockCustomOptionWriter::new(),
            }
        }
    }

    impl CustomOptionReader for MockCustomOptionRepo {
        fn list_custom_options(
            &self,
            filter: &CustomOptionFilter,
        ) -> RepositoryResult<Vec<CustomOption>> {
            self.reader.list_custom_options(filter)
        }

        fn get_custom_option_by_id(&self, id: &str) -> RepositoryResult<Option<CustomOption>> {
            self.reader.get_custom_option_by_id(id)
        }

        fn get_custom_option_by_name(
            &self,
            name: &str,
        ) -> RepositoryResult<Option<CustomOption>> {
            self.reader.get_custom_option_by_name(name)
        }
    }

    impl CustomOptionWriter for MockCustomOptionRepo {
        fn create_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()> {
            self.writer.create_custom_option(custom_option)
        }

        fn update_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()> {
            self.writer.update_custom_option(custom_option)
        }

        fn delete_custom_option(&self, id: &str) -> RepositoryResult<()> {
            self.writer.delete_custom_option(id)
        }
    }

    fn option(id: &str, name: &str) -> CustomOption {
        CustomOption {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn form(name: &str) -> CustomOptionForm {
        CustomOptionForm {
            name: name.to_string(),
        }
    }

    #[test]
    fn list_custom_options_passes_name_search() {
        let mut repo = MockCustomOptionReader::new();

        repo.expect_list_custom_options()
            .times(1)
            .withf(|filter| {
                assert_eq!(filter.pagination.limit, DEFAULT_LIMIT);
                assert_eq!(filter.name.as_deref(), Some("spe"));
                true
            })
            .returning(|_| Ok(vec![option("o-1", "Max speed")]));

        let query = CustomOptionQuery {
            name: Some("spe".to_string()),
            ..Default::default()
        };
        let options = list_custom_options(&repo, query).expect("expected success");

        assert_eq!(options.len(), 1);
    }

    #[test]
    fn list_custom_options_rejects_negative_limit() {
        let repo = MockCustomOptionReader::new();

        let query = CustomOptionQuery {
            limit: Some(-1),
            ..Default::default()
        };

        assert!(matches!(
            list_custom_options(&repo, query),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn create_custom_option_uses_generated_id() {
        let mut repo = MockCustomOptionRepo::new();
        let mut ids = MockIdGenerator::new();

        ids.expect_generate_id()
            .times(1)
            .returning(|| "o-1".to_string());
        repo.reader
            .expect_get_custom_option_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repo.writer
            .expect_create_custom_option()
            .times(1)
            .withf(|custom_option| custom_option == &option("o-1", "Max speed"))
            .returning(|_| Ok(()));

        let created =
            create_custom_option(&repo, &ids, form("Max speed")).expect("expected success");

        assert_eq!(created, option("o-1", "Max speed"));
    }

    #[test]
    fn create_custom_option_rejects_taken_name() {
        let mut repo = MockCustomOptionRepo::new();
        let ids = MockIdGenerator::new();

        repo.reader
            .expect_get_custom_option_by_name()
            .returning(|name| Ok(Some(option("o-1", name))));
        repo.writer.expect_create_custom_option().times(0);

        let result = create_custom_option(&repo, &ids, form("Max speed"));

        assert!(matches!(result, Err(ServiceError::AlreadyExists { .. })));
    }

    #[test]
    fn update_custom_option_keeps_id() {
        let mut repo = MockCustomOptionRepo::new();

        repo.reader
            .expect_get_custom_option_by_id()
            .returning(|id| Ok(Some(option(id, "Speed"))));
        repo.reader
            .expect_get_custom_option_by_name()
            .returning(|_| Ok(None));
        repo.writer
            .expect_update_custom_option()
            .times(1)
            .withf(|custom_option| custom_option == &option("o-1", "Top speed"))
            .returning(|_| Ok(()));

        let updated =
            update_custom_option(&repo, "o-1", form("Top speed")).expect("expected success");

        assert_eq!(updated.id, "o-1");
    }

    #[test]
    fn update_custom_option_reports_missing_record() {
        let mut repo = MockCustomOptionRepo::new();

        repo.reader
            .expect_get_custom_option_by_id()
            .returning(|_| Ok(None));

        let result = update_custom_option(&repo, "missing", form("Speed"));

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[test]
    fn delete_custom_option_maps_storage_failure() {
        let mut repo = MockCustomOptionWriter::new();

        repo.expect_delete_custom_option()
            .times(1)
            .returning(|_| Err(RepositoryError::Database(diesel::result::Error::NotInTransaction)));

        let result = delete_custom_option(&repo, "o-1");

        assert!(matches!(result, Err(ServiceError::Internal { .. })));
    }
}
