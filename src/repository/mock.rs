use mockall::mock;

use super::{
    AssociationReader, AssociationWriter, ComparisonReader, ComparisonWriter, CustomOptionReader,
    CustomOptionWriter, ObjectReader, ObjectWriter,
};
use crate::domain::{
    association::Association,
    comparison::Comparison,
    custom_option::CustomOption,
    filter::{ComparisonFilter, CustomOptionFilter, ObjectFilter},
    object::Object,
};
use crate::ids::IdGenerator;
use crate::repository::RepositoryResult;

mock! {
    pub ComparisonReader {}

    impl ComparisonReader for ComparisonReader {
        fn list_comparisons(&self, filter: &ComparisonFilter) -> RepositoryResult<Vec<Comparison>>;
        fn get_comparison_by_id(&self, id: &str) -> RepositoryResult<Option<Comparison>>;
        fn get_comparison_by_name(&self, name: &str) -> RepositoryResult<Option<Comparison>>;
    }
}

mock! {
    pub ComparisonWriter {}

    impl ComparisonWriter for ComparisonWriter {
        fn create_comparison(&self, comparison: &Comparison) -> RepositoryResult<()>;
        fn update_comparison(&self, comparison: &Comparison) -> RepositoryResult<()>;
        fn delete_comparison(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub CustomOptionReader {}

    impl CustomOptionReader for CustomOptionReader {
        fn list_custom_options(&self, filter: &CustomOptionFilter) -> RepositoryResult<Vec<CustomOption>>;
        fn get_custom_option_by_id(&self, id: &str) -> RepositoryResult<Option<CustomOption>>;
        fn get_custom_option_by_name(&self, name: &str) -> RepositoryResult<Option<CustomOption>>;
    }
}

mock! {
    pub CustomOptionWriter {}

    impl CustomOptionWriter for CustomOptionWriter {
        fn create_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()>;
        fn update_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()>;
        fn delete_custom_option(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub ObjectReader {}

    impl ObjectReader for ObjectReader {
        fn list_objects(&self, filter: &ObjectFilter) -> RepositoryResult<Vec<Object>>;
        fn get_object_by_id(&self, id: &str) -> RepositoryResult<Option<Object>>;
    }
}

mock! {
    pub ObjectWriter {}

    impl ObjectWriter for ObjectWriter {
        fn create_object(&self, object: &Object) -> RepositoryResult<()>;
        fn update_object(&self, object: &Object) -> RepositoryResult<()>;
        fn delete_object(&self, id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub AssociationReader {}

    impl AssociationReader for AssociationReader {
        fn list_associations_by_object_id(&self, object_id: &str) -> RepositoryResult<Vec<Association>>;
    }
}

mock! {
    pub AssociationWriter {}

    impl AssociationWriter for AssociationWriter {
        fn add_association(&self, association: &Association) -> RepositoryResult<()>;
        fn update_association(&self, association: &Association) -> RepositoryResult<()>;
    }
}

mock! {
    pub IdGenerator {}

    impl IdGenerator for IdGenerator {
        fn generate_id(&self) -> String;
    }
}
