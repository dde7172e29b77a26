use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::filter::ObjectFilter;
use crate::domain::object::Object;
use crate::forms::objects::{AddObjectForm, EditObjectForm, PhotoFormError, UploadPhotoForm};
use crate::ids::IdGenerator;
use crate::repository::{AssociationReader, AssociationWriter, ObjectReader, ObjectWriter};
use crate::services::{ServiceError, ServiceResult};

/// Raw query parameters accepted when listing objects.
#[derive(Debug, Default, Deserialize)]
pub struct ObjectQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<String>,
    pub name: Option<String>,
    pub comparison_id: Option<String>,
}

/// Lists objects and loads the associations of each one.
pub fn list_objects<R>(repo: &R, query: ObjectQuery) -> ServiceResult<Vec<Object>>
where
    R: ObjectReader + AssociationReader + ?Sized,
{
    let filter = ObjectFilter::new(
        query.limit,
        query.offset,
        query.order_by.as_deref(),
        query.name,
        query.comparison_id,
    )?;

    let mut objects = repo
        .list_objects(&filter)
        .map_err(ServiceError::context("failed to get objects"))?;

    for object in &mut objects {
        object.associations = repo
            .list_associations_by_object_id(&object.id)
            .map_err(ServiceError::context("failed to get object associations"))?;
    }

    Ok(objects)
}

/// Fetches an object with its associations.
pub fn get_object<R>(repo: &R, id: &str) -> ServiceResult<Object>
where
    R: ObjectReader + AssociationReader + ?Sized,
{
    let mut object = existing_object(repo, id, "failed to get object")?;

    object.associations = repo
        .list_associations_by_object_id(&object.id)
        .map_err(ServiceError::context("failed to get object associations"))?;

    Ok(object)
}

/// Persists a new object and then each of its custom option values.
///
/// The object stays stored when one of the association inserts fails; the
/// error is logged and returned.
pub fn create_object<R, G>(repo: &R, ids: &G, form: AddObjectForm) -> ServiceResult<String>
where
    R: ObjectWriter + AssociationWriter + ?Sized,
    G: IdGenerator + ?Sized,
{
    let new_object = form
        .into_new_object()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let object = Object {
        id: ids.generate_id(),
        name: new_object.name,
        rating: new_object.rating,
        created_at: Utc::now().naive_utc(),
        advantages: new_object.advantages,
        disadvantages: new_object.disadvantages,
        photo_path: None,
        comparison_id: new_object.comparison_id,
        associations: Vec::new(),
    };

    repo.create_object(&object)
        .map_err(ServiceError::context("failed to create object"))?;

    for option in new_object.options {
        let association = option.for_object(&object.id);
        if let Err(err) = repo.add_association(&association) {
            log::error!(
                "failed to add custom option {} to object {}: {err}",
                association.custom_option_id,
                object.id
            );
            return Err(ServiceError::context("failed to add object association")(err));
        }
    }

    Ok(object.id)
}

/// Updates an object and synchronizes its custom option values.
///
/// Values for custom options the object already has are updated, the rest
/// are added. Associations missing from the payload are left untouched.
pub fn update_object<R>(repo: &R, id: &str, form: EditObjectForm) -> ServiceResult<()>
where
    R: ObjectReader + ObjectWriter + AssociationReader + AssociationWriter + ?Sized,
{
    let update = form
        .into_update_object()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let existing = existing_object(repo, id, "failed to get existing object")?;

    let object = Object {
        name: update.name,
        rating: update.rating,
        advantages: update.advantages,
        disadvantages: update.disadvantages,
        associations: Vec::new(),
        ..existing
    };

    repo.update_object(&object)
        .map_err(ServiceError::context("failed to update object"))?;

    let current = repo
        .list_associations_by_object_id(&object.id)
        .map_err(ServiceError::context("failed to get object associations"))?;

    for option in update.options {
        let association = option.for_object(&object.id);
        let known = current
            .iter()
            .any(|stored| stored.custom_option_id == association.custom_option_id);

        let result = if known {
            repo.update_association(&association)
        } else {
            repo.add_association(&association)
        };

        if let Err(err) = result {
            log::error!(
                "failed to sync custom option {} of object {}: {err}",
                association.custom_option_id,
                object.id
            );
            return Err(ServiceError::context("failed to sync object associations")(err));
        }
    }

    Ok(())
}

/// Deletes an object; its associations are removed by storage.
pub fn delete_object<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ObjectWriter + ?Sized,
{
    repo.delete_object(id)
        .map_err(ServiceError::context("failed to delete object"))
}

/// Overwrites only the photo path of an object.
pub fn set_object_photo_path<R>(repo: &R, id: &str, path: &str) -> ServiceResult<()>
where
    R: ObjectReader + ObjectWriter + ?Sized,
{
    let mut object = existing_object(repo, id, "failed to get existing object")?;
    object.photo_path = Some(path.to_string());

    repo.update_object(&object)
        .map_err(ServiceError::context("failed to set object photo path"))
}

/// Path of the stored photo of an object, without loading its associations.
pub fn get_object_photo_path<R>(repo: &R, id: &str) -> ServiceResult<String>
where
    R: ObjectReader + ?Sized,
{
    existing_object(repo, id, "failed to get object photo")?
        .photo_path
        .ok_or(ServiceError::NotFound {
            context: "object has no photo",
        })
}

/// Stores an uploaded JPEG or PNG under `photos_dir` and records its path on
/// the object. Returns the stored path.
pub fn attach_object_photo<R, G>(
    repo: &R,
    ids: &G,
    photos_dir: &Path,
    id: &str,
    mut form: UploadPhotoForm,
) -> ServiceResult<String>
where
    R: ObjectReader + ObjectWriter + ?Sized,
    G: IdGenerator + ?Sized,
{
    let format = form.photo_format().map_err(|err| match err {
        unsupported @ PhotoFormError::UnsupportedFormat => {
            ServiceError::Validation(unsupported.to_string())
        }
        PhotoFormError::Io(source) => ServiceError::PhotoStorage {
            context: "failed to read photo",
            source,
        },
    })?;

    let file_name = format!("{}{}", ids.generate_id(), format.extension());
    let destination = photos_dir.join(file_name);

    std::fs::copy(form.photo.file.path(), &destination).map_err(|source| {
        ServiceError::PhotoStorage {
            context: "failed to save photo",
            source,
        }
    })?;

    let path = destination.to_string_lossy().into_owned();

    if let Err(err) = set_object_photo_path(repo, id, &path) {
        if let Err(remove_err) = std::fs::remove_file(&destination) {
            log::warn!("failed to remove orphaned photo {path}: {remove_err}");
        }
        return Err(err);
    }

    log::info!("stored photo {path} for object {id}");

    Ok(path)
}

fn existing_object<R>(repo: &R, id: &str, context: &'static str) -> ServiceResult<Object>
where
    R: ObjectReader + ?Sized,
{
    repo.get_object_by_id(id)
        .map_err(ServiceError::context(context))?
        .ok_or(ServiceError::NotFound { context })
}
