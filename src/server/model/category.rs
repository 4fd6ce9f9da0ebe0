//! Category domain models and parameters.
//!
//! Categories group servers and may carry an icon. Only the icon's blob store key is
//! kept here; the bytes themselves belong to the external blob store.

use crate::model::category::CategoryDto;

/// Category with its optional icon reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Blob store key of the icon, see [`icon_upload_path`].
    pub icon: Option<String>,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

/// An icon file received alongside a category.
#[derive(Debug, Clone)]
pub struct IconUpload {
    /// Original file name, used for the extension check and the storage key.
    pub file_name: String,
    /// Raw image bytes, used for the dimension check.
    pub bytes: Vec<u8>,
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<IconUpload>,
}

/// Blob store key under which a category's icon is kept.
///
/// # Arguments
/// - `category_id` - Id of the category owning the icon
/// - `file_name` - Original file name of the upload
///
/// # Returns
/// - `String` - Key in the form `category/{id}/category_icon/{file_name}`
pub fn icon_upload_path(category_id: i32, file_name: &str) -> String {
    format!("category/{}/category_icon/{}", category_id, file_name)
}
