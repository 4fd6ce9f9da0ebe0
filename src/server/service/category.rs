use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{icon_upload_path, Category, CreateCategoryParams},
    validator::icon::{validate_icon_image_size, validate_image_file_extension},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category, validating its icon upload first
    ///
    /// The icon bytes are handed to the blob store by the caller; only the storage key
    /// derived from the new category's id is recorded here. The row and its icon key are
    /// written in one transaction.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        if let Some(icon) = &params.icon {
            validate_image_file_extension(&icon.file_name)?;
            validate_icon_image_size(&icon.bytes)?;
        }

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let mut category = repo.create(params.name, params.description).await?;

        if let Some(icon) = params.icon {
            category = repo
                .set_icon(category.id, icon_upload_path(category.id, &icon.file_name))
                .await?;
        }

        txn.commit().await?;

        tracing::info!("Created category {} with icon {:?}", category.id, category.icon);

        Ok(category)
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes a category
    ///
    /// Refused while any server is listed under the category.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with ID {} does not exist",
                id
            )));
        }

        let servers = repo.count_servers(id).await?;
        if servers > 0 {
            return Err(AppError::Conflict(format!(
                "Category with ID {} is still used by {} server(s)",
                id, servers
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
