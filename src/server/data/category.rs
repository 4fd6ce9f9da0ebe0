use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::Category;

/// Category queries over any connection, so writes can join a caller's transaction.
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category without an icon
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            icon: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Stores the blob store key of a category's icon
    pub async fn set_icon(&self, id: i32, icon: String) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            icon: ActiveValue::Set(Some(icon)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Counts the servers listed under a category
    pub async fn count_servers(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Server::find()
            .filter(entity::server::Column::CategoryId.eq(id))
            .count(self.db)
            .await
    }

    /// Deletes a category, returning whether a row was removed
    ///
    /// Fails with a foreign key violation while servers still reference the category.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
