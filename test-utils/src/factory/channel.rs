//! Channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a channel inside `server_id` owned by `owner_id`.
///
/// The channel gets a generated name and a generic topic.
///
/// # Returns
/// - `Ok(entity::channel::Model)` - Created channel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_channel(
    db: &DatabaseConnection,
    owner_id: i32,
    server_id: i32,
) -> Result<entity::channel::Model, DbErr> {
    let id = next_id();
    entity::channel::ActiveModel {
        name: ActiveValue::Set(format!("channel-{}", id)),
        topic: ActiveValue::Set("general".to_string()),
        owner_id: ActiveValue::Set(owner_id),
        server_id: ActiveValue::Set(server_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
