pub mod filter;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::AppError,
    middleware::auth::Identity,
    model::server::{Server, ServerListItem, ServerListQuery},
    service::server::filter::ServerQueryFilter,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the query on behalf of `identity`.
    ///
    /// Loads every server ordered by id and narrows the collection through the
    /// listing filters in their fixed order.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerListItem>)` - Matching servers, annotated when member counts were requested
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - Identity-scoped filter without a caller
    /// - `Err(AppError::BadRequest(_))` - Malformed `qty` or `by_serverid`
    /// - `Err(AppError::NotFound(_))` - `by_serverid` matched nothing
    /// - `Err(AppError::DbErr(_))` - Database error while loading servers
    pub async fn list(
        &self,
        query: &ServerListQuery,
        identity: Identity,
    ) -> Result<Vec<ServerListItem>, AppError> {
        let repo = ServerRepository::new(self.db);

        let servers = repo
            .get_all_with_relations()
            .await?
            .into_iter()
            .map(Server::from_with_relations)
            .collect::<Result<Vec<_>, _>>()?;

        let filter = ServerQueryFilter::from_query(query);
        let items = filter.apply(servers, identity)?;

        tracing::debug!(
            "Listed {} servers using {} filter steps",
            items.len(),
            filter.steps().len()
        );

        Ok(items)
    }
}
