//! Server listing filters.
//!
//! A listing query is turned into an ordered list of [`FilterStep`]s. Each step takes the
//! running [`ServerSelection`] by value and returns the narrowed (or annotated) selection,
//! so the steps compose without shared mutable state. The order is fixed:
//!
//! 1. `category` - keep servers whose category name matches exactly
//! 2. `by_user` - keep servers the caller is a member of (needs an authenticated caller)
//! 3. `with_num_members` - annotate every server with its member count
//! 4. `qty` - keep the first N servers
//! 5. `by_serverid` - keep the server with the given id (needs an authenticated caller)
//!
//! Because truncation runs before the id lookup, an id that exists but falls outside the
//! first `qty` servers is reported as not found.

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::Identity,
    model::server::{Server, ServerListItem, ServerListQuery},
    util::parse::parse_query_int,
};

/// One stage of the listing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterStep {
    /// Keep servers whose category name equals the value.
    Category(String),
    /// Keep servers the caller is a member of.
    MemberOf,
    /// Annotate each server with its member count.
    CountMembers,
    /// Keep the first N servers; N is parsed when the step runs.
    Take(String),
    /// Keep the server with this id; the id is parsed when the step runs.
    ServerId(String),
}

/// The collection threaded through the filter steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSelection {
    servers: Vec<Server>,
    count_members: bool,
}

impl ServerSelection {
    pub fn new(servers: Vec<Server>) -> Self {
        Self {
            servers,
            count_members: false,
        }
    }

    fn retain(self, keep: impl Fn(&Server) -> bool) -> Self {
        Self {
            servers: self.servers.into_iter().filter(|s| keep(s)).collect(),
            count_members: self.count_members,
        }
    }

    /// Finishes the pipeline, attaching member counts if they were requested.
    pub fn into_items(self) -> Vec<ServerListItem> {
        let count_members = self.count_members;

        self.servers
            .into_iter()
            .map(|server| ServerListItem {
                num_members: count_members.then(|| server.member_count()),
                server,
            })
            .collect()
    }
}

impl FilterStep {
    /// Applies this step to the running selection.
    ///
    /// # Arguments
    /// - `selection` - Output of the previous step
    /// - `identity` - Caller of the request, consulted by identity-scoped steps
    ///
    /// # Returns
    /// - `Ok(ServerSelection)` - Narrowed or annotated selection
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - `MemberOf`/`ServerId` without a caller
    /// - `Err(AppError::BadRequest(_))` - `Take`/`ServerId` value is not a valid integer
    /// - `Err(AppError::NotFound(_))` - `ServerId` matched nothing in the selection
    pub fn apply(
        &self,
        selection: ServerSelection,
        identity: Identity,
    ) -> Result<ServerSelection, AppError> {
        match self {
            Self::Category(name) => Ok(selection.retain(|s| s.category == *name)),
            Self::MemberOf => {
                let user_id = identity.require_user_id()?;
                Ok(selection.retain(|s| s.is_member(user_id)))
            }
            Self::CountMembers => Ok(ServerSelection {
                count_members: true,
                ..selection
            }),
            Self::Take(qty) => {
                let qty = parse_query_int::<usize>(qty)
                    .map_err(|_| AppError::BadRequest("Invalid quantity".to_string()))?;

                let mut servers = selection.servers;
                servers.truncate(qty);

                Ok(ServerSelection {
                    servers,
                    count_members: selection.count_members,
                })
            }
            Self::ServerId(raw_id) => {
                if !identity.is_authenticated() {
                    return Err(AuthError::AuthenticationRequired.into());
                }

                let id = parse_query_int::<i64>(raw_id)
                    .map_err(|_| AppError::BadRequest("Invalid server ID".to_string()))?;

                let selection = selection.retain(|s| i64::from(s.id) == id);
                if selection.servers.is_empty() {
                    return Err(AppError::NotFound(format!(
                        "Server with ID {} does not exist",
                        raw_id.trim()
                    )));
                }

                Ok(selection)
            }
        }
    }
}

/// Ordered filter pipeline built from a listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerQueryFilter {
    steps: Vec<FilterStep>,
}

impl ServerQueryFilter {
    /// Builds the pipeline for `query`, skipping parameters that were not supplied.
    pub fn from_query(query: &ServerListQuery) -> Self {
        let mut steps = Vec::new();

        if let Some(category) = &query.category {
            steps.push(FilterStep::Category(category.clone()));
        }
        if query.by_user {
            steps.push(FilterStep::MemberOf);
        }
        if query.with_num_members {
            steps.push(FilterStep::CountMembers);
        }
        if let Some(qty) = &query.qty {
            steps.push(FilterStep::Take(qty.clone()));
        }
        if let Some(server_id) = &query.by_serverid {
            steps.push(FilterStep::ServerId(server_id.clone()));
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[FilterStep] {
        &self.steps
    }

    /// Runs every step over `servers` and returns the final listing.
    pub fn apply(
        &self,
        servers: Vec<Server>,
        identity: Identity,
    ) -> Result<Vec<ServerListItem>, AppError> {
        let selection = self
            .steps
            .iter()
            .try_fold(ServerSelection::new(servers), |selection, step| {
                step.apply(selection, identity)
            })?;

        Ok(selection.into_items())
    }
}
