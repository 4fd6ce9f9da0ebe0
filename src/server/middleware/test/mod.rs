use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Identity},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};
