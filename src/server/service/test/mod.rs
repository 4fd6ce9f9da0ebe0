use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::Identity,
};
use test_utils::{builder::TestBuilder, factory};
