//! User command - Look up, create and refresh users from the shell.
//!
//! Output is the outbound JSON representation, so secrets are never printed.

use std::sync::Arc;

use crate::cli::args::{LookupArgs, UserAction, UserArgs};
use crate::config::Config;
use crate::domain::{Credentials, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let repo = Arc::new(UserStore::new(db.get_connection(), config.admin_ids.clone()));
    let service = UserManager::new(repo);

    let user = match args.action {
        UserAction::Get(LookupArgs { id: Some(id), .. }) => service.get_user(&id).await?,
        UserAction::Get(LookupArgs {
            username: Some(username),
            ..
        }) => service.get_user_by_username(&username).await?,
        UserAction::Get(_) => {
            return Err(AppError::validation("either --id or --username is required"));
        }
        UserAction::Create {
            id,
            username,
            avatar_url,
            access_token,
            access_secret,
        } => {
            service
                .register(
                    id,
                    username,
                    avatar_url,
                    Credentials::new(access_token, access_secret),
                )
                .await?
        }
        UserAction::Refresh {
            id,
            access_token,
            access_secret,
        } => {
            service
                .refresh_credentials(&id, Credentials::new(access_token, access_secret))
                .await?
        }
    };

    let output = serde_json::to_string_pretty(&UserResponse::from(user))
        .map_err(|e| AppError::internal(format!("Failed to encode user: {}", e)))?;
    println!("{}", output);

    Ok(())
}
