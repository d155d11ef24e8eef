//! Users command - drives the user repository from the command line.
//!
//! Every action renders its result as pretty JSON. Lookups that find
//! nothing render `null` or `[]` rather than failing.

use serde::Serialize;
use serde_json::json;

use common::{AppError, AppResult};
use domain::User;

use crate::cli::UserAction;
use crate::repository::UserRepository;

/// Execute a user action against the repository and render the result.
pub async fn execute(action: UserAction, repo: &dyn UserRepository) -> AppResult<String> {
    match action {
        UserAction::Create {
            name,
            email,
            password,
        } => {
            let user = repo.create(User::new(name, email, password)).await?;
            tracing::info!(id = user.id, "User created");
            render(&user)
        }
        UserAction::Get { id } => render(&repo.get(id).await?),
        UserAction::List => render(&repo.get_all().await?),
        UserAction::Update {
            id,
            name,
            email,
            password,
        } => {
            // Full-record replace: start from the stored record
            let mut user = repo.get(id).await?;
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(email) = email {
                user.email = email;
            }
            if let Some(password) = password {
                user.password = password;
            }

            let user = repo.update(user).await?;
            tracing::info!(id = user.id, "User updated");
            render(&user)
        }
        UserAction::Remove { id } => {
            repo.remove(id).await?;
            tracing::info!(id, "User removed");
            render(&json!({ "removed": id }))
        }
        UserAction::FindEmail { email } => render(&repo.get_by_email(&email).await?),
        UserAction::SearchEmail { fragment } => render(&repo.search_by_email(&fragment).await?),
        UserAction::SearchName { fragment } => render(&repo.search_by_name(&fragment).await?),
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))
}
