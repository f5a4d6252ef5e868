use super::ServiceError;
use crate::models::user::User;
use crate::state::AppState;

pub async fn get_user(state: &AppState, user_id: &str) -> Result<User, ServiceError> {
    state
        .users
        .get(user_id)
        .await?
        .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))
}
