//! Browser persistence for the access token and cached profile.

use gloo_storage::{LocalStorage, Storage};

use crate::services::errors::ApiResult;
use crate::services::session::UserProfile;

const ACCESS_TOKEN_KEY: &str = "frontblok_access_token";
const USER_PROFILE_KEY: &str = "frontblok_user";

pub struct TokenStore;

impl TokenStore {
    pub fn store(token: &str, user: Option<&UserProfile>) -> ApiResult<()> {
        LocalStorage::set(ACCESS_TOKEN_KEY, token)?;
        match user {
            Some(user) => LocalStorage::set(USER_PROFILE_KEY, user)?,
            None => LocalStorage::delete(USER_PROFILE_KEY),
        }
        Ok(())
    }

    pub fn access_token() -> Option<String> {
        LocalStorage::get(ACCESS_TOKEN_KEY).ok()
    }

    pub fn user() -> Option<UserProfile> {
        LocalStorage::get(USER_PROFILE_KEY).ok()
    }

    pub fn store_user(user: &UserProfile) -> ApiResult<()> {
        LocalStorage::set(USER_PROFILE_KEY, user)?;
        Ok(())
    }

    pub fn clear() {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(USER_PROFILE_KEY);
    }
}
