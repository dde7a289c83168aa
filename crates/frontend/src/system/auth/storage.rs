use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_NAME_KEY: &str = "auth_user_name";

/// Recorded as `updatedBy` when nobody is signed in.
pub const ANONYMOUS_USER: &str = "portal";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn get_user_name() -> Option<String> {
    get_local_storage()?.get_item(USER_NAME_KEY).ok()?
}

/// Name sent with date updates.
pub fn current_user_name() -> String {
    user_name_or_anonymous(get_user_name())
}

fn user_name_or_anonymous(name: Option<String>) -> String {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_fallback() {
        assert_eq!(user_name_or_anonymous(None), "portal");
        assert_eq!(user_name_or_anonymous(Some("  ".into())), "portal");
        assert_eq!(user_name_or_anonymous(Some(" mehmet ".into())), "mehmet");
    }
}
