use serenity::all::{CacheHttp, UserId};
use serenity::http::HttpError;

use crate::discord::lookup::get_user_cached;

/// Placeholder name used when a user cannot be fetched.
pub const UNKNOWN_USER: &str = "<unknown>";

/// Formats a user as a mention followed by their tag, e.g. `<@123> (name)`.
///
/// Discord API failures (such as an unknown user) are replaced by `<unknown>` when
/// `quiet` is set and returned otherwise. Any other error is always returned.
///
/// # Arguments
/// - `cache_http` - Discord client used to look up the user
/// - `user_id` - User to format
/// - `quiet` - Swallow Discord API failures
pub async fn format_user(
    cache_http: impl CacheHttp,
    user_id: UserId,
    quiet: bool,
) -> Result<String, serenity::Error> {
    let name = match get_user_cached(cache_http, user_id).await {
        Ok(user) => user.tag(),
        Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response))) if quiet => {
            tracing::debug!(
                "Could not fetch user {}: {}",
                user_id,
                super::format_rest_error(response)
            );
            UNKNOWN_USER.to_string()
        }
        Err(e) => return Err(e),
    };

    Ok(mention_with_name(user_id, &name))
}

/// `<@id> (name)`
pub fn mention_with_name(user_id: UserId, name: &str) -> String {
    format!("<@{}> ({})", user_id, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    #[test]
    fn mention_includes_id_and_name() {
        assert_eq!(
            mention_with_name(UserId::new(123456789), "someone"),
            "<@123456789> (someone)"
        );
    }

    #[test]
    fn mention_with_unknown_user() {
        assert_eq!(
            mention_with_name(UserId::new(42), UNKNOWN_USER),
            "<@42> (<unknown>)"
        );
    }

    #[test]
    fn mention_uses_user_tag() {
        let user = create_test_user(123, "someone");

        assert_eq!(mention_with_name(user.id, &user.tag()), "<@123> (someone)");
    }
}
