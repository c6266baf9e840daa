//! Convenience helpers over Serenity's cache and REST client.
//!
//! Every helper receives the Discord client as an argument (anything implementing
//! `CacheHttp`, such as the event `Context`) instead of reaching for a global. Lookups
//! try the cache first and fall back to a REST request.

pub mod channel;
pub mod lookup;
pub mod rest_error;
pub mod role;
pub mod user;

pub use channel::can_write_in_channel;
pub use lookup::{create_dm, get_bot_member_cached, get_member_cached, get_user_cached};
pub use rest_error::{format_error, format_rest_error};
pub use role::{get_highest_role, resolve_member_roles};
pub use user::format_user;
