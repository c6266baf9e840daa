//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so helpers working on cached Discord objects can be tested
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_member, create_test_role};
//!
//! let admin = create_test_role(111, "Admin", 10);
//! let guild = create_test_guild(100, "Test Guild", vec![admin]);
//! let member = create_test_member(100, 200, "someone", &[111]);
//! ```
//!
//! # Available Factories
//!
//! - `cache::create_test_cache` - Cache seeded with one guild, its channels and members
//! - `channel::create_test_channel` - Guild channel of a given type
//! - `guild::create_test_guild` - Guild with an @everyone role plus the given roles
//! - `role::create_test_role` - Role at a given position
//! - `member::create_test_member` - Guild member holding the given role ids
//! - `user::create_test_user` - Plain user

pub mod cache;
pub mod channel;
pub mod guild;
pub mod member;
pub mod role;
pub mod user;

pub use cache::create_test_cache;
pub use channel::create_test_channel;
pub use guild::{create_test_guild, TEST_GUILD_OWNER_ID};
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
