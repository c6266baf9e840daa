use serenity::all::{Guild, Member, Role, RoleId};

use crate::error::discord::DiscordError;

/// Resolves a member's role IDs against the guild's cached roles.
///
/// The @everyone role is not included since Discord does not list it on members.
///
/// # Returns
/// - `Ok(Vec<&Role>)` - Roles in the order the member lists them
/// - `Err(DiscordError::UncachedRole)` - A role is missing from the guild cache
pub fn resolve_member_roles<'a>(
    guild: &'a Guild,
    member: &Member,
) -> Result<Vec<&'a Role>, DiscordError> {
    member
        .roles
        .iter()
        .map(|role_id| lookup_role(guild, *role_id))
        .collect()
}

/// Gets the highest positioned role a member has, or @everyone when they have none.
///
/// When two roles share a position the one resolved later wins, with @everyone
/// considered last.
///
/// # Returns
/// - `Ok(&Role)` - Highest role
/// - `Err(DiscordError::UncachedRole)` - A role (or @everyone) is missing from the cache
pub fn get_highest_role<'a>(guild: &'a Guild, member: &Member) -> Result<&'a Role, DiscordError> {
    let everyone = lookup_role(guild, RoleId::new(guild.id.get()))?;
    let roles = resolve_member_roles(guild, member)?;

    Ok(roles
        .into_iter()
        .chain(std::iter::once(everyone))
        .max_by_key(|role| role.position)
        .unwrap_or(everyone))
}

fn lookup_role(guild: &Guild, role_id: RoleId) -> Result<&Role, DiscordError> {
    guild.roles.get(&role_id).ok_or(DiscordError::UncachedRole {
        guild_id: guild.id,
        role_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_guild, create_test_member, create_test_role};

    const GUILD_ID: u64 = 100;

    #[test]
    fn resolves_roles_in_member_order() {
        let guild = create_test_guild(
            GUILD_ID,
            "Test Guild",
            vec![
                create_test_role(1, "Mod", 5),
                create_test_role(2, "Member", 1),
            ],
        );
        let member = create_test_member(GUILD_ID, 200, "someone", &[2, 1]);

        let roles = resolve_member_roles(&guild, &member).unwrap();
        let names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();

        assert_eq!(names, vec!["Member", "Mod"]);
    }

    #[test]
    fn uncached_role_is_an_error() {
        let guild = create_test_guild(GUILD_ID, "Test Guild", vec![]);
        let member = create_test_member(GUILD_ID, 200, "someone", &[999]);

        let result = resolve_member_roles(&guild, &member);

        assert!(matches!(
            result,
            Err(DiscordError::UncachedRole { role_id, .. }) if role_id == RoleId::new(999)
        ));
    }

    #[test]
    fn highest_role_by_position() {
        let guild = create_test_guild(
            GUILD_ID,
            "Test Guild",
            vec![
                create_test_role(1, "Admin", 10),
                create_test_role(2, "Mod", 5),
                create_test_role(3, "Member", 1),
            ],
        );
        let member = create_test_member(GUILD_ID, 200, "someone", &[3, 1, 2]);

        let highest = get_highest_role(&guild, &member).unwrap();

        assert_eq!(highest.name, "Admin");
    }

    #[test]
    fn member_without_roles_gets_everyone() {
        let guild = create_test_guild(GUILD_ID, "Test Guild", vec![create_test_role(1, "Mod", 5)]);
        let member = create_test_member(GUILD_ID, 200, "someone", &[]);

        let highest = get_highest_role(&guild, &member).unwrap();

        assert_eq!(highest.id, RoleId::new(GUILD_ID));
        assert_eq!(highest.name, "@everyone");
    }

    #[test]
    fn equal_positions_pick_later_role() {
        let guild = create_test_guild(
            GUILD_ID,
            "Test Guild",
            vec![
                create_test_role(1, "First", 3),
                create_test_role(2, "Second", 3),
            ],
        );
        let member = create_test_member(GUILD_ID, 200, "someone", &[1, 2]);

        let highest = get_highest_role(&guild, &member).unwrap();

        assert_eq!(highest.name, "Second");
    }
}
