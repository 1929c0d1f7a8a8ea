use serenity::all::Member;

/// Identity of a member who just joined a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct JoiningMember {
    pub user_id: u64,
    pub username: String,
}

impl JoiningMember {
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
        }
    }
}
