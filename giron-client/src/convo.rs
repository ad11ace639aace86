use crate::api::{Conversation, User};

/// Client-side filtering of the conversation list; the backend always
/// returns the full list for the signed-in user.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConvoFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl ConvoFilter {
    pub fn matches(&self, c: &Conversation) -> bool {
        let open = c.is_active && !c.is_draft;
        match self {
            ConvoFilter::All => true,
            ConvoFilter::Open => open,
            ConvoFilter::Closed => !open,
        }
    }

    pub fn apply(&self, convos: &[Conversation]) -> Vec<Conversation> {
        convos.iter().filter(|c| self.matches(c)).cloned().collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConvoFilter::All => "All",
            ConvoFilter::Open => "Open",
            ConvoFilter::Closed => "Closed",
        }
    }
}

/// The moderation console is only for the conversation owner, or a site
/// admin.
pub fn can_administer(user: &User, convo: &Conversation) -> bool {
    user.site_admin || convo.owner == user.uid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ConversationId, UserId};

    fn convo(id: &str, owner: i64, is_active: bool, is_draft: bool) -> Conversation {
        Conversation {
            conversation_id: ConversationId(String::from(id)),
            topic: String::from("topic"),
            description: String::from("description"),
            owner: UserId(owner),
            participant_count: 0,
            is_active,
            is_draft,
            parent_url: None,
            created: None,
        }
    }

    fn user(uid: i64, site_admin: bool) -> User {
        User {
            uid: UserId(uid),
            hname: String::from("Someone"),
            email: String::from("someone@example.org"),
            site_admin,
        }
    }

    #[test]
    fn filters_partition_on_active_and_draft() {
        let convos = vec![
            convo("a", 1, true, false),
            convo("b", 1, true, true),
            convo("c", 1, false, false),
        ];
        let ids = |f: ConvoFilter| {
            f.apply(&convos)
                .into_iter()
                .map(|c| c.conversation_id.0)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(ConvoFilter::All), vec!["a", "b", "c"]);
        assert_eq!(ids(ConvoFilter::Open), vec!["a"]);
        assert_eq!(ids(ConvoFilter::Closed), vec!["b", "c"]);
    }

    #[test]
    fn only_owner_or_site_admin_administers() {
        let c = convo("a", 1, true, false);
        assert!(can_administer(&user(1, false), &c));
        assert!(!can_administer(&user(2, false), &c));
        assert!(can_administer(&user(2, true), &c));
    }
}
