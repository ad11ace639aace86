use std::collections::{BTreeMap, HashMap, HashSet};

use giron_api::{
    AuthResponse, AuthToken, Comment, CommentId, CommentsQuery, Conversation, ConversationId,
    Credentials, Error, ModComment, ModStats, ModStatus, ModVerdict, NewComment,
    NewCommentResponse, NewConversation, NewUser, ParticipantId, Pid, PwReset, PwResetRequest,
    User, UserId, Uuid, Vote,
};

/// In-memory stand-in for the backend HTTP semantics, for tests. Endpoint
/// methods mirror the wire contract one for one, minus the HTTP layer.
pub struct MockServer {
    users: BTreeMap<UserId, DbUser>,
    conversations: BTreeMap<ConversationId, DbConversation>,
    next_uid: i64,
    next_convo: u64,
}

struct DbUser {
    user: User,
    password: String,
    sessions: HashSet<AuthToken>,
    reset_tokens: HashSet<String>,
}

struct DbConversation {
    meta: Conversation,
    comments: Vec<Comment>,
    next_tid: i64,
    /// (pid, tid) -> last vote cast; authoring records the implicit vote too
    votes: HashMap<(ParticipantId, CommentId), giron_api::VoteSign>,
    participants: HashMap<UserId, ParticipantId>,
    next_pid: i64,
}

impl DbConversation {
    fn participant_for(&mut self, uid: UserId) -> ParticipantId {
        let next_pid = &mut self.next_pid;
        let pid = *self.participants.entry(uid).or_insert_with(|| {
            let pid = ParticipantId(*next_pid);
            *next_pid += 1;
            pid
        });
        self.meta.participant_count = self.participants.len() as i64;
        pid
    }

    fn resolve_pid(&mut self, sel: Pid, uid: UserId) -> ParticipantId {
        match sel {
            Pid::Mine => self.participant_for(uid),
            Pid::Id(pid) => pid,
        }
    }

    /// Read-side resolution: does not register a participant
    fn lookup_pid(&self, sel: Pid, uid: UserId) -> Option<ParticipantId> {
        match sel {
            Pid::Mine => self.participants.get(&uid).copied(),
            Pid::Id(pid) => Some(pid),
        }
    }
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            users: BTreeMap::new(),
            conversations: BTreeMap::new(),
            next_uid: 1,
            next_convo: 1,
        }
    }

    /// Promote an account for tests that need a site admin
    pub fn test_make_site_admin(&mut self, uid: UserId) {
        if let Some(u) = self.users.get_mut(&uid) {
            u.user.site_admin = true;
        }
    }

    fn resolve(&self, token: AuthToken) -> Result<UserId, Error> {
        for (uid, u) in self.users.iter() {
            if u.sessions.contains(&token) {
                return Ok(*uid);
            }
        }
        Err(Error::Unauthorized)
    }

    fn convo_mut(&mut self, id: &ConversationId) -> Result<&mut DbConversation, Error> {
        self.conversations
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("conversation {}", id)))
    }

    fn open_session(&mut self, uid: UserId) -> AuthResponse {
        let token = AuthToken(Uuid::new_v4());
        let u = self.users.get_mut(&uid).expect("opening session for unknown uid");
        u.sessions.insert(token);
        AuthResponse {
            token,
            user: u.user.clone(),
        }
    }

    pub fn register(&mut self, u: NewUser) -> Result<AuthResponse, Error> {
        u.validate()?;
        if self.users.values().any(|db| db.user.email == u.email) {
            return Err(Error::EmailAlreadyUsed(u.email));
        }
        let uid = UserId(self.next_uid);
        self.next_uid += 1;
        self.users.insert(
            uid,
            DbUser {
                user: User {
                    uid,
                    hname: u.hname,
                    email: u.email,
                    site_admin: false,
                },
                password: u.password,
                sessions: HashSet::new(),
                reset_tokens: HashSet::new(),
            },
        );
        Ok(self.open_session(uid))
    }

    pub fn login(&mut self, c: Credentials) -> Result<AuthResponse, Error> {
        c.validate()?;
        let uid = self
            .users
            .iter()
            .find(|(_, u)| u.user.email == c.email && u.password == c.password)
            .map(|(uid, _)| *uid)
            .ok_or(Error::InvalidCredentials)?;
        Ok(self.open_session(uid))
    }

    pub fn logout(&mut self, token: AuthToken) -> Result<(), Error> {
        let uid = self.resolve(token)?;
        self.users
            .get_mut(&uid)
            .expect("resolved token to unknown uid")
            .sessions
            .remove(&token);
        Ok(())
    }

    pub fn whoami(&self, token: AuthToken) -> Result<User, Error> {
        let uid = self.resolve(token)?;
        Ok(self.users[&uid].user.clone())
    }

    /// The real endpoint always reports success and emails the token; the
    /// mock returns it so tests can complete the flow.
    pub fn request_pw_reset(&mut self, req: PwResetRequest) -> Option<String> {
        let u = self
            .users
            .values_mut()
            .find(|u| u.user.email == req.email)?;
        let token = Uuid::new_v4().to_string();
        u.reset_tokens.insert(token.clone());
        Some(token)
    }

    pub fn set_password(&mut self, r: PwReset) -> Result<(), Error> {
        r.validate()?;
        let u = self
            .users
            .values_mut()
            .find(|u| u.reset_tokens.contains(&r.pwresettoken))
            .ok_or(Error::BadToken)?;
        u.reset_tokens.remove(&r.pwresettoken);
        u.password = r.new_password;
        // all previous sessions die with the old password
        u.sessions.clear();
        Ok(())
    }

    pub fn create_conversation(
        &mut self,
        token: AuthToken,
        c: NewConversation,
    ) -> Result<Conversation, Error> {
        c.validate()?;
        let uid = self.resolve(token)?;
        let id = ConversationId(format!("c{:09}", self.next_convo));
        self.next_convo += 1;
        let meta = Conversation {
            conversation_id: id.clone(),
            topic: c.topic,
            description: c.description,
            owner: uid,
            participant_count: 0,
            is_active: c.is_active,
            is_draft: c.is_draft,
            parent_url: None,
            created: Some(chrono::Utc::now()),
        };
        self.conversations.insert(
            id,
            DbConversation {
                meta: meta.clone(),
                comments: Vec::new(),
                next_tid: 0,
                votes: HashMap::new(),
                participants: HashMap::new(),
                next_pid: 0,
            },
        );
        Ok(meta)
    }

    pub fn conversations_for(&self, token: AuthToken) -> Result<Vec<Conversation>, Error> {
        let uid = self.resolve(token)?;
        let site_admin = self.users[&uid].user.site_admin;
        Ok(self
            .conversations
            .values()
            .filter(|c| site_admin || c.meta.owner == uid)
            .map(|c| c.meta.clone())
            .collect())
    }

    pub fn fetch_conversation(
        &self,
        token: AuthToken,
        id: &ConversationId,
    ) -> Result<Conversation, Error> {
        self.resolve(token)?;
        self.conversations
            .get(id)
            .map(|c| c.meta.clone())
            .ok_or_else(|| Error::NotFound(format!("conversation {}", id)))
    }

    pub fn fetch_comments(
        &self,
        token: AuthToken,
        q: &CommentsQuery,
    ) -> Result<Vec<Comment>, Error> {
        let uid = self.resolve(token)?;
        let convo = self
            .conversations
            .get(&q.conversation_id)
            .ok_or_else(|| Error::NotFound(format!("conversation {}", q.conversation_id)))?;
        let exclude_votes_of = q.not_voted_by_pid.and_then(|sel| convo.lookup_pid(sel, uid));
        Ok(convo
            .comments
            .iter()
            .filter(|c| q.moderation || c.moderation != ModStatus::Rejected)
            .filter(|c| match exclude_votes_of {
                None => true,
                Some(pid) => !convo.votes.contains_key(&(pid, c.tid)),
            })
            .cloned()
            .collect())
    }

    pub fn create_comment(
        &mut self,
        token: AuthToken,
        c: &NewComment,
    ) -> Result<NewCommentResponse, Error> {
        c.validate()?;
        let uid = self.resolve(token)?;
        let convo = self.convo_mut(&c.conversation_id)?;
        let pid = convo.resolve_pid(c.pid, uid);
        let tid = CommentId(convo.next_tid);
        convo.next_tid += 1;
        convo.comments.push(Comment {
            tid,
            txt: c.txt.clone(),
            pid,
            is_seed: c.is_seed,
            is_meta: false,
            // seeds come from the conversation owner and skip moderation
            moderation: match c.is_seed {
                true => ModStatus::Accepted,
                false => ModStatus::Unmoderated,
            },
            created: Some(chrono::Utc::now()),
            quote_src_url: None,
            lang: None,
        });
        convo.votes.insert((pid, tid), c.vote);
        Ok(NewCommentResponse {
            tid,
            current_pid: pid,
        })
    }

    pub fn submit_vote(&mut self, token: AuthToken, v: &Vote) -> Result<(), Error> {
        let uid = self.resolve(token)?;
        let convo = self.convo_mut(&v.conversation_id)?;
        if !convo.comments.iter().any(|c| c.tid == v.tid) {
            return Err(Error::NotFound(format!("comment {}", v.tid.0)));
        }
        let pid = convo.resolve_pid(v.pid, uid);
        convo.votes.insert((pid, v.tid), v.vote);
        Ok(())
    }

    fn check_moderator(&self, uid: UserId, convo: &Conversation) -> Result<(), Error> {
        let user = &self.users[&uid].user;
        match user.site_admin || convo.owner == uid {
            true => Ok(()),
            false => Err(Error::PermissionDenied),
        }
    }

    pub fn modstats(&self, token: AuthToken, id: &ConversationId) -> Result<ModStats, Error> {
        let uid = self.resolve(token)?;
        let convo = self
            .conversations
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("conversation {}", id)))?;
        self.check_moderator(uid, &convo.meta)?;
        let count = |status| {
            convo
                .comments
                .iter()
                .filter(|c| c.moderation == status)
                .count() as i64
        };
        Ok(ModStats {
            comments_accepted: count(ModStatus::Accepted),
            comments_rejected: count(ModStatus::Rejected),
            comments_unmoderated: count(ModStatus::Unmoderated),
            participant_count: convo.participants.len() as i64,
        })
    }

    pub fn moderate(&mut self, token: AuthToken, m: &ModComment) -> Result<(), Error> {
        let uid = self.resolve(token)?;
        let meta = self
            .conversations
            .get(&m.conversation_id)
            .ok_or_else(|| Error::NotFound(format!("conversation {}", m.conversation_id)))?
            .meta
            .clone();
        self.check_moderator(uid, &meta)?;
        let convo = self.convo_mut(&m.conversation_id)?;
        let comment = convo
            .comments
            .iter_mut()
            .find(|c| c.tid == m.tid)
            .ok_or_else(|| Error::NotFound(format!("comment {}", m.tid.0)))?;
        comment.moderation = match m.verdict {
            ModVerdict::Accept => ModStatus::Accepted,
            ModVerdict::Reject => ModStatus::Rejected,
        };
        Ok(())
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}
