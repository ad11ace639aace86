use std::{collections::HashSet, sync::Arc};

use crate::api::{Comment, CommentId, ConversationId, ParticipantId};

/// The survey view's two disjoint collections of comments. A comment is in
/// exactly one of them at any time, and only ever moves from `unvoted` to
/// `voted` (on a vote acknowledgment or on local authorship).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SurveyDb {
    pub conversation_id: ConversationId,

    /// Learned from the first comment submission acknowledgment
    pub pid: Option<ParticipantId>,

    pub unvoted: Vec<Arc<Comment>>,
    pub voted: Vec<Arc<Comment>>,
}

impl SurveyDb {
    pub fn stub(conversation_id: ConversationId) -> SurveyDb {
        SurveyDb {
            conversation_id,
            pid: None,
            unvoted: Vec::new(),
            voted: Vec::new(),
        }
    }

    /// Builds the two collections from the results of the two initial
    /// fetches: everything from `all` whose tid is not in `unvoted` was
    /// already voted on (or authored) by the current participant. Each such
    /// comment lands in `voted` exactly once, in `all` fetch order.
    pub fn from_fetches(
        conversation_id: ConversationId,
        unvoted: Vec<Comment>,
        all: Vec<Comment>,
    ) -> SurveyDb {
        let unvoted_ids: HashSet<CommentId> = unvoted.iter().map(|c| c.tid).collect();
        let mut placed: HashSet<CommentId> = HashSet::new();
        let voted = all
            .into_iter()
            .filter(|c| !unvoted_ids.contains(&c.tid) && placed.insert(c.tid))
            .map(Arc::new)
            .collect();
        SurveyDb {
            conversation_id,
            pid: None,
            unvoted: unvoted.into_iter().map(Arc::new).collect(),
            voted,
        }
    }

    /// Reclassifies a comment after its vote was acknowledged.
    pub fn record_vote(&mut self, tid: CommentId) {
        match self.unvoted.iter().position(|c| c.tid == tid) {
            None => tracing::warn!(?tid, "got vote acknowledgment for comment not in unvoted"),
            Some(idx) => {
                let c = self.unvoted.remove(idx);
                self.voted.insert(0, c);
            }
        }
    }

    /// Prepends a comment the participant just authored. Authoring counts as
    /// agreeing, so it goes straight to the voted collection.
    pub fn push_own(&mut self, comment: Comment) {
        self.pid = Some(comment.pid);
        self.unvoted.retain(|c| c.tid != comment.tid);
        self.voted.insert(0, Arc::new(comment));
    }

    pub fn is_empty(&self) -> bool {
        self.unvoted.is_empty() && self.voted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ModStatus;

    fn comment(tid: i64) -> Comment {
        Comment {
            tid: CommentId(tid),
            txt: format!("comment {}", tid),
            pid: ParticipantId(1),
            is_seed: false,
            is_meta: false,
            moderation: ModStatus::Unmoderated,
            created: None,
            quote_src_url: None,
            lang: None,
        }
    }

    fn tids(comments: &[Arc<Comment>]) -> Vec<i64> {
        comments.iter().map(|c| c.tid.0).collect()
    }

    #[test]
    fn partition_excludes_unvoted_ids_exactly_once() {
        let unvoted = vec![comment(1), comment(3)];
        let all = vec![comment(1), comment(2), comment(3), comment(4), comment(2)];
        let db = SurveyDb::from_fetches(ConversationId::stub(), unvoted, all);
        assert_eq!(tids(&db.unvoted), vec![1, 3]);
        // 2 appears twice in the all fetch but only once in voted
        assert_eq!(tids(&db.voted), vec![2, 4]);
    }

    #[test]
    fn partition_of_empty_fetches_is_empty() {
        let db = SurveyDb::from_fetches(ConversationId::stub(), Vec::new(), Vec::new());
        assert!(db.is_empty());
    }

    #[test]
    fn voted_comment_leaves_the_unvoted_collection() {
        let unvoted = vec![comment(1), comment(2)];
        let all = vec![comment(1), comment(2), comment(3)];
        let mut db = SurveyDb::from_fetches(ConversationId::stub(), unvoted, all);
        db.record_vote(CommentId(1));
        assert_eq!(tids(&db.unvoted), vec![2]);
        assert_eq!(tids(&db.voted), vec![1, 3]);
        // acknowledging twice must not duplicate it in voted
        db.record_vote(CommentId(1));
        assert_eq!(tids(&db.voted), vec![1, 3]);
    }

    #[test]
    fn own_comment_is_prepended_to_voted() {
        let mut db = SurveyDb::from_fetches(
            ConversationId::stub(),
            vec![comment(1)],
            vec![comment(1), comment(2)],
        );
        let mut own = comment(10);
        own.pid = ParticipantId(42);
        db.push_own(own);
        assert_eq!(tids(&db.voted), vec![10, 2]);
        assert_eq!(db.pid, Some(ParticipantId(42)));
    }
}
