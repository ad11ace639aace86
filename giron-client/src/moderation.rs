use std::sync::Arc;

use crate::api::{Comment, ModStatus};

/// Comments still awaiting a moderator verdict, in fetch order.
pub fn moderation_queue(comments: &[Arc<Comment>]) -> Vec<Arc<Comment>> {
    comments
        .iter()
        .filter(|c| c.moderation == ModStatus::Unmoderated)
        .cloned()
        .collect()
}

/// Moderator-seeded comments, in fetch order.
pub fn seed_comments(comments: &[Arc<Comment>]) -> Vec<Arc<Comment>> {
    comments.iter().filter(|c| c.is_seed).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentId, ParticipantId};

    fn comment(tid: i64, is_seed: bool, moderation: ModStatus) -> Arc<Comment> {
        Arc::new(Comment {
            tid: CommentId(tid),
            txt: format!("comment {}", tid),
            pid: ParticipantId(1),
            is_seed,
            is_meta: false,
            moderation,
            created: None,
            quote_src_url: None,
            lang: None,
        })
    }

    #[test]
    fn queue_and_seeds_filter_on_the_right_flags() {
        let comments = vec![
            comment(1, true, ModStatus::Accepted),
            comment(2, false, ModStatus::Unmoderated),
            comment(3, false, ModStatus::Rejected),
            comment(4, true, ModStatus::Unmoderated),
        ];
        assert_eq!(
            moderation_queue(&comments)
                .iter()
                .map(|c| c.tid.0)
                .collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(
            seed_comments(&comments)
                .iter()
                .map(|c| c.tid.0)
                .collect::<Vec<_>>(),
            vec![1, 4]
        );
    }
}
