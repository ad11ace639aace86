/// Moderator verdict on a submitted comment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModVerdict {
    Accept,
    Reject,
}

/// Response of `GET api/v3/modstats`. All counts are computed server-side;
/// the console only displays and locally adjusts them after a verdict.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ModStats {
    pub comments_accepted: i64,
    pub comments_rejected: i64,
    pub comments_unmoderated: i64,
    pub participant_count: i64,
}

impl ModStats {
    /// Adjusts the counts after a verdict was acknowledged, so the console
    /// does not need to refetch.
    pub fn record_verdict(&mut self, verdict: ModVerdict) {
        self.comments_unmoderated -= 1;
        match verdict {
            ModVerdict::Accept => self.comments_accepted += 1,
            ModVerdict::Reject => self.comments_rejected += 1,
        }
    }

    /// Seeded comments skip moderation and count as accepted right away
    pub fn record_seed(&mut self) {
        self.comments_accepted += 1;
    }
}
