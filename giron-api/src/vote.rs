use crate::{CommentId, ConversationId, Pid};

/// Agent id sent along with votes and comments; always 1 for this front-end.
pub const DEFAULT_AGID: i64 = 1;

/// Ternary reaction to a comment.
///
/// The wire encoding is inherited from the backend and is inverted from what
/// one would guess: agree is -1 and disagree is 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VoteSign {
    Agree,
    Disagree,
    Pass,
}

impl VoteSign {
    pub fn wire(self) -> i8 {
        match self {
            VoteSign::Agree => -1,
            VoteSign::Disagree => 1,
            VoteSign::Pass => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VoteSign::Agree => "Agree",
            VoteSign::Disagree => "Disagree",
            VoteSign::Pass => "Pass",
        }
    }
}

impl serde::Serialize for VoteSign {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.wire())
    }
}

impl<'de> serde::Deserialize<'de> for VoteSign {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<VoteSign, D::Error> {
        match i8::deserialize(deserializer)? {
            -1 => Ok(VoteSign::Agree),
            1 => Ok(VoteSign::Disagree),
            0 => Ok(VoteSign::Pass),
            v => Err(serde::de::Error::custom(format!(
                "vote must be -1, 0 or 1, got {}",
                v
            ))),
        }
    }
}

/// Body of `POST api/v3/votes`. Write-only: nothing of it is kept
/// client-side after the acknowledgment.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Vote {
    pub pid: Pid,
    pub conversation_id: ConversationId,
    pub agid: i64,
    pub weight: i64,
    pub vote: VoteSign,
    pub tid: CommentId,
}

impl Vote {
    pub fn new(conversation_id: ConversationId, tid: CommentId, vote: VoteSign) -> Vote {
        Vote {
            pid: Pid::Mine,
            conversation_id,
            agid: DEFAULT_AGID,
            weight: 0,
            vote,
            tid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_is_inverted() {
        assert_eq!(VoteSign::Agree.wire(), -1);
        assert_eq!(VoteSign::Disagree.wire(), 1);
        assert_eq!(VoteSign::Pass.wire(), 0);
    }

    #[test]
    fn vote_sign_roundtrips_through_json() {
        for sign in [VoteSign::Agree, VoteSign::Disagree, VoteSign::Pass] {
            let json = serde_json::to_string(&sign).unwrap();
            assert_eq!(serde_json::from_str::<VoteSign>(&json).unwrap(), sign);
        }
        assert!(serde_json::from_str::<VoteSign>("2").is_err());
    }

    #[test]
    fn vote_body_has_the_documented_shape() {
        let v = Vote::new(
            ConversationId(String::from("7xjmrccpnn")),
            CommentId(3),
            VoteSign::Agree,
        );
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["pid"], "mypid");
        assert_eq!(json["conversation_id"], "7xjmrccpnn");
        assert_eq!(json["agid"], 1);
        assert_eq!(json["weight"], 0);
        assert_eq!(json["vote"], -1);
        assert_eq!(json["tid"], 3);
    }
}
