use giron_api::{
    Comment, CommentId, Conversation, ConversationId, ModStatus, ParticipantId, UserId,
};
use rand::Rng;

const NUM_CONVERSATIONS: usize = 3;
const NUM_SEEDS: usize = 5;
const NUM_COMMENTS: usize = 40;
const NUM_PARTICIPANTS: i64 = 12;

fn gen_comment(rng: &mut impl Rng, tid: usize) -> Comment {
    let is_seed = tid < NUM_SEEDS;
    Comment {
        tid: CommentId(tid as i64),
        txt: lipsum::lipsum_words(rng.gen_range(5..25)),
        pid: ParticipantId(rng.gen_range(0..NUM_PARTICIPANTS)),
        is_seed,
        is_meta: false,
        moderation: match is_seed {
            true => ModStatus::Accepted,
            false => match rng.gen_range(0..3) {
                0 => ModStatus::Unmoderated,
                1 => ModStatus::Accepted,
                _ => ModStatus::Rejected,
            },
        },
        created: None,
        quote_src_url: None,
        lang: None,
    }
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut out = Vec::new();
    for i in 0..NUM_CONVERSATIONS {
        let convo = Conversation {
            conversation_id: ConversationId(format!("c{:09}", i + 1)),
            topic: lipsum::lipsum_title(),
            description: lipsum::lipsum_words(12),
            owner: UserId(1),
            participant_count: NUM_PARTICIPANTS,
            is_active: true,
            is_draft: false,
            parent_url: None,
            created: None,
        };
        let comments = (0..NUM_COMMENTS)
            .map(|tid| gen_comment(&mut rng, tid))
            .collect::<Vec<_>>();
        out.push(serde_json::json!({
            "conversation": convo,
            "comments": comments,
        }));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&out).expect("serializing fixture")
    );
}
