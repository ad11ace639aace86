use giron_api::{
    AuthToken, Comment, CommentId, CommentsQuery, ConversationId, ModStatus, NewComment,
    NewConversation, NewUser, Vote, VoteSign,
};
use giron_client::SurveyDb;
use giron_mock_server::MockServer;

fn new_user(name: &str) -> NewUser {
    NewUser {
        hname: String::from(name),
        email: format!("{}@example.org", name),
        password: format!("{}-pass", name),
    }
}

/// One conversation with four seed comments, an owner and a participant
fn setup() -> (MockServer, AuthToken, ConversationId, AuthToken) {
    let mut server = MockServer::new();
    let owner = server.register(new_user("owner")).unwrap();
    let convo = server
        .create_conversation(
            owner.token,
            NewConversation {
                topic: String::from("Test conversation"),
                description: String::from("A conversation for tests"),
                is_active: true,
                is_draft: false,
            },
        )
        .unwrap();
    for i in 0..4 {
        server
            .create_comment(
                owner.token,
                &NewComment::new(convo.conversation_id.clone(), &format!("seed {}", i), true),
            )
            .unwrap();
    }
    let participant = server.register(new_user("participant")).unwrap();
    (server, owner.token, convo.conversation_id, participant.token)
}

fn fetch_both(
    server: &MockServer,
    token: AuthToken,
    convo: &ConversationId,
) -> (Vec<Comment>, Vec<Comment>) {
    let unvoted = server
        .fetch_comments(token, &CommentsQuery::unvoted_of(convo.clone()))
        .unwrap();
    let all = server
        .fetch_comments(token, &CommentsQuery::all_of(convo.clone()))
        .unwrap();
    (unvoted, all)
}

fn tids(comments: &[std::sync::Arc<Comment>]) -> Vec<i64> {
    comments.iter().map(|c| c.tid.0).collect()
}

#[test]
fn already_voted_comments_end_up_in_voted_exactly_once() {
    let (mut server, _, convo, participant) = setup();
    server
        .submit_vote(
            participant,
            &Vote::new(convo.clone(), CommentId(1), VoteSign::Disagree),
        )
        .unwrap();

    let (unvoted, all) = fetch_both(&server, participant, &convo);
    let db = SurveyDb::from_fetches(convo, unvoted, all);
    assert_eq!(tids(&db.unvoted), vec![0, 2, 3]);
    assert_eq!(tids(&db.voted), vec![1]);
}

#[test]
fn acknowledged_vote_removes_the_comment_from_unvoted() {
    let (mut server, _, convo, participant) = setup();
    let (unvoted, all) = fetch_both(&server, participant, &convo);
    let mut db = SurveyDb::from_fetches(convo.clone(), unvoted, all);
    assert_eq!(tids(&db.unvoted), vec![0, 1, 2, 3]);

    server
        .submit_vote(
            participant,
            &Vote::new(convo.clone(), CommentId(2), VoteSign::Agree),
        )
        .unwrap();
    db.record_vote(CommentId(2));
    assert!(!db.unvoted.iter().any(|c| c.tid == CommentId(2)));
    assert_eq!(tids(&db.voted), vec![2]);

    // the server agrees on the next fetch
    let (unvoted, _) = fetch_both(&server, participant, &convo);
    assert!(!unvoted.iter().any(|c| c.tid == CommentId(2)));
}

#[test]
fn submitted_comment_text_is_whitespace_normalized() {
    let (mut server, _, convo, participant) = setup();
    let comment = NewComment::new(convo.clone(), "line1\nline2", false);
    let resp = server.create_comment(participant, &comment).unwrap();

    let all = server
        .fetch_comments(participant, &CommentsQuery::all_of(convo))
        .unwrap();
    let stored = all.iter().find(|c| c.tid == resp.tid).unwrap();
    assert_eq!(stored.txt, "line1 line2");
}

#[test]
fn own_comment_is_prepended_to_voted_and_never_served_as_unvoted() {
    let (mut server, _, convo, participant) = setup();
    let (unvoted, all) = fetch_both(&server, participant, &convo);
    let mut db = SurveyDb::from_fetches(convo.clone(), unvoted, all);

    let body = NewComment::new(convo.clone(), "my own take", false);
    let resp = server.create_comment(participant, &body).unwrap();
    db.push_own(Comment {
        tid: resp.tid,
        txt: body.txt.clone(),
        pid: resp.current_pid,
        is_seed: false,
        is_meta: false,
        moderation: ModStatus::Unmoderated,
        created: None,
        quote_src_url: None,
        lang: None,
    });
    assert_eq!(db.voted[0].tid, resp.tid);
    assert_eq!(db.pid, Some(resp.current_pid));

    // authoring counts as voting, so it is excluded server-side too
    let (unvoted, all) = fetch_both(&server, participant, &convo);
    assert!(!unvoted.iter().any(|c| c.tid == resp.tid));
    assert!(all.iter().any(|c| c.tid == resp.tid));
}

#[test]
fn initial_fetch_failure_leaves_both_collections_empty() {
    let (server, _, _, participant) = setup();
    let missing = ConversationId(String::from("nope"));
    assert!(server
        .fetch_comments(participant, &CommentsQuery::all_of(missing.clone()))
        .is_err());
    let db = SurveyDb::stub(missing);
    assert!(db.is_empty());
}
