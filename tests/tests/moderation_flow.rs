use giron_api::{
    AuthToken, CommentsQuery, ConversationId, Error, ModComment, ModVerdict, NewComment,
    NewConversation, NewUser, UserId,
};
use giron_mock_server::MockServer;

fn new_user(name: &str) -> NewUser {
    NewUser {
        hname: String::from(name),
        email: format!("{}@example.org", name),
        password: format!("{}-pass", name),
    }
}

fn setup() -> (MockServer, AuthToken, ConversationId, AuthToken, UserId) {
    let mut server = MockServer::new();
    let owner = server.register(new_user("owner")).unwrap();
    let convo = server
        .create_conversation(
            owner.token,
            NewConversation {
                topic: String::from("Moderated conversation"),
                description: String::new(),
                is_active: true,
                is_draft: false,
            },
        )
        .unwrap();
    let participant = server.register(new_user("participant")).unwrap();
    (
        server,
        owner.token,
        convo.conversation_id,
        participant.token,
        participant.user.uid,
    )
}

#[test]
fn seeds_skip_moderation() {
    let (mut server, owner, convo, _, _) = setup();
    server
        .create_comment(owner, &NewComment::new(convo.clone(), "a seed", true))
        .unwrap();
    let stats = server.modstats(owner, &convo).unwrap();
    assert_eq!(stats.comments_accepted, 1);
    assert_eq!(stats.comments_unmoderated, 0);
}

#[test]
fn participant_comments_wait_for_a_verdict() {
    let (mut server, owner, convo, participant, _) = setup();
    let resp = server
        .create_comment(participant, &NewComment::new(convo.clone(), "a take", false))
        .unwrap();
    assert_eq!(server.modstats(owner, &convo).unwrap().comments_unmoderated, 1);

    // the console adjusts its counts locally and must agree with a recount
    let mut local = server.modstats(owner, &convo).unwrap();
    server
        .moderate(
            owner,
            &ModComment {
                conversation_id: convo.clone(),
                tid: resp.tid,
                verdict: ModVerdict::Accept,
            },
        )
        .unwrap();
    local.record_verdict(ModVerdict::Accept);
    assert_eq!(local, server.modstats(owner, &convo).unwrap());
}

#[test]
fn rejected_comments_are_hidden_from_participants() {
    let (mut server, owner, convo, participant, _) = setup();
    let resp = server
        .create_comment(participant, &NewComment::new(convo.clone(), "off-topic", false))
        .unwrap();
    server
        .moderate(
            owner,
            &ModComment {
                conversation_id: convo.clone(),
                tid: resp.tid,
                verdict: ModVerdict::Reject,
            },
        )
        .unwrap();

    let participant_view = server
        .fetch_comments(participant, &CommentsQuery::all_of(convo.clone()))
        .unwrap();
    assert!(!participant_view.iter().any(|c| c.tid == resp.tid));

    let moderator_view = server
        .fetch_comments(owner, &CommentsQuery::moderation_of(convo))
        .unwrap();
    assert!(moderator_view.iter().any(|c| c.tid == resp.tid));
}

#[test]
fn only_the_owner_or_a_site_admin_moderates() {
    let (mut server, owner, convo, participant, participant_uid) = setup();
    let resp = server
        .create_comment(participant, &NewComment::new(convo.clone(), "a take", false))
        .unwrap();
    let verdict = ModComment {
        conversation_id: convo.clone(),
        tid: resp.tid,
        verdict: ModVerdict::Accept,
    };

    assert_eq!(
        server.modstats(participant, &convo).unwrap_err(),
        Error::PermissionDenied
    );
    assert_eq!(
        server.moderate(participant, &verdict).unwrap_err(),
        Error::PermissionDenied
    );

    server.test_make_site_admin(participant_uid);
    assert!(server.modstats(participant, &convo).is_ok());
    assert!(server.moderate(participant, &verdict).is_ok());

    // and the owner could all along
    assert!(server.modstats(owner, &convo).is_ok());
}
