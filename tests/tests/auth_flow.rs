use giron_api::{Credentials, Error, NewUser, PwReset, PwResetRequest};
use giron_mock_server::MockServer;

fn new_user(name: &str) -> NewUser {
    NewUser {
        hname: String::from(name),
        email: format!("{}@example.org", name),
        password: format!("{}-pass", name),
    }
}

#[test]
fn registration_opens_a_session() {
    let mut server = MockServer::new();
    let resp = server.register(new_user("alice")).unwrap();
    let me = server.whoami(resp.token).unwrap();
    assert_eq!(me.uid, resp.user.uid);
    assert_eq!(me.email, "alice@example.org");
    assert!(!me.site_admin);
}

#[test]
fn emails_are_unique() {
    let mut server = MockServer::new();
    server.register(new_user("alice")).unwrap();
    assert_eq!(
        server.register(new_user("alice")).unwrap_err(),
        Error::EmailAlreadyUsed(String::from("alice@example.org"))
    );
}

#[test]
fn login_checks_the_password() {
    let mut server = MockServer::new();
    server.register(new_user("alice")).unwrap();
    assert_eq!(
        server
            .login(Credentials {
                email: String::from("alice@example.org"),
                password: String::from("wrong"),
            })
            .unwrap_err(),
        Error::InvalidCredentials
    );
    let resp = server
        .login(Credentials {
            email: String::from("alice@example.org"),
            password: String::from("alice-pass"),
        })
        .unwrap();
    assert!(server.whoami(resp.token).is_ok());
}

#[test]
fn logout_invalidates_the_token() {
    let mut server = MockServer::new();
    let resp = server.register(new_user("alice")).unwrap();
    server.logout(resp.token).unwrap();
    assert_eq!(server.whoami(resp.token).unwrap_err(), Error::Unauthorized);
}

#[test]
fn password_reset_flow() {
    let mut server = MockServer::new();
    let old_session = server.register(new_user("alice")).unwrap();

    // unknown addresses get no token (the endpoint still reports success)
    assert!(server
        .request_pw_reset(PwResetRequest {
            email: String::from("nobody@example.org"),
        })
        .is_none());

    let token = server
        .request_pw_reset(PwResetRequest {
            email: String::from("alice@example.org"),
        })
        .unwrap();

    assert_eq!(
        server
            .set_password(PwReset {
                pwresettoken: String::from("bogus"),
                new_password: String::from("new-pass"),
            })
            .unwrap_err(),
        Error::BadToken
    );

    server
        .set_password(PwReset {
            pwresettoken: token.clone(),
            new_password: String::from("new-pass"),
        })
        .unwrap();

    // previous sessions die with the old password, and the token is one-shot
    assert_eq!(
        server.whoami(old_session.token).unwrap_err(),
        Error::Unauthorized
    );
    assert_eq!(
        server
            .set_password(PwReset {
                pwresettoken: token,
                new_password: String::from("again"),
            })
            .unwrap_err(),
        Error::BadToken
    );

    assert!(server
        .login(Credentials {
            email: String::from("alice@example.org"),
            password: String::from("new-pass"),
        })
        .is_ok());
}
