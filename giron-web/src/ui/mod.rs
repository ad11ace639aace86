mod admin;
pub use admin::Admin;

mod app;
pub use app::{App, AppMsg};

mod comment_card;
pub use comment_card::CommentCard;

mod conversations;
pub use conversations::Conversations;

mod gate;
pub use gate::RedirectToSignIn;

mod loading;
pub use loading::{ErrorAlert, Loading};

mod pwreset;
pub use pwreset::{PwReset, PwResetRequest};

mod signin;
pub use signin::SignIn;

mod signup;
pub use signup::SignUp;

mod survey;
pub use survey::Survey;
