mod convo;
pub use convo::{can_administer, ConvoFilter};

mod moderation;
pub use moderation::{moderation_queue, seed_comments};

mod session;
pub use session::{gate, Gate};

mod survey;
pub use survey::SurveyDb;

pub mod api {
    pub use giron_api::*;
}
