use anyhow::Context;
use giron_api::{
    AuthToken, Conversation, ConversationId, ModStats, NewComment, NewConversation, Uuid,
};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long)]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Create a conversation
    CreateConversation {
        /// Topic shown to participants
        topic: String,

        /// Longer description
        #[structopt(default_value = "")]
        description: String,

        /// Create as a draft, hidden from participants
        #[structopt(long)]
        draft: bool,
    },

    /// Seed a comment into a conversation
    SeedComment {
        conversation_id: String,

        /// Statement text; newlines are collapsed to spaces
        text: String,
    },

    /// Print moderation statistics for a conversation
    ModStats { conversation_id: String },
}

fn operator_token() -> anyhow::Result<AuthToken> {
    let tok =
        std::env::var("GIRON_TOKEN").context("retrieving GIRON_TOKEN environment variable")?;
    let tok = Uuid::try_parse(&tok).context("parsing GIRON_TOKEN as an auth token")?;
    Ok(AuthToken(tok))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let client = reqwest::Client::new();

    match opt.cmd {
        Command::CreateConversation {
            topic,
            description,
            draft,
        } => {
            let convo: Conversation = client
                .post(format!("{}/api/v3/conversations", opt.host))
                .json(&NewConversation {
                    topic,
                    description,
                    is_active: true,
                    is_draft: draft,
                })
                .bearer_auth(operator_token()?.0)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            println!("{}", convo.conversation_id);
        }
        Command::SeedComment {
            conversation_id,
            text,
        } => {
            client
                .post(format!("{}/api/v3/comments", opt.host))
                .json(&NewComment::new(
                    ConversationId(conversation_id),
                    &text,
                    true,
                ))
                .bearer_auth(operator_token()?.0)
                .send()
                .await?
                .error_for_status()?;
        }
        Command::ModStats { conversation_id } => {
            let stats: ModStats = client
                .get(format!("{}/api/v3/modstats", opt.host))
                .query(&[("conversation_id", &conversation_id)])
                .bearer_auth(operator_token()?.0)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            println!("participants:         {}", stats.participant_count);
            println!("accepted comments:    {}", stats.comments_accepted);
            println!("rejected comments:    {}", stats.comments_rejected);
            println!("awaiting moderation:  {}", stats.comments_unmoderated);
        }
    }

    Ok(())
}
