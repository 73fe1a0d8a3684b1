//! Community subcommand implementations.

mod new_topic;
mod post;
mod profiles;
mod replies;
mod topics;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Context;

#[derive(Args, Debug)]
pub struct CommunityCommand {
    #[command(subcommand)]
    pub command: CommunitySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommunitySubcommand {
    /// List mentor and mentee profiles
    Profiles(profiles::ProfilesArgs),

    /// List forum topics
    Topics(topics::TopicsArgs),

    /// Open a new forum topic
    NewTopic(new_topic::NewTopicArgs),

    /// List the replies in a topic
    Replies(replies::RepliesArgs),

    /// Post a reply to a topic
    Post(post::PostArgs),
}

pub async fn handle(cmd: CommunityCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        CommunitySubcommand::Profiles(args) => profiles::run(args, ctx).await,
        CommunitySubcommand::Topics(args) => topics::run(args, ctx).await,
        CommunitySubcommand::NewTopic(args) => new_topic::run(args, ctx).await,
        CommunitySubcommand::Replies(args) => replies::run(args, ctx).await,
        CommunitySubcommand::Post(args) => post::run(args, ctx).await,
    }
}
