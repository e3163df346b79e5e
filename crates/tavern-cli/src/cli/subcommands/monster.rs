use clap::{Args, Subcommand};
use tavern_compendium::ChallengeRating;

/// `tav monster`: search by default, or `show` one monster.
#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct MonsterArgs {
    #[command(subcommand)]
    pub action: Option<MonsterCommands>,
    #[command(flatten)]
    pub search: MonsterSearchArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum MonsterCommands {
    /// Show one monster by name.
    Show { name: String },
}

#[derive(Clone, Debug, Default, Args)]
pub struct MonsterSearchArgs {
    /// Substring of the monster name.
    #[arg(long)]
    pub search: Option<String>,
    /// Creature type (`undead`, `beast`, ...).
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Lowest challenge rating, e.g. `1/4`.
    #[arg(long)]
    pub min_cr: Option<ChallengeRating>,
    #[arg(long)]
    pub max_cr: Option<ChallengeRating>,
}
