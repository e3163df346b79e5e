use clap::{Args, Subcommand};

/// `tav spell`: search by default, or `show` one spell.
#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct SpellArgs {
    #[command(subcommand)]
    pub action: Option<SpellCommands>,
    #[command(flatten)]
    pub search: SpellSearchArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SpellCommands {
    /// Show one spell by name.
    Show { name: String },
}

#[derive(Clone, Debug, Default, Args)]
pub struct SpellSearchArgs {
    /// Substring of the spell name.
    #[arg(long)]
    pub search: Option<String>,
    /// Spell level (0 for cantrips).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub level: Option<u8>,
    #[arg(long)]
    pub school: Option<String>,
    #[arg(long)]
    pub class: Option<String>,
}
