mod entity;
mod game;
mod monster;
mod spell;

pub use entity::{EntityCommands, EntityFieldArgs};
pub use game::GameCommands;
pub use monster::{MonsterArgs, MonsterCommands, MonsterSearchArgs};
pub use spell::{SpellArgs, SpellCommands, SpellSearchArgs};
