pub mod dispatch;
pub mod entity;
pub mod form;
pub mod game;
pub mod links;
pub mod monster;
pub mod shared;
pub mod spell;
