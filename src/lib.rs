#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use player::*;
pub use ship::*;
