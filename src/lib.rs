//! Brick Tetris: a terminal falling-block game.
//!
//! The crate splits into a pure core (engine FSM, field, pieces, scoring) and
//! thin terminal layers around it. Renderers only ever see a `GameSnapshot`;
//! input only ever produces a `Command`.

pub mod core;
pub mod input;
pub mod storage;
pub mod term;
pub mod types;
