//! Core engine plumbing: RNG, clock, configuration, errors.
//!
//! Nothing here knows about themes or cards. The engine and catalog are
//! configured through these types rather than global state.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, MismatchPenalty};
pub use error::StoreError;
pub use rng::GameRng;
