//! Time-driven animation
//!
//! - [`DropCycle`] - the repeating ease-out drop, a pure function of time
//! - [`BallAnimator`] - applies it to the ball and feeds time to everything else
//! - [`Clock`] - where "elapsed seconds" comes from

pub mod animator;
pub mod clock;
pub mod drop_cycle;

pub use animator::BallAnimator;
pub use clock::{Clock, ManualClock, WallClock};
pub use drop_cycle::{DropCycle, DropPhase};
