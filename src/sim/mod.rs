//! Simulation module
//!
//! Shape kinematics and the tick loop. This module must stay host-free:
//! - Drawing only through `renderer::Surface`
//! - Scheduling only through `platform::Timer`
//! - Seeded RNG only
//! - Stable iteration order (insertion order)

pub mod shape;
pub mod simulator;
pub mod spawn;

pub use shape::{Direction, Shape, Step};
pub use simulator::Simulator;
pub use spawn::{SizePolicy, radius_for_hold};
