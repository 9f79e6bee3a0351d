//! Deterministic simulation module
//!
//! All disc physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by disc index)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Contact, disc_contact, elastic_impulse, resolve_collisions, resolve_pair};
pub use state::{Disc, DiscView, Placement, Simulation};
