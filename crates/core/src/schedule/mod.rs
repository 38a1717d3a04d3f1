//! Schedule derivation: preferences in, dated post slots out.
//!
//! The builder is pure. The generation moment and the randomness used for
//! decorative display times are injected by the caller.

pub mod builder;
pub mod clock;
pub mod random;

pub use builder::{build_schedule, display_time, plan_dates, SlotPattern};
pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{RandomSource, RngSource};
