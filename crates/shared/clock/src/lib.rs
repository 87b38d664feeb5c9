//! Beacon Clock Infrastructure
//!
//! Time sources used to stamp snapshot captures:
//!
//! - [`SystemClock`]: wall-clock time for production
//! - [`ManualClock`]: frozen time that only moves when told to, for tests
//!
//! ## Usage
//!
//! ```ignore
//! use beacon_clock::{ManualClock, SystemClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::at_millis(1_700_000_000_000);
//! clock.advance(Duration::seconds(5));
//! assert_eq!(clock.now_millis(), 1_700_000_005_000);
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use beacon_ports::Clock;
