//! Scroll physics for dashscroll
//!
//! Everything here is a pure function of its inputs. The gesture engine owns
//! all state and decides when each piece of physics applies.

mod boundary;
mod decay;
mod rubber_band;

pub use boundary::*;
pub use decay::*;
pub use rubber_band::*;
