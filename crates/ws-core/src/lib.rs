//! ws-core: shared foundation for wellsum.
//!
//! Contains:
//! - units (uom SI types, constructors and report unit scaling)
//! - numeric (Real + tolerances + float helpers)
//! - error (argument errors shared by the helpers)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WsError, WsResult};
pub use numeric::*;
pub use units::*;
