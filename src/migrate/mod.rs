//! Migration procedures.
//!
//! Two independent policies walk the same package list:
//!
//! - [`convert_packages`] moves packages to CommonJS with `Node` resolution.
//! - [`verify_packages`] enforces `NodeNext` and only writes what it fixes.
//!
//! The two target different conventions and are not meant to be composed.

mod convert;
mod report;
mod verify;

pub use convert::{convert_packages, COMMONJS_MODULE, NODE_RESOLUTION, OUT_DIR};
pub use report::{RunOptions, RunSummary};
pub use verify::{verify_packages, NODENEXT};
