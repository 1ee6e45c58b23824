//! Domain logic - the version value and the bump rules, free of any I/O

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::{BumpOperation, BumpRequest};
pub use prerelease::{Identifier, PreRelease};
pub use version::Version;
