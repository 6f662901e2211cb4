//! Proposes idiomatic identifier names for a typed declaration site, based
//! on the declared type's textual name alone.
//!
//! The engine is a pure string transformation: it tokenizes a type name into
//! case-delimited parts, generates abbreviation and part-combination
//! candidates, applies casing and pluralization, merges the well-known type
//! mappings, and returns a de-duplicated list ranked longest first.
//!
//! ```
//! use moniker_engine::{NameProposer, ProposalOptions};
//!
//! let proposer = NameProposer::default();
//! let candidates = proposer
//!     .propose("CancellationToken", &ProposalOptions::default())
//!     .unwrap();
//! assert_eq!(candidates, ["cancellationToken", "cancellation", "token", "ct"]);
//! ```

mod error;
mod parts;
mod propose;
mod table;

pub use error::{Error, Result};
pub use parts::{
    abbreviate_uppercase, has_multiple_parts, is_interface_name, split_name_parts,
    strip_interface_prefix,
};
pub use propose::{NameProposer, ProposalOptions};
pub use table::WellKnownTypes;
