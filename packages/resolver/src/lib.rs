//! # Mixin Resolver
//!
//! Decides which members a target class has to synthesize to expose a mixin.
//!
//! - [`MemberComparer`]: structural member identity (name, kind, method signature)
//! - [`Mixer`]: the inclusion algorithm over the target's and the mixin's
//!   full member surfaces
//! - [`interfaces_to_add`]: interfaces the child should list after mixing in

pub mod comparer;
pub mod interfaces;
pub mod mixer;

pub use comparer::{is_same, IndexerPolicy, MemberComparer};
pub use interfaces::interfaces_to_add;
pub use mixer::{include, Mixer};
