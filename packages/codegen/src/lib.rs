//! # Mixin Codegen
//!
//! Turns resolved mixin members into forwarding members delegating to the
//! mixin reference, and renders them as source text.
//!
//! ## Example
//!
//! ```rust
//! use mixin_codegen::{write_members, AllVisible, ForwardingGenerator, Settings};
//! use mixin_model::{Member, Property};
//!
//! let members = vec![Member::property("FirstName", Property::new("string"))];
//! let settings = Settings::default();
//! let generator = ForwardingGenerator::new("_name", &settings, &AllVisible);
//!
//! let generated = generator.generate_all(&members);
//! let code = write_members(&generated, "_name", &settings);
//! assert!(code.contains("get { return _name.FirstName; }"));
//! ```

pub mod generated;
pub mod options;
pub mod strategies;
pub mod visibility;
pub mod writer;

pub use generated::{Accessor, AccessorKind, GeneratedBody, GeneratedMember, Layout, Signature};
pub use options::Settings;
pub use strategies::{
    EventStrategy, ForwardingContext, ForwardingGenerator, ForwardingStrategy, IndexerStrategy,
    MethodStrategy, PropertyStrategy,
};
pub use visibility::{AccessorVisibility, AllVisible, ModuleVisibility};
pub use writer::{write_constructor, write_constructors, write_member, write_members, CodeWriter};

#[cfg(test)]
mod tests;
