//! # Mixin Model
//!
//! The data model shared by every stage of mixin composition:
//!
//! - **Members**: properties, indexers, methods and events with the attributes
//!   that decide identity and forwarding
//! - **Classes**: a type's own member surface plus a handle to its base class,
//!   stored in a [`ClassTable`] arena
//! - **Mixin references**: a named binding in the target holding the mixin
//! - **Constructors**: the declarations constructor injection rewrites
//! - **Reader**: builds class graphs from JSON type descriptions, filtering
//!   members the viewing class cannot see
//!
//! ```rust
//! use mixin_model::TypeReader;
//! use mixin_model::ClassTable;
//!
//! let json = r#"{
//!     "types": [
//!         { "name": "Name", "members": [ { "kind": "property", "name": "FirstName", "type": "string" } ] },
//!         { "name": "Person", "fields": [ { "name": "_name", "type": "Name" } ] }
//!     ]
//! }"#;
//!
//! let mut reader = TypeReader::from_json(json).unwrap();
//! let mut table = ClassTable::new();
//! let person = reader.read_target(&mut table, "Person").unwrap();
//! let reference = reader.read_mixin_reference(&mut table, person, "_name").unwrap().unwrap();
//! assert_eq!(table.get(reference.class).members.len(), 1);
//! ```

pub mod accessibility;
pub mod class;
pub mod constructor;
pub mod documentation;
pub mod error;
pub mod keywords;
pub mod member;
pub mod reader;
pub mod reference;
pub mod type_ref;

pub use accessibility::Accessibility;
pub use class::{Class, ClassId, ClassTable, Field, Interface};
pub use constructor::{
    Argument, Constructor, ConstructorInitializer, ConstructorParameter, InitializerKind,
};
pub use documentation::Documentation;
pub use error::{ModelError, ModelResult};
pub use keywords::escape_identifier;
pub use member::{Event, Indexer, Member, MemberKind, Method, Parameter, Property, INDEXER_NAME};
pub use reader::{Description, Perspective, TypeReader};
pub use reference::MixinReference;
