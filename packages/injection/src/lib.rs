//! # Mixin Injection
//!
//! Threads the mixin reference through the target's constructors:
//!
//! - every instance constructor gets an optional parameter for the mixin
//! - entry-point constructors assign it to the reference
//! - `this(...)` initializers pass it on to the constructor they call
//! - a class without instance constructors gets one taking just the mixin
//!
//! Running the injection again on its own output changes nothing.

pub mod injector;
pub mod naming;

pub use injector::{
    all_constructors_have_parameter, inject, inject_into, ConstructorInjector, Injection,
    InjectionReport,
};
pub use naming::parameter_name;
