//! # Constructor Injection
//!
//! Runs in two phases over the target's constructor set:
//!
//! 1. every instance constructor lacking the mixin parameter gets it appended
//!    with a `null` default. Constructors without an initializer, or with a
//!    `base(...)` one, also assign it to the reference.
//! 2. every `this(...)` initializer that does not pass the parameter yet is
//!    extended with it. The argument is named when the called constructor
//!    declares the parameter behind ones the call leaves to their defaults,
//!    or when several constructors could take the call.
//!
//! Constructors already declaring the parameter and initializers already
//! passing it are left untouched, which makes the whole operation idempotent.

use crate::naming::parameter_name;
use mixin_model::{
    Argument, ClassId, ClassTable, Constructor, ConstructorInitializer, ConstructorParameter,
    InitializerKind, MixinReference,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default value of injected parameters, so existing call sites keep compiling
const NO_VALUE: &str = "null";

/// What an injection run changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionReport {
    pub parameter_name: String,
    pub parameters_added: usize,
    pub assignments_added: usize,
    pub initializers_rewritten: usize,
    pub constructor_synthesized: bool,
}

impl InjectionReport {
    pub fn is_unchanged(&self) -> bool {
        self.parameters_added == 0
            && self.assignments_added == 0
            && self.initializers_rewritten == 0
            && !self.constructor_synthesized
    }
}

/// Rewritten constructor set plus a summary of the changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub constructors: Vec<Constructor>,
    pub report: InjectionReport,
}

pub struct ConstructorInjector<'a> {
    reference: &'a MixinReference,
    parameter: String,
}

impl<'a> ConstructorInjector<'a> {
    pub fn new(reference: &'a MixinReference) -> Self {
        Self {
            reference,
            parameter: parameter_name(&reference.name),
        }
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter
    }

    /// `<reference> = <parameter>;`
    pub fn assignment(&self) -> String {
        if self.reference.name == self.parameter {
            format!("this.{} = {};", self.reference.name, self.parameter)
        } else {
            format!("{} = {};", self.reference.name, self.parameter)
        }
    }

    #[instrument(skip_all, fields(reference = %self.reference.name, parameter = %self.parameter))]
    pub fn inject(&self, constructors: &[Constructor]) -> Injection {
        let mut report = InjectionReport {
            parameter_name: self.parameter.clone(),
            ..InjectionReport::default()
        };
        let mut constructors = constructors.to_vec();

        if !constructors.iter().any(|c| !c.is_static) {
            info!("No instance constructor, synthesizing one");
            constructors.push(self.synthesized());
            report.constructor_synthesized = true;
            return Injection {
                constructors,
                report,
            };
        }

        for constructor in constructors.iter_mut().filter(|c| !c.is_static) {
            self.add_parameter(constructor, &mut report);
        }

        // Callees are looked up in the set after phase 1, so their parameter
        // positions include the one just added.
        let callees = constructors.clone();
        for (index, constructor) in constructors.iter_mut().enumerate() {
            if constructor.is_static {
                continue;
            }
            if let Some(initializer) = constructor.initializer.as_mut() {
                if initializer.kind == InitializerKind::This
                    && self.rewrite_initializer(initializer, index, &callees)
                {
                    report.initializers_rewritten += 1;
                }
            }
        }

        info!(
            parameters = report.parameters_added,
            assignments = report.assignments_added,
            initializers = report.initializers_rewritten,
            "Injected mixin parameter"
        );

        Injection {
            constructors,
            report,
        }
    }

    fn synthesized(&self) -> Constructor {
        Constructor::new(vec![ConstructorParameter::required(
            &self.parameter,
            self.reference.type_name.clone(),
        )])
        .with_statement(self.assignment())
    }

    fn add_parameter(&self, constructor: &mut Constructor, report: &mut InjectionReport) {
        if constructor.has_parameter(&self.parameter) {
            debug!("Constructor already takes the mixin");
            return;
        }

        constructor.parameters.push(ConstructorParameter::optional(
            &self.parameter,
            self.reference.type_name.clone(),
            NO_VALUE,
        ));
        report.parameters_added += 1;

        if !constructor.delegates_to_this() {
            constructor.body.push(self.assignment());
            report.assignments_added += 1;
        }
    }

    /// Pass the parameter on through a `this(...)` call. Returns whether anything changed.
    fn rewrite_initializer(
        &self,
        initializer: &mut ConstructorInitializer,
        caller: usize,
        callees: &[Constructor],
    ) -> bool {
        if initializer
            .arguments
            .iter()
            .any(|a| a.expression == self.parameter)
        {
            return false;
        }

        let positional = initializer.positional_count();
        let has_named = initializer.arguments.iter().any(|a| a.name.is_some());

        let named_argument = || Argument::named(self.parameter.clone(), self.parameter.clone());
        let argument = match candidate_callees(initializer, caller, callees).as_slice() {
            [] => {
                warn!(
                    arguments = initializer.arguments.len(),
                    "No constructor matches the this(...) call, appending positionally"
                );
                Argument::positional(self.parameter.clone())
            }
            [callee] => match callee.parameter_index(&self.parameter) {
                Some(index) if index > positional || has_named => named_argument(),
                _ => Argument::positional(self.parameter.clone()),
            },
            // Every candidate took the parameter in phase 1, so a name binds
            // correctly whichever overload the call ends up on
            candidates => {
                debug!(
                    candidates = candidates.len(),
                    "Ambiguous this(...) call, naming the argument"
                );
                named_argument()
            }
        };

        initializer.arguments.push(argument);
        true
    }
}

/// Instance constructors a `this(...)` call could bind to, by arity.
///
/// A candidate must accept all positional arguments, know every named one,
/// and have defaults for everything else.
fn candidate_callees<'c>(
    initializer: &ConstructorInitializer,
    caller: usize,
    constructors: &'c [Constructor],
) -> Vec<&'c Constructor> {
    let positional = initializer.positional_count();
    let named: Vec<&str> = initializer
        .arguments
        .iter()
        .filter_map(|a| a.name.as_deref())
        .collect();

    constructors
        .iter()
        .enumerate()
        .filter(|(index, c)| *index != caller && !c.is_static)
        .map(|(_, c)| c)
        .filter(|c| positional <= c.parameters.len())
        .filter(|c| named.iter().all(|name| c.has_parameter(name)))
        .filter(|c| {
            c.parameters
                .iter()
                .skip(positional)
                .all(|p| p.default_value.is_some() || named.contains(&p.name.as_str()))
        })
        .collect()
}

/// Inject `reference` into `constructors`.
pub fn inject(reference: &MixinReference, constructors: &[Constructor]) -> Injection {
    ConstructorInjector::new(reference).inject(constructors)
}

/// Inject into a class of the table, producing a new snapshot of it.
pub fn inject_into(
    table: &mut ClassTable,
    target: ClassId,
    reference: &MixinReference,
) -> (ClassId, InjectionReport) {
    let injection = inject(reference, &table.get(target).constructors);
    let updated = table.with_constructors(target, injection.constructors);
    (updated, injection.report)
}

/// Every instance constructor declares `parameter`.
///
/// A set without instance constructors does not qualify; injection would
/// still have to synthesize one.
pub fn all_constructors_have_parameter(constructors: &[Constructor], parameter: &str) -> bool {
    let mut instance = constructors.iter().filter(|c| !c.is_static).peekable();
    instance.peek().is_some() && instance.all(|c| c.has_parameter(parameter))
}
