//! Resolution output

use super::collection::CollectionValues;
use super::injected_value::{InjectedValue, ValueKind};
use serde::{Deserialize, Serialize};

/// One parameter after a resolution pass
#[derive(Debug, Clone)]
pub struct ResolvedParameter {
    /// Canonical index
    pub index: usize,
    /// Declared name, when the routine's names are known
    pub name: Option<String>,
    /// Winning value for this index
    pub value: InjectedValue,
    /// Elements produced by this pass's builder call, for collection values
    pub collection: Option<CollectionValues>,
}

impl ResolvedParameter {
    /// Diagnostic identity, e.g. `#1 'timeout'`
    pub fn identity(&self) -> String {
        match &self.name {
            Some(name) => format!("#{} '{}'", self.index, name),
            None => format!("#{}", self.index),
        }
    }
}

/// Ordered result of resolving an initializer's bindings
///
/// Parameters are strictly ascending by canonical index. Indices inside the
/// routine's arity that nothing was bound to are listed in `unbound`; the
/// instantiation side decides how to default them.
#[derive(Debug, Clone)]
pub struct ResolvedArguments {
    component: String,
    arity: Option<usize>,
    parameter_names: Vec<String>,
    parameters: Vec<ResolvedParameter>,
    unbound: Vec<usize>,
}

impl ResolvedArguments {
    /// Assemble a result; `parameters` must already be sorted by index
    pub fn new(
        component: impl Into<String>,
        arity: Option<usize>,
        parameters: Vec<ResolvedParameter>,
    ) -> Self {
        let unbound = match arity {
            Some(arity) => {
                let mut bound = parameters.iter().map(|p| p.index).peekable();
                (0..arity)
                    .filter(|index| {
                        if bound.peek() == Some(index) {
                            bound.next();
                            false
                        } else {
                            true
                        }
                    })
                    .collect()
            }
            None => Vec::new(),
        };
        Self {
            component: component.into(),
            arity,
            parameter_names: Vec::new(),
            parameters,
            unbound,
        }
    }

    /// Attach the routine's declared names so unbound slots can be named too
    pub fn with_parameter_names(mut self, names: Vec<String>) -> Self {
        self.parameter_names = names;
        self
    }

    /// Declared name at `index`, bound or not
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.parameter_names.get(index).map(String::as_str)
    }

    /// Diagnostic identity of any slot, e.g. `#0 'url'`
    pub fn identity_at(&self, index: usize) -> String {
        match self.name_at(index) {
            Some(name) => format!("#{index} '{name}'"),
            None => format!("#{index}"),
        }
    }

    /// Key of the component the arguments belong to
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Routine arity, when parameter names were known
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Bound parameters, ascending by index
    pub fn parameters(&self) -> &[ResolvedParameter] {
        &self.parameters
    }

    /// Indices with no binding
    pub fn unbound(&self) -> &[usize] {
        &self.unbound
    }

    /// True when every index in the arity has a value
    pub fn is_complete(&self) -> bool {
        self.unbound.is_empty()
    }

    /// Parameter bound at `index`
    pub fn get(&self, index: usize) -> Option<&ResolvedParameter> {
        self.parameters
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|pos| &self.parameters[pos])
    }

    /// Parameter bound under `name`
    pub fn by_name(&self, name: &str) -> Option<&ResolvedParameter> {
        self.parameters
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }

    /// Serializable summary for logs and diagnostics
    pub fn report(&self) -> ResolutionReport {
        ResolutionReport {
            component: self.component.clone(),
            arity: self.arity,
            slots: self
                .parameters
                .iter()
                .map(|p| SlotReport {
                    index: p.index,
                    name: p.name.clone(),
                    kind: p.value.kind(),
                    value: p.value.describe(),
                    elements: p.collection.as_ref().map(CollectionValues::len),
                })
                .collect(),
            unbound: self.unbound.clone(),
        }
    }
}

impl IntoIterator for ResolvedArguments {
    type Item = ResolvedParameter;
    type IntoIter = std::vec::IntoIter<ResolvedParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

/// Serializable summary of a resolution pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Component key
    pub component: String,
    /// Routine arity, when known
    pub arity: Option<usize>,
    /// Bound slots in index order
    pub slots: Vec<SlotReport>,
    /// Indices left for the instantiation side to default
    pub unbound: Vec<usize>,
}

/// One slot in a [`ResolutionReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReport {
    pub index: usize,
    pub name: Option<String>,
    pub kind: ValueKind,
    pub value: String,
    /// Element count for collections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<usize>,
}
