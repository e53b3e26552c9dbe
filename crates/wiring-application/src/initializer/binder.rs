//! Initializer Binder
//!
//! Maps parameter identities to injected values and produces the positional
//! argument list for a creation routine.
//!
//! ## Storage
//!
//! ```text
//! bind(#i, v)     ──► indexed   BTreeMap<index, ParameterSlot>
//! bind('name', v) ──► named     HashMap<name, ParameterSlot>   (pending overlay)
//!
//! resolve_all():
//!   names ← descriptor names, else the linked definition's names
//!   named  ──name→index──┐
//!   indexed ─────────────┴─► merge by canonical index, higher sequence wins
//!                           ─► range check ─► assemble collections ─► sorted output
//! ```
//!
//! Both maps are last-write-wins per key. Binding never fails; every
//! addressing error is reported by [`InitializerBinder::resolve_all`] so a
//! definition can be declared in any order.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap, hash_map};
use std::sync::Arc;

use super::descriptor::CreationRoutineDescriptor;
use crate::collection::DirectCollectionAssembler;
use wiring_domain::error::{Error, Result};
use wiring_domain::ports::{CollectionAssembler, ComponentDefinition, NamingHeuristic};
use wiring_domain::{
    DefinitionLink, DispatchKind, InjectedValue, ParameterKey, ParameterSlot, ResolvedArguments,
    ResolvedParameter, RoutineId, TypeRef,
};

/// Parameter binder for one component definition
pub struct InitializerBinder {
    descriptor: CreationRoutineDescriptor,
    definition: DefinitionLink,
    heuristic: Arc<dyn NamingHeuristic>,
    assembler: Arc<dyn CollectionAssembler>,
    indexed: BTreeMap<usize, ParameterSlot>,
    named: HashMap<String, ParameterSlot>,
    next_sequence: u64,
}

impl InitializerBinder {
    /// Create a binder for `descriptor`
    pub fn new(descriptor: CreationRoutineDescriptor, heuristic: Arc<dyn NamingHeuristic>) -> Self {
        Self {
            descriptor,
            definition: DefinitionLink::default(),
            heuristic,
            assembler: Arc::new(DirectCollectionAssembler),
            indexed: BTreeMap::new(),
            named: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// Attach the owning definition
    pub fn with_definition(mut self, definition: DefinitionLink) -> Self {
        self.definition = definition;
        self
    }

    /// Replace the collection-assembly collaborator
    pub fn with_collection_assembler(mut self, assembler: Arc<dyn CollectionAssembler>) -> Self {
        self.assembler = assembler;
        self
    }

    // ------------------------------------------------------------------
    // Binding
    // ------------------------------------------------------------------

    /// Bind `value` to a parameter addressed by name or index
    ///
    /// Re-binding the same address replaces the previous value. When a
    /// by-name and a by-index binding resolve to the same canonical index,
    /// the one declared later wins.
    pub fn bind(&mut self, parameter: impl Into<ParameterKey>, value: InjectedValue) -> &mut Self {
        let key = parameter.into();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        tracing::trace!(
            component = self.component(),
            parameter = %key,
            value = %value.describe(),
            "Binding initializer parameter"
        );

        let component = self.definition.component_key();
        match key {
            ParameterKey::Index(index) => {
                if let Some(arity) = self.descriptor.arity() {
                    if index >= arity {
                        tracing::warn!(
                            component,
                            index,
                            arity,
                            "Parameter index out of range; resolution will fail"
                        );
                    }
                }
                match self.indexed.entry(index) {
                    Entry::Occupied(mut occupied) => {
                        log_rebind(component, occupied.get());
                        occupied.get_mut().rebind(value, sequence);
                    }
                    Entry::Vacant(vacant) => {
                        let name = self.descriptor.name_at(index).map(str::to_string);
                        vacant.insert(
                            ParameterSlot::new(ParameterKey::Index(index), value, sequence)
                                .with_identity(None, name),
                        );
                    }
                }
            }
            ParameterKey::Name(name) => {
                let index = self.descriptor.index_of(&name);
                if self.descriptor.has_parameter_names() && index.is_none() {
                    tracing::warn!(
                        component,
                        name = %name,
                        "Unknown parameter name; resolution will fail"
                    );
                }
                match self.named.entry(name) {
                    hash_map::Entry::Occupied(mut occupied) => {
                        log_rebind(component, occupied.get());
                        occupied.get_mut().rebind(value, sequence);
                    }
                    hash_map::Entry::Vacant(vacant) => {
                        let key = ParameterKey::Name(vacant.key().clone());
                        vacant.insert(
                            ParameterSlot::new(key, value, sequence).with_identity(index, None),
                        );
                    }
                }
            }
        }
        self
    }

    /// Bind to the lowest unbound index
    ///
    /// An index counts as bound when a by-index binding holds it or a by-name
    /// binding maps to it under the currently known parameter names.
    pub fn bind_next(&mut self, value: InjectedValue) -> usize {
        let claimed = self.claimed_indices();
        let index = (0usize..)
            .find(|candidate| !claimed.contains(candidate))
            .unwrap_or(claimed.len());
        self.bind(index, value);
        index
    }

    /// Next-slot form of [`bind_text`](Self::bind_text)
    pub fn bind_next_text(
        &mut self,
        text: impl Into<String>,
        required_type: Option<TypeRef>,
    ) -> usize {
        let value = match required_type {
            Some(ty) => InjectedValue::text_as(text, ty),
            None => InjectedValue::text(text),
        };
        self.bind_next(value)
    }

    /// Next-slot form of [`bind_instance`](Self::bind_instance)
    pub fn bind_next_instance<T>(&mut self, value: T, required_type: Option<TypeRef>) -> usize
    where
        T: std::any::Any + Send + Sync,
    {
        self.bind_next(InjectedValue::shared_object(Arc::new(value), required_type))
    }

    /// Next-slot form of [`bind_reference`](Self::bind_reference)
    pub fn bind_next_reference(&mut self, identifier: impl Into<String>) -> usize {
        self.bind_next(InjectedValue::reference(identifier))
    }

    /// Next-slot form of [`bind_definition`](Self::bind_definition)
    pub fn bind_next_definition(&mut self, definition: &Arc<dyn ComponentDefinition>) -> usize {
        self.bind_next_reference(definition.key())
    }

    /// Next-slot form of [`bind_collection`](Self::bind_collection)
    pub fn bind_next_collection<F>(
        &mut self,
        element_required_type: impl Into<TypeRef>,
        builder: F,
    ) -> usize
    where
        F: Fn(&mut wiring_domain::CollectionValues) -> Result<()> + Send + Sync + 'static,
    {
        self.bind_next(InjectedValue::collection(element_required_type, builder))
    }

    /// Bind an object instance; boxed scalars are flagged for unwrapping
    pub fn bind_instance<T>(
        &mut self,
        parameter: impl Into<ParameterKey>,
        value: T,
        required_type: Option<TypeRef>,
    ) -> &mut Self
    where
        T: std::any::Any + Send + Sync,
    {
        self.bind(parameter, InjectedValue::shared_object(Arc::new(value), required_type))
    }

    /// Bind literal text for the type-conversion registry
    pub fn bind_text(
        &mut self,
        parameter: impl Into<ParameterKey>,
        text: impl Into<String>,
        required_type: Option<TypeRef>,
    ) -> &mut Self {
        let value = match required_type {
            Some(ty) => InjectedValue::text_as(text, ty),
            None => InjectedValue::text(text),
        };
        self.bind(parameter, value)
    }

    /// Bind a reference to another component definition
    pub fn bind_reference(
        &mut self,
        parameter: impl Into<ParameterKey>,
        identifier: impl Into<String>,
    ) -> &mut Self {
        self.bind(parameter, InjectedValue::reference(identifier))
    }

    /// Bind a reference to `definition`, addressed by its registry key
    pub fn bind_definition(
        &mut self,
        parameter: impl Into<ParameterKey>,
        definition: &Arc<dyn ComponentDefinition>,
    ) -> &mut Self {
        self.bind_reference(parameter, definition.key())
    }

    /// Bind a collection whose elements are produced at resolution time
    pub fn bind_collection<F>(
        &mut self,
        parameter: impl Into<ParameterKey>,
        element_required_type: impl Into<TypeRef>,
        builder: F,
    ) -> &mut Self
    where
        F: Fn(&mut wiring_domain::CollectionValues) -> Result<()> + Send + Sync + 'static,
    {
        self.bind(parameter, InjectedValue::collection(element_required_type, builder))
    }

    // ------------------------------------------------------------------
    // Descriptor maintenance
    // ------------------------------------------------------------------

    /// Supply parameter names learned after the binder was created
    pub fn set_parameter_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.set_parameter_names(names);
        self.remap_identities();
    }

    /// Replace the creation routine; bindings are kept and re-mapped on resolution
    pub fn set_routine(&mut self, routine: impl Into<RoutineId>) {
        self.descriptor.set_routine(routine);
        self.remap_identities();
    }

    /// Change the dispatch strategy
    pub fn set_dispatch(&mut self, strategy: DispatchKind) {
        self.descriptor.set_strategy(strategy);
    }

    /// Refresh the derived half of every slot's identity
    fn remap_identities(&mut self) {
        let descriptor = &self.descriptor;
        for (index, slot) in &mut self.indexed {
            let name = descriptor.name_at(*index).map(str::to_string);
            *slot = ParameterSlot::new(slot.key().clone(), slot.value().clone(), slot.sequence())
                .with_identity(None, name);
        }
        for (name, slot) in &mut self.named {
            let index = descriptor.index_of(name);
            *slot = ParameterSlot::new(slot.key().clone(), slot.value().clone(), slot.sequence())
                .with_identity(index, None);
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn descriptor(&self) -> &CreationRoutineDescriptor {
        &self.descriptor
    }

    pub fn definition(&self) -> &DefinitionLink {
        &self.definition
    }

    /// Key of the owning component, for diagnostics
    pub fn component(&self) -> &str {
        self.definition.component_key()
    }

    /// Every current binding in declaration order
    pub fn injected_parameters(&self) -> Vec<&ParameterSlot> {
        let mut slots: Vec<&ParameterSlot> =
            self.indexed.values().chain(self.named.values()).collect();
        slots.sort_by_key(|slot| slot.sequence());
        slots
    }

    /// Whether the creation routine is type-level (memoized for `Guess`)
    pub fn is_type_level(&self) -> bool {
        self.descriptor.is_type_level(self.heuristic.as_ref())
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve every binding to its canonical index, ascending
    ///
    /// Called once per instantiation. Collection builders run once per call.
    ///
    /// # Errors
    ///
    /// - `UnresolvedParameterNames` when a by-name binding exists but no
    ///   parameter names are available
    /// - `UnknownParameterName` when a bound name is not declared
    /// - `IndexOutOfRange` when a canonical index is outside the arity
    /// - collaborator failures from collection assembly, tagged with the slot
    pub fn resolve_all(&self) -> Result<ResolvedArguments> {
        let component = self.component();
        let names = self.effective_parameter_names();

        let mut pending: Vec<&ParameterSlot> = self.named.values().collect();
        pending.sort_by_key(|slot| slot.sequence());

        if names.is_empty() {
            if let Some(first) = pending.first() {
                let name = first.name().unwrap_or_default();
                return Err(Error::unresolved_parameter_names(component, name));
            }
        }

        let mut merged: BTreeMap<usize, &ParameterSlot> =
            self.indexed.iter().map(|(index, slot)| (*index, slot)).collect();

        for slot in pending {
            let name = slot.name().unwrap_or_default();
            let index = names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::unknown_parameter_name(component, name, &names))?;

            match merged.get(&index) {
                Some(existing) if existing.sequence() > slot.sequence() => {
                    tracing::debug!(
                        component,
                        index,
                        name,
                        "By-name binding overridden by later by-index binding"
                    );
                }
                _ => {
                    merged.insert(index, slot);
                }
            }
        }

        let arity = (!names.is_empty()).then_some(names.len());
        if let Some(arity) = arity {
            if let Some((&index, _)) = merged.range(arity..).next() {
                return Err(Error::index_out_of_range(component, index, arity));
            }
        }

        let mut parameters = Vec::with_capacity(merged.len());
        for (index, slot) in merged {
            let name = names.get(index).cloned();
            let collection = match slot.value() {
                InjectedValue::Collection {
                    element_required_type,
                    build,
                } => {
                    let parameter = match &name {
                        Some(name) => format!("#{index} '{name}'"),
                        None => format!("#{index}"),
                    };
                    let values = self
                        .assembler
                        .assemble(element_required_type, build)
                        .map_err(|e| e.for_parameter(component, parameter))?;
                    Some(values)
                }
                _ => None,
            };
            parameters.push(ResolvedParameter {
                index,
                name,
                value: slot.value().clone(),
                collection,
            });
        }

        let resolved =
            ResolvedArguments::new(component, arity, parameters).with_parameter_names(names);
        tracing::debug!(
            component,
            routine = %self.descriptor.routine(),
            report = %serde_json::to_string(&resolved.report()).unwrap_or_default(),
            "Initializer parameters resolved"
        );
        Ok(resolved)
    }

    /// Indices held by a by-index binding or by a by-name binding whose name is known
    fn claimed_indices(&self) -> BTreeSet<usize> {
        let names = self.effective_parameter_names();
        let by_name = self
            .named
            .keys()
            .filter_map(|name| names.iter().position(|n| n == name));
        self.indexed.keys().copied().chain(by_name).collect()
    }

    /// Descriptor names, falling back to names held by the linked definition
    fn effective_parameter_names(&self) -> Vec<String> {
        if self.descriptor.has_parameter_names() {
            return self.descriptor.parameter_names().to_vec();
        }
        self.definition
            .upgrade()
            .and_then(|definition| definition.parameter_names(self.descriptor.routine()))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for InitializerBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitializerBinder")
            .field("component", &self.component())
            .field("descriptor", &self.descriptor)
            .field("indexed", &self.indexed.len())
            .field("named", &self.named.len())
            .finish()
    }
}

fn log_rebind(component: &str, previous: &ParameterSlot) {
    tracing::debug!(
        component,
        parameter = %previous.identity(),
        previous = %previous.value().describe(),
        "Parameter re-bound; last binding wins"
    );
}
