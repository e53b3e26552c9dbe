//! Binder factory

use std::sync::Arc;

use crate::config::{ConfigLoader, WiringConfig};
use crate::conversion::TypeConverterRegistry;
use crate::introspection::SignatureIntrospector;
use crate::materializer::ArgumentMaterializer;
use crate::naming::PrefixNamingHeuristic;
use wiring_application::{CreationRoutineDescriptor, DirectCollectionAssembler, InitializerBinder};
use wiring_domain::error::Result;
use wiring_domain::ports::{
    CollectionAssembler, ComponentDefinition, NamingHeuristic, ParameterNameIntrospector,
    ReferenceResolver,
};
use wiring_domain::{DefinitionLink, DispatchKind, RoutineId};

/// Creates binders sharing one set of configured collaborators
#[derive(Clone)]
pub struct BinderFactory {
    config: WiringConfig,
    heuristic: Arc<dyn NamingHeuristic>,
    introspector: Arc<dyn ParameterNameIntrospector>,
    assembler: Arc<dyn CollectionAssembler>,
    converter: Arc<TypeConverterRegistry>,
}

impl Default for BinderFactory {
    fn default() -> Self {
        Self::new(WiringConfig::default())
    }
}

impl BinderFactory {
    /// Factory with the default collaborators for `config`
    pub fn new(config: WiringConfig) -> Self {
        Self {
            heuristic: Arc::new(PrefixNamingHeuristic::from_config(&config.naming)),
            introspector: Arc::new(SignatureIntrospector),
            assembler: Arc::new(DirectCollectionAssembler),
            converter: Arc::new(TypeConverterRegistry::new(config.conversion.clone())),
            config,
        }
    }

    /// Factory from configuration loaded by `loader`
    pub fn load(loader: &ConfigLoader) -> Result<Self> {
        loader.load().map(Self::new)
    }

    pub fn with_heuristic(mut self, heuristic: Arc<dyn NamingHeuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_introspector(mut self, introspector: Arc<dyn ParameterNameIntrospector>) -> Self {
        self.introspector = introspector;
        self
    }

    pub fn with_collection_assembler(mut self, assembler: Arc<dyn CollectionAssembler>) -> Self {
        self.assembler = assembler;
        self
    }

    /// Binder not attached to any definition
    pub fn binder(&self, routine: impl Into<RoutineId>) -> InitializerBinder {
        let descriptor = self.descriptor(routine.into(), self.config.naming.default_dispatch);
        self.assemble_binder(descriptor, DefinitionLink::default())
    }

    /// Binder owned by `definition`, with an explicit dispatch strategy
    pub fn binder_for(
        &self,
        definition: &Arc<dyn ComponentDefinition>,
        routine: impl Into<RoutineId>,
        dispatch: DispatchKind,
    ) -> InitializerBinder {
        let descriptor = self.descriptor(routine.into(), dispatch);
        self.assemble_binder(descriptor, DefinitionLink::to(definition))
    }

    /// Materializer sharing this factory's converter and assembler
    pub fn materializer(&self, references: Arc<dyn ReferenceResolver>) -> ArgumentMaterializer {
        ArgumentMaterializer::new(references)
            .with_converter(self.converter.clone())
            .with_collection_assembler(Arc::clone(&self.assembler))
    }

    /// Converter registry; custom converters registered here reach every materializer
    pub fn converter(&self) -> Arc<TypeConverterRegistry> {
        Arc::clone(&self.converter)
    }

    pub fn config(&self) -> &WiringConfig {
        &self.config
    }

    fn descriptor(&self, routine: RoutineId, dispatch: DispatchKind) -> CreationRoutineDescriptor {
        let names = self.introspector.parameter_names(&routine);
        let descriptor = CreationRoutineDescriptor::with_strategy(routine, dispatch);
        match names {
            Some(names) if !names.is_empty() => descriptor.with_parameter_names(names),
            _ => descriptor,
        }
    }

    fn assemble_binder(
        &self,
        descriptor: CreationRoutineDescriptor,
        definition: DefinitionLink,
    ) -> InitializerBinder {
        tracing::trace!(
            routine = %descriptor.routine(),
            component = definition.component_key(),
            names = ?descriptor.parameter_names(),
            "Creating initializer binder"
        );
        InitializerBinder::new(descriptor, Arc::clone(&self.heuristic))
            .with_definition(definition)
            .with_collection_assembler(Arc::clone(&self.assembler))
    }
}

impl std::fmt::Debug for BinderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinderFactory")
            .field("config", &self.config)
            .field("converter", &self.converter)
            .finish_non_exhaustive()
    }
}
