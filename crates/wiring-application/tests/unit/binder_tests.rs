//! Initializer binder tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::test_support::{CountingHeuristic, binder_with_names, http_client_binder};
use wiring_application::{CreationRoutineDescriptor, InitializerBinder};
use wiring_domain::ports::ComponentDefinition;
use wiring_domain::{
    CollectionValues, DefinitionLink, DispatchKind, Error, InjectedValue, ParameterKey, RoutineId,
    ScalarKind, TypeRef, UnwrapHint, ValueKind,
};

#[test]
fn test_mixed_name_and_index_bindings_resolve_in_index_order() {
    let mut binder = http_client_binder();
    binder.bind_text("timeout", "30", Some(TypeRef::new("int")));
    binder.bind_reference(0, "httpClient");

    let resolved = binder.resolve_all().unwrap();
    let params = resolved.parameters();

    assert_eq!(params.len(), 2);
    assert_eq!(params[0].index, 0);
    assert_eq!(params[0].name.as_deref(), Some("url"));
    assert_eq!(params[0].value.as_reference(), Some("httpClient"));
    assert_eq!(params[1].index, 1);
    assert_eq!(params[1].name.as_deref(), Some("timeout"));
    let (text, ty) = params[1].value.as_text().unwrap();
    assert_eq!(text, "30");
    assert_eq!(ty.map(TypeRef::name), Some("int"));
    assert!(resolved.is_complete());
}

#[test]
fn test_rebinding_same_index_last_write_wins() {
    let mut binder = binder_with_names("initWithFlag:", &["flag"]);
    binder.bind(0, InjectedValue::object(true));
    binder.bind(0, InjectedValue::object(false));

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.parameters()[0].index, 0);
    assert_eq!(resolved.parameters()[0].value.downcast_object::<bool>(), Some(&false));
}

#[test]
fn test_rebinding_with_different_kind_is_not_a_conflict() {
    let mut binder = http_client_binder();
    binder.bind_reference(0, "httpClient");
    binder.bind_text(0, "http://localhost", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.parameters()[0].value.kind(), ValueKind::TextLiteral);
}

#[test]
fn test_name_then_index_keeps_later_index_binding() {
    let mut binder = http_client_binder();
    binder.bind_text("timeout", "30", None);
    binder.bind_text(1, "60", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.parameters()[0].value.as_text().unwrap().0, "60");
}

#[test]
fn test_index_then_name_keeps_later_name_binding() {
    let mut binder = http_client_binder();
    binder.bind_text(1, "60", None);
    binder.bind_text("timeout", "30", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.parameters()[0].index, 1);
    assert_eq!(resolved.parameters()[0].value.as_text().unwrap().0, "30");
}

#[test]
fn test_same_name_twice_before_names_known_last_write_wins() {
    let descriptor = CreationRoutineDescriptor::new("initWithUrl:timeout:");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()));
    binder.bind_text("timeout", "10", None);
    binder.bind_text("timeout", "20", None);

    binder.set_parameter_names(["url", "timeout"]);
    let resolved = binder.resolve_all().unwrap();

    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.parameters()[0].value.as_text().unwrap().0, "20");
    assert_eq!(resolved.unbound(), &[0]);
}

#[test]
fn test_unknown_name_fails_at_resolution_not_bind() {
    let mut binder = http_client_binder();
    binder.bind_text("retries", "3", None);

    let err = binder.resolve_all().unwrap_err();
    match err {
        Error::UnknownParameterName {
            component,
            name,
            known,
        } => {
            assert_eq!(component, "client");
            assert_eq!(name, "retries");
            assert_eq!(known, vec!["url".to_string(), "timeout".to_string()]);
        }
        other => panic!("Expected UnknownParameterName, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_index_fails_at_resolution() {
    let mut binder = http_client_binder();
    binder.bind_text(2, "extra", None);

    let err = binder.resolve_all().unwrap_err();
    match err {
        Error::IndexOutOfRange {
            component,
            index,
            arity,
        } => {
            assert_eq!(component, "client");
            assert_eq!(index, 2);
            assert_eq!(arity, 2);
        }
        other => panic!("Expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_name_binding_without_parameter_names_fails() {
    let descriptor = CreationRoutineDescriptor::new("build");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()))
        .with_definition(DefinitionLink::detached("widget"));
    binder.bind_text("x", "1", None);

    let err = binder.resolve_all().unwrap_err();
    assert!(matches!(
        err,
        Error::UnresolvedParameterNames { ref component, ref name } if component == "widget" && name == "x"
    ));
}

#[test]
fn test_index_binding_without_parameter_names_is_unchecked() {
    let descriptor = CreationRoutineDescriptor::new("build");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()));
    binder.bind_text(5, "late", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.arity(), None);
    assert_eq!(resolved.parameters()[0].index, 5);
    assert!(resolved.parameters()[0].name.is_none());
    assert!(resolved.unbound().is_empty());
}

#[test]
fn test_names_supplied_later_resolve_pending_bindings() {
    let descriptor = CreationRoutineDescriptor::new("connect");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()));
    binder.bind_reference("pool", "dbPool");
    binder.bind_text("host", "localhost", None);

    binder.set_parameter_names(["host", "port", "pool"]);
    let resolved = binder.resolve_all().unwrap();

    let indices: Vec<usize> = resolved.parameters().iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(resolved.unbound(), &[1]);
    assert!(!resolved.is_complete());
}

#[test]
fn test_unbound_slots_are_reported_not_defaulted() {
    let mut binder = binder_with_names("initWithA:b:c:", &["a", "b", "c"]);
    binder.bind_text(1, "only-b", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 1);
    assert_eq!(resolved.unbound(), &[0, 2]);
    assert!(resolved.get(0).is_none());
    assert!(resolved.by_name("b").is_some());
}

struct LateDefinition {
    names: Vec<String>,
}

impl ComponentDefinition for LateDefinition {
    fn key(&self) -> &str {
        "late"
    }

    fn parameter_names(&self, _routine: &RoutineId) -> Option<Vec<String>> {
        Some(self.names.clone())
    }
}

#[test]
fn test_linked_definition_supplies_parameter_names() {
    let definition: Arc<dyn ComponentDefinition> = Arc::new(LateDefinition {
        names: vec!["left".into(), "right".into()],
    });
    let descriptor = CreationRoutineDescriptor::new("pair");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()))
        .with_definition(DefinitionLink::to(&definition));
    binder.bind_text("right", "r", None);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.component(), "late");
    assert_eq!(resolved.parameters()[0].index, 1);
    assert_eq!(resolved.parameters()[0].name.as_deref(), Some("right"));
}

#[test]
fn test_dropped_definition_keeps_component_key() {
    let definition: Arc<dyn ComponentDefinition> = Arc::new(LateDefinition { names: Vec::new() });
    let link = DefinitionLink::to(&definition);
    drop(definition);

    assert!(!link.is_attached());
    assert_eq!(link.component_key(), "late");
}

#[test]
fn test_bind_next_fills_lowest_free_index() {
    let mut binder = binder_with_names("initWithA:b:c:", &["a", "b", "c"]);
    binder.bind_text(1, "b", None);

    assert_eq!(binder.bind_next(InjectedValue::text("a")), 0);
    assert_eq!(binder.bind_next(InjectedValue::text("c")), 2);

    let resolved = binder.resolve_all().unwrap();
    let texts: Vec<&str> = resolved
        .parameters()
        .iter()
        .map(|p| p.value.as_text().unwrap().0)
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_bind_instance_records_unwrap_hint() {
    let mut binder = binder_with_names("initWithRatio:label:", &["ratio", "label"]);
    binder.bind_instance(0, 1.43f32, None);
    binder.bind_instance("label", String::from("fast"), Some(TypeRef::of::<String>()));

    let resolved = binder.resolve_all().unwrap();
    assert!(resolved.parameters()[0].value.unwrap_hint().needs_unwrap());
    assert_eq!(resolved.parameters()[1].value.unwrap_hint(), UnwrapHint::None);
}

#[test]
fn test_injected_parameters_in_declaration_order() {
    let mut binder = http_client_binder();
    binder.bind_text("timeout", "30", None);
    binder.bind_reference(0, "httpClient");

    let keys: Vec<ParameterKey> = binder
        .injected_parameters()
        .iter()
        .map(|slot| slot.key().clone())
        .collect();
    assert_eq!(keys, vec![ParameterKey::name("timeout"), ParameterKey::index(0)]);
    assert_eq!(binder.injected_parameters()[0].identity(), "#1 'timeout'");
}

#[test]
fn test_collection_builder_runs_once_per_resolution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut binder = binder_with_names("initWithItems:", &["items"]);
    binder.bind_collection(0, "int", move |values: &mut CollectionValues| {
        counter.fetch_add(1, Ordering::SeqCst);
        values.add_text("1").add_text("2");
        Ok(())
    });

    let first = binder.resolve_all().unwrap();
    let second = binder.resolve_all().unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    for resolved in [&first, &second] {
        let collection = resolved.parameters()[0].collection.as_ref().unwrap();
        let texts: Vec<&str> = collection
            .values()
            .iter()
            .map(|v| v.as_text().unwrap().0)
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }
}

#[test]
fn test_collection_contents_follow_external_state() {
    let source = Arc::new(Mutex::new(vec!["a".to_string()]));
    let shared = Arc::clone(&source);

    let mut binder = binder_with_names("initWithNames:", &["names"]);
    binder.bind_collection("names", "string", move |values: &mut CollectionValues| {
        for name in shared.lock().unwrap().iter() {
            values.add_text(name.clone());
        }
        Ok(())
    });

    assert_eq!(binder.resolve_all().unwrap().parameters()[0].collection.as_ref().unwrap().len(), 1);
    source.lock().unwrap().push("b".to_string());
    assert_eq!(binder.resolve_all().unwrap().parameters()[0].collection.as_ref().unwrap().len(), 2);
}

#[test]
fn test_collection_builder_failure_is_tagged_with_slot() {
    let mut binder = binder_with_names("initWithItems:", &["items"]);
    binder.bind_collection("items", "int", |_values: &mut CollectionValues| {
        Err(Error::collection_build("source offline"))
    });

    let err = binder.resolve_all().unwrap_err();
    match &err {
        Error::Parameter {
            component,
            parameter,
            ..
        } => {
            assert_eq!(component, "client");
            assert_eq!(parameter, "#0 'items'");
        }
        other => panic!("Expected Parameter error, got {other:?}"),
    }
    assert!(matches!(
        err.root_cause(),
        Error::CollectionBuild { message } if message == "source offline"
    ));
}

#[test]
fn test_set_routine_keeps_bindings_and_remaps() {
    let mut binder = http_client_binder();
    binder.bind_text("timeout", "30", None);

    binder.set_routine("initWithTimeout:url:");
    assert!(binder.resolve_all().is_err());

    binder.set_parameter_names(["timeout", "url"]);
    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters()[0].index, 0);
    assert_eq!(resolved.parameters()[0].name.as_deref(), Some("timeout"));
}

#[test]
fn test_is_type_level_respects_explicit_dispatch() {
    let heuristic = Arc::new(CountingHeuristic::default());
    let descriptor = CreationRoutineDescriptor::with_strategy("initWithUrl:", DispatchKind::Yes);
    let mut binder = InitializerBinder::new(descriptor, heuristic.clone());

    assert!(binder.is_type_level());
    binder.set_dispatch(DispatchKind::No);
    assert!(!binder.is_type_level());
    assert_eq!(heuristic.calls(), 0);
}

#[test]
fn test_concurrent_resolution_is_consistent() {
    let heuristic = Arc::new(CountingHeuristic::default());
    let descriptor =
        CreationRoutineDescriptor::new("clientWithUrl:timeout:").with_parameter_names(["url", "timeout"]);
    let mut binder = InitializerBinder::new(descriptor, heuristic.clone());
    binder.bind_reference("url", "endpoint");
    binder.bind_text(1, "30", None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let resolved = binder.resolve_all().unwrap();
                    (resolved.parameters().len(), binder.is_type_level())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (2, true));
        }
    });

    assert!(heuristic.calls() >= 1);
    assert!(binder.is_type_level());
}

#[test]
fn test_bind_next_skips_slots_bound_by_name() {
    let mut binder = http_client_binder();
    binder.bind_reference("url", "httpClient");

    assert_eq!(binder.bind_next(InjectedValue::text("30")), 1);

    let resolved = binder.resolve_all().unwrap();
    assert_eq!(resolved.parameters().len(), 2);
    assert_eq!(resolved.parameters()[0].value.as_reference(), Some("httpClient"));
    assert_eq!(resolved.parameters()[1].value.as_text().unwrap().0, "30");
}

#[test]
fn test_bind_next_uses_names_from_linked_definition() {
    let definition: Arc<dyn ComponentDefinition> = Arc::new(LateDefinition {
        names: vec!["left".into(), "right".into()],
    });
    let descriptor = CreationRoutineDescriptor::new("pair");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()))
        .with_definition(DefinitionLink::to(&definition));
    binder.bind_text("left", "l", None);

    assert_eq!(binder.bind_next_text("r", None), 1);
}

#[test]
fn test_bind_next_before_names_known_counts_index_bindings_only() {
    let descriptor = CreationRoutineDescriptor::new("connect");
    let mut binder = InitializerBinder::new(descriptor, Arc::new(CountingHeuristic::default()));
    binder.bind_text("host", "localhost", None);
    binder.bind_text(0, "first", None);

    assert_eq!(binder.bind_next_text("second", None), 1);
}

#[test]
fn test_typed_next_slot_helpers() {
    let mut binder = binder_with_names("initWithA:b:c:d:", &["a", "b", "c", "d"]);

    assert_eq!(binder.bind_next_text("1", Some(TypeRef::new("int"))), 0);
    assert_eq!(binder.bind_next_instance(2u8, None), 1);
    assert_eq!(binder.bind_next_reference("service"), 2);
    assert_eq!(
        binder.bind_next_collection("int", |values: &mut CollectionValues| {
            values.add_text("3");
            Ok(())
        }),
        3
    );

    let resolved = binder.resolve_all().unwrap();
    let kinds: Vec<ValueKind> = resolved.parameters().iter().map(|p| p.value.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ValueKind::TextLiteral,
            ValueKind::ObjectInstance,
            ValueKind::Reference,
            ValueKind::Collection
        ]
    );
    assert_eq!(resolved.parameters()[1].value.unwrap_hint(), UnwrapHint::Scalar(ScalarKind::U8));
    assert!(resolved.is_complete());
}

#[test]
fn test_bind_definition_injects_reference_by_key() {
    let dependency: Arc<dyn ComponentDefinition> = Arc::new(LateDefinition { names: Vec::new() });
    let mut binder = http_client_binder();

    binder.bind_definition("timeout", &dependency);
    assert_eq!(binder.bind_next_definition(&dependency), 0);

    let resolved = binder.resolve_all().unwrap();
    let targets: Vec<Option<&str>> = resolved
        .parameters()
        .iter()
        .map(|p| p.value.as_reference())
        .collect();
    assert_eq!(targets, vec![Some("late"), Some("late")]);
}

#[test]
fn test_rebind_keeps_slot_and_moves_it_later_in_declaration_order() {
    let mut binder = http_client_binder();
    binder.bind_text(0, "a", None);
    binder.bind_text("timeout", "b", None);
    binder.bind_text(0, "c", None);

    let slots = binder.injected_parameters();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].key(), &ParameterKey::name("timeout"));
    assert_eq!(slots[1].key(), &ParameterKey::index(0));
    assert_eq!(slots[1].identity(), "#0 'url'");
    assert_eq!(slots[1].value().as_text().unwrap().0, "c");
}
