//! Parameter key and slot tests

use wiring_domain::{InjectedValue, ParameterKey, ParameterSlot};

#[test]
fn test_parameter_key_conversions() {
    assert_eq!(ParameterKey::from(2), ParameterKey::Index(2));
    assert_eq!(ParameterKey::from("url"), ParameterKey::Name("url".into()));
    assert_eq!(ParameterKey::from(String::from("url")), ParameterKey::name("url"));
}

#[test]
fn test_parameter_key_display() {
    assert_eq!(ParameterKey::index(1).to_string(), "#1");
    assert_eq!(ParameterKey::name("timeout").to_string(), "'timeout'");
}

#[test]
fn test_slot_identity_completion() {
    let slot = ParameterSlot::new(ParameterKey::name("timeout"), InjectedValue::text("30"), 3);
    assert_eq!(slot.index(), None);
    assert_eq!(slot.identity(), "'timeout'");

    let slot = slot.with_identity(Some(1), None);
    assert_eq!(slot.index(), Some(1));
    assert_eq!(slot.name(), Some("timeout"));
    assert_eq!(slot.identity(), "#1 'timeout'");
    assert_eq!(slot.key(), &ParameterKey::name("timeout"));
}

#[test]
fn test_slot_identity_is_not_overwritten() {
    let slot = ParameterSlot::new(ParameterKey::index(0), InjectedValue::text("a"), 0)
        .with_identity(Some(5), Some("url".into()));
    assert_eq!(slot.index(), Some(0));
    assert_eq!(slot.name(), Some("url"));
}

#[test]
fn test_slot_rebind_replaces_value_and_sequence() {
    let mut slot = ParameterSlot::new(ParameterKey::index(0), InjectedValue::object(true), 0);
    slot.rebind(InjectedValue::object(false), 7);

    assert_eq!(slot.value().downcast_object::<bool>(), Some(&false));
    assert_eq!(slot.sequence(), 7);
}
