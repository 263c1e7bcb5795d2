//! Unit tests for `PropertyMap` ordering, labels and type-safe getters.

use knows::{PropertyMap, PropertyValue};

#[test]
fn test_property_map_builder() {
    let props = PropertyMap::new()
        .with("name", "test")
        .with("count", 42)
        .with("enabled", true)
        .with("score", 3.15);

    assert_eq!(props.get_string("name"), Some("test"));
    assert_eq!(props.get_int("count"), Some(42));
    assert_eq!(props.get_bool("enabled"), Some(true));
    assert_eq!(props.get_float("score"), Some(3.15));
}

#[test]
fn test_iteration_follows_insertion_order() {
    let props: PropertyMap = vec![
        ("b".to_string(), PropertyValue::from(1)),
        ("a".to_string(), PropertyValue::from(2)),
        ("c".to_string(), PropertyValue::from(3)),
    ]
    .into_iter()
    .collect();

    let keys: Vec<&String> = props.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn test_label_lookup() {
    assert_eq!(PropertyMap::new().label(), "label");
    assert_eq!(PropertyMap::new().with("label", "City").label(), "City");
}

#[test]
fn test_value_string_conversions() {
    assert_eq!(PropertyValue::from("x").to_string(), "x");
    assert_eq!(PropertyValue::from(12i64).to_string(), "12");
    assert_eq!(PropertyValue::from(1.5).to_string(), "1.5");
    assert_eq!(PropertyValue::from(2.0).to_string(), "2.0");
    assert_eq!(PropertyValue::from(true).to_string(), "True");
    assert_eq!(PropertyValue::from(false).to_string(), "False");
    assert_eq!(PropertyValue::from(1e20).to_string(), "1e+20");
    assert_eq!(PropertyValue::from(f64::NAN).to_string(), "nan");
}

#[test]
fn test_property_map_insert_and_remove() {
    let mut props = PropertyMap::new();

    props.insert("key1", "value1");
    assert!(props.contains_key("key1"));
    assert_eq!(props.len(), 1);

    props.remove("key1");
    assert!(!props.contains_key("key1"));
    assert!(props.is_empty());
}
