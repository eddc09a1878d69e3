/// Configuration behavior: defaults, explicit override, and the serialized
/// form (camelCase, missing fields take defaults).
use optmerge_core::MergeOptions;

#[test]
fn arrays_override_by_default() {
    assert!(!MergeOptions::default().concat_arrays);
}

#[test]
fn concatenating_enables_array_concat() {
    assert!(MergeOptions::concatenating().concat_arrays);
    assert_eq!(
        MergeOptions::concatenating(),
        MergeOptions {
            concat_arrays: true
        }
    );
}

#[test]
fn struct_update_overrides_field_by_field() {
    let options = MergeOptions {
        concat_arrays: true,
        ..MergeOptions::default()
    };
    assert!(options.concat_arrays);
}

#[test]
fn serialized_form_uses_camel_case() {
    let json = serde_json::to_string(&MergeOptions::default()).unwrap();
    assert_eq!(json, r#"{"concatArrays":false}"#);
}

#[test]
fn deserialization_honors_explicit_fields() {
    let options: MergeOptions = serde_json::from_str(r#"{"concatArrays":true}"#).unwrap();
    assert!(options.concat_arrays);
}

#[test]
fn missing_fields_take_defaults() {
    let options: MergeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, MergeOptions::default());
}
