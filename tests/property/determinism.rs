//! Property-based tests for determinism and totality of generation

use compgen::{generate_source, Archetype, ComponentRequest};
use proptest::prelude::*;

/// Names that pass identifier validation: letter/underscore start, no reserved words
/// (reserved words are all lowercase, so a leading capital keeps them out) and not
/// the `React` import binding.
fn valid_name() -> impl Strategy<Value = String> {
    "[A-Z_][A-Za-z0-9_]{0,24}".prop_filter("collides with an import", |name| name != "React")
}

fn any_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("button".to_string()),
        Just("card".to_string()),
        Just("input".to_string()),
        Just("modal".to_string()),
        ".{0,16}",
    ]
}

/// Same request, same bytes
#[test]
fn test_generation_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any_tag(), valid_name()), |(tag, name)| {
            let first = generate_source(&ComponentRequest::new(tag.as_str(), name.as_str())).unwrap();
            let second = generate_source(&ComponentRequest::new(tag.as_str(), name.as_str())).unwrap();
            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// Every tag produces output; unknown tags match the generic shape exactly
#[test]
fn test_archetype_totality_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(".{0,16}", valid_name()), |(tag, name)| {
            let request = ComponentRequest::new(tag.as_str(), name.as_str());
            let source = generate_source(&request).unwrap();
            if request.archetype.is_generic() {
                let reference = generate_source(&ComponentRequest::new(
                    Archetype::Generic("unknown-xyz".to_string()),
                    name.as_str(),
                ))
                .unwrap();
                prop_assert_eq!(source, reference);
            } else {
                prop_assert!(!source.as_str().is_empty());
            }
            Ok(())
        })
        .unwrap();
}

/// The requested name lands in the interface, the component value and the usage tag
#[test]
fn test_name_propagation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any_tag(), valid_name()), |(tag, name)| {
            let source = generate_source(&ComponentRequest::new(tag.as_str(), name.as_str())).unwrap();
            let text = source.as_str();
            let interface = format!("interface {}Props {{", name);
            let value = format!("export const {}: React.FC<{}Props> = ({{", name, name);
            let open_tag = format!("// <{}\n", name);
            let close_tag = format!("// </{}>", name);
            prop_assert!(text.contains(&interface));
            prop_assert!(text.contains(&value));
            prop_assert!(text.contains(&open_tag));
            prop_assert!(text.ends_with(&close_tag));
            Ok(())
        })
        .unwrap();
}

/// Extra options never influence the output
#[test]
fn test_extra_options_inert_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any_tag(), valid_name(), "[a-z]{1,8}", any::<i64>()),
            |(tag, name, key, value)| {
                let plain = ComponentRequest::new(tag.as_str(), name.as_str());
                let with_option = plain.clone().with_option(key, value);
                prop_assert_eq!(
                    generate_source(&plain).unwrap(),
                    generate_source(&with_option).unwrap()
                );
                Ok(())
            },
        )
        .unwrap();
}
