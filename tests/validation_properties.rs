use linguaset_core::validation::ViolationKind;
use linguaset_core::{validate, RecordKind, ValidatedRecord, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Value};

/// JSON scalars that are never strings.
fn non_string() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        Just(json!([])),
        Just(json!({})),
    ]
}

proptest! {
    #[test]
    fn any_text_is_valid_vocab_content(language in "[a-z]{2,3}", content in ".*") {
        let record = validate("Vocab", &json!({"language": language, "content": content})).unwrap();
        match record {
            ValidatedRecord::Vocab(vocab) => prop_assert_eq!(vocab.content, content),
            other => prop_assert!(false, "expected vocab, got {:?}", other),
        }
    }

    #[test]
    fn any_priority_number_is_accepted(priority in any::<f64>().prop_filter("finite", |p| p.is_finite())) {
        let candidate = json!({"content": "hola", "priority": priority});
        prop_assert!(validate("Translation", &candidate).is_ok());
    }

    #[test]
    fn bad_id_list_element_reported_at_its_index(
        len in 1usize..8,
        bad_at in 0usize..8,
        bad in non_string(),
    ) {
        let bad_at = bad_at % len;
        let ids: Vec<Value> = (0..len)
            .map(|i| if i == bad_at { bad.clone() } else { json!(i.to_string()) })
            .collect();
        let candidate = json!({"language": "apc", "title": "t", "neededVocab": ids});

        match validate("ImmersionContent", &candidate) {
            Err(ValidationError::Invalid { kind, violations }) => {
                prop_assert_eq!(kind, RecordKind::ImmersionContent);
                prop_assert_eq!(violations.len(), 1);
                prop_assert_eq!(violations[0].kind, ViolationKind::ElementShapeViolation);
                prop_assert_eq!(&violations[0].path, &format!("neededVocab[{}]", bad_at));
            }
            other => prop_assert!(false, "expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn extra_fields_never_cause_violations(key in "x[A-Za-z]{1,12}", value in non_string()) {
        let mut candidate = json!({"label": "Pexels", "url": "https://www.pexels.com"});
        candidate.as_object_mut().unwrap().insert(key, value);
        prop_assert!(validate("Link", &candidate).is_ok());
    }
}

#[test]
fn unknown_kind_names_are_rejected() {
    for name in ["", "vocab", "Vocabulary", "Goals", "Fact Card"] {
        assert_eq!(
            validate(name, &json!({})),
            Err(ValidationError::UnknownKind(name.to_string()))
        );
    }
}
