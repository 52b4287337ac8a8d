//! Property tests for lenient wire parsing and snapshot content hashing.

use proptest::prelude::*;
use serde_json::{json, Value};

use affinet_core::{MemberId, MemberRecord, NetworkSnapshot};

proptest! {
    #[test]
    fn prop_integer_and_string_ids_agree(id in any::<i64>()) {
        let from_number = MemberId::from_json(&json!(id));
        let from_string = MemberId::from_json(&Value::String(id.to_string()));
        prop_assert_eq!(from_number, Some(MemberId(id)));
        prop_assert_eq!(from_string, from_number);
    }

    #[test]
    fn prop_non_numeric_text_reads_as_absent(text in "[a-zA-Z][a-zA-Z0-9 ]{0,12}") {
        prop_assert_eq!(MemberId::from_json(&Value::String(text)), None);
    }

    #[test]
    fn prop_record_parsing_never_fails(
        member in prop_oneof![
            any::<i64>().prop_map(|v| json!(v)),
            "[a-z0-9]{0,6}".prop_map(Value::String),
            Just(Value::Null),
            Just(json!(1.5)),
            Just(json!(true)),
        ],
        extra in "[a-z]{1,8}",
    ) {
        let record = MemberRecord::from_value(json!({
            "memberId": member.clone(),
            "parentId": null,
            "extra": extra,
        }));
        prop_assert_eq!(record.member_id, MemberId::from_json(&member));
        prop_assert_eq!(record.parent_id, None);
        prop_assert!(record.attributes.contains_key("extra"));
        prop_assert!(!record.attributes.contains_key("memberId"));
    }

    #[test]
    fn prop_content_hash_ignores_attribute_order(
        attrs in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..6)
    ) {
        let forward = attrs
            .iter()
            .fold(MemberRecord::new(1, None), |r, (k, v)| r.with_attribute(k.as_str(), *v));
        let backward = attrs
            .iter()
            .rev()
            .fold(MemberRecord::new(1, None), |r, (k, v)| r.with_attribute(k.as_str(), *v));

        let a = NetworkSnapshot::new(vec![forward], vec![]);
        let b = NetworkSnapshot::new(vec![backward], vec![]);
        prop_assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
    }
}
