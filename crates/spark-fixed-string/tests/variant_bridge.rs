//! 标签值桥接的端到端场景：定长字符串作为 JSON 文档中的普通字段出入。
#![cfg(feature = "variant")]

use serde_json::{Value, json};
use spark_fixed_string::{FixedString16, FixedString32, VariantError};

#[test]
fn fields_of_a_document_convert_independently() {
    let document = json!({
        "name": "a-name-longer-than-sixteen-bytes",
        "zone": "eu-1",
        "port": 8080,
    });

    let name = FixedString16::from_variant(&document["name"]).expect("字符串字段");
    let zone = FixedString32::try_from(&document["zone"]).expect("字符串字段");
    assert_eq!(name.as_bytes(), b"a-name-longer-th");
    assert_eq!(zone.as_bytes(), b"eu-1");

    let err = FixedString16::from_variant(&document["port"]).expect_err("数字字段");
    assert_eq!(err, VariantError::NotAString { found: "number" });
    assert_eq!(err.code(), "variant.type_mismatch");

    // 缺失字段在 `serde_json` 中索引为 `Null`。
    let missing = FixedString16::from_variant(&document["absent"]).expect_err("缺失字段");
    assert_eq!(missing, VariantError::NotAString { found: "null" });
}

#[test]
fn values_write_back_as_string_nodes() {
    let zone = FixedString16::from("ap-2");
    let node: Value = zone.into();
    assert_eq!(node, json!("ap-2"));

    let binary = FixedString16::from_bytes(&[b'o', b'k', 0xff]);
    assert_eq!(binary.to_variant(), json!("ok\u{fffd}"));
}

#[test]
fn typed_struct_fields_roundtrip_through_serde() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Endpoint {
        name: FixedString16,
        zone: FixedString32,
    }

    let endpoint = Endpoint {
        name: FixedString16::from("gateway"),
        zone: FixedString32::from("eu-1"),
    };
    let node = serde_json::to_value(&endpoint).expect("序列化");
    assert_eq!(node, json!({"name": "gateway", "zone": "eu-1"}));
    let back: Endpoint = serde_json::from_value(node).expect("反序列化");
    assert_eq!(back, endpoint);
}
