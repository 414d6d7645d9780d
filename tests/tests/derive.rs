use pretty_assertions::assert_eq;
use remap::{Mappable, ModelRef, Record, Type, Value};

use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
struct Line {
    sku: String,
    qty: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "kebab-case")]
struct Order {
    order_id: i64,
    #[remap(rename = "total")]
    total_cents: i32,
    r#type: Option<String>,
    tags: Vec<String>,
    lines: BTreeMap<i32, Line>,
    paid: bool,
    ratio: f64,
    note: Option<Box<Line>>,
}

fn order() -> Order {
    Order {
        order_id: 7,
        total_cents: 1250,
        r#type: Some("online".to_string()),
        tags: vec!["gift".to_string()],
        lines: BTreeMap::from([(
            1,
            Line {
                sku: "A-1".to_string(),
                qty: 2,
            },
        )]),
        paid: true,
        ratio: 0.5,
        note: None,
    }
}

#[test]
fn model_lists_fields_in_declaration_order() {
    let model = <Order as Mappable>::model();

    assert_eq!(model.name, "Order");
    assert_eq!(
        model.field_names().collect::<Vec<_>>(),
        ["order-id", "total", "type", "tags", "lines", "paid", "ratio", "note"]
    );
}

#[test]
fn model_declares_field_types() {
    let model = <Order as Mappable>::model();
    let ty = |name: &str| model.field(name).unwrap().ty.clone();

    assert_eq!(ty("order-id"), Type::I64);
    assert_eq!(ty("total"), Type::I32);
    assert_eq!(ty("type"), Type::String);
    assert_eq!(ty("tags"), Type::list(Type::String));
    assert_eq!(
        ty("lines"),
        Type::map(Type::I32, Type::Model(ModelRef::of::<Line>()))
    );
    assert_eq!(ty("paid"), Type::Bool);
    assert_eq!(ty("ratio"), Type::F64);
    assert_eq!(ty("note"), Type::Model(ModelRef::of::<Line>()));
}

#[test]
fn record_holds_every_field_by_name() {
    let record = order().to_record();

    assert_eq!(record.len(), 8);
    assert_eq!(record.get("order-id"), Some(&Value::I64(7)));
    assert_eq!(record.get("total"), Some(&Value::I32(1250)));
    assert_eq!(record.get("type"), Some(&Value::from("online")));
    assert_eq!(record.get("note"), Some(&Value::Null));
    assert_eq!(record.get("order_id"), None);

    let line = record.get("lines").and_then(Value::as_map).unwrap();
    assert_eq!(line.len(), 1);
}

#[test]
fn load_rebuilds_the_instance() {
    let mut order = order();
    order.note = Some(Box::new(Line {
        sku: "NOTE".to_string(),
        qty: 0,
    }));

    let loaded = <Order as Mappable>::load(order.to_record()).unwrap();
    assert_eq!(loaded, order);
}

#[test]
fn load_names_the_field_that_failed() {
    let mut record = order().to_record();
    record.insert("paid", Value::Null);

    let err = <Order as Mappable>::load(record).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "loading `Order.paid`: cannot convert Null to bool"
    );
}

#[test]
fn missing_fields_load_as_null() {
    let err = <Line as Mappable>::load(Record::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "loading `Line.sku`: cannot convert Null to String"
    );

    let mut record = Record::new();
    record.insert("sku", "A-1");
    record.insert("qty", 3);
    assert_eq!(
        <Line as Mappable>::load(record).unwrap(),
        Line {
            sku: "A-1".to_string(),
            qty: 3
        }
    );
}
