#![allow(missing_docs)]

use namesgen_model::{ServiceRecord, ServiceSet};

#[test]
fn test_service_set_keeps_insertion_order() {
    let mut set = ServiceSet::new();
    set.push(4, ServiceRecord::new("ZEBRA", "zebra"));
    set.push(2, ServiceRecord::new("ACM", "acm"));

    let names: Vec<&str> = set
        .records()
        .map(|record| record.provider_name_upper.as_str())
        .collect();
    assert_eq!(names, vec!["ZEBRA", "ACM"]);
    assert_eq!(set.row_of("ACM"), Some(2));
    assert_eq!(set.row_of("S3"), None);
}

#[test]
fn test_record_serializes_with_template_field_names() {
    let record = ServiceRecord::new("APIGateway", "apigateway");
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["ProviderNameUpper"], "APIGateway");
    assert_eq!(json["ProviderPackage"], "apigateway");
}

#[test]
fn test_collect_into_service_set() {
    let set: ServiceSet = vec![
        (2, ServiceRecord::new("A", "a")),
        (3, ServiceRecord::new("B", "b")),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
    assert_eq!(set.entries()[1].row, 3);
}
