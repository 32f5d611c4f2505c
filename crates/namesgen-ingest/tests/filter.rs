//! Integration tests for row filtering.

use std::io::Write;

use csv::StringRecord;
use proptest::prelude::*;
use tempfile::NamedTempFile;

use namesgen_ingest::{
    ColumnSelector, IngestError, MapOptions, ResolvedColumns, RowDecision, classify_row,
    map_rows, read_rows,
};
use namesgen_model::columns;

fn header() -> String {
    columns::ALL
        .iter()
        .map(|column| column.name)
        .collect::<Vec<_>>()
        .join(",")
}

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_mixed_rows_yield_single_constant() {
    let content = format!(
        "{}\n\
         a,b,c,d,e,f,PKGBOTH,NAMEUPPER,alias,v1,human,brand,note,,denv,env\n\
         a,b,c,d,e,f,,EXCLUDED_EMPTY_PKG,alias,v1,human,brand,note,,denv,env\n\
         a,b,c,d,e,f,PKG2,NAME2,alias,v1,human,brand,note,EXCLUDE_FLAG_SET,denv,env\n",
        header()
    );
    let file = create_temp_csv(&content);
    let rows = read_rows(file.path()).unwrap();

    for selector in [ColumnSelector::by_name(), ColumnSelector::positional()] {
        let columns = selector.resolve(&rows).unwrap();
        let services = map_rows(&rows, &columns, &MapOptions::default()).unwrap();
        let pairs: Vec<(&str, &str)> = services
            .records()
            .map(|r| (r.provider_name_upper.as_str(), r.provider_package.as_str()))
            .collect();
        assert_eq!(pairs, vec![("NAMEUPPER", "PKGBOTH")]);
        assert_eq!(services.row_of("NAMEUPPER"), Some(2));
    }
}

#[test]
fn test_short_rows_are_fatal_in_positional_mode() {
    // consistent width, but narrower than column 13
    let file = create_temp_csv("a,b,c,d,e,f,g,h\n1,2,3,4,5,6,acm,ACM\n");
    let rows = read_rows(file.path()).unwrap();
    let columns = ColumnSelector::positional().resolve(&rows).unwrap();

    let err = map_rows(&rows, &columns, &MapOptions::default()).unwrap_err();
    match err {
        IngestError::ShortRow {
            row,
            expected,
            actual,
            ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(expected, 14);
            assert_eq!(actual, 8);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unterminated_quote_is_a_parse_error() {
    let file = create_temp_csv(&format!(
        "{}\n\
         a,b,c,d,e,f,acm,ACM,,,,,,,,\n\
         a,b,c,d,e,f,foo,FOO,,,,,,,,\"\n",
        header()
    ));
    let err = read_rows(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::CsvParse { .. }), "{err}");
    assert_eq!(err.stage(), "parse");
}

#[test]
fn test_header_only_yields_no_services() {
    let file = create_temp_csv(&format!("{}\n", header()));
    let rows = read_rows(file.path()).unwrap();
    let columns = ColumnSelector::default().resolve(&rows).unwrap();
    let services = map_rows(&rows, &columns, &MapOptions::default()).unwrap();
    assert!(services.is_empty());
}

fn field() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z0-9_]{1,8}"]
}

const COLUMNS: ResolvedColumns = ResolvedColumns {
    package: 0,
    name_upper: 1,
    exclude: 2,
};

proptest! {
    #[test]
    fn accepted_iff_not_excluded_and_has_package(
        package in field(),
        name in field(),
        exclude in field(),
        extra in field(),
    ) {
        let fields = vec![package.clone(), name.clone(), exclude.clone(), extra];
        let record = StringRecord::from(fields);
        let decision = classify_row(&record, &COLUMNS);
        let expected_accept = exclude.is_empty() && !package.is_empty();
        prop_assert_eq!(matches!(decision, RowDecision::Accept(_)), expected_accept);
        if let RowDecision::Accept(service) = decision {
            prop_assert_eq!(service.provider_package, package);
            prop_assert_eq!(service.provider_name_upper, name);
        }
    }

    #[test]
    fn output_preserves_input_order(
        rows in proptest::collection::vec((field(), field()), 0..20),
    ) {
        let mut content = String::from("ProviderPackageBoth,ProviderNameUpper,Exclude\n");
        let mut expected = Vec::new();
        for (idx, (package, exclude)) in rows.iter().enumerate() {
            // unique names so the duplicate check never fires
            let name = format!("NAME{idx}");
            content.push_str(&format!("{package},{name},{exclude}\n"));
            if exclude.is_empty() && !package.is_empty() {
                expected.push(name);
            }
        }
        let parsed = namesgen_ingest::read_rows_from_reader(
            content.as_bytes(),
            std::path::Path::new("mem.csv"),
        ).unwrap();
        let columns = ColumnSelector::default().resolve(&parsed).unwrap();
        let services = map_rows(&parsed, &columns, &MapOptions::default()).unwrap();
        let names: Vec<String> = services
            .records()
            .map(|r| r.provider_name_upper.clone())
            .collect();
        prop_assert_eq!(names, expected);
    }
}
