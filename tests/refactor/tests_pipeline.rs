//! Refactorings whose output is printed, reparsed and queried again

use gosyn::{
    AnalysisError, Query, extract_function, inline_variable, parse_unit, print_file,
    rename_symbol_at, unit_map,
};

use crate::helpers::source_fixtures::{FILES, MODELS};
use crate::helpers::unit_helpers::{at, load_units};

/// Printing a reparsed result gives the same text back
fn assert_reparses(text: &str) {
    let unit = parse_unit("reparsed.go", text).expect("refactored source parses");
    assert_eq!(print_file(unit.file()), text);
}

#[test]
fn test_rename_type_then_query() {
    let (_dir, units) = load_units(FILES);
    let models = &units[0];
    let renamed =
        rename_symbol_at(models.file(), at(MODELS, "Order struct", 0), "Purchase").unwrap();
    let text = print_file(&renamed);
    assert!(text.contains("type Purchase struct {"));
    assert!(text.contains("func (o *Purchase) Total() int {"));
    assert!(!text.contains("Order"));
    assert_reparses(&text);

    let reparsed = unit_map([parse_unit("models.go", &text).unwrap()]);
    let methods: Vec<_> = Query::new(&reparsed)
        .find_functions("Total")
        .into_iter()
        .map(|m| m.signature)
        .collect();
    assert_eq!(methods, ["func (o *Purchase) Total() int"]);
}

#[test]
fn test_rename_field_through_range_variable() {
    let (_dir, units) = load_units(FILES);
    let models = &units[0];
    let renamed =
        rename_symbol_at(models.file(), at(MODELS, "item.Price", 5), "Cost").unwrap();
    let text = print_file(&renamed);
    assert!(text.contains("\tCost int\n"));
    assert!(text.contains("total += item.Cost"));
    assert!(!text.contains("Price"));
    assert_reparses(&text);
}

#[test]
fn test_extract_loop_into_new_function() {
    let (_dir, units) = load_units(FILES);
    let models = &units[0];
    let extracted = extract_function(models.file(), 18, 20, "accumulate").unwrap();
    let text = print_file(&extracted);
    assert!(text.contains("\ttotal := 0\n\taccumulate()\n\treturn total\n"));
    assert_reparses(&text);

    let reparsed = unit_map([parse_unit("models.go", &text).unwrap()]);
    let names: Vec<_> = Query::new(&reparsed)
        .find_functions("*")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Total", "accumulate"]);
}

#[test]
fn test_inline_rejects_accumulator() {
    let (_dir, units) = load_units(FILES);
    let result = inline_variable(units[0].file(), "total");
    assert!(matches!(result, Err(AnalysisError::InvalidSource(_))));
}

#[test]
fn test_inline_then_reparse() {
    let source = "package shop\n\nfunc Discount(price int) int {\n\trate := 10\n\tcut := -rate\n\treturn price + cut\n}\n";
    let unit = parse_unit("discount.go", source).unwrap();
    let once = inline_variable(unit.file(), "rate").unwrap();
    let twice = inline_variable(&once, "cut").unwrap();
    let text = print_file(&twice);
    assert_eq!(
        text,
        "package shop\n\nfunc Discount(price int) int {\n\treturn price + -10\n}\n"
    );
    assert_reparses(&text);
}
