//! Generated code fed back through the parser and the query engine

use gosyn::syntax::ast::{Decl, TypeExpr};
use gosyn::{
    Generated, Query, TemplateEngine, generate_interface_implementation, generate_test_scaffold,
    parse_unit, print_file, unit_map,
};

use crate::helpers::source_fixtures::{FILES, MODELS};
use crate::helpers::unit_helpers::load_units;

#[test]
fn test_generated_implementation_satisfies_interface() {
    let (_dir, units) = load_units(FILES);
    let store = &units[1];
    let iface = store
        .file()
        .type_specs()
        .find(|spec| matches!(spec.ty, TypeExpr::Interface(_)))
        .expect("Store interface");

    let mut file = store.file().clone();
    file.decls
        .extend(generate_interface_implementation(iface, "NullStore", &[]).unwrap());
    let text = print_file(&file);
    assert!(text.contains(
        "func (n *NullStore) Get(id string) (*Order, error) {\n\treturn nil, nil\n}"
    ));

    let units = unit_map([
        parse_unit("models.go", MODELS).unwrap(),
        parse_unit("store.go", &text).unwrap(),
    ]);
    let names: Vec<_> = Query::new(&units)
        .find_implementations("Store")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["MemoryStore", "NullStore"]);
}

#[test]
fn test_template_output_is_queryable() {
    let mut engine = TemplateEngine::new();
    engine
        .register_template(
            "repository",
            "package PackageName\n\ntype StructName struct {\n\titems map[string]ElementType\n}\n\nfunc (r *StructName) Find(id string) *ElementType {\n\treturn r.items[id]\n}\n",
        )
        .unwrap();
    let generated = engine
        .execute(
            "repository",
            [
                ("PackageName", "shop"),
                ("StructName", "OrderRepo"),
                ("ElementType", "Order"),
            ],
        )
        .unwrap();
    let Generated::File(file) = generated else {
        panic!("a template with a package clause yields a file");
    };

    let units = unit_map([parse_unit("repo.go", &print_file(&file)).unwrap()]);
    let query = Query::new(&units);
    let structs: Vec<_> = query
        .find_structs_by_field_type("map[string]Order")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(structs, ["OrderRepo"]);
    let methods: Vec<_> = query
        .find_functions("Find")
        .into_iter()
        .map(|m| m.signature)
        .collect();
    assert_eq!(methods, ["func (r *OrderRepo) Find(id string) *Order"]);
}

#[test]
fn test_scaffold_for_fixture_function_parses() {
    let (_dir, units) = load_units(FILES);
    let report = units[2]
        .file()
        .functions()
        .find(|func| func.name.as_str() == "Report")
        .expect("Report");
    let test = generate_test_scaffold(report).unwrap();

    let mut file = units[2].file().clone();
    file.decls = vec![Decl::Func(test)];
    let text = print_file(&file);
    assert!(text.contains("func TestReport(t *testing.T) {"));
    assert!(text.contains("\t\tReport(tt.store, tt.id)\n"));
    parse_unit("main_test.go", &text).expect("scaffold parses");
}
