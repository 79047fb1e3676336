//! Tests for the recursive descent parser

use super::super::parse_file;
use crate::syntax::ast::*;
use rstest::rstest;

fn parse_ok(source: &str) -> File {
    let parse = parse_file(source);
    assert!(
        parse.ok(),
        "unexpected errors: {:?}\n--- source ---\n{source}",
        parse.errors
    );
    parse.file
}

fn body_of(file: &File, name: &str) -> Vec<Stmt> {
    file.functions()
        .find(|func| func.name.as_str() == name)
        .and_then(|func| func.body.clone())
        .map(|body| body.stmts)
        .unwrap_or_default()
}

#[test]
fn test_parse_package_and_imports() {
    let file = parse_ok(
        "package main\n\nimport \"fmt\"\n\nimport (\n\t\"os\"\n\tio2 \"io\"\n)\n",
    );
    assert_eq!(file.package.as_str(), "main");
    assert_eq!(file.imports.len(), 2);
    assert!(!file.imports[0].grouped);
    assert!(file.imports[1].grouped);
    let paths: Vec<String> = file.import_specs().map(ImportSpec::path_value).collect();
    assert_eq!(paths, vec!["fmt", "os", "io"]);
    let alias = file.import_specs().nth(2).and_then(|spec| spec.name.clone());
    assert_eq!(alias.map(|ident| ident.name.to_string()), Some("io2".into()));
}

#[test]
fn test_parse_function_with_grouped_params() {
    let file = parse_ok("package p\n\nfunc Add(a, b int, c string) (int, error) {\n\treturn a + b, nil\n}\n");
    let func = file.functions().next().expect("function");
    assert_eq!(func.name.as_str(), "Add");
    assert_eq!(func.sig.params.fields.len(), 2);
    assert_eq!(func.sig.params.arity(), 3);
    assert_eq!(func.sig.params.fields[0].names.len(), 2);
    assert_eq!(func.sig.result_count(), 2);
}

#[test]
fn test_parse_unnamed_params_are_types() {
    let file = parse_ok("package p\n\ntype F func(int, string) bool\n");
    let spec = file.type_specs().next().expect("type spec");
    let TypeExpr::Func(sig) = &spec.ty else {
        panic!("expected func type, got {:?}", spec.ty);
    };
    assert_eq!(sig.params.fields.len(), 2);
    assert!(sig.params.fields.iter().all(|field| field.names.is_empty()));
    assert_eq!(sig.result_count(), 1);
}

#[rstest]
#[case::slice("func f(xs []int) {}\n", 1)]
#[case::array("func f(buf [4]byte) {}\n", 1)]
#[case::variadic("func f(format string, args ...any) {}\n", 2)]
#[case::generic_instance("func f(List[int]) {}\n", 0)]
fn test_param_name_disambiguation(#[case] decl: &str, #[case] named: usize) {
    let file = parse_ok(&format!("package p\n\n{decl}"));
    let func = file.functions().next().expect("function");
    let names: usize = func.sig.params.fields.iter().map(|f| f.names.len()).sum();
    assert_eq!(names, named);
}

#[test]
fn test_parse_method_receiver() {
    let file = parse_ok("package p\n\nfunc (s *Server) Start() error {\n\treturn nil\n}\n");
    let func = file.functions().next().expect("method");
    assert!(func.is_method());
    assert_eq!(
        func.receiver_type_name().map(Ident::as_str),
        Some("Server")
    );
}

#[test]
fn test_parse_struct_and_interface() {
    let source = "package p\n\ntype User struct {\n\tName, Email string `json:\"name\"`\n\t*Base\n\tio.Reader\n}\n\ntype Store interface {\n\tGet(id string) (*User, error)\n\tfmt.Stringer\n}\n";
    let file = parse_ok(source);
    let specs: Vec<&TypeSpec> = file.type_specs().collect();
    let TypeExpr::Struct(st) = &specs[0].ty else {
        panic!("expected struct");
    };
    assert_eq!(st.fields.len(), 3);
    assert_eq!(st.fields[0].names.len(), 2);
    assert!(st.fields[0].tag.is_some());
    assert!(st.fields[1].names.is_empty());
    assert!(st.fields[2].names.is_empty());
    let TypeExpr::Interface(iface) = &specs[1].ty else {
        panic!("expected interface");
    };
    assert_eq!(iface.methods().count(), 1);
    assert_eq!(iface.elems.len(), 2);
}

#[test]
fn test_parse_generic_type_and_func() {
    let source = "package p\n\ntype Pair[K comparable, V any] struct {\n\tKey K\n\tVal V\n}\n\nfunc Map[A, B any](xs []A, f func(A) B) []B {\n\treturn nil\n}\n\ntype Num interface {\n\t~int | ~float64\n}\n";
    let file = parse_ok(source);
    let pair = file.type_specs().next().expect("pair");
    let params = pair.type_params.as_ref().expect("type params");
    assert_eq!(params.fields.len(), 2);
    let func = file.functions().next().expect("Map");
    let tparams = func.type_params.as_ref().expect("func type params");
    assert_eq!(tparams.fields.len(), 1);
    assert_eq!(tparams.fields[0].names.len(), 2);
}

#[test]
fn test_array_type_spec_is_not_generic() {
    let file = parse_ok("package p\n\nconst N = 4\n\ntype Buf [N]byte\n");
    let spec = file.type_specs().next().expect("type spec");
    assert!(spec.type_params.is_none());
    assert!(matches!(spec.ty, TypeExpr::Array(_)));
}

#[test]
fn test_parse_var_const_groups() {
    let file = parse_ok("package p\n\nvar (\n\tx int\n\ty = 2\n\ta, b = 1, \"s\"\n)\n\nconst Pi = 3.14\n");
    let Decl::Gen(vars) = &file.decls[0] else {
        panic!("expected var decl");
    };
    assert!(vars.grouped);
    assert_eq!(vars.specs.len(), 3);
    let Decl::Gen(consts) = &file.decls[1] else {
        panic!("expected const decl");
    };
    assert_eq!(consts.keyword, DeclKeyword::Const);
}

#[test]
fn test_binary_precedence() {
    let file = parse_ok("package p\n\nfunc f() {\n\tx := 1 + 2*3 == 7 && ok\n}\n");
    let body = body_of(&file, "f");
    let StmtKind::Assign(assign) = &body[0].kind else {
        panic!("expected assignment");
    };
    let Expr::Binary(top) = &assign.rhs[0] else {
        panic!("expected binary");
    };
    assert_eq!(top.op, BinaryOp::LogAnd);
    let Expr::Binary(eq) = top.lhs.as_ref() else {
        panic!("expected comparison");
    };
    assert_eq!(eq.op, BinaryOp::Eq);
    let Expr::Binary(add) = eq.lhs.as_ref() else {
        panic!("expected addition");
    };
    assert_eq!(add.op, BinaryOp::Add);
    assert!(matches!(add.rhs.as_ref(), Expr::Binary(mul) if mul.op == BinaryOp::Mul));
}

#[test]
fn test_composite_literal_not_taken_in_if_header() {
    let source = "package p\n\nfunc f(x T) {\n\tif x == y {\n\t\treturn\n\t}\n\tv := T{A: 1, B: []int{1, 2}}\n\t_ = v\n}\n";
    let file = parse_ok(source);
    let body = body_of(&file, "f");
    assert!(matches!(body[0].kind, StmtKind::If(_)));
    let StmtKind::Assign(assign) = &body[1].kind else {
        panic!("expected assignment");
    };
    let Expr::Composite(lit) = &assign.rhs[0] else {
        panic!("expected composite literal");
    };
    assert_eq!(lit.elts.len(), 2);
    assert!(lit.elts[0].key.is_some());
}

#[test]
fn test_multiline_composite_literal() {
    let source = "package p\n\nvar tests = []struct {\n\tname string\n\twant int\n}{\n\t{\"a\", 1},\n\t{name: \"b\", want: 2},\n}\n";
    let file = parse_ok(source);
    let Decl::Gen(decl) = &file.decls[0] else {
        panic!("expected var");
    };
    let Spec::Value(spec) = &decl.specs[0] else {
        panic!("expected value spec");
    };
    let Expr::Composite(lit) = &spec.values[0] else {
        panic!("expected composite");
    };
    assert_eq!(lit.elts.len(), 2);
    assert!(matches!(&lit.elts[0].value, Expr::Composite(inner) if inner.ty.is_none()));
}

#[test]
fn test_control_flow_statements() {
    let source = r#"package p

func f(items []string, ch chan int) {
	for i := 0; i < len(items); i++ {
		if i%2 == 0 {
			continue
		} else if i > 10 {
			break
		} else {
			i += 2
		}
	}
	for k, v := range items {
		_, _ = k, v
	}
	for range ch {
	}
	for {
		break
	}
	switch x := len(items); {
	case x > 1, x < 0:
		fallthrough
	default:
	}
	defer close(ch)
	go func() { ch <- 1 }()
outer:
	for ok := true; ok; {
		break outer
	}
}
"#;
    let file = parse_ok(source);
    let body = body_of(&file, "f");
    assert!(matches!(body[0].kind, StmtKind::For(_)));
    assert!(matches!(&body[1].kind, StmtKind::Range(range) if range.define && range.value.is_some()));
    assert!(matches!(&body[2].kind, StmtKind::Range(range) if range.key.is_none()));
    assert!(matches!(&body[3].kind, StmtKind::For(f) if f.cond.is_none()));
    assert!(matches!(&body[4].kind, StmtKind::Switch(s) if s.init.is_some() && s.tag.is_none() && s.clauses.len() == 2));
    assert!(matches!(body[5].kind, StmtKind::Defer(_)));
    assert!(matches!(body[6].kind, StmtKind::Go(_)));
    assert!(matches!(body[7].kind, StmtKind::Labeled(_)));
}

#[test]
fn test_type_switch_with_binding() {
    let source = "package p\n\nfunc f(v any) string {\n\tswitch t := v.(type) {\n\tcase int, int64:\n\t\treturn \"int\"\n\tcase nil:\n\t\treturn \"nil\"\n\tdefault:\n\t\t_ = t\n\t}\n\treturn \"\"\n}\n";
    let file = parse_ok(source);
    let body = body_of(&file, "f");
    let StmtKind::TypeSwitch(ts) = &body[0].kind else {
        panic!("expected type switch, got {:?}", body[0].kind);
    };
    assert_eq!(ts.binding.as_ref().map(Ident::as_str), Some("t"));
    assert!(matches!(&ts.subject, Expr::Ident(id) if id.as_str() == "v"));
    assert_eq!(ts.clauses.len(), 3);
    assert_eq!(ts.clauses[0].types.len(), 2);
    assert!(ts.clauses[2].is_default);
}

#[test]
fn test_expressions_in_calls() {
    let source = "package p\n\nfunc f() {\n\tm := make(map[string][]int, 4)\n\ts := xs[1:len(xs)]\n\tv, ok := m[\"a\"]\n\tp := &Point{X: 1}\n\tn := <-ch\n\tfmt.Println(args...)\n\tr := r.(io.Reader)\n}\n";
    let file = parse_ok(source);
    let body = body_of(&file, "f");
    assert_eq!(body.len(), 7);
    let StmtKind::Expr(Expr::Call(call)) = &body[5].kind else {
        panic!("expected call");
    };
    assert!(call.ellipsis);
}

#[test]
fn test_statement_spans_are_line_accurate() {
    let source = "package p\n\nfunc f() {\n\ta := 1\n\tif a > 0 {\n\t\ta++\n\t}\n}\n";
    let file = parse_ok(source);
    let body = body_of(&file, "f");
    assert_eq!(body[0].line_range(), (4, 4));
    assert_eq!(body[1].line_range(), (5, 7));
}

#[test]
fn test_ident_spans_point_at_names() {
    let file = parse_ok("package p\n\nfunc hello() {}\n");
    let func = file.functions().next().expect("func");
    assert_eq!(func.name.span.start.line, 2);
    assert_eq!(func.name.span.start.column, 5);
    assert_eq!(func.name.span.end.column, 10);
}
