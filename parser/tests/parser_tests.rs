use diagnostic::DiagnosticEngine;
use parser::ast::{BoolOperator, CmpOperator, Expr, Operator, Stmt};
use parser::{GrammarVersion, Parser};

fn parse_module(source: &str) -> Result<Vec<Stmt>, DiagnosticEngine> {
  let mut engine = DiagnosticEngine::new("<test>", source);
  let mut parser = Parser::new(engine.buffer().clone(), GrammarVersion::default(), &mut engine);
  match parser.file_input(&mut engine) {
    Ok(module) => Ok(module.body),
    Err(()) => Err(engine),
  }
}

fn parse_ok(source: &str) -> Vec<Stmt> {
  match parse_module(source) {
    Ok(body) => body,
    Err(engine) => panic!("expected a successful parse of {source:?}, got {:#?}", engine.diagnostics()),
  }
}

fn single_expr(source: &str) -> Expr {
  let body = parse_ok(source);
  assert_eq!(body.len(), 1, "expected exactly one statement");
  match body.into_iter().next().unwrap() {
    Stmt::Expr { value, .. } => value,
    other => panic!("expected an expression statement, got {other:?}"),
  }
}

#[test]
fn chained_comparison_collapses_into_one_compare_node() {
  let expr = single_expr("a < b <= c\n");
  match expr {
    Expr::Compare { ops, comparators, .. } => {
      assert_eq!(ops.len(), 2);
      assert_eq!(comparators.len(), 2);
      assert_eq!(ops[0].kind, CmpOperator::Lt);
      assert_eq!(ops[1].kind, CmpOperator::LtE);
    },
    other => panic!("expected a Compare node, got {other:?}"),
  }
}

#[test]
fn is_not_and_not_in_parse_as_single_operators() {
  let expr = single_expr("a is not b\n");
  match expr {
    Expr::Compare { ops, .. } => assert_eq!(ops[0].kind, CmpOperator::IsNot),
    other => panic!("expected a Compare node, got {other:?}"),
  }

  let expr = single_expr("a not in b\n");
  match expr {
    Expr::Compare { ops, .. } => assert_eq!(ops[0].kind, CmpOperator::NotIn),
    other => panic!("expected a Compare node, got {other:?}"),
  }
}

#[test]
fn same_operator_boolop_run_collapses_into_one_node() {
  let expr = single_expr("a and b and c\n");
  match expr {
    Expr::BoolOp { op, values, op_locs, .. } => {
      assert_eq!(op, BoolOperator::And);
      assert_eq!(values.len(), 3);
      assert_eq!(op_locs.len(), 2);
    },
    other => panic!("expected a BoolOp node, got {other:?}"),
  }
}

#[test]
fn mixed_and_or_nests_by_precedence() {
  // `or` binds loosest, so this is `a or (b and c)`.
  let expr = single_expr("a or b and c\n");
  match expr {
    Expr::BoolOp { op: BoolOperator::Or, values, .. } => {
      assert_eq!(values.len(), 2);
      match &values[1] {
        Expr::BoolOp { op: BoolOperator::And, .. } => {},
        other => panic!("expected the right operand to be an And node, got {other:?}"),
      }
    },
    other => panic!("expected an Or BoolOp node, got {other:?}"),
  }
}

#[test]
fn power_is_right_associative() {
  // `2 ** 3 ** 2` is `2 ** (3 ** 2)`, not `(2 ** 3) ** 2`.
  let expr = single_expr("2 ** 3 ** 2\n");
  match expr {
    Expr::BinOp { op, right, .. } => {
      assert_eq!(op.kind, Operator::Pow);
      match *right {
        Expr::BinOp { op, .. } => assert_eq!(op.kind, Operator::Pow),
        other => panic!("expected the right operand to itself be a power, got {other:?}"),
      }
    },
    other => panic!("expected a BinOp node, got {other:?}"),
  }
}

#[test]
fn parenthesized_expression_does_not_widen_its_location() {
  let expr = single_expr("(a)\n");
  match expr {
    Expr::Name { .. } => {},
    other => panic!("expected parens to unwrap to the bare Name, got {other:?}"),
  }
}

#[test]
fn list_comprehension_collects_its_generators() {
  let expr = single_expr("[x for x in y if x]\n");
  match expr {
    Expr::ListComp { generators, .. } => {
      assert_eq!(generators.len(), 1);
      assert_eq!(generators[0].ifs.len(), 1);
    },
    other => panic!("expected a ListComp node, got {other:?}"),
  }
}

#[test]
fn dict_and_set_displays_parse_distinctly_from_each_other() {
  let expr = single_expr("{1: 2, 3: 4}\n");
  match expr {
    Expr::Dict { keys, values, colon_locs, .. } => {
      assert_eq!(keys.len(), 2);
      assert_eq!(values.len(), 2);
      assert_eq!(colon_locs.len(), 2);
    },
    other => panic!("expected a Dict node, got {other:?}"),
  }

  let expr = single_expr("{1, 2, 3}\n");
  match expr {
    Expr::Set { elts, .. } => assert_eq!(elts.len(), 3),
    other => panic!("expected a Set node, got {other:?}"),
  }
}

#[test]
fn call_with_positional_keyword_and_star_args() {
  let expr = single_expr("f(1, 2, x=3, *rest, **kwargs)\n");
  match expr {
    Expr::Call {
      args,
      keywords,
      starargs,
      kwargs,
      ..
    } => {
      assert_eq!(args.len(), 2);
      assert_eq!(keywords.len(), 1);
      assert_eq!(keywords[0].arg, "x");
      assert!(starargs.is_some());
      assert!(kwargs.is_some());
    },
    other => panic!("expected a Call node, got {other:?}"),
  }
}

#[test]
fn positional_after_keyword_is_rejected() {
  let err = parse_module("f(x=1, 2)\n").unwrap_err();
  assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn duplicate_keyword_argument_is_rejected() {
  let err = parse_module("f(x=1, x=2)\n").unwrap_err();
  assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn slicing_supports_extended_and_stepped_forms() {
  let expr = single_expr("a[1:2:3]\n");
  matches!(expr, Expr::Subscript { .. }).then_some(()).expect("expected a Subscript node");

  let expr = single_expr("a[1:2, 3:4]\n");
  matches!(expr, Expr::Subscript { .. }).then_some(()).expect("expected a Subscript node");
}

#[test]
fn chained_assignment_shares_one_value_across_all_targets() {
  let body = parse_ok("a = b = 1\n");
  match &body[0] {
    Stmt::Assign { targets, op_locs, .. } => {
      assert_eq!(targets.len(), 2);
      assert_eq!(op_locs.len(), 2);
    },
    other => panic!("expected an Assign node, got {other:?}"),
  }
}

#[test]
fn augmented_assignment_keeps_a_single_target() {
  let body = parse_ok("x += 1\n");
  match &body[0] {
    Stmt::AugAssign { op, .. } => assert_eq!(op.kind, Operator::Add),
    other => panic!("expected an AugAssign node, got {other:?}"),
  }
}

#[test]
fn assignment_to_a_literal_is_rejected() {
  let err = parse_module("1 = x\n").unwrap_err();
  assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn elif_chain_nests_as_if_inside_orelse() {
  let body = parse_ok("if a:\n    pass\nelif b:\n    pass\nelse:\n    pass\n");
  match &body[0] {
    Stmt::If { orelse, .. } => match &orelse[0] {
      Stmt::If { orelse: inner_orelse, .. } => assert_eq!(inner_orelse.len(), 1),
      other => panic!("expected elif to nest as an If, got {other:?}"),
    },
    other => panic!("expected an If statement, got {other:?}"),
  }
}

#[test]
fn for_loop_with_tuple_target_and_else_clause() {
  let body = parse_ok("for k, v in items:\n    pass\nelse:\n    pass\n");
  match &body[0] {
    Stmt::For { target, orelse, else_loc, .. } => {
      assert!(matches!(target, Expr::Tuple { .. }));
      assert_eq!(orelse.len(), 1);
      assert!(else_loc.is_some());
    },
    other => panic!("expected a For statement, got {other:?}"),
  }
}

#[test]
fn try_except_else_parses_as_one_tryexcept_node() {
  let body = parse_ok("try:\n    pass\nexcept ValueError as e:\n    pass\nelse:\n    pass\n");
  match &body[0] {
    Stmt::TryExcept { handlers, orelse, .. } => {
      assert_eq!(handlers.len(), 1);
      assert!(handlers[0].kind.is_some());
      assert!(handlers[0].name.is_some());
      assert_eq!(orelse.len(), 1);
    },
    other => panic!("expected a TryExcept node, got {other:?}"),
  }
}

#[test]
fn try_except_finally_wraps_the_tryexcept_in_a_tryfinally() {
  let body = parse_ok("try:\n    pass\nexcept Exception:\n    pass\nfinally:\n    pass\n");
  match &body[0] {
    Stmt::TryFinally { body, finalbody, .. } => {
      assert_eq!(body.len(), 1);
      assert!(matches!(body[0], Stmt::TryExcept { .. }));
      assert_eq!(finalbody.len(), 1);
    },
    other => panic!("expected a TryFinally node, got {other:?}"),
  }
}

#[test]
fn with_statement_binds_its_optional_as_target() {
  let body = parse_ok("with open(f) as g:\n    pass\n");
  match &body[0] {
    Stmt::With { optional_vars, .. } => assert!(optional_vars.is_some()),
    other => panic!("expected a With statement, got {other:?}"),
  }
}

#[test]
fn function_def_collects_defaults_and_varargs() {
  let body = parse_ok("def f(a, b=1, *args, **kwargs):\n    pass\n");
  match &body[0] {
    Stmt::FunctionDef { args, .. } => {
      assert_eq!(args.args.len(), 2);
      assert_eq!(args.defaults.len(), 1);
      assert!(args.vararg.is_some());
      assert!(args.kwarg.is_some());
    },
    other => panic!("expected a FunctionDef node, got {other:?}"),
  }
}

#[test]
fn decorated_function_keeps_its_decorator_expression() {
  let body = parse_ok("@staticmethod\ndef f():\n    pass\n");
  match &body[0] {
    Stmt::FunctionDef { decorator_list, .. } => assert_eq!(decorator_list.len(), 1),
    other => panic!("expected a FunctionDef node, got {other:?}"),
  }
}

#[test]
fn class_def_with_bases_and_without_parens() {
  let body = parse_ok("class A(B, C):\n    pass\n");
  match &body[0] {
    Stmt::ClassDef { bases, begin_loc, .. } => {
      assert_eq!(bases.len(), 2);
      assert!(begin_loc.is_some());
    },
    other => panic!("expected a ClassDef node, got {other:?}"),
  }

  let body = parse_ok("class A:\n    pass\n");
  match &body[0] {
    Stmt::ClassDef { bases, begin_loc, .. } => {
      assert!(bases.is_empty());
      assert!(begin_loc.is_none());
    },
    other => panic!("expected a ClassDef node, got {other:?}"),
  }
}

#[test]
fn lambda_parses_its_own_parameter_list() {
  let expr = single_expr("lambda x, y=1: x + y\n");
  match expr {
    Expr::Lambda { args, .. } => {
      assert_eq!(args.args.len(), 2);
      assert_eq!(args.defaults.len(), 1);
    },
    other => panic!("expected a Lambda node, got {other:?}"),
  }
}

#[test]
fn print_statement_redirect_and_trailing_comma_suppress_newline() {
  let body = parse_ok("print >>sys.stderr, 'x',\n");
  match &body[0] {
    Stmt::Print { dest, values, nl, .. } => {
      assert!(dest.is_some());
      assert_eq!(values.len(), 1);
      assert!(!nl);
    },
    other => panic!("expected a Print statement, got {other:?}"),
  }
}

#[test]
fn import_from_tracks_relative_level_and_star() {
  let body = parse_ok("from .. import *\n");
  match &body[0] {
    Stmt::ImportFrom { level, names, .. } => {
      assert_eq!(*level, 2);
      assert_eq!(names[0].name, "*");
    },
    other => panic!("expected an ImportFrom node, got {other:?}"),
  }
}

#[test]
fn import_as_names_capture_their_aliases() {
  let body = parse_ok("import os.path as p, sys\n");
  match &body[0] {
    Stmt::Import { names, .. } => {
      assert_eq!(names.len(), 2);
      assert_eq!(names[0].name, "os.path");
      assert_eq!(names[0].asname.as_deref(), Some("p"));
      assert_eq!(names[1].asname, None);
    },
    other => panic!("expected an Import node, got {other:?}"),
  }
}

#[test]
fn yield_expression_is_legal_inside_parens() {
  let expr = single_expr("(yield x)\n");
  assert!(matches!(expr, Expr::Yield { .. }));
}

#[test]
fn unexpected_token_reports_actual_and_expected() {
  let err = parse_module("x = \n").unwrap_err();
  let diagnostics = err.diagnostics();
  assert_eq!(diagnostics.len(), 1);
  assert_eq!(diagnostics[0].argument("expected"), Some("an expression"));
}

#[test]
fn unterminated_block_reports_a_single_diagnostic() {
  let err = parse_module("if x:\n").unwrap_err();
  assert_eq!(err.diagnostics().len(), 1);
}
