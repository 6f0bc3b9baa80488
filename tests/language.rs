use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use celform::{
    Binding, Call, EmptyEnvironment, Environment, Environments, Error, Expression, FnEnvironment, MapEnvironment,
    NativeFunction, ParseOptions, RuntimeError, SyntaxError, Value, ValueKind, base, boolean, evaluate, number, string,
};
use celform::ast::Node;
use tokio_util::sync::CancellationToken;

fn eval_in(src: &str, env: &dyn Environment) -> Value {
    let expression = Expression::parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    expression.evaluate(env)
              .unwrap_or_else(|e| panic!("Failed to evaluate {src:?}: {e}"))
}

fn assert_number(src: &str, expected: f64) {
    assert_eq!(eval_in(src, &base()), Value::Number(expected), "{src}");
}

fn assert_string(src: &str, expected: &str) {
    assert_eq!(eval_in(src, &base()), Value::from(expected), "{src}");
}

fn assert_bool(src: &str, expected: bool) {
    assert_eq!(eval_in(src, &base()), Value::Bool(expected), "{src}");
}

fn syntax_error(src: &str) -> SyntaxError {
    match Expression::parse(src) {
        Ok(e) => panic!("Formula {src:?} parsed but was expected to fail: {e:?}"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str, env: &dyn Environment) -> RuntimeError {
    let expression = Expression::parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    match expression.evaluate(env) {
        Ok(v) => panic!("Formula {src:?} evaluated to {v:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn failing(message: &'static str) -> NativeFunction {
    NativeFunction::new(move |_| Err(message.into()))
}

#[test]
fn plain_text_is_a_string_literal() {
    assert_string("Hello World!", "Hello World!");
    assert_string("1 + 2", "1 + 2");
    assert_string(" =not a formula", " =not a formula");
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert_eq!(syntax_error(""), SyntaxError::EmptyExpression { position: 0 });
    assert!(syntax_error("=").to_string().contains("syntax error"));
}

#[test]
fn literals() {
    assert_number("=12345", 12345.0);
    assert_number("=0.5", 0.5);
    assert_number("=7.", 7.0);
    assert_number("=-2.25", -2.25);
    assert_string("=\"quoted\"", "quoted");
    assert_bool("=TRUE()", true);
    assert_bool("=FALSE()", false);
}

#[test]
fn string_escapes() {
    assert_string(r#"="Hello" & "\n" & "World""#, "Hello\nWorld");
    assert_string(r#"="say \"hi\"""#, "say \"hi\"");
    assert_string(r#"="tab\there""#, "tab\there");
    assert_string(r#"="é\x41""#, "éA");
    assert_string(r#"="\012""#, "\u{0}12");
    assert_string("=\"two\nlines\"", "two\nlines");
    assert!(matches!(syntax_error(r#"="bad \q escape""#), SyntaxError::InvalidEscape { .. }));
    assert!(matches!(syntax_error(r#"="never closed"#), SyntaxError::UnterminatedString { .. }));
}

#[test]
fn arithmetic() {
    assert_number("=1 + 2", 3.0);
    assert_number("=7 * 9", 63.0);
    assert_number("=10 / 4", 2.5);
    assert_number("=2 ^ 10", 1024.0);
    assert_number("=5+5*2/0.5", 25.0);
    assert_number("=6*32+1", 193.0);
    assert_number("=(6*32)+1", 193.0);
    assert_number("=1 - -4", 5.0);
}

#[test]
fn operator_chains_group_to_the_right() {
    assert_number("=10-4-3", 9.0);
    assert_number("=(10-4)-3", 3.0);
    assert_number("=2^3^2", 512.0);
    assert_number("=64/4/2", 32.0);
}

#[test]
fn modulo() {
    assert_number("=0 % 5", 0.0);
    assert_number("=5 % 2", 1.0);
    assert_number("=1 % 1", 0.0);
    assert_number("=-7 % 3", -1.0);

    let nan = eval_in("=5 % 0", &EmptyEnvironment);
    assert!(nan.as_number().is_ok_and(f64::is_nan));
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(runtime_error("=1 / 0", &EmptyEnvironment), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("=1 / (2 - 2)", &EmptyEnvironment), RuntimeError::DivisionByZero));
}

#[test]
fn arithmetic_requires_numbers() {
    let err = runtime_error(r#"=5 + "hello""#, &EmptyEnvironment);
    assert!(err.to_string().contains("invalid + operands"), "{err}");
    assert!(matches!(err,
                     RuntimeError::InvalidOperands { operator: "+",
                                                     left:     ValueKind::Number,
                                                     right:    ValueKind::String, }));

    assert!(matches!(runtime_error("=TRUE() * 2", &EmptyEnvironment),
                     RuntimeError::InvalidOperands { operator: "*", .. }));
}

#[test]
fn concatenation() {
    assert_string(r#"="a" & "b" & "c""#, "abc");
    assert_string(r#"=LOWER("ABC") & ".jpg""#, "abc.jpg");

    assert!(matches!(runtime_error(r#"=1 & "b""#, &EmptyEnvironment),
                     RuntimeError::ConcatOperand { side: "LHS", .. }));
    assert!(matches!(runtime_error(r#"="a" & 2"#, &EmptyEnvironment),
                     RuntimeError::ConcatOperand { side: "RHS", .. }));
}

#[test]
fn concat_checks_left_before_evaluating_right() {
    let env = MapEnvironment::new().with_function("FUNC", failing("FUNC should not be called"));
    assert!(matches!(runtime_error("=1 & FUNC()", &env),
                     RuntimeError::ConcatOperand { side: "LHS", .. }));
}

#[test]
fn equality() {
    assert_bool("=1 = 1", true);
    assert_bool("=1 <> 1", false);
    assert_bool(r#"="hey" = "hey""#, true);
    assert_bool(r#"="hey" <> "Hey""#, true);
    assert_bool("=TRUE() = FALSE()", false);

    assert!(matches!(runtime_error("=TRUE() = 1", &EmptyEnvironment),
                     RuntimeError::MismatchedOperands { operator: "=", .. }));
}

#[test]
fn comparisons() {
    assert_bool("=2 < 3", true);
    assert_bool("=3 > 2", true);
    assert_bool("=2 <= 2", true);
    assert_bool("=3 >= 4", false);
    assert_bool(r#"="apple" < "banana""#, true);
    assert_bool(r#"="b" >= "a""#, true);

    let err = runtime_error("=TRUE() > 1", &EmptyEnvironment);
    assert!(matches!(err,
                     RuntimeError::MismatchedOperands { operator: ">",
                                                        left:     ValueKind::Bool,
                                                        right:    ValueKind::Number, }));
    assert!(matches!(runtime_error("=TRUE() > FALSE()", &EmptyEnvironment),
                     RuntimeError::MismatchedOperands { .. }));
}

#[test]
fn comparison_binds_loosest() {
    assert_bool("=1 + 2 = 3", true);
    assert_bool("=2 * 3 > 5", true);
    assert_bool(r#"="a" & "b" = "ab""#, true);
}

#[test]
fn if_selects_one_branch() {
    assert_bool("=IF(TRUE();FALSE();2)", false);
    assert_number("=IF( 5 >= 3; 3; 5)", 3.0);

    let env = MapEnvironment::new().with_function("FUNC", failing("FUNC should not be called"));
    assert_eq!(eval_in("=IF(1 < 2; \"ok\"; FUNC())", &env), Value::from("ok"));
    assert_eq!(eval_in("=IF(1 > 2; FUNC(); \"ok\")", &env), Value::from("ok"));

    assert!(matches!(runtime_error("=IF(1; 2; 3)", &EmptyEnvironment),
                     RuntimeError::ExpectedBoolean { construct: "IF",
                                                     found:     ValueKind::Number, }));
}

#[test]
fn not() {
    assert_bool("=NOT(TRUE())", false);
    assert_bool("=NOT(1 > 2)", true);
    assert!(matches!(runtime_error(r#"=NOT("x")"#, &EmptyEnvironment),
                     RuntimeError::ExpectedBoolean { construct: "NOT", .. }));
}

#[test]
fn and_or() {
    assert_bool(r#"=AND(TRUE(); 5 > 2; "hey" = "hey")"#, true);
    assert_bool("=AND(TRUE())", true);
    assert_bool("=OR(FALSE(); FALSE())", false);
    assert_bool("=OR(FALSE(); 1 = 1)", true);

    let env = MapEnvironment::new().with_function("FUNC", NativeFunction::new(|_| Ok(Value::Bool(false))));
    assert_eq!(eval_in("=OR(FALSE(); 5 = 2; FUNC())", &env), Value::Bool(false));

    assert!(matches!(runtime_error("=AND(TRUE(); 1)", &EmptyEnvironment),
                     RuntimeError::ExpectedBoolean { construct: "AND", .. }));
    assert!(matches!(runtime_error("=OR(FALSE(); 1)", &EmptyEnvironment),
                     RuntimeError::ExpectedBoolean { construct: "OR", .. }));
    assert!(Expression::parse("=AND()").is_err());
}

#[test]
fn and_or_short_circuit() {
    let env = MapEnvironment::new().with_function("FUNC", failing("FUNC should not be called"));

    assert_eq!(eval_in("=AND(TRUE(); 5 = 2; FUNC())", &env), Value::Bool(false));
    assert_eq!(eval_in("=OR(FALSE(); 5 >= 2; FUNC())", &env), Value::Bool(true));
    assert_eq!(eval_in("=AND(FALSE(); 1)", &env), Value::Bool(false));

    assert!(matches!(runtime_error("=AND(TRUE(); FUNC())", &env),
                     RuntimeError::Function { .. }));
}

#[test]
fn lookups() {
    let env = MapEnvironment::new().with_value("A", 123.0)
                                   .with_value("B", 456.0)
                                   .with_value("name", "Tim")
                                   .with_function("F", failing("unused"));

    assert_eq!(eval_in("=A + B", &env), Value::Number(579.0));
    assert_eq!(eval_in(r#"=name & "!""#, &env), Value::from("Tim!"));

    let err = runtime_error("=missing + 1", &env);
    assert!(matches!(&err, RuntimeError::UnknownIdentifier { name } if name == "missing"));
    assert!(err.to_string().contains("unknown identifier missing"));

    assert!(matches!(runtime_error("=F", &env), RuntimeError::InvalidIdentifierType { .. }));
}

#[test]
fn calls() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let env = MapEnvironment::new().with_value("x", 2.0)
                                   .with_function("SAYHELLO", NativeFunction::new(|_| Ok(Value::from("Hello World!"))))
                                   .with_function("SUM",
                                                  NativeFunction::new(move |call: &Call<'_>| {
                                                      counter.fetch_add(1, Ordering::SeqCst);
                                                      call.expect_rest(0, ValueKind::Number)?;
                                                      Ok(Value::Number(call.values
                                                                           .iter()
                                                                           .filter_map(|v| v.as_number().ok())
                                                                           .sum()))
                                                  }));

    assert_eq!(eval_in("=SAYHELLO()", &env), Value::from("Hello World!"));
    assert_eq!(eval_in("=SUM(1; x; 3 * x)", &env), Value::Number(9.0));
    assert_eq!(eval_in("=SUM()", &env), Value::Number(0.0));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    assert!(matches!(runtime_error("=NOPE(1)", &env), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("=x(1)", &env), RuntimeError::NotAFunction { .. }));

    let err = runtime_error(r#"=SUM(1; "two")"#, &env);
    assert!(matches!(&err, RuntimeError::Function { name, .. } if name == "SUM"));
    assert!(err.to_string().contains("SUM"), "{err}");
}

#[test]
fn call_arguments_fail_before_the_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let env = MapEnvironment::new().with_function("F",
                                                  NativeFunction::new(move |_| {
                                                      counter.fetch_add(1, Ordering::SeqCst);
                                                      Ok(Value::Bool(true))
                                                  }));

    assert!(matches!(runtime_error("=F(1; 1 / 0)", &env), RuntimeError::DivisionByZero));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn cancellation_reaches_native_functions() {
    let env = MapEnvironment::new().with_function("SLOW",
                                                  NativeFunction::new(|call: &Call<'_>| {
                                                      if call.cancellation().is_some_and(CancellationToken::is_cancelled) {
                                                          return Err("cancelled".into());
                                                      }
                                                      Ok(Value::Bool(call.cancellation().is_some()))
                                                  }));
    let expression = Expression::parse("=SLOW()").unwrap();

    assert_eq!(expression.evaluate(&env).unwrap(), Value::Bool(false));

    let token = CancellationToken::new();
    assert_eq!(expression.evaluate_with_cancellation(&env, &token).unwrap(), Value::Bool(true));

    token.cancel();
    let err = expression.evaluate_with_cancellation(&env, &token).unwrap_err();
    assert!(err.to_string().contains("cancelled"));
}

#[test]
fn syntax_errors() {
    let err = syntax_error("=5 + $");
    assert_eq!(err, SyntaxError::UnknownCharacter { character: '$',
                                                    position:  4, });

    assert!(matches!(syntax_error("=1 2"), SyntaxError::TrailingTokens { position: 2, .. }));
    assert!(matches!(syntax_error("=(1 + 2"), SyntaxError::Expected { expected: "')'", .. }));
    assert!(matches!(syntax_error("=1 +"), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(syntax_error("=-x"), SyntaxError::ExpectedNumber { .. }));
    assert!(matches!(syntax_error("=*2"), SyntaxError::UnexpectedToken { .. }));
    assert!(matches!(syntax_error("=IF(TRUE(); 1)"), SyntaxError::Expected { .. }));
    assert!(matches!(syntax_error("=TRUE(1)"), SyntaxError::Expected { .. }));
    assert!(matches!(syntax_error("=1..2"), SyntaxError::UnknownCharacter { character: '.', .. }));
}

#[test]
fn deep_nesting_hits_the_depth_limit() {
    const NESTING: usize = 1_000_000;
    let src = format!("={}1 + 1{}", "(".repeat(NESTING), ")".repeat(NESTING));

    let err = syntax_error(&src);
    assert!(matches!(err, SyntaxError::MaximumDepth { .. }));
    assert!(err.to_string().contains("maximum depth"));
}

#[test]
fn depth_limit_is_configurable() {
    let src = format!("={}1{}", "(".repeat(20), ")".repeat(20));

    assert!(Expression::parse(&src).is_ok());
    let err = Expression::parse_with(&src, &ParseOptions { max_depth: 16 }).unwrap_err();
    assert!(matches!(err, SyntaxError::MaximumDepth { .. }));
}

#[test]
fn canonical_encoding() {
    let cases = [("=1+2", "=1 + 2"),
                 ("=IF( 5 >= 3; 3; 5)", "=IF(5 >= 3; 3; 5)"),
                 ("=(1-2)-3", "=(1 - 2) - 3"),
                 ("=10-4-3", "=10 - 4 - 3"),
                 ("=(1+2)*3", "=(1 + 2) * 3"),
                 ("=1 <> 2", "=1 <> 2"),
                 ("=AND(TRUE();NOT(FALSE()))", "=AND(TRUE(); NOT(FALSE()))"),
                 ("=F()", "=F()"),
                 ("=1 - -4", "=1 - -4"),
                 (r#"="a\"b""#, r#"="a\"b""#),
                 ("plain", r#"="plain""#)];

    for (src, expected) in cases {
        let expression = Expression::parse(src).unwrap();
        assert_eq!(expression.encode(), expected, "{src}");
        assert_eq!(expression.to_string(), expected, "{src}");
    }
}

#[test]
fn encoding_round_trip_preserves_meaning() {
    let env = base().with_value("a", 3.0).with_value("s", "x");
    let sources = ["=(10-4)-3",
                   "=10-(4-3)",
                   "=(2^3)^2",
                   "=-2^2",
                   "=(1 = 1) = TRUE()",
                   "=(\"a\" & \"b\") & s",
                   "=IF(a > 2; LEFT(\"hello\"; a); \"no\")",
                   "=CHOOSE(1; a; a * 2; a * 3) % 4"];

    for src in sources {
        let first = Expression::parse(src).unwrap();
        let second = Expression::parse(&first.encode()).unwrap();

        assert_eq!(first, second, "{src}");
        assert_eq!(first.evaluate(&env).unwrap(), second.evaluate(&env).unwrap(), "{src}");
    }
}

#[test]
fn non_finite_literals_encode_as_arithmetic() {
    let cases = [(f64::NAN, "=(0 % 0)"), (f64::INFINITY, "=(10 ^ 400)"), (f64::NEG_INFINITY, "=(0 - 10 ^ 400)")];

    for (n, expected) in cases {
        let expression = Expression::from(Node::literal(n));
        assert_eq!(expression.encode(), expected);

        let value = Expression::parse(&expression.encode()).unwrap()
                                                           .evaluate(&EmptyEnvironment)
                                                           .unwrap();
        match value {
            Value::Number(v) if n.is_nan() => assert!(v.is_nan(), "{expected}"),
            Value::Number(v) => assert_eq!(v, n, "{expected}"),
            other => panic!("{expected} evaluated to {other:?}"),
        }
    }
}

#[test]
fn control_characters_encode_as_unicode_escapes() {
    let expression = Expression::from(Node::literal("a\u{1}b"));
    assert_eq!(expression.encode(), r#"="a\u{1}b""#);
    assert_eq!(Expression::parse(&expression.encode()).unwrap(), expression);
}

#[test]
fn serde_uses_canonical_text() {
    let expression: Expression = "=1+2".parse().unwrap();

    let json = serde_json::to_string(&expression).unwrap();
    assert_eq!(json, r#""=1 + 2""#);

    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expression);
    assert_eq!(back.evaluate(&EmptyEnvironment).unwrap(), Value::Number(3.0));

    assert!(serde_json::from_str::<Expression>(r#""=1 +""#).is_err());
    assert!(serde_json::from_str::<Expression>(r#""""#).is_err());
}

#[test]
fn one_shot_evaluate_and_projections() {
    let env = MapEnvironment::new().with_value("name", "Tim");
    let env = Environments::new().with(env).with(base());

    assert_eq!(string(evaluate(r#"=LOWER(name) & ".jpg""#, &env)).unwrap(), "tim.jpg");
    assert_eq!(number(evaluate("=LEN(name)", &env)).unwrap(), 3.0);
    assert!(boolean(evaluate("=name = \"Tim\"", &env)).unwrap());

    assert!(matches!(number(evaluate("=name", &env)), Err(Error::Kind(_))));
    assert!(matches!(string(evaluate("=1 +", &env)), Err(Error::Syntax(_))));
    assert!(matches!(boolean(evaluate("=1 / 0", &env)), Err(Error::Runtime(_))));

    let parsed = Expression::parse("=1 > 0").unwrap();
    assert!(boolean(parsed.evaluate(&env)).unwrap());
}

#[test]
fn environments_layer_in_order() {
    let front = MapEnvironment::new().with_value("x", 1.0);
    let back = MapEnvironment::new().with_value("x", 2.0).with_value("y", 10.0);
    let env = Environments::new().with(front).with(back);

    assert_eq!(eval_in("=x + y", &env), Value::Number(11.0));
    assert!(matches!(runtime_error("=z", &env), RuntimeError::UnknownIdentifier { .. }));
}

#[test]
fn closure_and_shared_environments() {
    let env = FnEnvironment::new(|name: &str| {
        name.strip_prefix("col_")
            .and_then(|n| n.parse::<f64>().ok())
            .map(Binding::from)
    });

    assert_eq!(eval_in("=col_3 * col_4", &env), Value::Number(12.0));
    assert!(matches!(runtime_error("=row_1", &env), RuntimeError::UnknownIdentifier { .. }));

    let shared: Arc<dyn Environment> = Arc::new(base());
    assert_eq!(eval_in("=ABS(-1)", &shared), Value::Number(1.0));
    assert!(matches!(runtime_error("=ABS(-1)", &EmptyEnvironment),
                     RuntimeError::UnknownFunction { .. }));
}

#[test]
fn environment_from_json_keeps_scalars() {
    let json = serde_json::json!({
        "count": 4,
        "label": "items",
        "ready": true,
        "nested": { "a": 1 },
        "list": [1, 2],
        "nothing": null
    });
    let env = MapEnvironment::from_json(json.as_object().unwrap());

    assert_eq!(env.len(), 3);
    assert_eq!(eval_in(r#"=IF(ready; label & ": " & "ok"; "no")"#, &env), Value::from("items: ok"));
    assert_eq!(eval_in("=count * 2", &env), Value::Number(8.0));
    assert!(matches!(runtime_error("=nested", &env), RuntimeError::UnknownIdentifier { .. }));
}

#[test]
fn expressions_are_shared_across_threads() {
    let expression = Arc::new(Expression::parse("=x * 2").unwrap());

    let handles = [0.0, 1.0, 2.0, 3.0].into_iter()
                                      .map(|x| {
                                          let expression = Arc::clone(&expression);
                                          std::thread::spawn(move || {
                                              let env = MapEnvironment::new().with_value("x", x);
                                              (x, expression.evaluate(&env).unwrap())
                                          })
                                      })
                                      .collect::<Vec<_>>();

    for handle in handles {
        let (x, value) = handle.join().unwrap();
        assert_eq!(value, Value::Number(x * 2.0));
    }
}

#[test]
fn base_misc_functions() {
    assert_number("=CHOOSE(1; 10; 20; 30)", 20.0);
    assert_number("=CHOOSE(0; 10; 20; 30)", 10.0);
    assert!(matches!(runtime_error("=CHOOSE(3; 10; 20; 30)", &base()), RuntimeError::Function { .. }));
    assert!(matches!(runtime_error("=CHOOSE(-1; 10)", &base()), RuntimeError::Function { .. }));

    assert_number("=TYPE(123)", 1.0);
    assert_number(r#"=TYPE("hello")"#, 2.0);
    assert_number("=TYPE(TRUE())", 4.0);
    assert!(matches!(runtime_error("=TYPE()", &base()), RuntimeError::Function { .. }));
}

#[test]
fn base_math_functions() {
    assert_number("=ABS(-342)", 342.0);
    assert_number("=SIGN(-34)", -1.0);
    assert_number("=SIGN(0)", 0.0);
    assert_number("=SIGN(242342)", 1.0);
    assert_number("=LN(1)", 0.0);
    assert_number("=LOG10(10)", 1.0);
    assert_number("=LOG10(100)", 2.0);
    assert_number("=EXP(0)", 1.0);
    assert_number("=PI()", std::f64::consts::PI);

    let e = number(evaluate("=LN(EXP(1))", &base())).unwrap();
    assert!((e - 1.0).abs() < 1e-12);

    for _ in 0..100 {
        let r = number(evaluate("=RAND()", &base())).unwrap();
        assert!((0.0..1.0).contains(&r));
    }

    assert!(matches!(runtime_error(r#"=ABS("x")"#, &base()), RuntimeError::Function { .. }));
}

#[test]
fn base_string_functions() {
    assert_string("=CHAR(72; 101; 108; 108; 111; 33)", "Hello!");
    assert_string("=CHAR()", "");
    assert_string(r#"=JOIN(", "; "a"; "b"; "c")"#, "a, b, c");
    assert_string(r#"=JOIN("!!!")"#, "");
    assert!(matches!(runtime_error(r#"=JOIN(","; "a"; 1)"#, &base()), RuntimeError::Function { .. }));

    assert_string(r#"=LEFT("hello")"#, "h");
    assert_string(r#"=LEFT("hello";10)"#, "hello");
    assert_string(r#"=RIGHT("hello")"#, "o");
    assert_string(r#"=RIGHT("hello";3)"#, "llo");
    assert_string(r#"=RIGHT("hello";10)"#, "hello");

    assert_number(r#"=LEN("hélloworld")"#, 11.0);
    assert_string(r#"=LOWER("hey" & "THERE")"#, "heythere");
    assert_string(r#"=UPPER("hey" & "THERE")"#, "HEYTHERE");
    assert_string(r#"=TRIM(" hello  world   ")"#, "hello  world");

    assert_string(r#"=MID("hello world";1;5)"#, "hello");
    assert_string(r#"=MID("hello world";-5;3)"#, "");
    assert_string(r#"=MID("hello world";20)"#, "");
    assert_string(r#"=MID("hello world";7;1)"#, "w");
    assert_string(r#"=MID("hello world";7;100)"#, "world");

    assert_string(r#"=REPT("1"; 5)"#, "11111");
    assert_string(r#"=REPT("ab"; 0)"#, "");
    assert!(matches!(runtime_error(r#"=REPT("1"; -1)"#, &base()), RuntimeError::Function { .. }));
    assert!(matches!(runtime_error(r#"=REPT("ab"; 9999999999999999999)"#, &base()), RuntimeError::Function { .. }));
    assert!(matches!(runtime_error(r#"=REPT("a"; 1000000000000000)"#, &base()), RuntimeError::Function { .. }));

    assert_number(r#"=SEARCH("e"; "hello world")"#, 2.0);
    assert_number(r#"=SEARCH("z"; "hello world")"#, -1.0);
    assert_number(r#"=SEARCH("e"; "hello world"; 2)"#, 2.0);
    assert_number(r#"=SEARCH("e"; "hello world"; 3)"#, -1.0);
    assert_number(r#"=SEARCH("e"; "hello world"; 100)"#, -1.0);
}

#[test]
fn string_functions_never_split_characters() {
    assert_string(r#"=LEFT("héllo"; 2)"#, "h");
    assert_string(r#"=LEFT("héllo"; 3)"#, "hé");
    assert_string(r#"=RIGHT("abé"; 1)"#, "é");
    assert_string(r#"=MID("héllo"; 2; 2)"#, "é");
}
