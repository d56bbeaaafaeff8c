use simlan::{run_source, ParseError, RuntimeError, SimlanError, Span, WriterSink};

fn output_of(source: &str) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    if let Err(e) = run_source(source, &mut out) {
        panic!("program failed:\n{}\nError: {:?}", source, e);
    }
    out
}

fn failure_of(source: &str) -> (Vec<f64>, SimlanError) {
    let mut out: Vec<f64> = Vec::new();
    match run_source(source, &mut out) {
        Ok(()) => panic!("program should have failed:\n{}", source),
        Err(e) => (out, e),
    }
}

#[test]
fn literal_prints_itself() {
    assert_eq!(output_of("PRINT 42;"), vec![42.0]);
    assert_eq!(output_of("PRINT 3.14159;"), vec![3.14159]);
    assert_eq!(output_of("PRINT 0;"), vec![0.0]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(output_of("PRINT 10-2-3;"), vec![5.0]);
    assert_eq!(output_of("PRINT 100/10/5;"), vec![2.0]);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(output_of("PRINT 2+3*4;"), vec![14.0]);
    assert_eq!(output_of("PRINT (2+3)*4;"), vec![20.0]);
    assert_eq!(output_of("PRINT 2*(3+(4-1))/3;"), vec![4.0]);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let (out, err) = failure_of("PRINT 1/0;");
    assert!(out.is_empty());
    match err {
        SimlanError::Runtime(RuntimeError::DivisionByZero { span }) => {
            assert_eq!(span, Span::new(1, 8));
        }
        other => panic!("expected division by zero, got {:?}", other),
    }
}

#[test]
fn statements_execute_in_source_order() {
    assert_eq!(output_of("PRINT 1+1; PRINT 2+2;"), vec![2.0, 4.0]);
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let (out, err) = failure_of("PRINT 7;\nPRINT 8 / (4 - 4);\nPRINT 9;");
    assert_eq!(out, vec![7.0]);
    assert_eq!(err.span(), Some(Span::new(2, 9)));
}

#[test]
fn dangling_operator_is_a_parse_error() {
    let (out, err) = failure_of("PRINT 1+;");
    assert!(out.is_empty());
    match err {
        SimlanError::Parse(ParseError::UnexpectedToken { message, span, .. }) => {
            assert!(message.contains("Expected a number or a parenthesized expression"));
            assert!(message.ends_with("near ';'"));
            assert_eq!(span, Span::new(1, 9));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn unterminated_statement_expects_semicolon_at_eof() {
    let (_, err) = failure_of("PRINT 5");
    assert_eq!(err.code(), "E_PARSE");
    assert_eq!(
        err.to_string(),
        "Expected ';' after PRINT statement's expression at end of file"
    );
}

#[test]
fn syntax_error_anywhere_prevents_all_output() {
    let (out, err) = failure_of("PRINT 1;\nPRINT 2;\nPRINT (3;");
    assert!(out.is_empty());
    assert_eq!(err.code(), "E_PARSE");
}

#[test]
fn commented_out_statement_does_not_run() {
    assert_eq!(output_of("// PRINT 99;\nPRINT 1;"), vec![1.0]);
    assert_eq!(output_of("PRINT 1; // PRINT 2;\n// PRINT 3;"), vec![1.0]);
}

#[test]
fn unsupported_words_are_lexical_errors() {
    let (_, err) = failure_of("PRINT 1;\nprint 2;");
    assert_eq!(err.code(), "E_LEX");
    assert_eq!(err.span(), Some(Span::new(2, 1)));
    assert_eq!(
        err.to_string(),
        "Lexical error: Unexpected identifier or keyword: print"
    );
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(output_of("\r\n\tPRINT\t(1\n+\n2)\r\n*3 ;\n"), vec![9.0]);
}

#[test]
fn writer_sink_formats_lines() {
    let mut sink = WriterSink::new(Vec::new());
    run_source("PRINT 1 + 1; PRINT 1 / 4; PRINT 0.1 + 0.2;", &mut sink).expect("valid program");
    let text = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(text, "2\n0.25\n0.30000000000000004\n");
}

#[test]
fn long_sum_within_depth_limit_evaluates() {
    let terms = simlan::parser::expressions::MAX_EXPR_DEPTH;
    let source = format!("PRINT 1{};", "+1".repeat(terms - 2));
    assert_eq!(output_of(&source), vec![(terms - 1) as f64]);
}

#[test]
fn oversized_expressions_fail_cleanly() {
    let sum = format!("PRINT 7;\nPRINT 1{};", "+1".repeat(300_000));
    let (out, err) = failure_of(&sum);
    assert!(out.is_empty());
    assert_eq!(err.code(), "E_PARSE");
    assert_eq!(err.to_string(), "Expression nested too deeply");
    assert_eq!(err.span().map(|s| s.line), Some(2));

    let parens = format!("PRINT {}1{};", "(".repeat(50_000), ")".repeat(50_000));
    let (_, err) = failure_of(&parens);
    assert_eq!(err.to_string(), "Expression nested too deeply");
    assert!(err.help().is_some());
}
