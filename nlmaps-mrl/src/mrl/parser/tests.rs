//! # Parser 测试

use super::*;
use crate::mrl::LeafKind;

// -------------------------------------------------------------------------
// 正常解析
// -------------------------------------------------------------------------

#[test]
fn test_parse_nested_functors() {
    let node = parse_mrl("area(keyval('name','Paris'))", 1).unwrap();
    assert_eq!(
        node,
        MrlNode::functor(
            "area",
            vec![MrlNode::functor(
                "keyval",
                vec![MrlNode::quoted("name"), MrlNode::quoted("Paris")]
            )]
        )
    );
}

#[test]
fn test_parse_bare_leaves() {
    let node = parse_mrl("qtype(least(topx(1)))", 1).unwrap();
    assert_eq!(node.to_string(), "qtype(least(topx(1)))");

    let leaf = &node.children()[0].children()[0].children()[0];
    assert!(matches!(
        leaf,
        MrlNode::Leaf { value, kind: LeafKind::Bare } if value == "1"
    ));
}

#[test]
fn test_parse_top_level_literal() {
    assert_eq!(parse_mrl("'Paris'", 1).unwrap(), MrlNode::quoted("Paris"));
    assert_eq!(parse_mrl("  count  ", 1).unwrap(), MrlNode::bare("count"));
}

#[test]
fn test_nested_commas_do_not_split_parent() {
    let node = parse_mrl(
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),qtype(count))",
        1,
    )
    .unwrap();
    assert_eq!(node.arity(), 2);
    assert_eq!(node.children()[0].arity(), 2);
    assert_eq!(node.children()[1].symbol(), "qtype");
}

#[test]
fn test_whitespace_is_insignificant() {
    let spaced = parse_mrl(" area ( keyval ( 'name' , 'Paris' ) ) ", 1).unwrap();
    let compact = parse_mrl("area(keyval('name','Paris'))", 1).unwrap();
    assert_eq!(spaced, compact);
}

#[test]
fn test_quoted_values_keep_inner_punctuation() {
    let node = parse_mrl("nwr(keyval('name','McDonald's'))", 1).unwrap();
    assert_eq!(node.children()[0].children()[1], MrlNode::quoted("McDonald's"));

    let node = parse_mrl("nwr(keyval('name','M(c)Donalds'))", 1).unwrap();
    assert_eq!(node.children()[0].children()[1], MrlNode::quoted("M(c)Donalds"));

    let node = parse_mrl("nwr(keyval('cuisine','japanese,italian'))", 1).unwrap();
    assert_eq!(
        node.children()[0].children()[1],
        MrlNode::quoted("japanese,italian")
    );
}

#[test]
fn test_quoted_value_is_trimmed() {
    let node = parse_mrl("keyval('name',' Mc Donalds ')", 1).unwrap();
    assert_eq!(node.children()[1], MrlNode::quoted("Mc Donalds"));
}

#[test]
fn test_parse_unicode_value() {
    let node = parse_mrl("keyval('name','Yorckstraße')", 1).unwrap();
    assert_eq!(node.children()[1].symbol(), "Yorckstraße");
}

// -------------------------------------------------------------------------
// 错误
// -------------------------------------------------------------------------

#[test]
fn test_missing_closing_paren() {
    let err = parse_mrl("area(keyval('name','Paris')", 3).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedParen {
            line: 3,
            functor: "area".to_string()
        }
    );
}

#[test]
fn test_extra_closing_paren() {
    let err = parse_mrl("area(count))", 1).unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { ref rest, .. } if rest == ")"));
}

#[test]
fn test_empty_functor_name() {
    let err = parse_mrl("(a,b)", 1).unwrap_err();
    assert_eq!(err, ParseError::EmptyFunctor { line: 1, position: 0 });

    let err = parse_mrl("f(a,(b))", 1).unwrap_err();
    assert!(matches!(err, ParseError::EmptyFunctor { position: 4, .. }));
}

#[test]
fn test_empty_arguments() {
    assert!(matches!(
        parse_mrl("f()", 1),
        Err(ParseError::EmptyArgument { position: 2, .. })
    ));
    assert!(matches!(
        parse_mrl("f(a,,b)", 1),
        Err(ParseError::EmptyArgument { position: 4, .. })
    ));
    assert!(matches!(
        parse_mrl("f(a,)", 1),
        Err(ParseError::EmptyArgument { .. })
    ));
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_mrl("   ", 9), Err(ParseError::EmptyInput { line: 9 }));
}

#[test]
fn test_unclosed_quote() {
    let err = parse_mrl("keyval('name','Paris", 1).unwrap_err();
    assert_eq!(err, ParseError::UnclosedQuote { line: 1, position: 14 });
}

#[test]
fn test_empty_literal() {
    let err = parse_mrl("keyval('name','')", 1).unwrap_err();
    assert!(matches!(err, ParseError::EmptyLiteral { .. }));
}

#[test]
fn test_unexpected_char_between_arguments() {
    let err = parse_mrl("f(a b)", 1).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            line: 1,
            position: 4,
            found: 'b'
        }
    );
}

#[test]
fn test_unexpected_end_after_open_paren() {
    let err = parse_mrl("area(", 1).unwrap_err();
    assert!(matches!(err, ParseError::UnclosedParen { .. }));
}

// -------------------------------------------------------------------------
// 嵌套深度
// -------------------------------------------------------------------------

fn nested(depth: usize) -> String {
    format!("{}a{}", "f(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_at_limit_is_accepted() {
    let node = parse_mrl(&nested(MAX_DEPTH), 1).unwrap();
    assert_eq!(node.node_count(), MAX_DEPTH + 1);
}

#[test]
fn test_nesting_beyond_limit_is_error() {
    let err = parse_mrl(&nested(MAX_DEPTH + 1), 3).unwrap_err();
    assert_eq!(
        err,
        ParseError::TooDeep {
            line: 3,
            depth: MAX_DEPTH
        }
    );

    let err = parse_mrl(&nested(200_000), 1).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { .. }));
}
