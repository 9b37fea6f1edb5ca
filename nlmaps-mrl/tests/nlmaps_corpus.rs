//! # NLmaps 语料集成测试
//!
//! 使用真实 NLmaps 查询验证线性化与还原，输出需与既有线性语料逐字一致。

use nlmaps_mrl::{
    Dialect, FunctionaliseOptions, MalformedSequenceError, MrlError, OnLineError, PassThrough,
    functionalise, functionalise_line, linearise_batch, linearise_line, parse_mrl,
};

/// (括号形式, 线性形式)
const FIXTURES: &[(&str, &str)] = &[
    (
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('cuisine','japanese')),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0",
    ),
    (
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','McDonald's')),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 McDonaldSAVEAPOs@s qtype@1 count@0",
    ),
    (
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','M(c)Donalds')),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 MBRACKETOPENcBRACKETCLOSEDonalds@s qtype@1 count@0",
    ),
    (
        "query(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Mc Donalds')),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 Mc€Donalds@s qtype@1 count@0",
    ),
    (
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('cuisine','japanese,italian')),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japaneseSAVECOMMAitalian@s qtype@1 count@0",
    ),
    (
        "query(around(center(area(keyval('name','Heidelberg'),keyval('de:place','city')),nwr(keyval('name','Yorckstraße'))),search(nwr(and(keyval('amenity','bank'),keyval('amenity','pharmacy')))),maxdist(DIST_INTOWN),topx(1)),qtype(latlong))",
        "query@2 around@4 center@2 area@2 keyval@2 name@0 Heidelberg@s keyval@2 de:place@0 city@s nwr@1 keyval@2 name@0 Yorckstraße@s search@1 nwr@1 and@2 keyval@2 amenity@0 bank@s keyval@2 amenity@0 pharmacy@s maxdist@1 DIST_INTOWN@0 topx@1 1@0 qtype@1 latlong@0",
    ),
    (
        "query(area(keyval('name','Paris'),keyval('is_in:country','France')),nwr(keyval('amenity','restaurant'),keyval('cuisine',or('greek','italian'))),qtype(count))",
        "query@3 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@2 keyval@2 amenity@0 restaurant@s keyval@2 cuisine@0 or@2 greek@s italian@s qtype@1 count@0",
    ),
];

#[test]
fn linearise_matches_corpus() {
    for (i, (mrl, expected)) in FIXTURES.iter().enumerate() {
        let actual = linearise_line(mrl, i + 1, Dialect::NlMaps).unwrap();
        assert_eq!(&actual, expected, "line {}", i + 1);
    }
}

#[test]
fn functionalise_matches_corpus() {
    let options = FunctionaliseOptions::default();
    for (i, (expected, tokens)) in FIXTURES.iter().enumerate() {
        let actual = functionalise_line(tokens, i + 1, &options, None).unwrap();
        assert_eq!(&actual, expected, "line {}", i + 1);
    }
}

#[test]
fn functionalise_restores_pass_through_words() {
    let pass_through = PassThrough::new("noise noise Paris noise", "noise noise pari noise");
    let actual = functionalise_line(
        "query@3 area@2 keyval@2 name@0 pari keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0",
        1,
        &FunctionaliseOptions::default(),
        Some(&pass_through),
    )
    .unwrap();
    assert_eq!(actual, FIXTURES[0].0);
}

#[test]
fn functionalise_rejects_wrong_arity() {
    let err = functionalise(
        "query@5 area@2 keyval@2 name@0 Paris@s keyval@2 is_in:country@0 France@s nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0",
        1,
        &FunctionaliseOptions::default(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, MalformedSequenceError::Underflow { missing: 2, .. }));
}

#[test]
fn plain_dialect_keeps_literal_kind() {
    let tokens = linearise_line("area(keyval('name','Paris'))", 1, Dialect::NlMaps).unwrap();
    insta::assert_snapshot!(tokens, @"area@1 keyval@2 name@0 Paris@s");

    let plain = FunctionaliseOptions {
        dialect: Dialect::Plain,
        ..Default::default()
    };
    let restored = functionalise_line(&tokens, 1, &plain, None).unwrap();
    insta::assert_snapshot!(restored, @"area(keyval(name,'Paris'))");

    let reparsed = parse_mrl(&restored, 1).unwrap();
    assert_eq!(reparsed.to_string(), restored);
}

#[test]
fn malformed_line_does_not_stop_batch() {
    let lines = [
        "area(keyval('name','Paris')",
        FIXTURES[0].0,
    ];
    let output = linearise_batch("dev.mrl", &lines, Dialect::NlMaps, OnLineError::Empty);
    assert_eq!(output.lines[0], "");
    assert_eq!(output.lines[1], FIXTURES[0].1);

    let err = linearise_line(lines[0], 1, Dialect::NlMaps).unwrap_err();
    assert!(matches!(err, MrlError::Parse(_)));
    insta::assert_snapshot!(
        output.diagnostics.diagnostics[0].to_string(),
        @r"
    [ERROR] dev.mrl:1: 解析错误: 第 1 行：'area(' 缺少右括号 ')'
      | area(keyval('name','Paris')
    "
    );
}
