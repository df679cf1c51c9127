#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use indexmap::IndexMap;
use zxml::{
    from_bytes, from_str, from_str_with_config, to_string, Config, DuplicatePolicy, Element,
    ErrorKind,
};

fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_self_closing_normalization() -> zxml::Result<()> {
    for input in ["<a/>", "<a></a>", "<a />", "<a>  \n </a>"] {
        let root = from_str(input)?.root;
        assert_eq!(root.name, "a");
        assert!(root.attributes.is_empty());
        assert!(root.namespaces.is_empty());
        assert_eq!(root.text, "");
        assert!(root.children.is_empty());
    }
    Ok(())
}

#[test]
fn test_namespace_extraction() -> zxml::Result<()> {
    let root = from_str(r#"<a xmlns:ns="urn:x" ns:k="v"/>"#)?.root;
    assert_eq!(root.namespaces, map(&[("ns", "urn:x")]));
    assert_eq!(root.attributes, map(&[("ns:k", "v")]));
    Ok(())
}

#[test]
fn test_default_namespace_form() -> zxml::Result<()> {
    let root = from_str(r#"<a xmlns="urn:d"/>"#)?.root;
    assert_eq!(root.namespaces, map(&[("", "urn:d")]));
    assert!(root.attributes.is_empty());
    Ok(())
}

#[test]
fn test_namespaces_are_not_inherited() -> zxml::Result<()> {
    let root = from_str(r#"<a xmlns:p="urn:p"><p:b xmlns:q="urn:q"/></a>"#)?.root;
    assert_eq!(root.namespaces, map(&[("p", "urn:p")]));
    assert_eq!(root.children[0].namespaces, map(&[("q", "urn:q")]));
    Ok(())
}

#[test]
fn test_mixed_content_fixture() -> zxml::Result<()> {
    assert_eq!(from_str("<a>x<b/>y</a>")?.root.text, "xy");
    assert_eq!(
        from_str("<a>  hello  <b/>  world  </a>")?.root.text,
        "hello  world"
    );
    assert_eq!(
        from_str("<p>Some <b>bold</b> and <i>italic</i> text.</p>")?.root.text,
        "Some andtext."
    );
    Ok(())
}

#[test]
fn test_mismatched_closing_tag_fails() {
    let err = from_str("<a><b></a>").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TagMismatch {
            expected: "b".to_string(),
            found: "a".to_string()
        }
    );
    assert_eq!(err.span().start.col, 9);
}

#[test]
fn test_declaration_round_trip() -> zxml::Result<()> {
    let doc = from_str(r#"<?xml version="1.0"?><a/>"#)?;
    let output = to_string(&doc);
    assert_eq!(output.lines().next(), Some(r#"<?xml version="1.0"?>"#));
    assert_eq!(from_str(&output)?, doc);
    Ok(())
}

#[test]
fn test_local_name_derivation() {
    assert_eq!(Element::new("ns:item").local_name(), "item");
    assert_eq!(Element::new("item").local_name(), "item");
}

#[test]
fn test_round_trip_nested_document() -> zxml::Result<()> {
    let input = r#"
        <?xml version="1.0" standalone='yes'?>
        <root xmlns="urn:r" xmlns:m="urn:m" version="2">
            intro
            <m:meta key='a "b"' other="it's"/>
            <section id="1">
                <title>First</title>
                body text
                <para>one</para>
                <para>two</para>
            </section>
            outro
        </root>
    "#;
    let doc = from_str(input)?;
    assert!(doc.root.text.starts_with("intro"));
    assert!(doc.root.text.ends_with("outro"));
    assert_eq!(doc.root.children[1].text, "body text");
    let reparsed = from_str(&to_string(&doc))?;
    assert_eq!(reparsed, doc);
    Ok(())
}

#[test]
fn test_duplicate_policy() -> zxml::Result<()> {
    let input = "<a k='1' k='2'/>";
    assert_eq!(from_str(input)?.root.attribute("k"), Some("2"));

    let strict = Config::default().with_duplicates(DuplicatePolicy::Reject);
    let err = from_str_with_config(input, strict).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::DuplicateAttribute {
            key: "k".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_nesting_too_deep() {
    let depth = 200;
    let input = format!("{}{}", "<n>".repeat(depth), "</n>".repeat(depth));
    let err = from_str(&input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NestingTooDeep { max: 128 });

    let relaxed = Config::new(256, 0);
    assert!(from_str_with_config(&input, relaxed).is_ok());
}

#[test]
fn test_error_kinds() {
    let cases = [
        ("text", ErrorKind::UnexpectedRootToken),
        ("<?xml version=1?><a/>", ErrorKind::MalformedDeclaration),
        ("<a b/>", ErrorKind::MalformedTagHeader),
        ("<a><b>", ErrorKind::UnterminatedElement),
        ("<a k='v/>", ErrorKind::UnterminatedQuote),
        ("<a/>tail", ErrorKind::TrailingContent),
    ];
    for (input, expected) in cases {
        let err = from_str(input).unwrap_err();
        assert_eq!(err.kind(), &expected, "input: {input}");
    }
}

#[test]
fn test_from_bytes_rejects_invalid_utf8() {
    let err = from_bytes(b"<a>\xc3\x28</a>").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidUtf8);
}

#[test]
fn test_error_reports_position() {
    let err = from_str("<root>\n  <child k=v/>\n</root>").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedTagHeader);
    assert_eq!(err.span().start.line, 2);
    assert_eq!(err.span().start.col, 12);
    assert!(err.to_string().starts_with("error at 2:12"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_serialization() -> Result<(), Box<dyn std::error::Error>> {
    let doc = from_str(r#"<a xmlns:p="urn:p" k="v"><b>t</b></a>"#)?;
    let json = serde_json::to_value(&doc)?;
    assert_eq!(json["root"]["name"], "a");
    assert_eq!(json["root"]["namespaces"]["p"], "urn:p");
    assert_eq!(json["root"]["children"][0]["text"], "t");
    let back: zxml::Document = serde_json::from_value(json)?;
    assert_eq!(back, doc);
    Ok(())
}
