use anyhow::Result;
use proptest::prelude::*;
use rebarterm::config::parse;
use rebarterm::format::format_terms;
use rebarterm::value::{Atom, Term};

const INDENTS: [usize; 4] = [0, 2, 4, 8];

fn bare_atom() -> impl Strategy<Value = Term> {
    prop::string::string_regex("[a-z_][a-zA-Z0-9_@]{0,8}")
        .unwrap()
        .prop_map(|s| Term::atom(&s))
}

// Neither quotes nor backslashes: those are written back unescaped.
fn quoted_atom() -> impl Strategy<Value = Term> {
    prop::string::string_regex("[a-zA-Z0-9 .:/%{}-]{0,10}")
        .unwrap()
        .prop_map(|s| Term::quoted_atom(&s))
}

fn string() -> impl Strategy<Value = Term> {
    prop::string::string_regex("[a-zA-Z0-9 .,:/%'{}\\[\\]\n\t-]{0,16}")
        .unwrap()
        .prop_map(|s| Term::string(&s))
}

fn float() -> impl Strategy<Value = Term> {
    (prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO)
        .prop_map(Term::Float)
}

fn term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        bare_atom(),
        quoted_atom(),
        string(),
        any::<i64>().prop_map(Term::Integer),
        float(),
    ];
    leaf.prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Term::Tuple),
            prop::collection::vec(inner, 0..6).prop_map(Term::List),
        ]
    })
}

fn top_level_term() -> impl Strategy<Value = Term> {
    prop_oneof![
        any::<i64>().prop_map(Term::Integer),
        float(),
        bare_atom(),
        quoted_atom(),
        string(),
        prop::collection::vec(term(), 0..4).prop_map(Term::Tuple),
        (bare_atom(), term()).prop_map(|(k, v)| Term::Tuple(vec![k, v])),
        prop::collection::vec(term(), 0..4).prop_map(Term::List),
    ]
}

fn roundtrip(terms: &[Term], indent: usize) -> Result<Vec<Term>> {
    let text = format_terms(terms, indent);
    Ok(parse(&text)?.terms().to_vec())
}

proptest! {
    #[test]
    fn formatting_preserves_terms(terms in prop::collection::vec(top_level_term(), 0..5)) {
        for indent in INDENTS {
            let text = format_terms(&terms, indent);
            let reparsed = parse(&text);
            prop_assert!(reparsed.is_ok(), "{:?} doesn't parse: {:?}", text, reparsed.err());
            let reparsed = reparsed.unwrap();
            prop_assert_eq!(reparsed.terms(), &terms[..], "formatted:\n{}", text);
        }
    }

    #[test]
    fn atom_quoting_is_irrelevant(name in "[a-z][a-z0-9_]{0,8}") {
        let bare = Term::Atom(Atom { name: kstring::KString::from_ref(&name), quoted: false });
        let quoted = Term::quoted_atom(&name);
        prop_assert!(bare.compare(&quoted));
        prop_assert!(quoted.compare(&bare));
    }
}

#[test]
fn fixture_roundtrips_at_every_indent() -> Result<()> {
    let text = include_str!("t-input.config");
    let config = parse(text)?;
    for indent in INDENTS {
        let again = parse(&config.format(indent))?;
        assert!(again.same_terms(&config), "indent {}", indent);
    }
    Ok(())
}

#[test]
fn escaped_string_roundtrips() -> Result<()> {
    let terms = parse(r#"{s, "line1\nline2\ttab"}."#)?.terms().to_vec();
    for indent in INDENTS {
        assert_eq!(roundtrip(&terms, indent)?, terms);
    }
    Ok(())
}
