use rebarterm::value::{Atom, Term};

fn ints(ns: &[i64]) -> Vec<Term> {
    ns.iter().map(|n| Term::Integer(*n)).collect()
}

#[test]
fn quoting_is_ignored() {
    let bare = Term::Atom(Atom::new("foo"));
    let quoted = Term::quoted_atom("foo");
    assert!(bare.compare(&quoted));
    assert_eq!(bare, quoted);
    assert_ne!(bare.to_string(), quoted.to_string());
    assert_ne!(Term::atom("foo"), Term::atom("bar"));
}

#[test]
fn variants_never_mix() {
    assert!(!Term::Integer(42).compare(&Term::Float(42.0)));
    assert!(!Term::List(vec![]).compare(&Term::Tuple(vec![])));
    assert_ne!(Term::atom("x"), Term::string("x"));
    assert_ne!(Term::List(ints(&[1, 2])), Term::Tuple(ints(&[1, 2])));
}

#[test]
fn collections() {
    assert!(Term::List(ints(&[1, 2])).compare(&Term::List(ints(&[1, 2]))));
    assert!(!Term::List(ints(&[1, 2])).compare(&Term::List(ints(&[1, 2, 3]))));
    assert!(!Term::List(ints(&[1, 2])).compare(&Term::List(ints(&[2, 1]))));
    assert!(Term::Tuple(vec![]).compare(&Term::Tuple(vec![])));
}

#[test]
fn nested() {
    let a = Term::Tuple(vec![Term::atom("deps"),
                             Term::List(vec![Term::quoted_atom("x"), Term::Float(0.5)])]);
    let b = Term::Tuple(vec![Term::quoted_atom("deps"),
                             Term::List(vec![Term::atom("x"), Term::Float(0.5)])]);
    let c = Term::Tuple(vec![Term::atom("deps"),
                             Term::List(vec![Term::atom("x"), Term::Float(0.25)])]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
