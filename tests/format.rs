use anyhow::Result;
use rebarterm::config::parse;
use rebarterm::format::{format, format_term, format_terms};
use rebarterm::value::Term;

fn formatted(text: &str, indent: usize) -> Result<String> {
    Ok(format(&parse(text)?, indent))
}

#[test]
fn long_list_breaks() -> Result<()> {
    assert_eq!(formatted("{k, [1, 2, 3, 4]}.", 2)?,
               "{k, [\n    1,\n    2,\n    3,\n    4\n  ]}.\n");
    Ok(())
}

#[test]
fn short_list_stays_inline() -> Result<()> {
    assert_eq!(formatted("{k, [1, 2, 3]}.", 2)?, "{k, [1, 2, 3]}.\n");
    assert_eq!(formatted("{k,[ 1 ,2,3 ] } .", 8)?, "{k, [1, 2, 3]}.\n");
    Ok(())
}

#[test]
fn empty_input_formats_to_nothing() -> Result<()> {
    assert_eq!(formatted("", 4)?, "");
    assert_eq!(formatted("% only a comment\n", 4)?, "");
    assert_eq!(format_terms(std::iter::empty::<&Term>(), 4), "");
    Ok(())
}

#[test]
fn blank_line_between_terms() -> Result<()> {
    assert_eq!(formatted("{a, 1}. {b, 2}.\n\n\n{c, 3}.", 4)?,
               "{a, 1}.\n\n{b, 2}.\n\n{c, 3}.\n");
    Ok(())
}

#[test]
fn named_tuple_with_several_values_stays_on_one_line() -> Result<()> {
    assert_eq!(formatted("{app, \"x\", 'Y', 1.5, [a, b]}.", 4)?,
               "{app, \"x\", 'Y', 1.5, [a, b]}.\n");
    // the elements may still break
    assert_eq!(formatted("{app, ok, [1, 2, 3, 4]}.", 4)?,
               "{app, ok, [\n        1,\n        2,\n        3,\n        4\n    ]}.\n");
    Ok(())
}

#[test]
fn other_tuples_become_blocks() -> Result<()> {
    assert_eq!(formatted("{1, 2}.", 4)?, "{\n    1,\n    2\n}.\n");
    assert_eq!(formatted("{single}.", 2)?, "{\n  single\n}.\n");
    assert_eq!(formatted("{\"k\", v}.", 0)?, "{\n\"k\",\nv\n}.\n");
    Ok(())
}

#[test]
fn nested_blocks() -> Result<()> {
    let text = "{relx, [{release, {app, \"0.1.0\"}, [app, sasl]}, {dev_mode, true}, {include_erts, false}, {extended_start_script, true}]}.";
    let expected = "\
{relx, [
    {release, {app, \"0.1.0\"}, [app, sasl]},
    {dev_mode, true},
    {include_erts, false},
    {extended_start_script, true}
  ]}.
";
    assert_eq!(formatted(text, 2)?, expected);
    Ok(())
}

#[test]
fn list_of_complex_terms_breaks() -> Result<()> {
    let text = "[{a, {1, 2, 3}}].";
    // inner 3-tuple isn't simple, so neither is the list
    assert_eq!(formatted(text, 4)?, "[\n    {a, {\n            1,\n            2,\n            3\n        }}\n].\n");
    Ok(())
}

#[test]
fn scalars() {
    assert_eq!(format_term(&Term::Float(1.0), 0, 4), "1.0");
    assert_eq!(format_term(&Term::Float(1e100), 3, 4), "1e100");
    assert_eq!(format_term(&Term::Integer(-7), 0, 4), "-7");
    assert_eq!(format_term(&Term::quoted_atom("a"), 0, 4), "'a'");
    assert_eq!(format_term(&Term::string("s"), 0, 4), "\"s\"");
}

#[test]
fn top_level_integer_keeps_its_dot_apart() -> Result<()> {
    for indent in [0, 2, 4, 8] {
        let text = formatted("42 .\n-7\n.\n{a, 1}.", indent)?;
        assert_eq!(text, "42 .\n\n-7 .\n\n{a, 1}.\n");
        assert_eq!(parse(&text)?.terms(), &[
            Term::Integer(42),
            Term::Integer(-7),
            Term::Tuple(vec![Term::atom("a"), Term::Integer(1)]),
        ]);
    }
    // other top-level scalars take the dot directly
    assert_eq!(format_terms(&[Term::Float(1.5), Term::atom("x")], 4),
               "1.5.\nx.\n");
    Ok(())
}

#[test]
fn config_format_shortcut() -> Result<()> {
    let config = parse("{k, [1, 2, 3, 4]}.")?;
    assert_eq!(config.format(2), format(&config, 2));
    Ok(())
}
