// wolfmt-core/tests/format_integration_tests.rs
//! End-to-end behavior of the built-in styles through the public engine API.

use anyhow::Result;
use test_log::test;
use wolfmt_core::{
    format_str, load_style_by_name, resolve_block, FormatEngine, RewriteEngine, Span,
};

fn engine(style: &str) -> Result<RewriteEngine> {
    RewriteEngine::new(load_style_by_name(style)?)
}

#[test]
fn compact_removes_spaces_in_call_brackets() -> Result<()> {
    assert_eq!(format_str("compact", "f[ x , y ]")?, "f[x,y]");
    Ok(())
}

#[test]
fn compact_squeezes_operators_and_separators() -> Result<()> {
    assert_eq!(format_str("compact", "a -> b")?, "a->b");
    assert_eq!(format_str("compact", "a :> b")?, "a:>b");
    assert_eq!(format_str("compact", "f := g[ x ]")?, "f:=g[x]");
    assert_eq!(format_str("compact", "x = 3 ; y = 4")?, "x=3;y=4");
    assert_eq!(format_str("compact", "f /@ list")?, "f/@list");
    assert_eq!(format_str("compact", "x + 1 &")?, "x + 1&");
    assert_eq!(format_str("compact", "{ 1 , 2 }")?, "{1,2}");
    Ok(())
}

#[test]
fn compact_collapses_space_runs() -> Result<()> {
    assert_eq!(format_str("compact", "a    b\tc")?, "a b\tc");
    Ok(())
}

#[test]
fn pretty_spaces_comma() -> Result<()> {
    assert_eq!(format_str("pretty", "a,b")?, "a, b");
    Ok(())
}

#[test]
fn pretty_spaces_set() -> Result<()> {
    assert_eq!(format_str("pretty", "x=3")?, "x = 3");
    Ok(())
}

#[test]
fn pretty_spaces_equal() -> Result<()> {
    assert_eq!(format_str("pretty", "a==b")?, "a == b");
    Ok(())
}

#[test]
fn pretty_spaces_same_q_without_splitting_it() -> Result<()> {
    assert_eq!(format_str("pretty", "a===b")?, "a === b");
    Ok(())
}

#[test]
fn pretty_spaces_set_delayed() -> Result<()> {
    assert_eq!(format_str("pretty", "f[x_]:=x+1")?, "f[x_] := x + 1");
    Ok(())
}

#[test]
fn pretty_spaces_map() -> Result<()> {
    assert_eq!(format_str("pretty", "f/@list")?, "f /@ list");
    Ok(())
}

#[test]
fn pretty_joins_newline_before_semicolon() -> Result<()> {
    assert_eq!(format_str("pretty", "x = 3\n;")?, "x = 3;");
    Ok(())
}

#[test]
fn empty_input_is_empty_output() -> Result<()> {
    assert_eq!(format_str("pretty", "")?, "");
    assert_eq!(format_str("compact", "")?, "");
    Ok(())
}

#[test]
fn unmatched_input_passes_through() -> Result<()> {
    let input = "SomeSymbol";
    assert_eq!(format_str("pretty", input)?, input);
    assert_eq!(format_str("compact", input)?, input);
    Ok(())
}

#[test]
fn rewrite_is_deterministic() -> Result<()> {
    let input = "f[ a,b ] = g[ x ,y ]\n\nh[ 1,2 ]";
    let e = engine("pretty")?;
    let first = e.rewrite(input, Span::whole(input))?;
    let second = e.rewrite(input, Span::whole(input))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn pretty_is_idempotent_on_pretty_input() -> Result<()> {
    let e = engine("pretty")?;
    for input in ["a, b", "x = 3", "a == b", "f /@ list", "f[x_] := x + 1"] {
        let outcome = e.rewrite(input, Span::whole(input))?;
        assert_eq!(outcome.text, input);
        assert!(outcome.is_noop(), "pretty changed already-pretty input {input:?}");
    }
    Ok(())
}

#[test]
fn pretty_after_compact_stabilizes() -> Result<()> {
    // compact loses the original spacing, but pretty(compact(pretty(s)))
    // lands back on the pretty fixed point for well-formed input.
    let pretty_once = format_str("pretty", "x=3,y[1,2]")?;
    let compacted = format_str("compact", &pretty_once)?;
    let restored = format_str("pretty", &compacted)?;
    assert_eq!(restored, pretty_once);
    Ok(())
}

#[test]
fn block_resolution_scopes_the_rewrite() -> Result<()> {
    let buffer = "block1\n\nblock2\n\nblock3";
    let cursor = buffer.find("block2").unwrap() + 2;
    let span = resolve_block(buffer, cursor);
    assert_eq!(span.slice(buffer), "block2");

    // Only the middle block is touched by a rewrite.
    let noisy = "a,b\n\nc,d\n\ne,f";
    let cursor = noisy.find("c,d").unwrap();
    let e = engine("pretty")?;
    let outcome = e.rewrite(noisy, resolve_block(noisy, cursor))?;
    assert_eq!(outcome.text, "a,b\n\nc, d\n\ne,f");
    Ok(())
}

#[test]
fn change_summary_names_the_rules_that_fired() -> Result<()> {
    let e = engine("pretty")?;
    let outcome = e.rewrite("x=3,y=4", Span::new(0, 7))?;
    let fired: Vec<&str> = outcome.summary.iter().map(|i| i.rule_name.as_str()).collect();
    assert!(fired.contains(&"set_spacing"));
    assert!(fired.contains(&"comma_spacing"));
    Ok(())
}
