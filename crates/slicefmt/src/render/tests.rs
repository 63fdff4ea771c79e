use std::cell::Cell;
use std::fmt::Write;

use super::*;
use pretty_assertions::assert_eq;

fn display<T: fmt::Display>(w: &mut String, item: &T) -> fmt::Result {
    write!(w, "{item}")
}

fn run<S>(config: Option<&Config>, input: Input<'_, S>) -> (String, Result<(), RenderError>)
where
    S: Sequence + ?Sized,
    S::Item: fmt::Display,
{
    let mut out = String::new();
    let result = render(config, input, &mut out, display);
    (out, result)
}

/// A sink that accepts `budget` writes and rejects the rest.
struct Limited {
    out: String,
    budget: usize,
}

impl fmt::Write for Limited {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.budget == 0 {
            return Err(fmt::Error);
        }
        self.budget -= 1;
        self.out.push_str(s);
        Ok(())
    }
}

// Diagnostics

#[test]
fn missing_config_writes_diagnostic() {
    let (out, result) = run(None, Input::Present(&[1, 2]));
    assert_eq!(out, CONFIG_MISSING);
    assert_eq!(result, Err(RenderError::ConfigMissing));
}

#[test]
fn missing_config_checked_before_input() {
    let (out, result) = run::<[i32]>(None, Input::NotASequence);
    assert_eq!(out, "%!(slice formatter given nil *Config)");
    assert_eq!(result, Err(RenderError::ConfigMissing));
}

#[test]
fn not_a_sequence_writes_diagnostic() {
    let cfg = Config::new().empty("[]");
    let (out, result) = run::<[i32]>(Some(&cfg), Input::NotASequence);
    assert_eq!(out, "%!(slice formatter only formats slices)");
    assert_eq!(result, Err(RenderError::NotASequence));
}

#[test]
fn diagnostic_text_matches_error() {
    assert_eq!(RenderError::ConfigMissing.diagnostic(), Some(CONFIG_MISSING));
    assert_eq!(RenderError::NotASequence.diagnostic(), Some(NOT_A_SEQUENCE));
    assert_eq!(RenderError::Sink(fmt::Error).diagnostic(), None);
}

// Empty input

#[test]
fn nil_and_len0_placeholders() {
    let cfg = Config::new().nil("<nil>").len0("<none>").prefix("[").postfix("]");
    assert_eq!(run::<[i32]>(Some(&cfg), Input::Nil).0, "<nil>");
    assert_eq!(run(Some(&cfg), Input::Present(&Vec::<i32>::new())).0, "<none>");
}

#[test]
fn empty_overrides_nil_and_len0() {
    let cfg = Config::new().nil("<nil>").len0("<none>").empty("[]");
    assert_eq!(run::<[i32]>(Some(&cfg), Input::Nil).0, "[]");
    assert_eq!(run::<[i32]>(Some(&cfg), Input::Present(&[])).0, "[]");
}

#[test]
fn zero_config_writes_nothing_for_empty() {
    let cfg = Config::new();
    let (out, result) = run::<[i32]>(Some(&cfg), Input::Nil);
    assert_eq!(out, "");
    assert_eq!(result, Ok(()));
}

// Framing and separators

#[test]
fn default_style_framing() {
    let cfg = Config::new().empty("[]").prefix("[").postfix("]").sep(" ");
    assert_eq!(run(Some(&cfg), Input::Present(&[1, 2, 3])).0, "[1 2 3]");
}

#[test]
fn single_element_has_no_separator() {
    let cfg = Config::new().prefix("(").postfix(")").sep(", ");
    assert_eq!(run(Some(&cfg), Input::Present(&[42])).0, "(42)");
}

#[test]
fn zero_config_concatenates() {
    let cfg = Config::new();
    assert_eq!(run(Some(&cfg), Input::Present(&["a", "b", "c"])).0, "abc");
}

#[test]
fn sep_fn_replaces_sep() {
    let cfg = Config::new()
        .sep("IGNORED")
        .sep_fn(|w, n, last| w.write_str(if n == last { " and " } else { ", " }));
    assert_eq!(run(Some(&cfg), Input::Present(&[0, 1, 2, 3])).0, "0, 1, 2 and 3");
}

#[test]
fn sep_fn_sees_every_gap_in_order() {
    let cfg = Config::new().sep_fn(|w, n, last| write!(w, "<{n}/{last}>"));
    assert_eq!(
        run(Some(&cfg), Input::Present(&["a", "b", "c", "d"])).0,
        "a<0/2>b<1/2>c<2/2>d"
    );
}

// Cutoff

#[test]
fn cutoff_static_summary() {
    let cfg = Config::new().sep("/").cutoff(2).summary(" and so on").postfix("!");
    let cases: [(&[i32], &str); 4] = [
        (&[0], "0!"),
        (&[0, 1], "0/1!"),
        (&[0, 1, 2], "0/1 and so on"),
        (&[0, 1, 2, 3], "0/1 and so on"),
    ];
    for (input, expected) in cases {
        assert_eq!(run(Some(&cfg), Input::Present(input)).0, expected);
    }
}

#[test]
fn cutoff_summary_fn_gets_omitted_count() {
    let cfg = Config::new()
        .sep("/")
        .cutoff(2)
        .summary(" unused")
        .summary_fn(|w, n| write!(w, " (and {n} more)"));
    assert_eq!(run(Some(&cfg), Input::Present(&[0, 1, 2, 3, 4])).0, "0/1 (and 3 more)");
}

#[test]
fn cutoff_last_gap_is_relative_to_shown() {
    let cfg = Config::new()
        .cutoff(3)
        .sep_fn(|w, n, last| write!(w, "[{n}/{last}]"))
        .summary("…");
    assert_eq!(
        run(Some(&cfg), Input::Present(&[1, 2, 3, 4, 5, 6])).0,
        "1[0/1]2[1/1]3…"
    );
}

#[test]
fn cutoff_one_shows_single_element_then_summary() {
    let cfg = Config::new().prefix("[").sep(",").cutoff(1).summary("+");
    assert_eq!(run(Some(&cfg), Input::Present(&[9, 8])).0, "[9+");
}

#[test]
fn summary_not_written_without_cutoff() {
    let called = Cell::new(false);
    let mut out = String::new();
    let cfg = Config::new().sep(" ").summary("never");
    render(Some(&cfg), Input::Present(&[1, 2, 3]), &mut out, |w, n| {
        called.set(true);
        display(w, n)
    })
    .unwrap_or_else(|e| panic!("render failed: {e}"));
    assert_eq!(out, "1 2 3");
    assert!(called.get());
}

// Sink failures

#[test]
fn sink_failure_aborts_remaining_writes() {
    let cfg = Config::new().prefix("[").postfix("]").sep(",");
    let mut sink = Limited {
        out: String::new(),
        budget: 3,
    };
    let result = render(Some(&cfg), Input::Present(&[1, 2, 3]), &mut sink, |w, n| {
        write!(w, "{n}")
    });
    assert_eq!(result, Err(RenderError::Sink(fmt::Error)));
    assert_eq!(sink.out, "[1,");
}

#[test]
fn sink_failure_on_diagnostic() {
    let mut sink = Limited {
        out: String::new(),
        budget: 0,
    };
    let result = render::<[i32], _, _>(None, Input::Nil, &mut sink, |_, _| Ok(()));
    assert_eq!(result, Err(RenderError::Sink(fmt::Error)));
}

#[test]
fn element_failure_propagates() {
    let cfg = Config::new().sep(",").postfix("]");
    let mut out = String::new();
    let result = render(Some(&cfg), Input::Present(&[1, 2, 3]), &mut out, |w, n| {
        if *n == 2 {
            Err(fmt::Error)
        } else {
            write!(w, "{n}")
        }
    });
    assert_eq!(result, Err(RenderError::Sink(fmt::Error)));
    assert_eq!(out, "1,");
}
