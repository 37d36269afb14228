//! Plain-text rendering of sequences, trace logs and reports.

use std::fmt::{Display, Write};
use crate::config::Algorithm;
use crate::report::SortReport;
use crate::trace::{EventKind, Trace};

/// `[1, 2, 3]`
pub fn format_sequence<T: Display>(seq: &[T]) -> String {
    join(seq.iter())
}

fn join<'a, T: Display + 'a>(items: impl Iterator<Item = &'a T>) -> String {
    let items: Vec<String> = items.map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Narrates a trace line by line.
///
/// Exchange traces are grouped by pass and swap lines carry the comparison count
/// at which they happened. Merge traces are indented by recursion depth.
pub fn render_trace<T: Display>(trace: &Trace<T>) -> String {
    let mut out = String::new();
    let mut current_pass = 0;
    let mut comparisons = 0;

    for event in trace {
        match &event.kind {
            EventKind::Compare { pass, .. } => {
                comparisons += 1;
                pass_header(&mut out, &mut current_pass, *pass);
            }
            EventKind::Swap { pass, first, second, snapshot, .. } => {
                pass_header(&mut out, &mut current_pass, *pass);
                let _ = writeln!(out, "  Step {comparisons}: swapped {first} and {second} -> {}", format_sequence(snapshot));
            }
            EventKind::PassSorted { pass } => {
                pass_header(&mut out, &mut current_pass, *pass);
                out.push_str("  No swaps, sequence is sorted!\n");
            }
            EventKind::Split { depth, left, right } => {
                let indent = "  ".repeat(*depth);
                let _ = writeln!(out, "{indent}Sorting: {}", join(left.iter().chain(right.iter())));
                let _ = writeln!(out, "{indent}  Split: left = {}, right = {}", format_sequence(left), format_sequence(right));
            }
            EventKind::BaseCase { depth, sequence } => {
                let indent = "  ".repeat(*depth);
                let _ = writeln!(out, "{indent}Sorting: {}", format_sequence(sequence));
                let _ = writeln!(out, "{indent}  -> base case, returning {}", format_sequence(sequence));
            }
            EventKind::Merge { depth, left, right, merged } => {
                let indent = "  ".repeat(*depth);
                let _ = writeln!(
                    out,
                    "{indent}  Merging {} and {} -> {}",
                    format_sequence(left),
                    format_sequence(right),
                    format_sequence(merged)
                );
                let _ = writeln!(out, "{indent}  Result: {}", format_sequence(merged));
            }
        }
    }
    out
}

fn pass_header(out: &mut String, current: &mut usize, pass: usize) {
    if *current == pass {
        return;
    }
    if *current != 0 {
        out.push('\n');
    }
    *current = pass;
    let _ = writeln!(out, "Pass {pass}:");
}

/// Input, result and (for instrumented runs) the step total.
pub fn render_summary<T: Display>(input: &[T], report: &SortReport<T>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input:  {}", format_sequence(input));
    let _ = writeln!(out, "Sorted: {}", format_sequence(&report.sorted));
    if report.trace.is_some() {
        let label = match report.algorithm {
            Algorithm::Exchange => "Total steps",
            Algorithm::Merge => "Total merge operations",
        };
        let _ = writeln!(out, "{label}: {}", report.steps());
    }
    out
}
