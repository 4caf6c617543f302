//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::power::PowerEstimate;
use crate::result::TestOutcome;

/// Format a [`TestOutcome`] for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. The header states whether the
/// null hypothesis is rejected at the configured level.
pub fn format_outcome(outcome: &TestOutcome) -> String {
    let mut output = String::new();

    let header = if outcome.is_significant() {
        format!(
            "{} {}",
            "\u{2717}".red().bold(),
            "NULL HYPOTHESIS REJECTED".red().bold()
        )
    } else {
        format!(
            "{} {}",
            "\u{2713}".green().bold(),
            "NO SIGNIFICANT EFFECT".green().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let p_str = if outcome.is_below_resolution() {
        format!("p-value: < {}", outcome.resolution())
    } else {
        format!("p-value: {:.4}", outcome.p_value)
    };
    let p_colored = if outcome.is_significant() {
        p_str.red()
    } else {
        p_str.green()
    };
    output.push_str(&format_box_line(&p_colored.to_string()));

    output.push_str(&format_box_line(&format!("Alpha: {}", outcome.alpha)));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!(
        "Observed statistic: {:.4}",
        outcome.actual
    )));
    output.push_str(&format_box_line(&format!(
        "Max simulated:      {}",
        format_optional(outcome.max_test_stat)
    )));
    output.push_str(&format_box_line(&format!(
        "Critical value:     {}",
        format_optional(outcome.critical_value)
    )));

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&format!(
        "Iterations: {}  Seed: {}",
        outcome.iterations, outcome.seed
    )));
    output.push_str(&format_box_bottom());

    if !outcome.actual.is_finite() {
        output.push_str(&format!(
            "\n{}\n",
            "Note: the observed statistic is not finite; check for empty or degenerate samples."
                .dimmed()
                .italic()
        ));
    }

    output
}

/// Format a [`PowerEstimate`] for human-readable terminal output.
pub fn format_power(estimate: &PowerEstimate) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&"POWER ANALYSIS".bold().to_string()));
    output.push_str(&format_box_separator());

    let power_str = format!("Power: {:.1}%", estimate.power * 100.0);
    let power_colored = if estimate.power >= 0.8 {
        power_str.green()
    } else if estimate.power >= 0.5 {
        power_str.yellow()
    } else {
        power_str.red()
    };
    output.push_str(&format_box_line(&power_colored.to_string()));
    output.push_str(&format_box_line(&format!(
        "False negatives: {} of {} runs",
        estimate.false_negatives, estimate.runs
    )));
    output.push_str(&format_box_line(&format!("Seed: {}", estimate.seed)));
    output.push_str(&format_box_bottom());

    output
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "n/a".dimmed().to_string(),
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 50;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Pad by visible width, ignoring ANSI escapes
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_outcome(p_value: f64) -> TestOutcome {
        TestOutcome {
            p_value,
            actual: 30.0,
            max_test_stat: Some(44.0),
            critical_value: Some(32.0),
            iterations: 1000,
            seed: 42,
            alpha: 0.05,
        }
    }

    #[test]
    fn test_format_retained() {
        let output = format_outcome(&make_outcome(0.07));
        assert!(output.contains("NO SIGNIFICANT EFFECT"));
        assert!(output.contains("0.0700"));
        assert!(output.contains("30.0000"));
        assert!(output.contains("Seed: 42"));
    }

    #[test]
    fn test_format_rejected_below_resolution() {
        let output = format_outcome(&make_outcome(0.0));
        assert!(output.contains("NULL HYPOTHESIS REJECTED"));
        assert!(output.contains("< 0.001"));
    }

    #[test]
    fn test_format_missing_diagnostics() {
        let outcome = TestOutcome {
            max_test_stat: None,
            critical_value: None,
            actual: f64::NAN,
            ..make_outcome(0.5)
        };
        let output = format_outcome(&outcome);
        assert!(output.contains("n/a"));
        assert!(output.contains("not finite"));
    }

    #[test]
    fn test_format_power() {
        let estimate = PowerEstimate {
            runs: 100,
            false_negatives: 30,
            false_negative_rate: 0.3,
            power: 0.7,
            seed: 9,
        };
        let output = format_power(&estimate);
        assert!(output.contains("70.0%"));
        assert!(output.contains("30 of 100 runs"));
    }

    #[test]
    fn test_box_lines_have_equal_width() {
        let output = format_outcome(&make_outcome(0.07));
        let widths: Vec<usize> = output
            .lines()
            .take_while(|line| !line.is_empty())
            .map(|line| strip_ansi_codes(line).chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "widths: {:?}", widths);
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
