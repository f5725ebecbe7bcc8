// Colored terminal output for relations, prompts and diagnostics.
//
// Prompt and disambiguation helpers write to any `Write` so the interactive
// loop can be exercised against in-memory buffers; the display functions
// print to stdout.

use std::io::{self, Write};

use colored::Colorize;

use crate::document::Document;
use crate::relation::discover::RelationResult;
use crate::relation::sections::SectionMatch;
use crate::text::profile::DistinctiveWord;

/// Ask for concept number `index`.
pub fn write_concept_prompt<W: Write>(out: &mut W, index: usize) -> io::Result<()> {
    write!(out, "{} ", format!("Enter Concept {index}:").bright_blue())
}

/// List the alternatives for an ambiguous concept name.
pub fn write_disambiguation<W: Write>(out: &mut W, name: &str, options: &[String]) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("{name} is too ambiguous. Please choose from one of the following options...")
            .yellow()
    )?;
    for option in options {
        writeln!(out, "\t{option}")?;
    }
    Ok(())
}

/// Report a concept name with no matching page.
pub fn write_not_found<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("No page found for \"{name}\". Try another name.").yellow()
    )
}

/// Render a relation as the two-line explanation shown to the user.
pub fn format_relation(result: &RelationResult) -> String {
    let first = format!("\"{}\"", result.first.concept).bright_green();
    let second = format!("\"{}\"", result.second.concept).bright_green();
    let connection = format!("\"{}\"", result.connection).yellow();
    let first_section = format!("\"{}\"", result.first.section.title).magenta();
    let second_section = format!("\"{}\"", result.second.section.title).magenta();

    format!(
        "\nConcept {first} and Concept {second} connected by Concept {connection} because:\n\n\
         \t{connection} related to {first_section} related to {first}.\n\
         \t{connection} related to {second_section} related to {second}."
    )
}

/// Print a relation, with its scores underneath.
pub fn display_relation(result: &RelationResult) {
    println!("{}", format_relation(result));
    println!();
    println!(
        "{}",
        format!(
            "  score {:.1} of {:.1} across {} shared words",
            result.score, result.total_score, result.shared_words
        )
        .dimmed()
    );
}

/// Print a concept's most distinctive words as a bar chart.
pub fn display_profile(concept: &str, distinct_words: usize, words: &[DistinctiveWord]) {
    println!(
        "\n{}",
        format!("=== Most distinctive words in \"{concept}\" ({distinct_words} qualifying words) ===")
            .bold()
    );
    println!();

    if words.is_empty() {
        println!("  No qualifying words.");
        return;
    }

    let bar_width: usize = 20;
    let max_salience = words.iter().map(|w| w.salience).fold(0.0_f64, f64::max);

    for (i, word) in words.iter().enumerate() {
        let ratio = if max_salience > 0.0 {
            word.salience / max_salience
        } else {
            0.0
        };
        let filled = (ratio * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );

        let colored_bar = if ratio >= 0.5 {
            bar.bright_green()
        } else if ratio >= 0.2 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<24} {} {:>10.1}  {}",
            i + 1,
            word.word.bold(),
            colored_bar,
            word.salience,
            format!("freq {:.4}", word.frequency).dimmed()
        );
    }
}

/// Print a word's frequency in every section, marking the chosen one.
pub fn display_section_frequencies(
    document: &Document,
    word: &str,
    frequencies: &[SectionMatch],
    best: Option<&SectionMatch>,
) {
    println!(
        "\n{}",
        format!("=== \"{word}\" across the sections of \"{}\" ===", document.title).bold()
    );
    println!();

    if frequencies.is_empty() {
        println!("  This page has no sections.");
        return;
    }

    for entry in frequencies {
        let is_best = best.is_some_and(|b| b.title == entry.title);
        let marker = if is_best { "*".yellow().bold() } else { " ".normal() };
        let line = format!("{:<40} {:>8.4}", entry.title, entry.frequency);
        if entry.frequency > 0.0 {
            println!("  {marker} {line}");
        } else {
            println!("  {marker} {}", line.dimmed());
        }
    }

    if let Some(best) = best {
        let preview = document
            .section(&best.title)
            .map(|text| super::truncate_chars(text, 160))
            .unwrap_or_default();
        println!();
        println!("  Best section: {}", best.title.magenta());
        if !preview.is_empty() {
            println!("  {}", preview.replace('\n', " ").dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::discover::ConceptLink;

    #[test]
    fn test_format_relation_mentions_everything() {
        colored::control::set_override(false);
        let result = RelationResult {
            first: ConceptLink {
                concept: "Gulf Stream".to_string(),
                section: SectionMatch {
                    title: "Flow".to_string(),
                    frequency: 1.5,
                },
            },
            second: ConceptLink {
                concept: "Climate".to_string(),
                section: SectionMatch {
                    title: "Oceans".to_string(),
                    frequency: 0.5,
                },
            },
            connection: "ocean".to_string(),
            score: 10.0,
            total_score: 12.0,
            shared_words: 3,
        };

        let text = format_relation(&result);
        assert!(text.contains(
            "Concept \"Gulf Stream\" and Concept \"Climate\" connected by Concept \"ocean\" because:"
        ));
        assert!(text.contains("\"ocean\" related to \"Flow\" related to \"Gulf Stream\"."));
        assert!(text.contains("\"ocean\" related to \"Oceans\" related to \"Climate\"."));
    }

    #[test]
    fn test_disambiguation_lists_options() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_disambiguation(
            &mut out,
            "Mercury",
            &["Mercury (planet)".to_string(), "Mercury (element)".to_string()],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Mercury is too ambiguous"));
        assert!(text.contains("\tMercury (planet)\n\tMercury (element)\n"));
    }
}
