//! Integration tests for latex2md full document conversion

use latex2md::{
    latex_to_markdown, BlockConfig, BlockCounter, Configuration, ConstructKind, ConstructName,
    ConversionError, Converter,
};
use std::io::Write;

fn doc(body: &str) -> String {
    format!(
        "\\documentclass{{article}}\n\\usepackage{{amsmath,amsthm}}\n\\newtheorem{{thm}}{{Theorem}}\n\\begin{{document}}\n{}\n\\end{{document}}\n",
        body
    )
}

// ============================================================================
// Numbering
// ============================================================================

mod numbering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_counted_construct_numbers_one_then_two() {
        let counted: Vec<ConstructName> = Configuration::builtin()
            .iter()
            .filter(|(name, entry)| entry.show_count && name.kind() != ConstructKind::Header)
            .map(|(name, _)| name)
            .collect();
        assert!(!counted.is_empty());

        for name in counted {
            let key = name.key();
            let body = format!(
                "\\begin{{{k}}}\nfirst\n\\end{{{k}}}\n\\begin{{{k}}}\nsecond\n\\end{{{k}}}",
                k = key
            );
            let out = latex_to_markdown(&doc(&body)).unwrap();
            let labels: Vec<&str> = out.lines().filter(|l| l.starts_with('#')).collect();
            assert_eq!(labels.len(), 2, "{}: {}", key, out);
            assert!(labels[0].ends_with(" 1"), "{}: {}", key, labels[0]);
            assert!(labels[1].ends_with(" 2"), "{}: {}", key, labels[1]);
        }
    }

    #[test]
    fn test_constructs_count_independently() {
        let body = "\\begin{thm}\na\n\\end{thm}\n\\begin{lem}\nb\n\\end{lem}\n\\begin{thm}\nc\n\\end{thm}";
        let out = latex_to_markdown(&doc(body)).unwrap();
        let labels: Vec<&str> = out.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(labels, vec!["#### Theorem 1", "#### Lemma 1", "#### Theorem 2"]);
    }

    #[test]
    fn test_fresh_converters_do_not_share_numbering() {
        let input = doc("\\begin{thm}\nx\n\\end{thm}");
        assert_eq!(latex_to_markdown(&input).unwrap(), latex_to_markdown(&input).unwrap());
    }

    #[test]
    fn test_shared_counter_across_chapters() {
        let chapters = [
            doc("\\begin{prop}\nOne.\n\\end{prop}"),
            doc("\\begin{prop}\nTwo.\n\\end{prop}"),
            doc("\\begin{prop}\nThree.\n\\end{prop}"),
        ];

        let mut counter = BlockCounter::new();
        let mut labels = Vec::new();
        for chapter in &chapters {
            let mut converter = Converter::new(chapter).with_counter(counter);
            let out = converter.convert().unwrap();
            labels.push(out.lines().next().unwrap_or_default().to_string());
            counter = converter.into_counter();
        }

        assert_eq!(
            labels,
            vec!["#### Proposition 1", "#### Proposition 2", "#### Proposition 3"]
        );
        assert_eq!(counter.peek(ConstructName::Proposition), 4);
    }
}

// ============================================================================
// Whole documents
// ============================================================================

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_document() {
        let body = r"\section{Linear Models}
We study \emph{least squares}, i.e. $\argmin_w \|Xw - y\|^2$.

\begin{thm}[Gauss--Markov]
The OLS estimator is \textbf{BLUE}.
\end{thm}

\begin{proof}
See \texttt{notes.pdf}.
\end{proof}

\begin{itemize}
\item first
\item second
\end{itemize}

\begin{align*}
a &= b \\
c &= d
\end{align*}";
        let out = latex_to_markdown(&doc(body)).unwrap();
        let expected = r"###  Linear Models

We study *least squares*, i.e. $\text{argmin}_w \|Xw - y\|^2$.

#### Theorem 1 (Gauss--Markov)

> The OLS estimator is **BLUE**.


#### Proof

See `notes.pdf`.




* first
* second


\begin{align}
a &= b \\\\
c &= d
\end{align}";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_no_constructs_only_fixups() {
        let body = "Plain text with 10\\% and \\emph{style}.\n\nSecond paragraph.";
        let out = latex_to_markdown(&doc(body)).unwrap();
        assert_eq!(out, "Plain text with 10% and *style*.\n\nSecond paragraph.");
    }

    #[test]
    fn test_preamble_dropped() {
        let out = latex_to_markdown(&doc("Body.")).unwrap();
        assert!(!out.contains("documentclass"));
        assert!(!out.contains("newtheorem"));
        assert_eq!(out, "Body.");
    }

    #[test]
    fn test_ignore_region_removed() {
        let body = "\\begin{exer}\nCompute it.\n\\end{exer}\n% LaTeX2Markdown IGNORE\n\\begin{proof}\nSolution \\emph{here}.\n\\end{proof}\n% LaTeX2Markdown END\nAfter.";
        let out = latex_to_markdown(&doc(body)).unwrap();
        assert!(!out.contains("Solution"));
        assert!(!out.contains("LaTeX2Markdown"));
        assert!(!out.contains("Proof"));
        assert!(out.starts_with("#### Exercise 1\n\nCompute it."));
        assert!(out.ends_with("After."));
    }

    #[test]
    fn test_unsupported_environments_verbatim() {
        let body = "\\begin{tabular}{cc}\na & b\n\\end{tabular}\n\\begin{corollary}\nSo.\n\\end{corollary}";
        let out = latex_to_markdown(&doc(body)).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn test_missing_boundaries_is_error() {
        let err = latex_to_markdown("\\section{Intro}\n\\begin{thm}\nx\n\\end{thm}").unwrap_err();
        assert!(matches!(err, ConversionError::MissingDocumentBoundaries));
        assert_eq!(err.to_string(), "malformed document: missing document boundaries");
    }

    #[test]
    fn test_unterminated_reported_not_fatal() {
        let input = doc("\\begin{itemize}\n\\item dangling");
        let output = Converter::new(&input).convert_with_warnings().unwrap();
        assert_eq!(output.content, "\\begin{itemize}\n\\item dangling");
        assert!(output.has_warnings());
        assert!(output.warnings[0].message.contains("itemize"));
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_euler_example() {
        let config = Configuration::default()
            .with_entry(ConstructName::Section, BlockConfig::new("###", "", false))
            .with_entry(
                ConstructName::Theorem,
                BlockConfig::new("####", "Theorem", true).with_line_indent("> "),
            );
        let input = "\\begin{document}\\section{Intro}\\begin{thm}[Euler]\nA fact.\n\\end{thm}\\end{document}";
        let out = Converter::with_config(input, &config).convert().unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["###  Intro", "#### Theorem 1 (Euler)", "", "> A fact."]
        );
    }

    #[test]
    fn test_config_loaded_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        for name in ConstructName::ALL {
            let pretty = if name == ConstructName::Lemma { "Hilfssatz" } else { "X" };
            writeln!(
                file,
                "{}:\n  markdown_heading: \"##\"\n  pretty_name: \"{}\"\n  show_count: true\n  list_heading: \"-\"",
                name.key(),
                pretty
            )
            .unwrap();
        }

        let config = Configuration::from_path(file.path()).unwrap();
        let input = doc("\\begin{lem}\nx\n\\end{lem}\n\\begin{itemize}\n\\item y\n\\end{itemize}");
        let out = Converter::with_config(&input, &config).convert().unwrap();
        assert_eq!(out, "## Hilfssatz 1\n\nx\n\n## X 1\n\n- y");
    }

    #[test]
    fn test_incomplete_config_file_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r##"{{"thm": {{"markdown_heading": "#", "pretty_name": "T", "show_count": true}}}}"##
        )
        .unwrap();

        let err = Configuration::from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("no entry for construct"));
    }
}
