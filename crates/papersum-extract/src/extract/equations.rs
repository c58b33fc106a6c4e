//! LaTeX math: display, inline, `equation` and `align` environments.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{trimmed_nonempty, Extractor};

static EQUATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?s)\$\$(.*?)\$\$",
        r"(?s)\$(.*?)\$",
        r"(?s)\\begin\{equation\}(.*?)\\end\{equation\}",
        r"(?s)\\begin\{align\}(.*?)\\end\{align\}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Trimmed, non-empty expressions in pattern order, then text order. Duplicates are kept.
pub fn extract_equations(text: &str) -> Vec<String> {
    EQUATION_PATTERNS
        .iter()
        .flat_map(|re| {
            trimmed_nonempty(
                re.captures_iter(text)
                    .filter_map(|caps| caps.get(1).map(|m| m.as_str())),
            )
        })
        .collect()
}

pub struct EquationExtractor;

impl Extractor for EquationExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "equations"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_equations(text)
    }

    fn fallback(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_family_order() {
        let text = r"Loss $L = x^2$ and $$E = mc^2$$ and \begin{equation} a+b \end{equation}";
        assert_eq!(extract_equations(text), vec!["E = mc^2", "L = x^2", "a+b"]);
    }

    #[test]
    fn test_multiline_align_and_duplicates() {
        let text = "\\begin{align}\n y &= wx \\\\\n z &= y\n\\end{align} then $k$ and $k$";
        assert_eq!(
            extract_equations(text),
            vec!["k", "k", "y &= wx \\\\\n z &= y"]
        );
    }

    #[test]
    fn test_empty_math_dropped() {
        assert!(extract_equations("cost is $ $ today").is_empty());
    }
}
