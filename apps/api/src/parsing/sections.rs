//! Labeled-section scanning for the skill extractor.
//!
//! A header pattern ("Skills:", "Key Competencies", "Technologies Used",
//! "Programming Languages") opens a block. The block grows one line at a time
//! and closes at the first line boundary where a blank line follows, a
//! `Label:` starts the next line, or the text ends.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::skills::is_valid_skill;

static SECTION_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:technical\s+)?skills?\s*:?\s*\n",
        r"(?i)(?:key|core)\s+(?:technical\s+)?(?:skills|competencies|technologies)\s*:?\s*\n",
        r"(?i)technologies?\s+(?:used|known|familiar)\s*:?\s*\n?",
        r"(?i)programming\s+languages?\s*:?\s*\n?",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid section header pattern"))
    .collect()
});

/// A `Word:` label (two or more letters, optional spaces, colon) ends a block.
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]{2,}\s*:").expect("valid label pattern"));

static LEADING_MARKERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-–—\s*\d.()\[\]]+").expect("valid leading marker pattern"));

static TRAILING_NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid trailing note pattern"));

const SEPARATORS: &[char] = &[',', ';', '•', '●', '○', '▪', '▫', '|', '・', '\n', '\t', '&'];

const MIN_PIECE_LEN: usize = 2;
const MAX_PIECE_LEN: usize = 35;

/// True when the block may close right before `rest[at..]`: at the end of
/// the text, before a blank line, or before a `Label:` opening the next line.
fn closes_block(rest: &str, at: usize) -> bool {
    let tail = &rest[at..];
    tail.is_empty() || tail.starts_with("\n\n") || LABEL_RE.is_match(tail)
}

/// Returns the block that starts at the beginning of `rest`, or `None` if
/// there is no non-empty first line.
///
/// Only line boundaries are cut points. A `Word:` in the middle of a line
/// belongs to the block ("Java Frameworks: Django" stays whole).
pub fn section_body(rest: &str) -> Option<&str> {
    if rest.is_empty() || rest.starts_with('\n') {
        return None;
    }

    let mut line_start = 0usize;
    loop {
        let Some(len) = rest[line_start..].find('\n') else {
            return Some(rest);
        };
        let line_end = line_start + len;
        let next = line_end + 1;

        if closes_block(rest, next) {
            return Some(&rest[..next]);
        }
        // An empty next line: the blank line starts at this line's newline.
        if rest[next..].starts_with('\n') {
            return Some(&rest[..line_end]);
        }
        line_start = next;
    }
}

/// Cleans one delimiter-separated piece of a skills block.
pub fn clean_piece(piece: &str) -> String {
    let piece = piece.trim();
    let piece = LEADING_MARKERS_RE.replace(piece, "");
    let piece = TRAILING_NOTE_RE.replace(&piece, "");
    piece.trim().to_string()
}

/// Splits a block into cleaned, validated skill candidates.
pub fn split_block(block: &str) -> Vec<String> {
    block
        .split(SEPARATORS)
        .map(clean_piece)
        .filter(|piece| {
            let len = piece.chars().count();
            (MIN_PIECE_LEN..=MAX_PIECE_LEN).contains(&len) && is_valid_skill(piece)
        })
        .collect()
}

/// Pass 2 of skill extraction: every header pattern contributes the skills of
/// its first block.
pub fn labeled_section_skills(text: &str) -> Vec<String> {
    let mut found = Vec::new();

    for header in SECTION_HEADERS.iter() {
        let block = header
            .find_iter(text)
            .find_map(|m| section_body(&text[m.end()..]));
        if let Some(block) = block {
            found.extend(split_block(block));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_ends_at_blank_line() {
        assert_eq!(
            section_body("Python, Go\nRust\n\nExperience at Acme"),
            Some("Python, Go\nRust")
        );
    }

    #[test]
    fn test_block_ends_before_next_label() {
        assert_eq!(
            section_body("Python, Go\nEducation: BSc"),
            Some("Python, Go\n")
        );
    }

    #[test]
    fn test_block_runs_to_end_of_text() {
        assert_eq!(section_body("Python, Go"), Some("Python, Go"));
    }

    #[test]
    fn test_label_inside_a_line_does_not_cut_it() {
        assert_eq!(
            section_body("Python Tools: Docker\nMore"),
            Some("Python Tools: Docker\nMore")
        );
        assert_eq!(section_body("Python Tools: Docker"), Some("Python Tools: Docker"));
    }

    #[test]
    fn test_trailing_newline_stays_in_block() {
        assert_eq!(section_body("Python, Go\n"), Some("Python, Go\n"));
    }

    #[test]
    fn test_mid_line_label_keeps_following_lines() {
        let text = "Skills:\nPython, Java Frameworks: Django, Flask\nDocker, Kubernetes\n\nEducation";
        let skills = labeled_section_skills(text);
        for expected in ["Python", "Flask", "Docker", "Kubernetes"] {
            assert!(skills.iter().any(|s| s == expected), "missing {expected} in {skills:?}");
        }
    }

    #[test]
    fn test_empty_body_is_none() {
        assert_eq!(section_body(""), None);
        assert_eq!(section_body("\nPython"), None);
    }

    #[test]
    fn test_clean_piece_strips_bullets_and_notes() {
        assert_eq!(clean_piece("  - Python (Expert) "), "Python");
        assert_eq!(clean_piece("3. Docker"), "Docker");
        assert_eq!(clean_piece("[Kubernetes]"), "Kubernetes]");
        assert_eq!(clean_piece("—  Terraform"), "Terraform");
    }

    #[test]
    fn test_split_block_filters_invalid_pieces() {
        let pieces = split_block("Python; Communication | Docker & a\tKubernetes (advanced)");
        assert_eq!(pieces, vec!["Python", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_split_block_length_bounds() {
        let long = "x".repeat(40);
        let pieces = split_block(&format!("Go, {long}, SQL"));
        assert_eq!(pieces, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_skills_header() {
        let text = "Jane Doe\nTechnical Skills:\nPython, Docker, AWS\n\nExperience\n...";
        assert_eq!(labeled_section_skills(text), vec!["Python", "Docker", "AWS"]);
    }

    #[test]
    fn test_technologies_used_header_on_same_line() {
        let text = "Project Atlas. Technologies used: Rust, PostgreSQL, Redis\n\nMore text";
        assert_eq!(
            labeled_section_skills(text),
            vec!["Rust", "PostgreSQL", "Redis"]
        );
    }

    #[test]
    fn test_programming_languages_header() {
        let text = "Programming Languages\nC++ • Java • Kotlin";
        assert_eq!(labeled_section_skills(text), vec!["C++", "Java", "Kotlin"]);
    }

    #[test]
    fn test_no_header_no_skills() {
        assert!(labeled_section_skills("Shipped things with Python and Go.").is_empty());
    }
}
