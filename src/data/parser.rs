// ============================================================
// bAbI Text Parser
// ============================================================
// Parses the raw text of one bAbI split into a list of
// (story, query, answer) examples.
//
// The file format is line-numbered:
//
//   1 Mary moved to the bathroom.
//   2 John went to the hallway.
//   3 Where is Mary?<TAB>bathroom<TAB>1
//   4 Sandra journeyed to the garden.
//   ...
//
// A line index of 1 starts a new story context. Lines with a
// tab are questions: `question \t answer \t supporting-ids`.
// The supporting fact ids are parsed but discarded — this
// pipeline does not use strong supervision.
//
// This is strict-format parsing: a line with a missing index or
// a question line with missing tab fields is an unrecoverable
// parse error that propagates to the caller. There is no
// partial recovery; any failure aborts dataset construction.

use anyhow::{Context, Result};

use crate::domain::example::QaExample;

/// Parse the raw text of one split into examples.
///
/// Each returned example carries the story accumulated up to the
/// question, flattened into one token sequence.
pub fn parse_split(raw: &str) -> Result<Vec<QaExample>> {
    let lines = split_lines(raw);

    // Per-sentence token lists for the current story context.
    // Questions push an empty placeholder so positions keep
    // tracking the file's line numbering.
    let mut story: Vec<Vec<String>> = Vec::new();
    let mut examples: Vec<QaExample> = Vec::new();

    for (lineno, line) in lines.iter().enumerate() {
        // ── Split off the leading line index ─────────────────────────────────
        let (nid, rest) = line
            .split_once(' ')
            .with_context(|| format!("line {}: missing line index: {:?}", lineno + 1, line))?;
        let nid: usize = nid
            .parse()
            .with_context(|| format!("line {}: malformed line index: {:?}", lineno + 1, nid))?;

        // Index 1 signals the start of a new story context
        if nid == 1 {
            story.clear();
        }

        if rest.contains('\t') {
            // ── Question line: question \t answer \t supporting ids ──────────
            let mut fields = rest.splitn(3, '\t');
            let question = fields.next().unwrap_or_default();
            let answer = fields
                .next()
                .with_context(|| format!("line {}: question without answer field", lineno + 1))?;
            let supporting = fields.next().with_context(|| {
                format!("line {}: question without supporting fact ids", lineno + 1)
            })?;
            // Parsed but unused beyond format validation
            let _ = supporting;

            // Snapshot the story so far, skipping question placeholders,
            // and flatten the sentences into one token sequence
            let substory: Vec<String> = story
                .iter()
                .filter(|sentence| !sentence.is_empty())
                .flat_map(|sentence| sentence.iter().cloned())
                .collect();

            examples.push(QaExample::new(substory, tokenize(question), answer.trim()));

            // Placeholder keeps story positions aligned with line numbers
            story.push(Vec::new());
        } else {
            // ── Story sentence ────────────────────────────────────────────────
            story.push(tokenize(rest));
        }
    }

    Ok(examples)
}

/// Split raw data into trimmed lines, discarding the trailing
/// empty line left by a final newline.
fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    if let Some(last) = lines.last() {
        if last.is_empty() {
            lines.pop();
        }
    }
    lines.iter().map(|line| line.trim()).collect()
}

/// Split a sentence into tokens, punctuation included.
///
/// Runs of word characters (alphanumeric or '_') become word
/// tokens; runs of anything else become punctuation tokens with
/// surrounding whitespace stripped. Empty fragments are dropped,
/// so "Where is Mary?" tokenizes to ["Where", "is", "Mary", "?"].
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_word = false;

    for c in sentence.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if !current.is_empty() && is_word != current_is_word {
            push_token(&mut tokens, &current);
            current.clear();
        }
        current.push(c);
        current_is_word = is_word;
    }
    if !current.is_empty() {
        push_token(&mut tokens, &current);
    }

    tokens
}

/// Strip whitespace from a fragment and keep it if anything remains
fn push_token(tokens: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
}
