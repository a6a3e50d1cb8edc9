//! Tokenized relevance ranking for the window switcher.
//!
//! Every query token is matched against `"<class-tail> <title>"` and each
//! occurrence is scored from four factors: an exact-prefix bonus, a word
//! boundary bonus, a decay on the match position and a penalty for sparse
//! (fuzzy) matches. A token keeps its best occurrence; a window's score is the
//! sum over tokens.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::highlight::MatchSpan;
use super::query::{ParsedQuery, Scope};
use super::window::WindowRecord;

const EXACT_PREFIX_BONUS: f64 = 100.0;
const WORD_BOUNDARY_FACTOR: f64 = 1.2;
const FUZZINESS_WEIGHT: f64 = 2.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankOptions {
    /// Match token characters in order with arbitrary gaps instead of as a substring.
    pub fuzzy: bool,
    /// Sort by score; otherwise by `"<class-tail> <title>"` descending.
    pub order_by_relevancy: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            fuzzy: false,
            order_by_relevancy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a> {
    pub record: &'a WindowRecord,
    /// `None` when the query had no tokens and nothing was scored.
    pub score: Option<f64>,
    pub spans: Vec<MatchSpan>,
}

impl<'a> RankedResult<'a> {
    fn unscored(record: &'a WindowRecord) -> Self {
        Self {
            record,
            score: None,
            spans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<'a> {
    pub scope: Scope,
    pub results: Vec<RankedResult<'a>>,
}

impl Ranking<'_> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

struct TokenPattern {
    token_length: usize,
    regex: Regex,
}

/// Ranks `windows` against a raw query.
///
/// A query starting with `*` searches every workspace; otherwise only windows
/// on `current_workspace` are candidates (all windows when it is unknown).
/// Without search tokens the in-scope windows are returned unscored in input
/// order. Scored results always have a positive score.
pub fn rank<'a>(
    query: &str,
    current_workspace: Option<&str>,
    windows: &'a [WindowRecord],
    options: &RankOptions,
) -> Ranking<'a> {
    let parsed = ParsedQuery::parse(query);

    let in_scope = windows
        .iter()
        .filter(|window| match (parsed.scope, current_workspace) {
            (Scope::CurrentWorkspace, Some(workspace)) => window.is_on_workspace(workspace),
            _ => true,
        });

    if !parsed.has_tokens() {
        let results: Vec<RankedResult<'a>> = in_scope.map(RankedResult::unscored).collect();
        debug!(scope = ?parsed.scope, count = results.len(), "listing windows without ranking");
        return Ranking {
            scope: parsed.scope,
            results,
        };
    }

    let patterns: Vec<TokenPattern> = parsed
        .tokens
        .iter()
        .filter_map(|token| match token_pattern(token, options.fuzzy) {
            Ok(regex) => Some(TokenPattern {
                token_length: token.chars().count(),
                regex,
            }),
            Err(error) => {
                warn!(%error, token = %token, "skipping token without a valid pattern");
                None
            }
        })
        .collect();

    let mut scored: Vec<(String, RankedResult<'a>)> = Vec::new();

    for window in in_scope {
        let description = window.description();
        let mut total = 0.0;
        let mut spans = Vec::new();

        for pattern in &patterns {
            let (score, token_spans) = score_token(&description, pattern);
            total += score;
            spans.extend(token_spans);
        }

        trace!(window_id = %window.id, %description, score = total, "scored window");

        if total > 0.0 {
            spans.sort_by_key(|span| span.start);
            scored.push((
                description,
                RankedResult {
                    record: window,
                    score: Some(total),
                    spans,
                },
            ));
        }
    }

    if options.order_by_relevancy {
        scored.sort_by(|(_, left), (_, right)| {
            let left = left.score.unwrap_or_default();
            let right = right.score.unwrap_or_default();
            right.total_cmp(&left)
        });
    } else {
        scored.sort_by(|(left, _), (right, _)| right.cmp(left));
    }

    debug!(
        scope = ?parsed.scope,
        tokens = parsed.tokens.len(),
        matches = scored.len(),
        fuzzy = options.fuzzy,
        "ranked windows"
    );

    Ranking {
        scope: parsed.scope,
        results: scored.into_iter().map(|(_, result)| result).collect(),
    }
}

/// Case-insensitive pattern for one token.
///
/// Fuzzy patterns place `[^c]*` before every character `c` after the first,
/// so each gap stops at the earliest occurrence of the next character.
fn token_pattern(token: &str, fuzzy: bool) -> Result<Regex, regex::Error> {
    let pattern = if fuzzy {
        let mut characters = token.chars().map(|character| {
            let mut buffer = [0u8; 4];
            regex::escape(character.encode_utf8(&mut buffer))
        });
        let mut pattern = characters.next().unwrap_or_default();
        for escaped in characters {
            pattern.push_str("[^");
            pattern.push_str(&escaped);
            pattern.push_str("]*");
            pattern.push_str(&escaped);
        }
        pattern
    } else {
        regex::escape(token)
    };

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Best occurrence score of one token, floored at zero, and the spans of all
/// its non-overlapping occurrences.
fn score_token(description: &str, pattern: &TokenPattern) -> (f64, Vec<MatchSpan>) {
    let mut best = 0.0_f64;
    let mut spans = Vec::new();

    for found in pattern.regex.find_iter(description) {
        let preceding = &description[..found.start()];
        let start = preceding.chars().count();
        let matched_length = found.as_str().chars().count();

        let exact_bonus = if start == 0 && matched_length == pattern.token_length {
            EXACT_PREFIX_BONUS
        } else {
            0.0
        };

        let word_boundary = if start == 0 || preceding.ends_with(' ') {
            WORD_BOUNDARY_FACTOR
        } else {
            0.0
        };

        let precedence = 1.0 / (1.0 + start as f64);

        let fuzziness = FUZZINESS_WEIGHT
            * (pattern.token_length as f64 - matched_length as f64)
            / matched_length as f64;

        best = best.max(exact_bonus + word_boundary + precedence + fuzziness);
        spans.push(MatchSpan::new(start, start + matched_length));
    }

    (best, spans)
}
