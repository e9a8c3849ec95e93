//! Relevance scoring of candidate foods against an ingredient query.
//!
//! FoodData Central search is plain keyword matching, so the first hit for
//! "whole milk" is as likely to be a cheese as the milk itself. The score
//! starts at [`BASE_SCORE`] and accumulates independent rules:
//!
//! - position: `-10` per upstream position
//! - description match, first applicable only:
//!   exact `+500`, starts with query `+300`,
//!   starts with the head word `+250` (`+100` more if the query occurs anywhere),
//!   contains query `+200`
//! - word overlap: all query words `+150`, otherwise `+30` per shared word
//! - simple queries (at most two distinct words) only:
//!   compound food first word `-800`, else compound term anywhere `-500`;
//!   processed form not asked for `-300`;
//!   description longer than query words + 1 `-150`
//! - data type: Foundation `+100`, SR Legacy `+50`, Survey (FNDDS) `+25`
//! - category: milk/dairy `+50`, fruit/fruit `+50`
//!
//! All comparisons are on lowercased text.

use std::collections::HashSet;

use crate::types::{DataType, FoodRecord};

/// Score every candidate starts from.
pub const BASE_SCORE: f64 = 1000.0;

/// Words that, leading a description, mark a food made *from* the
/// ingredient rather than the ingredient itself.
pub const COMPOUND_INDICATORS: &[&str] = &[
    "cheese", "crackers", "bread", "cookies", "cake", "soup", "sauce", "dressing", "cereal", "bar",
    "drink", "juice", "spread", "butter", "yogurt",
];

/// Preserved or processed forms, penalised unless the query asks for one.
pub const PROCESSED_FORMS: &[&str] = &[
    "dry",
    "powdered",
    "powder",
    "dehydrated",
    "canned",
    "frozen",
    "concentrated",
    "evaporated",
    "condensed",
];

/// Queries with at most this many distinct words get compound-food and
/// processed-form penalties.
const SIMPLE_QUERY_MAX_WORDS: usize = 2;

/// Score a candidate food at `position` in the upstream result list.
pub fn score_candidate(food: &FoodRecord, query: &str, position: usize) -> f64 {
    relevance_score(
        &food.description,
        query,
        position,
        food.data_type.as_ref(),
        food.category_label(),
    )
}

/// Pure relevance score from the fields that influence it.
///
/// Identical arguments always give identical scores.
pub fn relevance_score(
    description: &str,
    query: &str,
    position: usize,
    data_type: Option<&DataType>,
    category: &str,
) -> f64 {
    let description = description.to_lowercase();
    let query = query.to_lowercase();
    let category = category.to_lowercase();

    let query_word_list: Vec<&str> = query.split_whitespace().collect();
    let query_words: HashSet<&str> = query_word_list.iter().copied().collect();
    let description_words: Vec<&str> = description
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();

    let mut score = BASE_SCORE;
    score -= position as f64 * 10.0;
    score += description_match_bonus(&description, &query, query_word_list.last().copied());
    score += word_overlap_bonus(&query_words, &description_words);

    if query_words.len() <= SIMPLE_QUERY_MAX_WORDS {
        score -= simple_query_penalty(
            &description,
            &query,
            &description_words,
            query_words.len(),
        );
    }

    score += data_type_bonus(data_type);

    if query.contains("milk") && category.contains("dairy") {
        score += 50.0;
    }
    if query.contains("fruit") && category.contains("fruit") {
        score += 50.0;
    }

    score
}

/// Mutually exclusive description bonus: the first matching tier wins.
fn description_match_bonus(description: &str, query: &str, head_word: Option<&str>) -> f64 {
    if description == query {
        500.0
    } else if description.starts_with(query) {
        300.0
    } else if head_word.is_some_and(|head| description.starts_with(head)) {
        // "milk, whole" for "whole milk": the last query word is usually
        // the main ingredient.
        if description.contains(query) {
            350.0
        } else {
            250.0
        }
    } else if description.contains(query) {
        200.0
    } else {
        0.0
    }
}

fn word_overlap_bonus(query_words: &HashSet<&str>, description_words: &[&str]) -> f64 {
    let description_words: HashSet<&str> = description_words.iter().copied().collect();
    let shared = query_words.intersection(&description_words).count();
    if shared == 0 {
        0.0
    } else if shared == query_words.len() {
        150.0
    } else {
        shared as f64 * 30.0
    }
}

/// Total penalty for a simple query. Each rule applies independently,
/// except that the two compound-food rules exclude each other.
fn simple_query_penalty(
    description: &str,
    query: &str,
    description_words: &[&str],
    query_word_count: usize,
) -> f64 {
    let mut penalty = 0.0;

    let first_word = description_words.first().copied().unwrap_or("");
    if COMPOUND_INDICATORS.contains(&first_word) {
        penalty += 800.0;
    } else if COMPOUND_INDICATORS
        .iter()
        .any(|indicator| description.contains(indicator))
    {
        penalty += 500.0;
    }

    let query_wants_processed = PROCESSED_FORMS.iter().any(|form| query.contains(form));
    if !query_wants_processed && PROCESSED_FORMS.iter().any(|form| description.contains(form)) {
        penalty += 300.0;
    }

    if description_words.len() > query_word_count + 1 {
        penalty += 150.0;
    }

    penalty
}

fn data_type_bonus(data_type: Option<&DataType>) -> f64 {
    match data_type {
        Some(DataType::Foundation) => 100.0,
        Some(DataType::SrLegacy) => 50.0,
        Some(DataType::Survey) => 25.0,
        _ => 0.0,
    }
}
