//! Compilation of query plans into Tantivy queries.
//!
//! Each [`FieldClause`] becomes a `BooleanQuery` requiring every analyzed
//! term of its value, wrapped in a `BoostQuery`. Clauses of an AND plan
//! are combined with `Occur::Must`.

use address_lookup_query::plan::{FieldClause, MatchMode, QueryPlan};
use tantivy::Term;
use tantivy::query::{
    AllQuery, BooleanQuery, BoostQuery, FuzzyTermQuery, Occur, Query, RegexQuery, TermQuery,
};
use tantivy::schema::IndexRecordOption;
use tantivy::tokenizer::{TextAnalyzer, TokenStream};

use crate::AddressIndexError;
use crate::schema::AddressFields;

/// Compiles a structured query plan.
#[must_use]
pub fn compile(
    plan: &QueryPlan,
    fields: &AddressFields,
    analyzer: &TextAnalyzer,
) -> Box<dyn Query> {
    let query: Box<dyn Query> = match plan {
        QueryPlan::MatchAll => Box::new(AllQuery),
        QueryPlan::Single(clause) => compile_clause(clause, fields, analyzer),
        QueryPlan::And(clauses) => Box::new(BooleanQuery::new(
            clauses
                .iter()
                .map(|clause| (Occur::Must, compile_clause(clause, fields, analyzer)))
                .collect(),
        )),
    };

    log::debug!("Compiled query: {query:?}");

    query
}

/// Compiles a completion-suggest query over the raw one-line address.
///
/// An empty prefix matches every address.
///
/// # Errors
///
/// Returns an error if the prefix cannot be compiled into an automaton.
pub fn compile_suggest(
    prefix: &str,
    fields: &AddressFields,
) -> Result<Box<dyn Query>, AddressIndexError> {
    if prefix.is_empty() {
        return Ok(Box::new(AllQuery));
    }

    let pattern = format!("{}.*", regex::escape(prefix));
    let query = RegexQuery::from_pattern(&pattern, fields.address_suggest)?;
    Ok(Box::new(query))
}

/// Compiles one clause. A value with no indexable terms matches everything.
fn compile_clause(
    clause: &FieldClause,
    fields: &AddressFields,
    analyzer: &TextAnalyzer,
) -> Box<dyn Query> {
    let field = fields.for_plan_field(clause.field);

    let mut sub_queries: Vec<(Occur, Box<dyn Query>)> = analyze(analyzer, &clause.value)
        .iter()
        .map(|text| {
            let term = Term::from_field_text(field, text);
            let query: Box<dyn Query> = match clause.mode {
                MatchMode::Prefix => Box::new(FuzzyTermQuery::new_prefix(term, 0, true)),
                MatchMode::Fuzzy(fuzziness) => Box::new(FuzzyTermQuery::new(
                    term,
                    fuzziness.max_edits(text),
                    true,
                )),
                MatchMode::Exact => Box::new(TermQuery::new(term, IndexRecordOption::Basic)),
            };
            (Occur::Must, query)
        })
        .collect();

    let query: Box<dyn Query> = match sub_queries.pop() {
        None => return Box::new(AllQuery),
        Some((_, only)) if sub_queries.is_empty() => only,
        Some(last) => {
            sub_queries.push(last);
            Box::new(BooleanQuery::new(sub_queries))
        }
    };

    Box::new(BoostQuery::new(query, clause.boost))
}

/// Splits `text` into the terms the `address` analyzer would index.
#[must_use]
pub fn analyze(analyzer: &TextAnalyzer, text: &str) -> Vec<String> {
    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut terms = Vec::new();
    stream.process(&mut |token| terms.push(token.text.clone()));
    terms
}
