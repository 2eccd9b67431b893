// Lexical résumé-to-job matching.
// Builds a TF-IDF vector space over one request-scoped corpus (résumé + all
// job postings), ranks by cosine similarity against the résumé. No persistent
// index and no state shared across requests.

pub mod handlers;
pub mod matcher;
pub mod tfidf;
