// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From search hits to a result list.
//!
//! The search index ranks; we only decorate. Each hit keeps its upstream
//! position and gets a teaser built from its body and the query terms. The
//! HTML here is the fragment a static docs page drops into its results
//! container: one `<li>` per hit with a link to the document and the teaser
//! below it.
//!
//! Every piece of document text is escaped. Only the `<em>` markers the
//! teaser adds are emitted as markup.

use crate::query::split_query;
use crate::stemmer::Stemmer;
use crate::teaser::TeaserBuilder;
use crate::types::{RenderedHit, SearchHit};
use htmlescape::encode_minimal;

/// Build a teaser for every hit, in order.
pub fn teaser_hits<S: Stemmer>(
    hits: &[SearchHit],
    query: &str,
    builder: &TeaserBuilder<S>,
) -> Vec<RenderedHit> {
    let terms = split_query(query);
    tracing::debug!(hits = hits.len(), terms = terms.len(), "building teasers");

    hits.iter()
        .map(|hit| RenderedHit {
            reference: hit.reference.clone(),
            title: hit.document.title.clone(),
            teaser: builder.build(&hit.document.body, &terms),
        })
        .collect()
}

/// Render one hit as a list item.
pub fn render_hit(hit: &RenderedHit) -> String {
    format!(
        "<li><a href=\"{}\">{}</a><p>{}</p></li>",
        encode_minimal(&hit.reference),
        encode_minimal(&hit.title),
        hit.teaser.to_html()
    )
}

/// Render hits as concatenated list items.
pub fn render_html(hits: &[RenderedHit]) -> String {
    hits.iter().map(render_hit).collect()
}

/// Render the results section of a search page.
pub fn render_page(query: &str, hits: &[RenderedHit]) -> String {
    format!(
        "<h2>search results for <tt id=\"searchterm\">{}</tt></h2>\n<ul id=\"searchresult\">{}</ul>\n",
        encode_minimal(query),
        render_html(hits)
    )
}
