//! WebAssembly bindings for teaser generation.
//!
//! Meant for the search box of a static docs page: the page loads its own
//! index, runs the query, and calls in here once per keystroke to turn each
//! hit into a teaser. Every call is independent, so overlapping calls from
//! rapid typing cannot interfere; showing only the latest result is the
//! page's job.
//!
//! - `makeTeaser(body, terms, options?)`: built-in stemmer
//! - `makeTeaserWith(body, terms, stem, options?)`: stemmer is a JS function
//! - `renderResults(hits, query, options?)`: HTML `<li>` list for the hits

use crate::render::{render_html, teaser_hits};
use crate::stemmer::{DefaultStemmer, Stemmer};
use crate::teaser::{TeaserBuilder, TeaserOptions};
use crate::types::SearchHit;
use js_sys::Function;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

/// Stemmer backed by a JavaScript `(word: string) => string`.
///
/// If the callback throws or returns a non-string, the word is used as-is.
struct JsStemmer<'a> {
    callback: &'a Function,
}

impl Stemmer for JsStemmer<'_> {
    fn stem(&self, word: &str) -> String {
        self.callback
            .call1(&JsValue::NULL, &JsValue::from_str(word))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| word.to_string())
    }
}

/// Parse and validate options passed from JavaScript (`undefined` = defaults).
fn parse_options(options: Option<JsValue>) -> Result<TeaserOptions, JsValue> {
    let options: TeaserOptions = match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?
        }
        _ => TeaserOptions::default(),
    };
    options
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(options)
}

fn parse_terms(terms: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(terms).map_err(|e| JsValue::from_str(&format!("terms must be string[]: {}", e)))
}

/// Teaser for `body` with matched terms wrapped in the emphasis markers.
#[wasm_bindgen(js_name = makeTeaser)]
pub fn make_teaser_js(body: &str, terms: JsValue, options: Option<JsValue>) -> Result<String, JsValue> {
    let options = parse_options(options)?;
    let terms = parse_terms(terms)?;
    Ok(TeaserBuilder::new(DefaultStemmer::default())
        .with_options(options)
        .marked(body, &terms))
}

/// Like `makeTeaser`, with stemming delegated to `stem`.
#[wasm_bindgen(js_name = makeTeaserWith)]
pub fn make_teaser_with_js(
    body: &str,
    terms: JsValue,
    stem: &Function,
    options: Option<JsValue>,
) -> Result<String, JsValue> {
    let options = parse_options(options)?;
    let terms = parse_terms(terms)?;
    Ok(TeaserBuilder::new(JsStemmer { callback: stem })
        .with_options(options)
        .marked(body, &terms))
}

/// Render `{ ref, doc: { title, body } }[]` hits as HTML list items.
#[wasm_bindgen(js_name = renderResults)]
pub fn render_results_js(hits: JsValue, query: &str, options: Option<JsValue>) -> Result<String, JsValue> {
    let options = parse_options(options)?;
    let hits: Vec<SearchHit> = from_value(hits).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let builder = TeaserBuilder::new(DefaultStemmer::default()).with_options(options);
    Ok(render_html(&teaser_hits(&hits, query, &builder)))
}
