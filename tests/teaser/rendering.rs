//! Turning search hits into result lists.

use crate::common::make_hit;
use lede::testing::identity_builder;
use lede::{render_html, render_page, teaser_hits, SearchHit};

#[test]
fn renders_one_item_per_hit_in_order() {
    let hits = vec![
        make_hit(0, "Install", "Download the installer. Run it."),
        make_hit(1, "Usage", "Run the tool from a shell."),
    ];
    let rendered = teaser_hits(&hits, "run", &identity_builder(30));
    let html = render_html(&rendered);

    assert_eq!(html.matches("<li>").count(), 2);
    let install = html.find("doc0.html").unwrap();
    let usage = html.find("doc1.html").unwrap();
    assert!(install < usage);
    assert!(html.contains("<p>Download the installer. <em>Run</em> it.</p>"));
    assert!(html.contains("<p><em>Run</em> the tool from a shell.</p>"));
}

#[test]
fn hits_from_index_json_render() {
    let json = r#"[
        { "ref": "ch01.html", "score": 0.9, "doc": { "title": "Intro", "body": "Welcome & hello." } },
        { "ref": "ch02.html", "score": 0.4, "doc": { "title": "<Setup>", "body": "Say hello again." } }
    ]"#;
    let hits: Vec<SearchHit> = serde_json::from_str(json).unwrap();
    let html = render_html(&teaser_hits(&hits, "hello", &identity_builder(30)));

    assert_eq!(
        html,
        "<li><a href=\"ch01.html\">Intro</a><p>Welcome &amp; <em>hello.</em></p></li>\
         <li><a href=\"ch02.html\">&lt;Setup&gt;</a><p>Say <em>hello</em> again.</p></li>"
    );
}

#[test]
fn hit_without_body_matches_nothing() {
    let hits = vec![make_hit(0, "Empty", "")];
    let rendered = teaser_hits(&hits, "anything", &identity_builder(30));
    assert!(rendered[0].teaser.is_empty());
    assert_eq!(render_html(&rendered), "<li><a href=\"doc0.html\">Empty</a><p></p></li>");
}

#[test]
fn blank_query_shows_ledes() {
    let body = "First sentence here. Second sentence has the word.";
    let hits = vec![make_hit(0, "Doc", body)];
    let rendered = teaser_hits(&hits, "   ", &identity_builder(3));
    assert_eq!(rendered[0].teaser.text(), "First sentence here");
    assert!(rendered[0].teaser.highlights().is_empty());
}

#[test]
fn page_has_heading_and_list() {
    let hits = vec![make_hit(0, "A", "alpha beta")];
    let rendered = teaser_hits(&hits, "beta", &identity_builder(30));
    let page = render_page("beta", &rendered);
    assert!(page.starts_with("<h2>search results for <tt id=\"searchterm\">beta</tt></h2>"));
    assert!(page.contains("<ul id=\"searchresult\"><li>"));
    assert!(page.contains("alpha <em>beta</em>"));
}
