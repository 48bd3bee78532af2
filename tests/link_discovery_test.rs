//! Link discovery over a realistic index page.

use kisho_scraper::{dom, links};
use url::Url;

const BASE: &str = "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/serial-number.htm";

#[test]
fn index_page_yields_review_urls_in_order() {
    let html = r#"
        <html><body>
        <p><a href="index.htm">トップ</a> | <a href="foo.htm">このページについて</a></p>
        <table>
            <tr><td><a href="1/1-1.htm">羽生の頭脳</a></td></tr>
            <tr><td><a href="2/2-2.htm">四間飛車を指しこなす本</a></td></tr>
            <tr><td><a href="3/3-3.htm">光速の寄せ</a></td></tr>
        </table>
        <p><a href="mailto:webmaster@example.com">連絡先</a></p>
        </body></html>
    "#;

    let doc = dom::parse(html);
    let base = Url::parse(BASE).unwrap();

    assert_eq!(
        links::discover_links(&doc, &base),
        vec![
            "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/1/1-1.htm",
            "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/2/2-2.htm",
            "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/3/3-3.htm",
        ]
    );
}

#[test]
fn multi_digit_and_hyphenated_targets_match() {
    let html = r#"
        <a href="12/12-34.htm">review</a>
        <a href="7/7-1-2.htm">supplement</a>
    "#;

    let doc = dom::parse(html);
    let base = Url::parse(BASE).unwrap();

    assert_eq!(
        links::discover_links(&doc, &base),
        vec![
            "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/12/12-34.htm",
            "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/7/7-1-2.htm",
        ]
    );
}

#[test]
fn duplicate_anchors_are_preserved_for_the_caller() {
    let html = r#"
        <a href="1/1-1.htm">new arrivals box</a>
        <a href="1/1-1.htm">main listing</a>
    "#;

    let doc = dom::parse(html);
    let base = Url::parse(BASE).unwrap();
    let found = links::discover_links(&doc, &base);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0], found[1]);
}
