//! End-to-end scenarios over the public API

use tagheader::{build_headers, child_indices, has_extra_empty_node, HeaderCache, TagKind};

#[test]
fn nested_elements_pair_and_parent() {
    let list = build_headers("<div><span>hi</span></div>");
    assert_eq!(list.len(), 5);

    let kinds: Vec<_> = list.iter().map(|h| (h.name(), h.kind())).collect();
    assert_eq!(
        kinds,
        vec![
            ("div", TagKind::Open),
            ("span", TagKind::Open),
            ("TextNode", TagKind::SelfClose),
            ("span", TagKind::Close),
            ("div", TagKind::Close),
        ]
    );

    let div = list.get(0).unwrap();
    let span = list.get(1).unwrap();
    let text = list.get(2).unwrap();
    assert_eq!(div.matched().map(|h| h.sequence()), Some(4));
    assert_eq!(span.matched().map(|h| h.sequence()), Some(3));
    assert_eq!(text.text(), "hi");
    assert_eq!(text.parent(), Some(span));
    assert!(!list.has_structural_error());
}

#[test]
fn self_closing_tag_matches_itself() {
    let list = build_headers("<br/>");
    assert_eq!(list.len(), 1);
    let br = list.get(0).unwrap();
    assert_eq!(br.kind(), TagKind::SelfClose);
    assert_eq!(br.matched(), Some(br));
    assert!(!list.has_structural_error());
}

#[test]
fn orphan_closer_sets_error_flag() {
    let list = build_headers("</div>");
    assert_eq!(list.len(), 1);
    assert!(list.has_structural_error());
    assert_eq!(list.get(0).unwrap().matched(), None);
}

#[test]
fn unclosed_opener_sets_error_flag() {
    let list = build_headers("<div>");
    assert_eq!(list.len(), 1);
    assert!(list.has_structural_error());
    assert_eq!(list.get(0).unwrap().matched(), None);
}

#[test]
fn whitespace_between_siblings_is_adjacent() {
    let list = build_headers("<a></a>   <b></b>");
    let close_a = list.get(1).unwrap();
    let open_b = list.get(3).unwrap();
    assert_eq!(close_a.kind(), TagKind::Close);
    assert_eq!(open_b.name(), "b");
    assert!(close_a.is_adjacent_before(Some(open_b)));
}

#[test]
fn ordinal_paths() {
    let list = build_headers("<div><span>x</span><span>y</span></div>");
    let spans: Vec<_> = list
        .find_by_name("span")
        .filter(|h| h.kind() == TagKind::Open)
        .collect();
    assert_eq!(list.get(0).unwrap().xpath(), vec![0]);
    assert_eq!(spans[0].xpath(), vec![0, 0]);
    assert_eq!(spans[1].xpath(), vec![0, 1]);
}

#[test]
fn malformed_input_stays_navigable() {
    let html = "<ul>\n  <li>one</li>\n  </p></p>\n  <li>two <i> trailing";
    let list = build_headers(html);
    assert!(list.has_structural_error());

    let concat: String = list.iter().map(|h| h.text()).collect();
    assert_eq!(concat, html);

    for header in list.iter() {
        let _ = header.xpath();
        let _ = header.whole_text();
        let _ = header.whole_range();
        let _ = header.children();
        let _ = has_extra_empty_node(header);
        assert!(header.is_adjacent_before(Some(header)));
    }
    let _ = child_indices(&list, None);

    // <ul> ws <li>one</li> ws </p> </p> ws <li>
    let second = list.get(9).unwrap();
    assert_eq!(second.name(), "li");
    assert_eq!(second.xpath(), vec![0, 3]);
}

#[test]
fn element_context_queries() {
    let html = "<body>\n  <p class=\"lead\">Hello <b>world</b></p>\n</body>";
    let list = build_headers(html);
    let p = list.find_by_name("p").next().unwrap();

    assert_eq!(p.attributes().get("class"), Some("lead"));
    assert_eq!(p.whole_text(), Some("<p class=\"lead\">Hello <b>world</b></p>"));
    assert_eq!(p.xpath(), vec![0, 0]);

    let offset = html.find("world").unwrap();
    assert!(p.is_inside_body(offset));
    assert!(!p.is_inside_body(p.start()));

    let children: Vec<_> = p
        .children()
        .into_iter()
        .map(|seq| list.get(seq).unwrap().text())
        .collect();
    assert_eq!(children, vec!["Hello ", "<b>"]);

    let after = has_extra_empty_node(p).unwrap();
    assert_eq!(after.text(), "\n");
}

#[test]
fn cache_reuses_identical_input() {
    let mut cache = HeaderCache::new();
    let first = cache.build("<a>x</a>");
    let again = cache.build("<a>x</a>");
    assert!(std::sync::Arc::ptr_eq(&first, &again));
    assert_eq!(again.get(1).unwrap().text(), "x");
}
