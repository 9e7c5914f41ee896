//! Integration tests for the public assembly API
//!
//! Exercises the full flow: page + request context → assembler → JSON-ready
//! paginated representation.

use pagelink::{
    FixedRequest, LinkRelation, Page, PageDescriptor, PageNumbering, PagedAssembler,
};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
struct Person {
    name: String,
}

fn people_assembler(request_uri: &str) -> PagedAssembler {
    let context = FixedRequest::parse(request_uri).unwrap();
    PagedAssembler::new(Arc::new(context))
}

// ============================================================================
// Request-Derived Base URI Tests
// ============================================================================

#[test]
fn test_request_parameters_survive_but_page_and_size_are_replaced() {
    let assembler = people_assembler("http://localhost/people?sort=name&page=5&size=9");

    let page = Page::new(
        vec![Person {
            name: "Dave".to_string(),
        }],
        PageDescriptor::new(1, 1, 3),
    );
    let assembled = assembler.assemble(page);

    assert_eq!(
        assembled.links.href(LinkRelation::SelfRel),
        Some("http://localhost/people?sort=name&page=1&size=1")
    );
    assert_eq!(
        assembled.links.href(LinkRelation::Prev),
        Some("http://localhost/people?sort=name&page=0&size=1")
    );
    assert_eq!(
        assembled.links.href(LinkRelation::Next),
        Some("http://localhost/people?sort=name&page=2&size=1")
    );
}

#[test]
fn test_no_link_ever_carries_template_syntax() {
    let assembler = people_assembler("http://localhost/people?filter=a%20b");

    let page = Page::new(
        vec![Person {
            name: "Dave".to_string(),
        }],
        PageDescriptor::new(1, 1, 3),
    );
    let assembled = assembler.assemble(page);

    for link in assembled.links.iter() {
        assert!(!link.href.contains('{'), "templated href: {}", link.href);
        assert!(!link.href.contains('}'), "templated href: {}", link.href);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_assembled_page_serializes_for_downstream_rendering() {
    let mut assembler = people_assembler("http://localhost/people");
    assembler.set_numbering(PageNumbering::OneBased);

    let page = Page::new(
        vec![Person {
            name: "Dave".to_string(),
        }],
        PageDescriptor::new(0, 1, 3),
    );
    let assembled = assembler.assemble(page);
    let value = serde_json::to_value(&assembled).unwrap();

    assert_eq!(value["content"], json!([{ "name": "Dave" }]));
    assert_eq!(
        value["metadata"],
        json!({
            "size": 1,
            "number": 1,
            "total_elements": 3,
            "total_pages": 3
        })
    );

    let links = value["links"].as_array().unwrap();
    assert!(links.contains(&json!({
        "rel": "self",
        "href": "http://localhost/people?page=1&size=1"
    })));
    assert!(links.contains(&json!({
        "rel": "next",
        "href": "http://localhost/people?page=2&size=1"
    })));
}

#[test]
fn test_empty_page_placeholder_serializes_with_element_type() {
    let assembler = people_assembler("http://localhost/people");

    let page: Page<Person> = Page::empty(PageDescriptor::new(0, 20, 0));
    let assembled = assembler.assemble_empty(&page, "Person").unwrap();
    let value = serde_json::to_value(&assembled).unwrap();

    assert_eq!(value["content"], json!([{ "element_type": "Person" }]));
    assert_eq!(value["metadata"]["total_elements"], json!(0));
}
