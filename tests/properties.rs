//! Property-based tests for body rendering invariants
//!
//! These tests use `proptest` with in-memory resolvers, so they exercise the
//! renderer's ordering and rebuild logic without a repository.

use anyhow::Result;
use commitbody::{
    BodyRenderer, HashResolver, HashScanner, LinkFormatter, RenderRequest, encode,
    trim_and_encode,
};
use gix::ObjectId;
use proptest::prelude::*;
use std::cell::Cell;

/// Resolves every candidate to the null id and counts calls.
#[derive(Default)]
struct CountingResolver {
    calls: Cell<usize>,
}

impl HashResolver for CountingResolver {
    fn try_resolve(&self, _candidate: &str) -> Result<Option<ObjectId>> {
        self.calls.set(self.calls.get() + 1);
        Ok(Some(ObjectId::null(gix::hash::Kind::Sha1)))
    }
}

/// Wraps the display text in markers that cannot occur in encoded text.
struct MarkerFormatter;

impl LinkFormatter for MarkerFormatter {
    fn create_link(&self, _id: &ObjectId, display_text: &str, _short: bool) -> Result<String> {
        Ok(format!("<{}>", display_text))
    }
}

fn render(
    renderer: &BodyRenderer<&CountingResolver, MarkerFormatter>,
    body: &str,
    links: bool,
) -> String {
    renderer
        .render(Some(&RenderRequest::new(Some(body), links)))
        .expect("Infallible collaborators")
}

// Text that can never contain a hex run of 7 or more characters
fn hashless_text() -> impl Strategy<Value = String> {
    "[ g-zG-Z<>&\"'\n.,_-]{0,12}( [a-f0-9]{1,6})?[ g-zG-Z<>&\"'\n.,-]{0,12}"
}

// Arbitrary text mixed with hash-like runs
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-f0-9]{7,12}",
            "[A-F0-9]{7,40}",
            "[ <>&\"'\n.,;:()]{1,3}",
            "[g-z]{1,6}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

// Property 1: Rendering without links never consults the resolver
proptest! {
    #[test]
    fn prop_plain_rendering_never_resolves(body in ".*") {
        let resolver = CountingResolver::default();
        let renderer = BodyRenderer::new(&resolver, MarkerFormatter);

        let output = render(&renderer, &body, false);

        prop_assert_eq!(resolver.calls.get(), 0);
        prop_assert_eq!(output, trim_and_encode(Some(body.as_str())));
    }
}

// Property 2: Without hash candidates, linking changes nothing
proptest! {
    #[test]
    fn prop_hashless_bodies_render_identically(body in hashless_text()) {
        let resolver = CountingResolver::default();
        let renderer = BodyRenderer::new(&resolver, MarkerFormatter);

        let plain = render(&renderer, &body, false);
        let linked = render(&renderer, &body, true);

        prop_assert_eq!(plain, linked);
        prop_assert_eq!(resolver.calls.get(), 0);
    }
}

// Property 3: Removing link markup gives back the encoded body, and there is
// exactly one resolver call per candidate
proptest! {
    #[test]
    fn prop_links_only_wrap_candidates(body in mixed_text()) {
        let resolver = CountingResolver::default();
        let renderer = BodyRenderer::new(&resolver, MarkerFormatter);
        let encoded = trim_and_encode(Some(body.as_str()));
        let candidates = HashScanner::default().find_candidates(&encoded);

        let linked = render(&renderer, &body, true);

        prop_assert_eq!(linked.replace(['<', '>'], ""), encoded);
        prop_assert_eq!(linked.matches('<').count(), candidates.len());
        prop_assert_eq!(resolver.calls.get(), candidates.len());
    }
}

// Property 4: Encoding text without markup characters is a no-op
proptest! {
    #[test]
    fn prop_encoding_safe_text_is_idempotent(text in "[^&<>\"']*") {
        let once = encode(&text);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(encode(&once), once);
    }
}

// Property 5: Encoded output never contains raw markup characters
proptest! {
    #[test]
    fn prop_encoded_text_has_no_raw_markup(text in ".*") {
        let encoded = encode(&text);
        prop_assert!(!encoded.contains(['<', '>', '"', '\'']));
    }
}
