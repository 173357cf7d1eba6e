use std::collections::{HashMap, HashSet};

/// Render server-generated markdown to HTML that is safe to inject.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "del", "code", "pre", "blockquote",
        "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th",
        "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
