use chrono::{TimeZone, Utc};
use rs_article_extract::{extract_content, extract_content_with_options, Options};

const BASE: &str = "https://example.com/news/";

const BODY: &str = "<article><p>Residents gathered in the square on Saturday morning to celebrate \
                    the reopening of the library after two years of renovation work.</p></article>";

fn page(head: &str, body: &str) -> String {
    format!("<html><head>{head}</head><body>{body}</body></html>")
}

#[test]
fn json_ld_author_is_used() {
    let head = r#"<script type="application/ld+json">
        {"@context":"https://schema.org","@type":"NewsArticle","headline":"Library reopens",
         "author":{"@type":"Person","name":"Jane Doe"}}
        </script>"#;

    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("Jane Doe"));
}

#[test]
fn organization_author_falls_through_to_meta() {
    let head = r#"<script type="application/ld+json">
        {"@type":"NewsArticle","author":{"name":"Example Media Group"}}
        </script>
        <meta name="author" content="John Smith">"#;

    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("John Smith"));
}

#[test]
fn organization_author_falls_through_to_byline() {
    let head = r#"<script type="application/ld+json">
        {"@type":"NewsArticle","author":{"name":"Example Media Group"}}
        </script>"#;
    let body = format!("<p class=\"meta\">By Maria Lopez, 5 March</p>{BODY}");

    let result = extract_content(&page(head, &body), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("Maria Lopez"));
}

#[test]
fn json_ld_author_array_and_graph() {
    let head = r#"<script type="application/ld+json">
        {"@graph":[{"@type":"WebPage","name":"Page"},
                   {"@type":"BlogPosting","author":[{"@type":"Person","name":"Ann Lee"},{"@type":"Person","name":"Bo Chen"}]}]}
        </script>"#;

    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("Ann Lee"));
}

#[test]
fn twitter_creator_handle_is_stripped() {
    let head = r#"<meta name="twitter:creator" content="@JaneDoe">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("JaneDoe"));
}

#[test]
fn selector_author_is_last_resort() {
    let body = format!(r#"<article><span class="author-name">Ann Lee</span>{BODY}</article>"#);
    let result = extract_content(&page("", &body), BASE);
    assert_eq!(result.metadata.author.as_deref(), Some("Ann Lee"));
}

#[test]
fn configured_blocklist_rejects_authors() {
    let head = r#"<meta name="author" content="Sports Desk">"#;
    let options = Options {
        author_blocklist: vec!["desk".to_string()],
        ..Options::default()
    };

    assert_eq!(
        extract_content(&page(head, BODY), BASE).metadata.author.as_deref(),
        Some("Sports Desk")
    );
    assert_eq!(extract_content_with_options(&page(head, BODY), BASE, &options).metadata.author, None);
}

#[test]
fn implausible_authors_are_dropped() {
    let head = r#"<meta name="author" content="https://example.com/staff/jane">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.author, None);
}

#[test]
fn title_cascade() {
    let og = r#"<meta property="og:title" content="OG Title"><title>Doc Title | Site</title>"#;
    assert_eq!(extract_content(&page(og, BODY), BASE).title, "OG Title");

    let tw = r#"<meta name="twitter:title" content="Twitter Title"><title>Doc Title</title>"#;
    assert_eq!(extract_content(&page(tw, BODY), BASE).title, "Twitter Title");

    let doc = "<title>Doc &amp; Title</title>";
    assert_eq!(extract_content(&page(doc, BODY), BASE).title, "Doc & Title");

    let h1 = format!("<article><h1>Heading Title</h1>{BODY}</article>");
    assert_eq!(extract_content(&page("", &h1), BASE).title, "Heading Title");

    assert_eq!(extract_content(&page("", BODY), BASE).title, "Untitled");
}

#[test]
fn custom_default_title() {
    let options = Options { default_title: "No title".to_string(), ..Options::default() };
    assert_eq!(extract_content_with_options(&page("", BODY), BASE, &options).title, "No title");
}

#[test]
fn description_cascade() {
    let head = r#"<meta name="description" content="Plain description">
                  <meta property="og:description" content="OG description">"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).description, "OG description");

    let head = r#"<meta name="description" content="Plain description">"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).description, "Plain description");

    let head = r#"<script type="application/ld+json">{"@type":"Article","description":"From JSON-LD"}</script>"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).description, "From JSON-LD");
}

#[test]
fn publish_date_from_meta() {
    let head = r#"<meta property="article:published_time" content="2024-03-05T08:00:00+01:00">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(
        result.metadata.publish_date,
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 0, 0).single()
    );
}

#[test]
fn publish_date_from_json_ld_then_time_element() {
    let head = r#"<script type="application/ld+json">{"@type":"NewsArticle","datePublished":"2023-11-20"}</script>"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.publish_date, Utc.with_ymd_and_hms(2023, 11, 20, 0, 0, 0).single());

    let body = format!(r#"<article><time datetime="2022-06-01T12:30:00Z">June 1</time>{BODY}</article>"#);
    let result = extract_content(&page("", &body), BASE);
    assert_eq!(result.metadata.publish_date, Utc.with_ymd_and_hms(2022, 6, 1, 12, 30, 0).single());
}

#[test]
fn unparseable_date_is_absent() {
    let head = r#"<meta property="article:published_time" content="last Tuesday">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.publish_date, None);
}

#[test]
fn category_and_tags_from_meta() {
    let head = r#"<meta property="article:section" content="Local">
                  <meta property="article:tag" content="library">
                  <meta property="article:tag" content="culture">
                  <meta property="article:tag" content="library">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.category.as_deref(), Some("Local"));
    assert_eq!(result.metadata.tags, vec!["library", "culture"]);
}

#[test]
fn tags_from_keywords_and_json_ld() {
    let head = r#"<meta name="keywords" content="books, city , , books">"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).metadata.tags, vec!["books", "city"]);

    let head = r#"<script type="application/ld+json">{"@type":"Article","keywords":"alpha, beta","articleSection":"Tech"}</script>"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.tags, vec!["alpha", "beta"]);
    assert_eq!(result.metadata.category.as_deref(), Some("Tech"));
}

#[test]
fn no_tags_means_empty_list() {
    assert!(extract_content(&page("", BODY), BASE).metadata.tags.is_empty());
}

#[test]
fn language_from_meta_sources() {
    let head = r#"<meta http-equiv="content-language" content="fr-FR">"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).metadata.language.as_deref(), Some("fr"));

    let head = r#"<meta property="og:locale" content="nl_NL">"#;
    assert_eq!(extract_content(&page(head, BODY), BASE).metadata.language.as_deref(), Some("nl"));
}

#[test]
fn site_name_and_canonical_url() {
    let head = r#"<meta property="og:site_name" content="Example News">
                  <link rel="canonical" href="/news/library-reopens">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.metadata.site_name.as_deref(), Some("Example News"));
    assert_eq!(
        result.metadata.canonical_url.as_deref(),
        Some("https://example.com/news/library-reopens")
    );
}

#[test]
fn head_metadata_survives_isolation() {
    // The region is the <article>, but head metadata is read from the page.
    let head = r#"<meta property="og:title" content="Head Title"><meta name="author" content="Jane Doe">"#;
    let result = extract_content(&page(head, BODY), BASE);
    assert_eq!(result.title, "Head Title");
    assert_eq!(result.metadata.author.as_deref(), Some("Jane Doe"));
}
