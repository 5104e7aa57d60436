//! Lightweight inspection of a loaded page: just enough to label the
//! embedded viewport.

use scraper::{Html, Selector};

/// Text of the first `<title>` element, with character references decoded
/// and whitespace collapsed. `None` if absent or blank.
pub fn extract_title(html: &str) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let document = Html::parse_document(html);
    let element = document.select(&selector).next()?;

    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        let html = "<html><head><title>cats - Google Search</title></head></html>";
        assert_eq!(extract_title(html).as_deref(), Some("cats - Google Search"));
    }

    #[test]
    fn title_with_attributes_and_mixed_case() {
        let html = "<HEAD><TITLE lang=\"en\">\n  Brave   Search\n</Title>";
        assert_eq!(extract_title(html).as_deref(), Some("Brave Search"));
    }

    #[test]
    fn named_entities_are_decoded() {
        let html = "<title>Tom &amp; Jerry &lt;3 &amp;lt;</title>";
        assert_eq!(extract_title(html).as_deref(), Some("Tom & Jerry <3 &lt;"));
    }

    #[test]
    fn numeric_references_are_decoded() {
        let html = "<title>cats &#8211; Search &#x2F; Web</title>";
        assert_eq!(
            extract_title(html).as_deref(),
            Some("cats \u{2013} Search / Web")
        );
    }

    #[test]
    fn commented_out_title_is_ignored() {
        let html = "<head><!-- <title>old</title> --><title>real</title></head>";
        assert_eq!(extract_title(html).as_deref(), Some("real"));
    }

    #[test]
    fn missing_or_blank_title() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
        assert_eq!(extract_title(""), None);
    }

    #[test]
    fn non_ascii_title() {
        let html = "<title>東京 - 検索</title>";
        assert_eq!(extract_title(html).as_deref(), Some("東京 - 検索"));
    }
}
