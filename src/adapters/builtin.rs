use crate::core::ContentTypeRecord;

/// The content types a fresh MODX install ships with.
pub fn stock_content_types() -> Vec<ContentTypeRecord> {
    vec![
        ContentTypeRecord::new(1, "HTML", "text/html")
            .with_description("HTML content")
            .with_extensions(".html"),
        ContentTypeRecord::new(2, "XML", "text/xml")
            .with_description("XML content")
            .with_extensions(".xml"),
        ContentTypeRecord::new(3, "Text", "text/plain")
            .with_description("plain text content")
            .with_extensions(".txt"),
        ContentTypeRecord::new(4, "CSS", "text/css")
            .with_description("CSS content")
            .with_extensions(".css"),
        ContentTypeRecord::new(5, "JavaScript", "text/javascript")
            .with_description("javascript content")
            .with_extensions(".js"),
        ContentTypeRecord::new(6, "RSS", "application/rss+xml")
            .with_description("For RSS feeds")
            .with_extensions(".rss"),
        ContentTypeRecord::new(7, "JSON", "application/json")
            .with_description("JSON")
            .with_extensions(".json"),
        ContentTypeRecord::new(8, "PDF", "application/pdf")
            .with_description("PDF Files")
            .with_extensions(".pdf")
            .binary(true),
    ]
}
