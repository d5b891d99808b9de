// PDF text extraction - Pure Rust via lopdf
use lopdf::Document;
use crate::types::{Result, StudyError};

/// Extract the text of every page, in page order.
///
/// Each page's text items are collapsed to single-space separated words and
/// pages are joined with a single space. Every `yield_every` pages control is
/// handed back to the runtime so a long document doesn't starve other tasks.
pub async fn extract_text(bytes: &[u8], yield_every: usize) -> Result<String> {
    let document = Document::load_mem(bytes).map_err(|e| StudyError::Pdf(e.to_string()))?;

    if document.is_encrypted() {
        return Err(StudyError::Pdf("document is encrypted".to_string()));
    }

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    tracing::debug!("PDF has {} pages", page_numbers.len());

    let mut pages = Vec::with_capacity(page_numbers.len());
    for (i, page_number) in page_numbers.iter().enumerate() {
        if yield_every > 0 && i > 0 && i % yield_every == 0 {
            tokio::task::yield_now().await;
        }

        let raw = document
            .extract_text(&[*page_number])
            .map_err(|e| StudyError::Pdf(format!("page {}: {}", page_number, e)))?;
        pages.push(join_items(&raw));
    }

    Ok(pages.join(" "))
}

// Collapse the line-per-text-object layout lopdf produces into one line
fn join_items(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a small PDF with one text line per page.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[tokio::test]
    async fn test_pages_in_order() {
        let bytes = build_pdf(&["Alpha page one", "Beta page two", "Gamma page three"]);
        let text = extract_text(&bytes, 1).await.unwrap();

        let alpha = text.find("Alpha").unwrap();
        let beta = text.find("Beta").unwrap();
        let gamma = text.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
        assert!(!text.contains('\n'));
        assert!(!text.contains("  "));
    }

    #[tokio::test]
    async fn test_not_a_pdf() {
        let err = extract_text(b"%PDF-garbage", 5).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to process PDF"));
    }

    #[test]
    fn test_join_items() {
        assert_eq!(join_items("Hello\nWorld \n\n again"), "Hello World again");
        assert_eq!(join_items(""), "");
    }
}
