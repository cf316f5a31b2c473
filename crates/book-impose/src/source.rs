//! Read-only page sources
//!
//! The renderer pulls page geometry and content through [`PageSource`].
//! [`PdfPageSource`] is the lopdf-backed implementation used by [`crate::impose`].

use crate::render::get_page_dimensions;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// A source page: logical index, native size in points, and a content handle
#[derive(Debug, Clone, PartialEq)]
pub struct Page<C> {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub content: C,
}

/// Random access to the pages being imposed
pub trait PageSource {
    /// Handle passed through to the sheet sink to draw the page
    type Content;

    fn page_count(&self) -> usize;

    /// Fetch a page by logical index. Indices past the end are an error.
    fn page(&self, index: usize) -> Result<Page<Self::Content>>;
}

/// Pages of a loaded PDF document, after skipping `page_offset` leading pages
pub struct PdfPageSource<'a> {
    document: &'a Document,
    page_ids: Vec<ObjectId>,
}

impl<'a> PdfPageSource<'a> {
    /// An offset past the end of the document leaves no pages.
    pub fn new(document: &'a Document, page_offset: usize) -> Self {
        let page_ids = document
            .get_pages()
            .into_values()
            .skip(page_offset)
            .collect();
        Self { document, page_ids }
    }
}

impl PageSource for PdfPageSource<'_> {
    type Content = ObjectId;

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page(&self, index: usize) -> Result<Page<ObjectId>> {
        let page_id = *self
            .page_ids
            .get(index)
            .ok_or(ImposeError::PageOutOfRange {
                index,
                count: self.page_ids.len(),
            })?;
        let (width, height) = get_page_dimensions(self.document, page_id)?;
        Ok(Page {
            index,
            width,
            height,
            content: page_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Object};

    fn document_with_widths(widths: &[i64]) -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = widths
            .iter()
            .map(|&width| {
                let page_id = doc.add_object(Dictionary::from_iter(vec![
                    ("Type", Object::Name(b"Page".to_vec())),
                    ("Parent", Object::Reference(pages_id)),
                    (
                        "MediaBox",
                        Object::Array(vec![
                            Object::Integer(0),
                            Object::Integer(0),
                            Object::Integer(width),
                            Object::Integer(700),
                        ]),
                    ),
                ]));
                Object::Reference(page_id)
            })
            .collect();
        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(count)),
            ])),
        );
        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_offset_skips_leading_pages() {
        let doc = document_with_widths(&[100, 200, 300]);
        let source = PdfPageSource::new(&doc, 1);

        assert_eq!(source.page_count(), 2);
        let page = source.page(0).unwrap();
        assert_eq!(page.index, 0);
        assert_eq!(page.width, 200.0);
        assert_eq!(page.height, 700.0);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let doc = document_with_widths(&[100, 200]);
        assert_eq!(PdfPageSource::new(&doc, 5).page_count(), 0);
    }

    #[test]
    fn test_missing_page_is_an_error() {
        let doc = document_with_widths(&[100]);
        let source = PdfPageSource::new(&doc, 0);
        match source.page(1) {
            Err(ImposeError::PageOutOfRange { index, count }) => {
                assert_eq!(index, 1);
                assert_eq!(count, 1);
            }
            other => panic!("Expected PageOutOfRange, got {:?}", other),
        }
    }
}
