//! PDF output for imposed sheets
//!
//! Each committed sheet becomes one page of the output document. Source
//! pages are embedded as Form XObjects and drawn with a `cm` transform.

use crate::constants::{OUTPUT_PDF_VERSION, pt_to_inches};
use crate::layout::{Line, Transform};
use crate::marks::{guide_line_ops, placement_ops};
use crate::source::Page;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::sink::SheetSink;
use super::xobject::create_page_xobject;

/// Sheet being assembled
struct OpenSheet {
    width_pt: f32,
    height_pt: f32,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

/// Sink that writes sheets into a new lopdf [`Document`]
pub struct PdfSheetSink<'a> {
    source: &'a Document,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    object_cache: HashMap<ObjectId, ObjectId>,
    current: Option<OpenSheet>,
}

impl<'a> PdfSheetSink<'a> {
    /// `source` is the document the placed page ids belong to
    pub fn new(source: &'a Document) -> Self {
        let mut output = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_tree_id = output.new_object_id();
        Self {
            source,
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            object_cache: HashMap::new(),
            current: None,
        }
    }

    /// Number of sheets committed so far
    pub fn sheet_count(&self) -> usize {
        self.page_refs.len()
    }
}

fn no_open_sheet() -> ImposeError {
    ImposeError::Render("No sheet is open".to_string())
}

impl SheetSink<ObjectId> for PdfSheetSink<'_> {
    type Output = Document;

    fn begin_sheet(&mut self, width_pt: f32, height_pt: f32) -> Result<()> {
        if self.current.is_some() {
            return Err(ImposeError::Render("Sheet is already open".to_string()));
        }
        self.current = Some(OpenSheet {
            width_pt,
            height_pt,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        });
        Ok(())
    }

    fn place(&mut self, page: &Page<ObjectId>, transform: Transform) -> Result<()> {
        let sheet = self.current.as_mut().ok_or_else(no_open_sheet)?;

        let xobject_name = format!("P{}", sheet.xobjects.len());
        let xobject_id = create_page_xobject(
            &mut self.output,
            self.source,
            page.content,
            &mut self.object_cache,
        )?;
        sheet
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        sheet
            .content_ops
            .push(placement_ops(&xobject_name, &transform));
        Ok(())
    }

    fn draw_line(&mut self, line: Line) -> Result<()> {
        let sheet = self.current.as_mut().ok_or_else(no_open_sheet)?;
        sheet.content_ops.push(guide_line_ops(&line));
        Ok(())
    }

    fn commit_sheet(&mut self) -> Result<()> {
        let sheet = self.current.take().ok_or_else(no_open_sheet)?;

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(sheet.width_pt),
                Object::Real(sheet.height_pt),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(sheet.xobjects));

        let content = sheet.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        log::debug!(
            "Committed sheet {} ({} x {} in)",
            self.page_refs.len(),
            pt_to_inches(sheet.width_pt),
            pt_to_inches(sheet.height_pt)
        );
        Ok(())
    }

    fn finish(mut self) -> Result<Document> {
        if self.current.is_some() {
            return Err(ImposeError::Render(
                "Last sheet was never committed".to_string(),
            ));
        }
        finalize_document(&mut self.output, self.pages_tree_id, self.page_refs);
        Ok(self.output)
    }
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
