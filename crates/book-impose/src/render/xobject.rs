//! XObject creation for imposition
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output sheets with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// Resources reachable from the page are deep-copied into `output`.
/// `cache` maps source object ids to their copies so that objects shared
/// between pages (fonts, images) are copied only once per output document.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let [x0, y0, x1, y1] = page_box(source, page_id)?;
    let bbox = vec![
        Object::Real(x0),
        Object::Real(y0),
        Object::Real(x1),
        Object::Real(y1),
    ];

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(bbox));
    // Move the box origin to (0, 0) so placements land at the slot origin
    xobject_dict.set(
        "Matrix",
        Object::Array(vec![
            Object::Integer(1),
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1),
            Object::Real(-x0),
            Object::Real(-y0),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    // Resources may live on the page or be inherited from the page tree
    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the decoded content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };

    match contents {
        Object::Reference(id) => get_content_stream(doc, *id),
        Object::Array(refs) => {
            let mut result = Vec::new();
            for obj in refs {
                if let Object::Reference(id) = obj {
                    result.extend_from_slice(&get_content_stream(doc, *id)?);
                    result.push(b'\n');
                }
            }
            Ok(result)
        }
        _ => Ok(Vec::new()),
    }
}

/// Decoded content of one stream object. A filter that cannot be decoded
/// is an error.
fn get_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    match doc.get_object(id)?.as_stream() {
        Ok(stream) if stream.is_compressed() => Ok(stream.decompressed_content()?),
        Ok(stream) => Ok(stream.content.clone()),
        Err(_) => Ok(Vec::new()),
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id before recursing so reference cycles terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        // Parent links point back into the source page tree
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Source page box `[x0, y0, x1, y1]` in points.
///
/// Uses the page's MediaBox, inherited through the page tree when the page
/// does not carry its own; falls back to US Letter when none is present.
pub fn page_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    let fallback = [0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1];

    let media_box = match inherited_attribute(doc, page_id, b"MediaBox")? {
        Some(Object::Array(values)) if values.len() == 4 => values,
        _ => return Ok(fallback),
    };

    let mut coords = [0.0; 4];
    for (coord, value) in coords.iter_mut().zip(media_box.iter()) {
        match extract_number(doc, value) {
            Some(v) => *coord = v,
            None => return Ok(fallback),
        }
    }
    Ok(coords)
}

/// Get source page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let [x0, y0, x1, y1] = page_box(doc, page_id)?;
    Ok((x1 - x0, y1 - y0))
}

/// Look up a page attribute, walking the `Parent` chain for inheritable keys.
/// References are resolved one level.
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
    let mut current = doc.get_dictionary(page_id)?;
    // Bounded walk; malformed trees can contain Parent cycles
    for _ in 0..64 {
        if let Ok(value) = current.get(key) {
            let resolved = match value {
                Object::Reference(id) => doc.get_object(*id)?.clone(),
                other => other.clone(),
            };
            return Ok(Some(resolved));
        }
        match current.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => current = doc.get_dictionary(*parent_id)?,
            _ => break,
        }
    }
    Ok(None)
}

/// Extract numeric value from a PDF object, following one reference
fn extract_number(doc: &Document, obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Integer(i) => Some(*i as f32),
            Object::Real(r) => Some(*r),
            _ => None,
        },
        _ => None,
    }
}
