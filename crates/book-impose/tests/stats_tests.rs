use book_impose::*;
use lopdf::{Dictionary, Document, Object, Stream};

fn create_test_document(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    // Create pages array
    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // Create pages dict
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

#[test]
fn test_stats_no_pages() {
    let doc = create_test_document(0);
    let result = calculate_statistics(&doc, &ImpositionOptions::default());
    match result {
        Err(ImposeError::NoPages) => {}
        _ => panic!("Expected NoPages error"),
    }
}

#[test]
fn test_stats_zero_sheets_per_signature() {
    assert!(matches!(statistics_for(10, 0), Err(ImposeError::Config(_))));
}

#[test]
fn test_stats_exact_signatures() {
    // 16 pages, 2 sheets per signature -> 2 signatures of 8
    let stats = statistics_for(16, 2).unwrap();
    assert_eq!(stats.source_pages, 16);
    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.pages_per_signature, 8);
    assert_eq!(stats.paper_sheets, 4);
    assert_eq!(stats.output_pages, 8);
    assert_eq!(stats.blank_pages_added, 0);
}

#[test]
fn test_stats_with_padding() {
    // 21 pages, default 5 sheets -> 2 signatures of 20, 19 blanks
    let stats = statistics_for(21, 5).unwrap();
    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.paper_sheets, 10);
    assert_eq!(stats.output_pages, 20);
    assert_eq!(stats.blank_pages_added, 19);
}

#[test]
fn test_stats_apply_page_offset() {
    let doc = create_test_document(10);
    let options = ImpositionOptions {
        sheets_per_signature: 1,
        page_offset: 2,
        ..Default::default()
    };

    let stats = calculate_statistics(&doc, &options).unwrap();
    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.signatures, 1);
    assert_eq!(stats.blank_pages_added, 0);
}

#[test]
fn test_stats_agree_with_order() {
    for sheets in 1..=5 {
        for pages in 1..=45 {
            let stats = statistics_for(pages, sheets).unwrap();
            let order = compute_order(pages, sheets).unwrap();

            assert_eq!(stats.blank_pages_added, order.blank_count());
            assert_eq!(stats.output_pages, order.sheet_count());
            assert_eq!(stats.signatures, order.signature_count());
            assert_eq!(stats.pages_per_signature, order.pages_per_signature());
            assert_eq!(
                stats.signatures * stats.pages_per_signature,
                order.len()
            );
        }
    }
}

#[test]
fn test_stats_agree_with_imposed_document() {
    let doc = create_test_document(13);
    let options = ImpositionOptions {
        sheets_per_signature: 2,
        ..Default::default()
    };

    let stats = calculate_statistics(&doc, &options).unwrap();
    let imposed = impose_sync(&doc, &options).unwrap();
    assert_eq!(stats.output_pages, imposed.get_pages().len());
}
