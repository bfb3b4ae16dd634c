use layout_translate::application::ports::{DocumentExtractor, ExtractionError};
use layout_translate::domain::{BoundingBox, Document, DocumentFormat, ExtractedContent};
use layout_translate::infrastructure::text_processing::{AltoAdapter, parse_alto};

const NAMESPACED_ALTO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<alto xmlns="http://www.loc.gov/standards/alto/ns-v4#">
  <Layout>
    <Page ID="P1" WIDTH="2000" HEIGHT="3000">
      <PrintSpace>
        <TextBlock>
          <TextLine>
            <String CONTENT="An" HPOS="100" VPOS="200" WIDTH="80" HEIGHT="40"/>
            <SP/>
            <String CONTENT="inter" HPOS="200" VPOS="200" WIDTH="150" HEIGHT="40"/>
            <HYP CONTENT="-"/>
          </TextLine>
          <TextLine>
            <String CONTENT="national" HPOS="100" VPOS="260" WIDTH="200" HEIGHT="40"/>
            <String CONTENT="" HPOS="320" VPOS="260" WIDTH="10" HEIGHT="40"/>
            <String CONTENT="broken" HPOS="abc" VPOS="260" WIDTH="10" HEIGHT="40"/>
            <String CONTENT="treaty" HPOS="340" VPOS="260" WIDTH="120" HEIGHT="40"/>
          </TextLine>
        </TextBlock>
      </PrintSpace>
    </Page>
    <Page ID="P2" WIDTH="1000" HEIGHT="1000">
      <PrintSpace>
        <TextBlock>
          <TextLine>
            <String CONTENT="Zwei" SUBS_TYPE="HypPart1" HPOS="10" VPOS="10" WIDTH="50" HEIGHT="20"/>
          </TextLine>
        </TextBlock>
      </PrintSpace>
    </Page>
  </Layout>
</alto>"#;

const PLAIN_ALTO: &str = r#"<alto><Layout><Page WIDTH="100" HEIGHT="100"><PrintSpace><TextBlock>
<TextLine><String CONTENT="hello" HPOS="1" VPOS="2" WIDTH="3" HEIGHT="4"/></TextLine>
</TextBlock></PrintSpace></Page></Layout></alto>"#;

fn pages(xml: &str) -> Vec<layout_translate::domain::Page> {
    parse_alto(xml).expect("valid ALTO")
}

#[test]
fn given_namespaced_alto_when_parsing_then_each_page_element_becomes_page() {
    let pages = pages(NAMESPACED_ALTO);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].width, 2000.0);
    assert_eq!(pages[0].height, 3000.0);
    assert_eq!(pages[1].index, 1);
}

#[test]
fn given_strings_with_bad_content_or_geometry_when_parsing_then_they_are_skipped() {
    let pages = pages(NAMESPACED_ALTO);

    let words: Vec<&str> = pages[0].tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, vec!["An", "inter", "national", "treaty"]);
}

#[test]
fn given_string_geometry_when_parsing_then_box_is_hpos_vpos_extent() {
    let pages = pages(NAMESPACED_ALTO);

    assert_eq!(
        pages[0].tokens[0].bbox,
        Some(BoundingBox::new(100.0, 200.0, 180.0, 240.0))
    );
}

#[test]
fn given_hyp_element_or_hyp_part_when_parsing_then_string_is_flagged() {
    let pages = pages(NAMESPACED_ALTO);

    let flags: Vec<bool> = pages[0].tokens.iter().map(|t| t.hyphenated).collect();
    assert_eq!(flags, vec![false, true, false, false]);
    assert!(pages[1].tokens[0].hyphenated);
}

#[test]
fn given_alto_without_namespace_when_parsing_then_is_accepted() {
    let pages = pages(PLAIN_ALTO);

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].tokens[0].text, "hello");
}

#[test]
fn given_malformed_xml_when_parsing_then_corrupt_error_names_format() {
    let result = parse_alto("<alto><Layout>");

    assert!(matches!(
        result,
        Err(ExtractionError::Corrupt {
            format: DocumentFormat::AltoXml,
            ..
        })
    ));
}

#[tokio::test]
async fn given_alto_document_when_extracting_then_returns_paged_content() {
    let document = Document::new(
        "scan.xml".to_string(),
        DocumentFormat::AltoXml,
        NAMESPACED_ALTO.len() as u64,
    );

    let content = AltoAdapter::new()
        .extract(NAMESPACED_ALTO.as_bytes(), &document)
        .await
        .unwrap();

    assert!(matches!(content, ExtractedContent::Paged(ref pages) if pages.len() == 2));
    assert_eq!(content.token_count(), 5);
}
