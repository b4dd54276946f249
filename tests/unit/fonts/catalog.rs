use super::*;

#[test]
fn builtin_catalog_has_unique_ids_in_display_order() {
    let catalog = FontCatalog::builtin();
    assert_eq!(catalog.len(), 55);
    assert_eq!(catalog.iter().next().unwrap().id, "Righteous-Regular");
    assert_eq!(catalog.iter().last().unwrap().id, "TextMeOne-Regular");
    assert!(FontCatalog::new(catalog.iter().cloned().collect()).is_ok());
}

#[test]
fn builtin_ids_are_family_dash_style() {
    for font in &FontCatalog::builtin() {
        assert_eq!(font.id, format!("{}-{}", font.family, font.style));
    }
}

#[test]
fn find_matches_exact_ids_only() {
    let catalog = FontCatalog::default();
    let font = catalog.find("Montserrat-Black").unwrap();
    assert_eq!(font.family, "Montserrat");
    assert_eq!(font.style, "Black");
    assert!(catalog.find("montserrat-black").is_none());
    assert!(catalog.find("").is_none());
}

#[test]
fn new_rejects_duplicates_and_blank_ids() {
    let dup = FontCatalog::new(vec![
        FontDescriptor::new("A-Regular", "A", "Regular"),
        FontDescriptor::new("A-Regular", "A", "Regular"),
    ])
    .unwrap_err();
    assert!(dup.to_string().contains("more than once"));

    let blank = FontCatalog::new(vec![FontDescriptor::new(" ", "A", "Regular")]).unwrap_err();
    assert!(matches!(blank, LottieFontsError::Validation(_)));

    let no_family = FontCatalog::new(vec![FontDescriptor::new("A-Regular", "", "Regular")]);
    assert!(no_family.is_err());
}

#[test]
fn from_reader_parses_lottie_field_names() {
    let json = r#"[
        { "fName": "B-Bold", "fFamily": "B", "fStyle": "Bold" },
        { "fName": "C-Light", "fFamily": "C", "fStyle": "Light" }
    ]"#;
    let catalog = FontCatalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.find("B-Bold"),
        Some(&FontDescriptor::new("B-Bold", "B", "Bold"))
    );
}

#[test]
fn from_reader_reports_bad_json() {
    let err = FontCatalog::from_reader("{}".as_bytes()).unwrap_err();
    assert!(matches!(err, LottieFontsError::Serde(_)));
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = FontCatalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.find("Anton-Regular").is_none());
}
