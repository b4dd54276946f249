use super::*;
use crate::animation::layer::TextLayer;
use serde_json::json;

fn sample() -> Animation {
    Animation::from_json_str(
        r##"{
  "v": "5.7.4",
  "fr": 30,
  "ip": 0,
  "op": 90,
  "w": 512,
  "h": 512,
  "nm": "card",
  "fonts": {
    "list": [
      { "fName": "Anton-Regular", "fFamily": "Anton", "fStyle": "Regular", "ascent": 71.5, "fPath": "", "origin": 0 }
    ]
  },
  "assets": [
    { "id": "image_0", "w": 64, "h": 64, "u": "images/", "p": "img_0.png", "e": 0 },
    {
      "id": "comp_0",
      "layers": [
        { "ty": 5, "nm": "Subtitle", "t": { "d": { "k": [ { "s": { "f": "Anton-Regular", "t": "world" }, "t": 0 } ] } } },
        { "ty": 5, "nm": "Broken", "t": {} }
      ]
    }
  ],
  "layers": [
    { "ty": 5, "nm": "Title", "t": { "d": { "k": [ { "s": { "f": "Anton-Regular", "t": "hello" }, "t": 0 } ] } } },
    { "ty": 1, "nm": "Background", "sc": "#101010", "sw": 512, "sh": 512 },
    { "ty": 0, "nm": "Nested", "refId": "comp_0" }
  ],
  "markers": []
}"##,
    )
    .unwrap()
}

#[test]
fn parses_modelled_fields() {
    let anim = sample();
    let font = anim.active_font().unwrap();
    assert_eq!(
        font.descriptor(),
        FontDescriptor::new("Anton-Regular", "Anton", "Regular")
    );
    assert_eq!(font.extra.get("ascent"), Some(&json!(71.5)));
    assert_eq!(anim.layers.len(), 3);
    let assets = anim.assets.as_ref().unwrap();
    assert_eq!(assets.len(), 2);
    assert!(assets[0].layers.is_none());
    assert_eq!(assets[1].id(), Some("comp_0"));
    assert_eq!(assets[0].extra.get("id"), Some(&json!("image_0")));
    assert_eq!(anim.extra.get("fr"), Some(&json!(30)));
}

#[test]
fn unknown_fields_survive_a_round_trip() {
    let anim = sample();
    let s = anim.to_json_string_pretty().unwrap();
    let original: Value = serde_json::from_str(&s).unwrap();
    let again = Animation::from_json_str(&s).unwrap();
    assert_eq!(again, anim);
    assert_eq!(original["markers"], json!([]));
    assert_eq!(original["assets"][0]["p"], json!("img_0.png"));
    assert_eq!(original["layers"][1]["sc"], json!("#101010"));
    assert_eq!(original["fonts"]["list"][0]["fPath"], json!(""));
}

#[test]
fn missing_optional_sections_stay_missing() {
    let anim = Animation::from_json_str(r#"{ "v": "5.7.4", "layers": [] }"#).unwrap();
    assert!(anim.fonts.is_none());
    assert!(anim.assets.is_none());
    assert!(anim.active_font().is_none());
    let v = serde_json::to_value(&anim).unwrap();
    assert!(v.get("fonts").is_none());
    assert!(v.get("assets").is_none());
}

#[test]
fn explicit_nulls_survive_a_round_trip() {
    let raw = json!({
        "v": "5.7.4",
        "fonts": null,
        "assets": [
            { "id": null, "p": "x.png" },
            { "id": "comp_0", "layers": null },
            { "id": 3, "layers": [ { "ty": 5, "nm": null, "t": { "d": { "k": [ { "s": { "f": "A" } } ] } } } ] }
        ],
        "layers": [ { "ty": 5, "nm": null, "t": { "d": { "k": [ { "s": { "f": "A" } } ] } } } ]
    });
    let anim: Animation = serde_json::from_value(raw.clone()).unwrap();
    assert!(anim.fonts.is_none());
    let assets = anim.assets.as_ref().unwrap();
    assert_eq!(assets[0].id(), None);
    assert!(assets[1].layers.is_none());
    assert_eq!(assets[2].id(), None);
    assert_eq!(anim.font_references().len(), 2);
    assert_eq!(serde_json::to_value(&anim).unwrap(), raw);

    let no_assets = json!({ "assets": null, "layers": [] });
    let anim: Animation = serde_json::from_value(no_assets.clone()).unwrap();
    assert!(anim.assets.is_none());
    assert_eq!(serde_json::to_value(&anim).unwrap(), no_assets);
}

#[test]
fn font_references_cover_root_and_asset_layers() {
    let refs = sample().font_references();
    assert_eq!(
        refs,
        vec![
            FontReference {
                scope: LayerScope::Root,
                index: 0,
                layer: Some("Title".to_string()),
                font: "Anton-Regular".to_string(),
            },
            FontReference {
                scope: LayerScope::Asset {
                    index: 1,
                    id: Some("comp_0".to_string()),
                },
                index: 0,
                layer: Some("Subtitle".to_string()),
                font: "Anton-Regular".to_string(),
            },
        ]
    );
}

#[test]
fn malformed_text_layers_are_counted() {
    assert_eq!(sample().malformed_text_layers(), 1);
}

#[test]
fn scoped_layers_do_not_descend_into_nested_assets() {
    let anim = Animation {
        assets: Some(vec![Asset::precomp(
            "outer",
            vec![Layer::Other(json!({
                "ty": 0,
                "refId": "inner",
                "layers": [ { "ty": 5, "t": { "d": { "k": [ { "s": { "f": "X" } } ] } } } ]
            }))],
        )]),
        ..Animation::default()
    };
    assert_eq!(anim.scoped_layers().count(), 1);
    assert!(anim.font_references().is_empty());
}

#[test]
fn scope_display_names_asset() {
    assert_eq!(LayerScope::Root.to_string(), "layers");
    assert_eq!(
        LayerScope::Asset {
            index: 2,
            id: Some("comp_1".to_string())
        }
        .to_string(),
        "assets[2] (comp_1)"
    );
    assert_eq!(
        LayerScope::Asset { index: 0, id: None }.to_string(),
        "assets[0]"
    );
}

#[test]
fn font_entry_assign_keeps_extra_fields() {
    let mut entry = sample().active_font().unwrap().clone();
    entry.assign(&FontDescriptor::new("Chewy-Regular", "Chewy", "Regular"));
    assert_eq!(entry.id, "Chewy-Regular");
    assert_eq!(entry.family, "Chewy");
    assert_eq!(entry.style, "Regular");
    assert_eq!(entry.extra.get("ascent"), Some(&json!(71.5)));
}

#[test]
fn parse_errors_are_serde_errors() {
    let err = Animation::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LottieFontsError::Serde(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = Animation::from_path("target/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LottieFontsError::Validation(_)));
    assert!(err.to_string().contains("not/here.json"));
}

#[test]
fn built_documents_serialize_text_layers() {
    let anim = Animation {
        fonts: Some(FontList {
            list: vec![FontEntry::new(FontDescriptor::new("A-Regular", "A", "Regular"))],
            extra: Map::new(),
        }),
        layers: vec![TextLayer::new("t", "A-Regular").into()],
        ..Animation::default()
    };
    let v = serde_json::to_value(&anim).unwrap();
    assert_eq!(v["fonts"]["list"][0]["fName"], json!("A-Regular"));
    assert_eq!(v["layers"][0]["t"]["d"]["k"][0]["s"]["f"], json!("A-Regular"));
}
