//! Unit tests for the response envelope.

use crate::payload::{MIN_GARMENTS, Payload, categories_present};
use rstest::rstest;
use serde_json::{Value, json};
use wardrobe_core::{
    Category, Garment, GenerateResponse, MemoryWardrobe, Occasion, Outfit, ResolveError,
};

use super::*;

fn wardrobe() -> MemoryWardrobe {
    MemoryWardrobe::with_garments([
        Garment::new("t", Category::Top),
        Garment::new("b", Category::Bottom),
        Garment::new("t2", Category::Top),
        Garment::new("s", Category::Shoes),
    ])
    .expect("unique ids")
}

fn outfit(ids: &[&str], score: u8, store: &MemoryWardrobe) -> Outfit {
    let garments: Vec<&Garment> = ids
        .iter()
        .map(|id| {
            store
                .as_slice()
                .iter()
                .find(|g| g.id.as_str() == *id)
                .expect("known garment")
        })
        .collect();
    Outfit::from_garments(&garments, score).with_reason("reason")
}

fn to_value(payload: &Payload<'_>) -> Value {
    serde_json::to_value(payload).expect("payload serializes")
}

#[rstest]
fn categories_keep_first_appearance_order() {
    let store = wardrobe();
    assert_eq!(
        categories_present(store.as_slice()),
        [Category::Top, Category::Bottom, Category::Shoes]
    );
}

#[rstest]
fn generated_payload_hydrates_items_and_meta() {
    let store = wardrobe();
    let response = GenerateResponse {
        outfits: vec![
            outfit(&["t", "b", "s"], 90, &store),
            outfit(&["t2", "b"], 85, &store),
            outfit(&["t", "s"], 70, &store),
        ],
        ..GenerateResponse::default()
    };
    let occasion = Occasion::new("work").expect("occasion");

    let payload = Payload::generated(&store, store.as_slice(), Some(&occasion), &response)
        .expect("outfits resolve");
    let value = to_value(&payload);

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["message"], json!("3 outfits generated successfully!"));
    assert!(value.get("hint").is_none());
    assert_eq!(value["data"][0]["kind"], json!("top-bottom-shoes"));
    assert_eq!(value["data"][0]["items"][2]["id"], json!("s"));
    assert_eq!(value["data"][1]["reason"], json!("reason"));
    assert_eq!(
        value["meta"],
        json!({
            "totalGarments": 4,
            "generatedOutfits": 3,
            "averageScore": "81.67",
            "occasion": "work",
            "categories": ["top", "bottom", "shoes"],
        })
    );
    assert!(payload.into_result().is_ok());
}

#[rstest]
fn generated_payload_rejects_dangling_ids() {
    let store = wardrobe();
    let other = MemoryWardrobe::with_garments([
        Garment::new("x", Category::Top),
        Garment::new("y", Category::Bottom),
    ])
    .expect("unique ids");
    let response = GenerateResponse {
        outfits: vec![outfit(&["x", "y"], 80, &other)],
        ..GenerateResponse::default()
    };

    let err = Payload::generated(&store, store.as_slice(), None, &response)
        .expect_err("dangling ids should error");
    assert!(matches!(err, ResolveError::UnknownGarment { .. }));
}

#[rstest]
fn too_few_garments_payload_has_hint_and_fails() {
    let payload = Payload::too_few_garments(1);
    let value = to_value(&payload);

    assert_eq!(value["success"], json!(false));
    assert!(value["hint"].as_str().is_some_and(|hint| hint.contains("Upload more garments")));
    assert!(value.get("meta").is_none());
    assert_eq!(value["data"], json!([]));
    match payload.into_result() {
        Err(CliError::InsufficientGarments { found, required }) => {
            assert_eq!(found, 1);
            assert_eq!(required, MIN_GARMENTS);
        }
        other => panic!("expected InsufficientGarments, found {other:?}"),
    }
}

#[rstest]
fn no_outfits_payload_reports_wardrobe_summary() {
    let store = wardrobe();
    let payload = Payload::no_outfits(store.as_slice(), None);
    let value = to_value(&payload);

    assert_eq!(value["success"], json!(false));
    assert!(value["hint"].as_str().is_some_and(|hint| hint.contains("variety")));
    assert_ne!(
        value["message"],
        to_value(&Payload::too_few_garments(0))["message"]
    );
    assert_eq!(value["meta"]["occasion"], json!("any"));
    assert!(value["meta"].get("averageScore").is_none());
    assert!(matches!(payload.into_result(), Err(CliError::NoOutfits)));
}
