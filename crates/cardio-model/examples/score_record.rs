//! Scores one patient record against the demo artifact.
//!
//! Run with: cargo run -p cardio-model --example score_record

use cardio_core::FeatureRecord;
use cardio_model::load_artifact;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../models/cardio_pipeline.json");
    let artifact = load_artifact(path)?;

    // Same defaults the web form submits, with age given in days
    let body = json!({
        "age": 30.0 * 365.25,
        "gender": 1,
        "height": 170,
        "weight": 70,
        "ap_hi": 120,
        "ap_lo": 80,
        "cholesterol": 1,
        "gluc": 1,
        "smoke": 0,
        "alco": 0,
        "active": 1
    });

    let record = FeatureRecord::from_json(&body)?;
    let assessment = artifact.assess(record)?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
