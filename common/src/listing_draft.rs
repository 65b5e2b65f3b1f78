//! Publish-form payloads.

use serde::{Deserialize, Serialize};

use crate::catalog::{Condition, Currency, VehicleType};


/// What the publish form submits. Names travel alongside ids so the stored
/// row needs no catalog join to render a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub brand_id: String,
    pub brand_name: String,
    pub model_id: String,
    pub model_name: String,
    pub version_id: String,
    pub version_name: String,
    pub vehicle_type: Option<VehicleType>,
    pub condition: Option<Condition>,
    pub currency: Option<Currency>,
    pub price: Option<u64>,
    pub year: Option<u16>,
    pub mileage: Option<u64>,
    pub location: String,
    pub seller_name: String,
    pub seller_phone: String,
}

impl ListingDraft {
    /// The fields the form cannot submit without. Version is optional: many
    /// posts only know brand and model.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.brand_id.trim().is_empty() {
            missing.push("brand");
        }
        if self.model_id.trim().is_empty() {
            missing.push("model");
        }
        if self.vehicle_type.is_none() {
            missing.push("vehicle type");
        }
        if self.condition.is_none() {
            missing.push("condition");
        }
        if self.currency.is_none() {
            missing.push("currency");
        }
        if !self.price.is_some_and(|p| p > 0) {
            missing.push("price");
        }
        if self.year.is_none() {
            missing.push("year");
        }
        if self.mileage.is_none() {
            missing.push("mileage");
        }
        missing
    }
}


/// Facts the description generator works from; kept separate from the draft
/// so the prompt stays stable while the user keeps editing unrelated fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionSeed {
    pub brand_name: String,
    pub model_name: String,
    pub version_name: String,
    pub vehicle_type: Option<VehicleType>,
    pub condition: Option<Condition>,
    pub year: Option<u16>,
    pub mileage: Option<u64>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_draft_reports_every_required_field() {
        let missing = ListingDraft::default().missing_fields();
        assert!(missing.contains(&"title"));
        assert!(missing.contains(&"brand"));
        assert!(missing.contains(&"model"));
        assert!(missing.contains(&"price"));
        assert!(!missing.contains(&"version"));
    }

    #[test]
    fn a_complete_draft_reports_nothing() {
        let draft = ListingDraft {
            title: "Ford Ranger XLT 3.2".into(),
            description: "Servicio oficial al día.".into(),
            brand_id: "ford".into(),
            brand_name: "Ford".into(),
            model_id: "ranger".into(),
            model_name: "Ranger".into(),
            version_id: "ranger-xlt".into(),
            version_name: "XLT 3.2".into(),
            vehicle_type: Some(VehicleType::Pickup),
            condition: Some(Condition::Used),
            currency: Some(Currency::Usd),
            price: Some(28_500),
            year: Some(2019),
            mileage: Some(98_000),
            location: "Córdoba".into(),
            seller_name: "M. Díaz".into(),
            seller_phone: "+54 351 555 0199".into(),
        };
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn zero_price_counts_as_missing() {
        let draft = ListingDraft { price: Some(0), ..ListingDraft::default() };
        assert!(draft.missing_fields().contains(&"price"));
    }
}
