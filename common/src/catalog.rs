//! Catalog reference data and the closed vocabularies used by filters.

use serde::{Deserialize, Serialize};


/// One row of reference data: a brand, a model of a brand, or a version of a
/// model. The id is what filters and the database carry; the name is what the
/// user sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Hash, Eq, PartialOrd, Ord)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Suv,
    Pickup,
    Van,
    Truck,
    Motorcycle,
}

impl VehicleType {
    pub const ALL: &'static [VehicleType] = &[
        VehicleType::Car,
        VehicleType::Suv,
        VehicleType::Pickup,
        VehicleType::Van,
        VehicleType::Truck,
        VehicleType::Motorcycle,
    ];

    /// Token stored in the database and in the URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Suv => "suv",
            VehicleType::Pickup => "pickup",
            VehicleType::Van => "van",
            VehicleType::Truck => "truck",
            VehicleType::Motorcycle => "motorcycle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Suv => "SUV",
            VehicleType::Pickup => "Pickup",
            VehicleType::Van => "Van",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
        }
    }

    /// Unknown tokens yield `None`; callers treat that as "filter unset".
    pub fn parse(token: &str) -> Option<VehicleType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == token)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub const ALL: &'static [Condition] = &[Condition::New, Condition::Used];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }

    pub fn parse(token: &str) -> Option<Condition> {
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Ars,
    Usd,
}

impl Currency {
    pub const ALL: &'static [Currency] = &[Currency::Ars, Currency::Usd];

    /// The symbol doubles as the stored token, the way the original site
    /// labels prices.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Ars => "AR$",
            Currency::Usd => "U$S",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(token: &str) -> Option<Currency> {
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortField {
    #[default]
    PublishedAt,
    Price,
    Year,
    Mileage,
}

impl SortField {
    pub const ALL: &'static [SortField] = &[
        SortField::PublishedAt,
        SortField::Price,
        SortField::Year,
        SortField::Mileage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::PublishedAt => "published_at",
            SortField::Price => "price",
            SortField::Year => "year",
            SortField::Mileage => "mileage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortField::PublishedAt => "Most recent",
            SortField::Price => "Price",
            SortField::Year => "Year",
            SortField::Mileage => "Mileage",
        }
    }

    pub fn parse(token: &str) -> Option<SortField> {
        Self::ALL.iter().copied().find(|f| f.as_str() == token)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn parse(token: &str) -> Option<SortDirection> {
        match token {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_for_every_variant() {
        for t in VehicleType::ALL {
            assert_eq!(VehicleType::parse(t.as_str()), Some(*t));
        }
        for c in Condition::ALL {
            assert_eq!(Condition::parse(c.as_str()), Some(*c));
        }
        for c in Currency::ALL {
            assert_eq!(Currency::parse(c.as_str()), Some(*c));
        }
        for f in SortField::ALL {
            assert_eq!(SortField::parse(f.as_str()), Some(*f));
        }
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Descending));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(VehicleType::parse("boat"), None);
        assert_eq!(Condition::parse("NEW"), None);
        assert_eq!(Currency::parse("EUR"), None);
        assert_eq!(SortField::parse("color"), None);
        assert_eq!(SortDirection::parse("up"), None);
    }

    #[test]
    fn default_sort_is_newest_first() {
        assert_eq!(SortField::default(), SortField::PublishedAt);
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }
}
