//! Partner offers distributed through the deals board

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Facet, Searchable};
use clubdeck_core::store::Record;

use crate::model::member::{cycle, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Active,
    Paused,
    Expired,
    Draft,
}

impl OfferStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OfferStatus::Active => "Active",
            OfferStatus::Paused => "Paused",
            OfferStatus::Expired => "Expired",
            OfferStatus::Draft => "Draft",
        }
    }
}

/// How the redemption code is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeType {
    Code,
    Qr,
}

impl CodeType {
    pub fn label(&self) -> &'static str {
        match self {
            CodeType::Code => "code",
            CodeType::Qr => "qr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub radius_km: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub tiers: Vec<Tier>,
    pub status: OfferStatus,
    pub code_type: CodeType,
    pub code_value: String,
    pub per_user_limit: u32,
    pub total_limit: u32,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub cities: Vec<City>,
    pub redemptions_total: u32,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Record for Offer {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Offer {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
            || contains_ignore_case(&self.brand, needle)
            || contains_ignore_case(&self.category, needle)
            || contains_ignore_case(&self.code_value, needle)
            || contains_ignore_case(&self.id, needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferStatusFilter {
    #[default]
    All,
    Active,
    Paused,
    Expired,
    Draft,
}

impl OfferStatusFilter {
    pub const VALUES: [Self; 5] = [
        Self::All,
        Self::Active,
        Self::Paused,
        Self::Expired,
        Self::Draft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Expired => "Expired",
            Self::Draft => "Draft",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Offer> for OfferStatusFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, offer: &Offer) -> bool {
        match self {
            Self::All => true,
            Self::Active => offer.status == OfferStatus::Active,
            Self::Paused => offer.status == OfferStatus::Paused,
            Self::Expired => offer.status == OfferStatus::Expired,
            Self::Draft => offer.status == OfferStatus::Draft,
        }
    }
}

/// Tier eligibility facet; matches offers whose tier list contains the
/// selected tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferTierFilter {
    #[default]
    All,
    Free,
    Paid,
    Vip,
}

impl OfferTierFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::Free, Self::Paid, Self::Vip];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Vip => "VIP",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Offer> for OfferTierFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, offer: &Offer) -> bool {
        let tier = match self {
            Self::All => return true,
            Self::Free => Tier::Free,
            Self::Paid => Tier::Paid,
            Self::Vip => Tier::Vip,
        };
        offer.tiers.contains(&tier)
    }
}

pub fn export_columns() -> Vec<Column<Offer>> {
    vec![
        Column {
            header: "ID",
            value: |o| o.id.clone(),
        },
        Column {
            header: "Title",
            value: |o| o.title.clone(),
        },
        Column {
            header: "Brand",
            value: |o| o.brand.clone(),
        },
        Column {
            header: "Category",
            value: |o| o.category.clone(),
        },
        Column {
            header: "Tiers",
            value: |o| {
                o.tiers
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join("|")
            },
        },
        Column {
            header: "Status",
            value: |o| o.status.label().to_string(),
        },
        Column {
            header: "CodeType",
            value: |o| o.code_type.label().to_string(),
        },
        Column {
            header: "CodeValue",
            value: |o| o.code_value.clone(),
        },
        Column {
            header: "PerUserLimit",
            value: |o| o.per_user_limit.to_string(),
        },
        Column {
            header: "TotalLimit",
            value: |o| o.total_limit.to_string(),
        },
        Column {
            header: "ValidFrom",
            value: |o| o.valid_from.to_string(),
        },
        Column {
            header: "ValidTo",
            value: |o| o.valid_to.to_string(),
        },
        Column {
            header: "Cities",
            value: |o| {
                o.cities
                    .iter()
                    .map(|c| format!("{} ({}km)", c.name, c.radius_km))
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        },
        Column {
            header: "TotalRedemptions",
            value: |o| o.redemptions_total.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use clubdeck_core::csv::CsvDoc;
    use clubdeck_core::filter;

    #[test]
    fn tier_facet_matches_membership_of_the_tier_list() {
        let offers = seed::offers();
        let free = filter::apply(&offers, "", &[&OfferTierFilter::Free]);
        for o in &free {
            assert!(o.tiers.contains(&Tier::Free));
        }
        let all = filter::apply(&offers, "", &[&OfferTierFilter::All]);
        assert_eq!(all.len(), offers.len());
    }

    #[test]
    fn search_matches_brand_and_code() {
        let offers = seed::offers();
        assert!(!filter::apply(&offers, "marriott", &[]).is_empty());
        assert!(!filter::apply(&offers, "pj-241", &[]).is_empty());
    }

    #[test]
    fn export_joins_tiers_and_cities_like_the_board() {
        let offers = seed::offers();
        let refs: Vec<&Offer> = offers.iter().take(1).collect();
        let csv = CsvDoc::project(&refs, &export_columns()).to_csv();
        assert!(csv.contains("Paid|VIP"));
        assert!(csv.contains("(50km)"));
    }
}
