//! Opportunity search: filter predicates and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `/investor/search` page. The opportunity list is fixed seed
//! data; the page holds a `RwSignal<SearchState>` and re-derives the visible
//! page from it on every change.
//!
//! DESIGN
//! ======
//! Each dimension is an independent predicate and a listing must pass all
//! of them. A dimension with no selection passes everything. Matching is
//! case-insensitive throughout.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::DEFAULT_SEARCH_PAGE_SIZE;
use crate::net::mock;
use crate::net::types::Opportunity;

/// A selectable value for one filter dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

pub const INVESTMENT_RANGE_OPTIONS: &[FilterOption] = &[
    opt("0-500000", "0 - 500,000"),
    opt("500000-1000000", "500,000 - 1,000,000"),
    opt("1000000-2000000", "1,000,000 - 2,000,000"),
    opt("2000000-3000000", "2,000,000 - 3,000,000"),
];

pub const COUNTRY_OPTIONS: &[FilterOption] = &[
    opt("Germany", "Germany"),
    opt("Canada", "Canada"),
    opt("Singapore", "Singapore"),
    opt("Austria", "Austria"),
];

pub const LOCATION_OPTIONS: &[FilterOption] = &[
    opt("Bayern", "Bayern"),
    opt("Toronto", "Toronto"),
    opt("Singapore", "Singapore"),
    opt("Vienna", "Vienna"),
];

pub const INDUSTRY_OPTIONS: &[FilterOption] =
    &[opt("real estate", "Real Estate"), opt("food", "Food & Beverage"), opt("tech", "Technology")];

pub const STAGE_OPTIONS: &[FilterOption] = &[opt("executive", "Executive")];

pub const FUNDING_TYPE_OPTIONS: &[FilterOption] = &[opt("seed", "Seed"), opt("series a", "Series A")];

/// One independently selectable search criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    InvestmentRange,
    Country,
    Location,
    Industry,
    Stage,
    FundingType,
}

impl FilterDimension {
    pub const ALL: [Self; 6] =
        [Self::InvestmentRange, Self::Country, Self::Location, Self::Industry, Self::Stage, Self::FundingType];

    pub fn label(self) -> &'static str {
        match self {
            Self::InvestmentRange => "Investment Range",
            Self::Country => "Country",
            Self::Location => "Location",
            Self::Industry => "Industry",
            Self::Stage => "Stages",
            Self::FundingType => "Funding Type",
        }
    }

    pub fn options(self) -> &'static [FilterOption] {
        match self {
            Self::InvestmentRange => INVESTMENT_RANGE_OPTIONS,
            Self::Country => COUNTRY_OPTIONS,
            Self::Location => LOCATION_OPTIONS,
            Self::Industry => INDUSTRY_OPTIONS,
            Self::Stage => STAGE_OPTIONS,
            Self::FundingType => FUNDING_TYPE_OPTIONS,
        }
    }
}

/// Inclusive bounds on `total_required`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestmentRange {
    pub min: u64,
    pub max: u64,
}

impl InvestmentRange {
    /// Parse an option value of the form `"min-max"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (min, max) = raw.split_once('-')?;
        let (Ok(min), Ok(max)) = (min.trim().parse(), max.trim().parse()) else {
            return None;
        };
        Some(Self { min, max })
    }

    pub fn contains(self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Current selection for every dimension plus the free-text query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub investment_range: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub funding_type: Option<String>,
    pub query: String,
}

impl FilterState {
    pub fn get(&self, dimension: FilterDimension) -> Option<&str> {
        let slot = match dimension {
            FilterDimension::InvestmentRange => &self.investment_range,
            FilterDimension::Country => &self.country,
            FilterDimension::Location => &self.location,
            FilterDimension::Industry => &self.industry,
            FilterDimension::Stage => &self.stage,
            FilterDimension::FundingType => &self.funding_type,
        };
        slot.as_deref()
    }

    /// Set or clear one dimension. An empty value clears it.
    pub fn set(&mut self, dimension: FilterDimension, value: Option<String>) {
        *self.slot_mut(dimension) = value.filter(|v| !v.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && FilterDimension::ALL.iter().all(|d| self.get(*d).is_none())
    }

    fn slot_mut(&mut self, dimension: FilterDimension) -> &mut Option<String> {
        match dimension {
            FilterDimension::InvestmentRange => &mut self.investment_range,
            FilterDimension::Country => &mut self.country,
            FilterDimension::Location => &mut self.location,
            FilterDimension::Industry => &mut self.industry,
            FilterDimension::Stage => &mut self.stage,
            FilterDimension::FundingType => &mut self.funding_type,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn matches(opportunity: &Opportunity, filters: &FilterState, range: Option<InvestmentRange>) -> bool {
    if let Some(range) = range {
        if !range.contains(opportunity.total_required) {
            return false;
        }
    }
    if let Some(country) = filters.country.as_deref() {
        if !contains_ci(&opportunity.location, country) {
            return false;
        }
    }
    if let Some(location) = filters.location.as_deref() {
        if !contains_ci(&opportunity.location, location) {
            return false;
        }
    }
    if let Some(industry) = filters.industry.as_deref() {
        if !eq_ci(&opportunity.industry, industry) {
            return false;
        }
    }
    if let Some(stage) = filters.stage.as_deref() {
        if !contains_ci(&opportunity.badge_text, stage) {
            return false;
        }
    }
    if let Some(funding_type) = filters.funding_type.as_deref() {
        if !eq_ci(&opportunity.funding_type, funding_type) {
            return false;
        }
    }
    filters.query.is_empty()
        || contains_ci(&opportunity.title, &filters.query)
        || contains_ci(&opportunity.description, &filters.query)
}

/// Listings that pass every active filter, in input order.
pub fn apply_filters<'a>(opportunities: &'a [Opportunity], filters: &FilterState) -> Vec<&'a Opportunity> {
    let range = filters.investment_range.as_deref().and_then(|raw| {
        let parsed = InvestmentRange::parse(raw);
        if parsed.is_none() {
            log::warn!("ignoring unparseable investment range {raw:?}");
        }
        parsed
    });
    opportunities.iter().filter(|o| matches(o, filters, range)).collect()
}

/// One page of filtered results.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Opportunity>,
    /// 1-based, always within `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Slice `filtered` into page `page`, clamping the page into range.
pub fn paginate<'a>(filtered: &[&'a Opportunity], page: usize, page_size: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered.len(), page_size);
    let page = page.clamp(1, total_pages);
    let items = filtered.iter().skip((page - 1) * page_size).take(page_size).copied().collect();
    Page { items, page, total_pages, total_items: filtered.len() }
}

/// Search page state: the listings, the filters and the current page.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub opportunities: Vec<Opportunity>,
    pub filters: FilterState,
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(mock::opportunities(), DEFAULT_SEARCH_PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(opportunities: Vec<Opportunity>, page_size: usize) -> Self {
        Self { opportunities, filters: FilterState::default(), page: 1, page_size: page_size.max(1) }
    }

    pub fn results(&self) -> Vec<&Opportunity> {
        apply_filters(&self.opportunities, &self.filters)
    }

    pub fn current_page(&self) -> Page<'_> {
        paginate(&self.results(), self.page, self.page_size)
    }

    pub fn set_filter(&mut self, dimension: FilterDimension, value: Option<String>) {
        self.filters.set(dimension, value);
        self.page = 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
        self.page = 1;
    }

    /// Reset every dimension and the query. Page size is kept.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn total_pages(&self) -> usize {
        total_pages(self.results().len(), self.page_size)
    }
}
