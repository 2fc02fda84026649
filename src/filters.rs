//! Search, filter and sort over lists already fetched from the API.

use std::cmp::Ordering;

use crate::models::{
    organization::OrganizationSummary,
    plan::Plan,
    template::{Channel, Template, TemplateCategory},
};

/// Plans without a display order go after every ordered plan.
const UNORDERED_PLAN_POSITION: i32 = 999;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => active,
            StatusFilter::Inactive => !active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrganizationSortKey {
    #[default]
    TradeName,
    Cnpj,
    PlanName,
    RegisteredAt,
    TotalAppointments,
    TotalClients,
    TotalEmployees,
    TotalServices,
    TotalInstances,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationFilter {
    pub search: String,
    pub status: StatusFilter,
    /// `None` shows every plan.
    pub plan_code: Option<String>,
    pub sort_key: OrganizationSortKey,
    pub sort_direction: SortDirection,
}

impl OrganizationFilter {
    /// Clicking the current column flips the direction; another column starts
    /// ascending.
    pub fn toggle_sort(&mut self, key: OrganizationSortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }
}

fn compare_organizations(
    a: &OrganizationSummary,
    b: &OrganizationSummary,
    key: OrganizationSortKey,
) -> Ordering {
    match key {
        OrganizationSortKey::TradeName => compare_text(&a.trade_name, &b.trade_name),
        OrganizationSortKey::Cnpj => compare_text(&a.cnpj, &b.cnpj),
        OrganizationSortKey::PlanName => compare_text(&a.plan_name, &b.plan_name),
        OrganizationSortKey::RegisteredAt => a.registered_at.cmp(&b.registered_at),
        OrganizationSortKey::TotalAppointments => a.total_appointments.cmp(&b.total_appointments),
        OrganizationSortKey::TotalClients => a.total_clients.cmp(&b.total_clients),
        OrganizationSortKey::TotalEmployees => a.total_employees.cmp(&b.total_employees),
        OrganizationSortKey::TotalServices => a.total_services.cmp(&b.total_services),
        OrganizationSortKey::TotalInstances => a.total_instances.cmp(&b.total_instances),
    }
}

/// Case-insensitive, falling back to the raw text so the order is total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

pub fn filter_organizations<'a>(
    organizations: &'a [OrganizationSummary],
    filter: &OrganizationFilter,
) -> Vec<&'a OrganizationSummary> {
    let term = filter.search.trim().to_lowercase();

    let mut result: Vec<&OrganizationSummary> = organizations
        .iter()
        .filter(|org| {
            term.is_empty()
                || contains_term(&org.trade_name, &term)
                || org.cnpj.contains(&term)
                || contains_term(&org.email, &term)
        })
        .filter(|org| filter.status.matches(org.active))
        .filter(|org| match &filter.plan_code {
            Some(code) => &org.plan_code == code,
            None => true,
        })
        .collect();

    result.sort_by(|a, b| {
        filter
            .sort_direction
            .apply(compare_organizations(a, b, filter.sort_key))
    });
    result
}

/// Distinct plan codes present in the list, for the plan filter dropdown.
pub fn organization_plan_codes(organizations: &[OrganizationSummary]) -> Vec<String> {
    let mut codes: Vec<String> = organizations.iter().map(|o| o.plan_code.clone()).collect();
    codes.sort();
    codes.dedup();
    codes
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub search: String,
    pub channel: Option<Channel>,
    pub category: Option<TemplateCategory>,
}

pub fn filter_templates<'a>(templates: &'a [Template], filter: &TemplateFilter) -> Vec<&'a Template> {
    let term = filter.search.trim().to_lowercase();

    templates
        .iter()
        .filter(|t| term.is_empty() || contains_term(&t.name, &term) || contains_term(&t.code, &term))
        .filter(|t| filter.channel.is_none_or(|channel| t.channel == channel))
        .filter(|t| filter.category.is_none_or(|category| t.category == category))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateCounts {
    pub total: usize,
    pub whatsapp: usize,
    pub email: usize,
    pub defaults: usize,
}

pub fn template_counts(templates: &[Template]) -> TemplateCounts {
    TemplateCounts {
        total: templates.len(),
        whatsapp: templates.iter().filter(|t| t.channel == Channel::Whatsapp).count(),
        email: templates.iter().filter(|t| t.channel == Channel::Email).count(),
        defaults: templates.iter().filter(|t| t.is_default).count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFilter {
    pub search: String,
    pub status: StatusFilter,
}

/// Plans in display order, then narrowed by search and status.
pub fn filter_plans<'a>(plans: &'a [Plan], filter: &PlanFilter) -> Vec<&'a Plan> {
    let term = filter.search.trim().to_lowercase();

    let mut result: Vec<&Plan> = plans.iter().collect();
    result.sort_by_key(|p| p.display_order.unwrap_or(UNORDERED_PLAN_POSITION));

    result
        .into_iter()
        .filter(|p| term.is_empty() || contains_term(&p.name, &term) || contains_term(&p.code, &term))
        .filter(|p| filter.status.matches(p.active))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub fn plan_counts(plans: &[Plan]) -> PlanCounts {
    let active = plans.iter().filter(|p| p.active).count();
    PlanCounts {
        total: plans.len(),
        active,
        inactive: plans.len() - active,
    }
}

/// Moves the plan at `index` one slot up or down in a local reorder list.
/// Moves past either end are ignored.
pub fn move_plan(order: &mut [i64], index: usize, up: bool) {
    if index >= order.len() {
        return;
    }
    if up && index > 0 {
        order.swap(index, index - 1);
    } else if !up && index + 1 < order.len() {
        order.swap(index, index + 1);
    }
}
