use std::collections::BTreeMap;

use crate::{
    models::{
        plan::{CreatePlan, Plan, PlanFeature, PlanLimits},
        template::{
            Channel, CreateTemplate, Template, TemplateCategory, TemplatePreview, TemplateVariable,
        },
    },
    pricing::PlanPricing,
    render::render_preview,
};

/// Field name to user-facing message. Empty means the form can be submitted.
pub type FormErrors = BTreeMap<&'static str, &'static str>;

/// Lowercases and drops anything outside `[a-z0-9_-]`.
pub fn normalize_code(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct TemplateForm {
    pub code: String,
    pub name: String,
    pub description: String,
    pub channel: Channel,
    pub category: TemplateCategory,
    pub subject: String,
    pub body: String,
    pub icon: String,
    pub variables: Vec<TemplateVariable>,
}

impl Default for TemplateForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            channel: Channel::Whatsapp,
            category: TemplateCategory::Confirmacao,
            subject: String::new(),
            body: String::new(),
            icon: "MessageSquare".to_string(),
            variables: Vec::new(),
        }
    }
}

pub fn validate_template_form(form: &TemplateForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.code.trim().is_empty() {
        errors.insert("codigo", "Código é obrigatório");
    }
    if form.name.trim().is_empty() {
        errors.insert("nome", "Nome é obrigatório");
    }
    if form.body.trim().is_empty() {
        errors.insert("conteudo", "Conteúdo é obrigatório");
    }
    if form.channel == Channel::Email && form.subject.trim().is_empty() {
        errors.insert("assunto", "Assunto é obrigatório para e-mail");
    }

    errors
}

impl TemplateForm {
    /// Form state for editing an existing template.
    pub fn from_template(template: &Template) -> Self {
        Self {
            code: template.code.clone(),
            name: template.name.clone(),
            description: template.description.clone().unwrap_or_default(),
            channel: template.channel,
            category: template.category,
            subject: template.subject.clone().unwrap_or_default(),
            body: template.body.clone(),
            icon: template
                .icon
                .clone()
                .unwrap_or_else(|| "MessageSquare".to_string()),
            variables: template.variables.clone(),
        }
    }

    pub fn preview(&self) -> TemplatePreview {
        render_preview(self.channel, Some(&self.subject), &self.body, &self.variables)
    }

    pub fn to_payload(&self) -> Result<CreateTemplate, FormErrors> {
        let errors = validate_template_form(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTemplate {
            code: normalize_code(self.code.trim()),
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
            channel: self.channel,
            category: self.category,
            // Only e-mail templates carry a subject.
            subject: match self.channel {
                Channel::Email => Some(self.subject.trim().to_string()),
                Channel::Whatsapp => None,
            },
            body: self.body.trim().to_string(),
            variables: if self.variables.is_empty() {
                None
            } else {
                Some(self.variables.clone())
            },
            icon: non_empty(&self.icon),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PlanForm {
    pub code: String,
    pub name: String,
    pub tagline: String,
    pub full_description: String,
    pub pricing: PlanPricing,
    pub popular: bool,
    pub cta: String,
    pub badge: String,
    pub icon: String,
    pub color: String,
    pub gradient: String,
    pub display_order: Option<i32>,
    pub features: Vec<PlanFeature>,
    pub limits: PlanLimits,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            tagline: String::new(),
            full_description: String::new(),
            pricing: PlanPricing::default(),
            popular: false,
            cta: String::new(),
            badge: String::new(),
            icon: "Gift".to_string(),
            color: "#6b7280".to_string(),
            gradient: String::new(),
            display_order: None,
            features: Vec::new(),
            limits: PlanLimits::default(),
        }
    }
}

pub fn validate_plan_form(form: &PlanForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.code.trim().is_empty() {
        errors.insert("codigo", "Código é obrigatório");
    }
    if form.name.trim().is_empty() {
        errors.insert("nome", "Nome é obrigatório");
    }
    if !matches!(form.pricing.monthly(), Some(price) if price >= 0.0) {
        errors.insert("precoMensal", "Preço mensal inválido");
    }
    if !matches!(form.pricing.annual(), Some(price) if price >= 0.0) {
        errors.insert("precoAnual", "Preço anual inválido");
    }

    errors
}

impl PlanForm {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            code: plan.code.clone(),
            name: plan.name.clone(),
            tagline: plan.tagline.clone().unwrap_or_default(),
            full_description: plan.full_description.clone().unwrap_or_default(),
            pricing: PlanPricing::from_plan(plan),
            popular: plan.popular,
            cta: plan.cta.clone().unwrap_or_default(),
            badge: plan.badge.clone().unwrap_or_default(),
            icon: plan.icon.clone().unwrap_or_else(|| "Gift".to_string()),
            color: plan.color.clone().unwrap_or_else(|| "#6b7280".to_string()),
            gradient: plan.gradient.clone().unwrap_or_default(),
            display_order: plan.display_order,
            features: plan.features.clone(),
            limits: plan.limits.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<CreatePlan, FormErrors> {
        let errors = validate_plan_form(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreatePlan {
            code: self.code.trim().to_lowercase(),
            name: self.name.trim().to_string(),
            tagline: non_empty(&self.tagline),
            full_description: non_empty(&self.full_description),
            popular: self.popular,
            cta: non_empty(&self.cta),
            badge: non_empty(&self.badge),
            icon: non_empty(&self.icon),
            color: non_empty(&self.color),
            gradient: non_empty(&self.gradient),
            monthly_price: self.pricing.monthly().unwrap_or_default(),
            annual_price: self.pricing.annual().unwrap_or_default(),
            // The API stores whole percentages.
            annual_discount_percent: self.pricing.discount().map(|d| d.round() as i64),
            features: if self.features.is_empty() {
                None
            } else {
                Some(self.features.clone())
            },
            display_order: self.display_order,
            limits: Some(self.limits.clone()),
        })
    }
}
