use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

/// Quotas are `None` when unlimited. Flags are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanLimits {
    #[serde(rename = "maxAgendamentosMes")]
    pub max_appointments_per_month: Option<u32>,
    #[serde(rename = "maxUsuarios")]
    pub max_users: Option<u32>,
    #[serde(rename = "maxClientes")]
    pub max_clients: Option<u32>,
    #[serde(rename = "maxServicos")]
    pub max_services: Option<u32>,
    #[serde(rename = "maxUnidades")]
    pub max_units: Option<u32>,

    #[serde(rename = "permiteAgendamentoOnline")]
    pub online_booking: bool,
    #[serde(rename = "permiteWhatsapp")]
    pub whatsapp: bool,
    #[serde(rename = "permiteSite")]
    pub site: bool,
    #[serde(rename = "permiteEcommerce")]
    pub ecommerce: bool,
    #[serde(rename = "permiteRelatoriosAvancados")]
    pub advanced_reports: bool,
    #[serde(rename = "permiteApi")]
    pub api: bool,
    #[serde(rename = "permiteIntegracaoPersonalizada")]
    pub custom_integration: bool,
    #[serde(rename = "suportePrioritario")]
    pub priority_support: bool,
    #[serde(rename = "suporte24x7")]
    pub support_24x7: bool,
}

impl PlanLimits {
    pub fn enabled_flag_count(&self) -> usize {
        [
            self.online_booking,
            self.whatsapp,
            self.site,
            self.ecommerce,
            self.advanced_reports,
            self.api,
            self.custom_integration,
            self.priority_support,
            self.support_24x7,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(rename = "descricaoCompleta", default)]
    pub full_description: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    pub popular: bool,

    #[serde(default)]
    pub cta: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(rename = "icone", default)]
    pub icon: Option<String>,
    #[serde(rename = "cor", default)]
    pub color: Option<String>,
    #[serde(rename = "gradiente", default)]
    pub gradient: Option<String>,

    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "precoAnual")]
    pub annual_price: f64,
    #[serde(rename = "descontoPercentualAnual", default)]
    pub annual_discount_percent: Option<f64>,

    #[serde(default)]
    pub features: Vec<PlanFeature>,
    #[serde(rename = "limites", default)]
    pub limits: Option<PlanLimits>,

    #[serde(rename = "ordemExibicao", default)]
    pub display_order: Option<i32>,

    #[serde(rename = "dtCriacao")]
    pub created_at: String,
    #[serde(rename = "dtAtualizacao", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "userCriacao", default)]
    pub created_by: Option<i64>,
    #[serde(rename = "userAtualizacao", default)]
    pub updated_by: Option<i64>,

    #[serde(rename = "totalOrganizacoesUsando", default)]
    pub organizations_using: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlan {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(rename = "descricaoCompleta", skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub popular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(rename = "icone", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "gradiente", skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "precoAnual")]
    pub annual_price: f64,
    #[serde(rename = "descontoPercentualAnual", skip_serializing_if = "Option::is_none")]
    pub annual_discount_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<PlanFeature>>,
    #[serde(rename = "ordemExibicao", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(rename = "limites", skip_serializing_if = "Option::is_none")]
    pub limits: Option<PlanLimits>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePlan {
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(rename = "descricaoCompleta", skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(rename = "icone", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "gradiente", skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(rename = "precoMensal", skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(rename = "precoAnual", skip_serializing_if = "Option::is_none")]
    pub annual_price: Option<f64>,
    #[serde(rename = "descontoPercentualAnual", skip_serializing_if = "Option::is_none")]
    pub annual_discount_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<PlanFeature>>,
    #[serde(rename = "ordemExibicao", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(rename = "limites", skip_serializing_if = "Option::is_none")]
    pub limits: Option<PlanLimits>,
}

impl From<CreatePlan> for UpdatePlan {
    fn from(create: CreatePlan) -> Self {
        Self {
            code: Some(create.code),
            name: Some(create.name),
            tagline: create.tagline,
            full_description: create.full_description,
            popular: Some(create.popular),
            cta: create.cta,
            badge: create.badge,
            icon: create.icon,
            color: create.color,
            gradient: create.gradient,
            monthly_price: Some(create.monthly_price),
            annual_price: Some(create.annual_price),
            annual_discount_percent: create.annual_discount_percent,
            features: create.features,
            display_order: create.display_order,
            limits: create.limits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOrder {
    pub id: i64,
    #[serde(rename = "ordemExibicao")]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderPlans {
    #[serde(rename = "planos")]
    pub plans: Vec<PlanOrder>,
}

impl ReorderPlans {
    /// Display order follows list position, starting at 1.
    pub fn from_ids(ids: &[i64]) -> Self {
        Self {
            plans: ids
                .iter()
                .enumerate()
                .map(|(index, id)| PlanOrder {
                    id: *id,
                    display_order: index as i32 + 1,
                })
                .collect(),
        }
    }
}
