use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    pub cnpj: String,
    #[serde(rename = "emailPrincipal")]
    pub email: String,
    #[serde(rename = "telefone1")]
    pub phone: String,
    pub slug: String,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "planoNome")]
    pub plan_name: String,
    #[serde(rename = "planoCodigo")]
    pub plan_code: String,
    #[serde(rename = "dtCadastro")]
    pub registered_at: String,
    #[serde(rename = "totalAgendamentos")]
    pub total_appointments: u64,
    #[serde(rename = "totalClientes")]
    pub total_clients: u64,
    #[serde(rename = "totalFuncionarios")]
    pub total_employees: u64,
    #[serde(rename = "totalServicos")]
    pub total_services: u64,
    #[serde(rename = "totalInstancias")]
    pub total_instances: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPlan {
    pub id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "precoAnual")]
    pub annual_price: f64,
}

/// Limits as applied to a specific organization. Unlike plan limits the API
/// always reports concrete quotas here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationLimits {
    #[serde(rename = "maxAgendamentosMes")]
    pub max_appointments_per_month: i64,
    #[serde(rename = "maxUsuarios")]
    pub max_users: i64,
    #[serde(rename = "maxClientes")]
    pub max_clients: i64,
    #[serde(rename = "maxServicos")]
    pub max_services: i64,
    #[serde(rename = "maxUnidades")]
    pub max_units: i64,
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMetrics {
    #[serde(rename = "totalAgendamentos")]
    pub total_appointments: u64,
    #[serde(rename = "agendamentosNoMes")]
    pub appointments_this_month: u64,
    #[serde(rename = "agendamentosConcluidos")]
    pub appointments_completed: u64,
    #[serde(rename = "agendamentosCancelados")]
    pub appointments_cancelled: u64,
    #[serde(rename = "agendamentosPendentes")]
    pub appointments_pending: u64,
    #[serde(rename = "totalClientes")]
    pub total_clients: u64,
    #[serde(rename = "clientesAtivos")]
    pub active_clients: u64,
    #[serde(rename = "totalFuncionarios")]
    pub total_employees: u64,
    #[serde(rename = "funcionariosAtivos")]
    pub active_employees: u64,
    #[serde(rename = "totalServicos")]
    pub total_services: u64,
    #[serde(rename = "servicosAtivos")]
    pub active_services: u64,
    #[serde(rename = "faturamentoTotal")]
    pub total_revenue: f64,
    #[serde(rename = "faturamentoMes")]
    pub revenue_this_month: f64,
    #[serde(rename = "totalCobrancas")]
    pub total_charges: u64,
    #[serde(rename = "cobrancasPagas")]
    pub paid_charges: u64,
    #[serde(rename = "cobrancasPendentes")]
    pub pending_charges: u64,
    #[serde(rename = "cobrancasVencidas")]
    pub overdue_charges: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub id: i64,
    #[serde(rename = "instanceName")]
    pub instance_name: String,
    #[serde(rename = "instanceId")]
    pub instance_id: String,
    pub status: String,
    #[serde(rename = "ativo")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationDetail {
    pub id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "razaoSocial")]
    pub legal_name: String,
    pub cnpj: String,
    #[serde(rename = "emailPrincipal")]
    pub email: String,
    #[serde(rename = "telefone1")]
    pub phone: String,
    #[serde(rename = "telefone2", default)]
    pub secondary_phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    pub slug: String,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "dtCadastro")]
    pub registered_at: String,
    #[serde(rename = "dtAtualizacao", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "responsavelNome", default)]
    pub owner_name: Option<String>,
    #[serde(rename = "responsavelEmail", default)]
    pub owner_email: Option<String>,
    #[serde(rename = "responsavelTelefone", default)]
    pub owner_phone: Option<String>,
    #[serde(rename = "plano")]
    pub plan: OrganizationPlan,
    #[serde(rename = "limites")]
    pub limits: OrganizationLimits,
    #[serde(rename = "limitesPersonalizados", default)]
    pub custom_limits: Option<OrganizationLimits>,
    #[serde(rename = "metricas")]
    pub metrics: OrganizationMetrics,
    #[serde(rename = "instancias", default)]
    pub instances: Vec<Instance>,
}

impl OrganizationDetail {
    /// Custom limits override the plan's when the organization has them.
    pub fn effective_limits(&self) -> &OrganizationLimits {
        self.custom_limits.as_ref().unwrap_or(&self.limits)
    }
}
