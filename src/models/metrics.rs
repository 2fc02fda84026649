use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDistribution {
    #[serde(rename = "gratuito")]
    pub free: u64,
    #[serde(rename = "basico")]
    pub basic: u64,
    pub plus: u64,
    pub premium: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(rename = "totalOrganizacoes")]
    pub total_organizations: u64,
    #[serde(rename = "organizacoesAtivas")]
    pub active_organizations: u64,
    #[serde(rename = "organizacoesInativas")]
    pub inactive_organizations: u64,
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
    #[serde(rename = "instanciasConectadas")]
    pub connected_instances: u64,
    #[serde(rename = "instanciasDesconectadas")]
    pub disconnected_instances: u64,
    #[serde(rename = "faturamentoTotal")]
    pub total_revenue: f64,
    #[serde(rename = "totalCobrancas")]
    pub total_charges: u64,
    #[serde(rename = "cobrancasPendentes")]
    pub pending_charges: u64,
    #[serde(rename = "cobrancasPagas")]
    pub paid_charges: u64,
    #[serde(rename = "distribuicaoPlanos")]
    pub plan_distribution: PlanDistribution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    pub total: u64,
    #[serde(rename = "concluidos")]
    pub completed: u64,
    #[serde(rename = "cancelados")]
    pub cancelled: u64,
    #[serde(rename = "pendentes")]
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsByMonth {
    /// `yyyy-mm`
    #[serde(rename = "mes")]
    pub month: String,
    pub total: u64,
    #[serde(rename = "concluidos")]
    pub completed: u64,
    #[serde(rename = "cancelados")]
    pub cancelled: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentMetrics {
    #[serde(rename = "totalGeral")]
    pub total: u64,
    #[serde(rename = "totalNoMes")]
    pub total_this_month: u64,
    #[serde(rename = "concluidos")]
    pub completed: u64,
    #[serde(rename = "cancelados")]
    pub cancelled: u64,
    #[serde(rename = "pendentes")]
    pub pending: u64,
    #[serde(rename = "agendados")]
    pub scheduled: u64,
    #[serde(rename = "naoCompareceu")]
    pub no_show: u64,
    #[serde(rename = "taxaConclusao")]
    pub completion_rate: f64,
    #[serde(rename = "taxaCancelamento")]
    pub cancellation_rate: f64,
    #[serde(rename = "taxaNoShow")]
    pub no_show_rate: f64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<AppointmentsByOrganization>,
    #[serde(rename = "evolucaoMensal", default)]
    pub monthly: Vec<AppointmentsByMonth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "planoCodigo")]
    pub plan_code: String,
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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueByMonth {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "quantidadePagamentos")]
    pub payment_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueMetrics {
    #[serde(rename = "faturamentoTotalGeral")]
    pub total_revenue: f64,
    #[serde(rename = "faturamentoMesAtual")]
    pub revenue_this_month: f64,
    #[serde(rename = "faturamentoMesAnterior")]
    pub revenue_last_month: f64,
    #[serde(rename = "crescimentoPercentual")]
    pub growth_percent: f64,
    #[serde(rename = "ticketMedio")]
    pub average_ticket: f64,
    #[serde(rename = "totalPagamentos")]
    pub total_payments: u64,
    #[serde(rename = "pagamentosConfirmados")]
    pub confirmed_payments: u64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<RevenueByOrganization>,
    #[serde(rename = "evolucaoMensal", default)]
    pub monthly: Vec<RevenueByMonth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "totalServicos")]
    pub total_services: u64,
    #[serde(rename = "servicosAtivos")]
    pub active_services: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetrics {
    #[serde(rename = "totalServicosGeral")]
    pub total_services: u64,
    #[serde(rename = "servicosAtivos")]
    pub active_services: u64,
    #[serde(rename = "servicosInativos")]
    pub inactive_services: u64,
    #[serde(rename = "precoMedio")]
    pub average_price: f64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<ServicesByOrganization>,
    /// Shape not fixed by the API yet.
    #[serde(rename = "maisAgendados", default)]
    pub most_booked: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "totalFuncionarios")]
    pub total_employees: u64,
    #[serde(rename = "funcionariosAtivos")]
    pub active_employees: u64,
    #[serde(rename = "totalServicosVinculados")]
    pub linked_services: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeMetrics {
    #[serde(rename = "totalFuncionariosGeral")]
    pub total_employees: u64,
    #[serde(rename = "funcionariosAtivos")]
    pub active_employees: u64,
    #[serde(rename = "funcionariosInativos")]
    pub inactive_employees: u64,
    #[serde(rename = "mediaFuncionariosPorOrganizacao")]
    pub average_per_organization: f64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<EmployeesByOrganization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "totalClientes")]
    pub total_clients: u64,
    #[serde(rename = "clientesAtivos")]
    pub active_clients: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsByMonth {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "novosClientes")]
    pub new_clients: u64,
    #[serde(rename = "totalAcumulado")]
    pub cumulative_total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMetrics {
    #[serde(rename = "totalClientesGeral")]
    pub total_clients: u64,
    #[serde(rename = "clientesAtivos")]
    pub active_clients: u64,
    #[serde(rename = "clientesInativos")]
    pub inactive_clients: u64,
    #[serde(rename = "mediaClientesPorOrganizacao")]
    pub average_per_organization: f64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<ClientsByOrganization>,
    #[serde(rename = "evolucaoMensal", default)]
    pub monthly: Vec<ClientsByMonth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstancesByOrganization {
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: String,
    #[serde(rename = "totalInstancias")]
    pub total_instances: u64,
    #[serde(rename = "instanciasAtivas")]
    pub active_instances: u64,
    #[serde(rename = "instanciasConectadas")]
    pub connected_instances: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceRow {
    pub id: i64,
    #[serde(rename = "instanceName")]
    pub instance_name: String,
    #[serde(rename = "instanceId")]
    pub instance_id: String,
    pub integration: String,
    pub status: String,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "organizacaoId")]
    pub organization_id: i64,
    #[serde(rename = "nomeFantasiaOrganizacao")]
    pub organization_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceMetrics {
    #[serde(rename = "totalInstancias")]
    pub total_instances: u64,
    #[serde(rename = "instanciasAtivas")]
    pub active_instances: u64,
    #[serde(rename = "instanciasDeletadas")]
    pub deleted_instances: u64,
    #[serde(rename = "instanciasConectadas")]
    pub connected_instances: u64,
    #[serde(rename = "instanciasDesconectadas")]
    pub disconnected_instances: u64,
    #[serde(rename = "porOrganizacao", default)]
    pub by_organization: Vec<InstancesByOrganization>,
    #[serde(rename = "todasInstancias", default)]
    pub instances: Vec<InstanceRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanShare {
    #[serde(rename = "planoId")]
    pub plan_id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "precoAnual")]
    pub annual_price: f64,
    #[serde(rename = "totalOrganizacoes")]
    pub total_organizations: u64,
    #[serde(rename = "percentualDistribuicao")]
    pub share_percent: f64,
    #[serde(rename = "ativo")]
    pub active: bool,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetrics {
    #[serde(rename = "totalPlanos")]
    pub total_plans: u64,
    #[serde(rename = "planosAtivos")]
    pub active_plans: u64,
    #[serde(rename = "distribuicao", default)]
    pub distribution: Vec<PlanShare>,
}
