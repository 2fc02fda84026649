use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::render::render_preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Whatsapp,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Whatsapp => "WHATSAPP",
            Channel::Email => "EMAIL",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Channel::Whatsapp => "WhatsApp",
            Channel::Email => "E-mail",
        }
    }

    pub fn suggested_variables(&self) -> Vec<TemplateVariable> {
        let pairs: &[(&str, &str, &str)] = match self {
            Channel::Whatsapp => &[
                ("nome_cliente", "Nome do cliente", "João Silva"),
                ("data_agendamento", "Data do agendamento", "15/03/2026"),
                ("hora_agendamento", "Horário do agendamento", "14:30"),
                ("servico", "Nome do serviço", "Corte Masculino"),
                ("profissional", "Nome do profissional", "Maria Santos"),
                ("local", "Endereço do estabelecimento", "Rua das Flores, 123"),
                ("valor", "Valor do serviço", "R$ 50,00"),
                ("nome_empresa", "Nome da empresa", "Barbearia Top"),
            ],
            Channel::Email => &[
                ("nomeCliente", "Nome do cliente", "João Silva"),
                ("nomeOrganizacao", "Nome da organização", "Barbearia Top"),
                ("valorCobranca", "Valor da cobrança", "R$ 150,00"),
                ("dataVencimento", "Data de vencimento", "15/04/2026"),
                ("descricaoCobranca", "Descrição da cobrança", "Plano Premium - Mensal"),
                ("numeroCobranca", "Número da cobrança", "COB-2026-001"),
                ("diasAtraso", "Dias em atraso", "5"),
            ],
        };

        pairs
            .iter()
            .map(|(name, description, example)| TemplateVariable {
                name: name.to_string(),
                description: description.to_string(),
                example: example.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateCategory {
    Confirmacao,
    Lembrete,
    BemVindo,
    ResetSenha,
    CobrancaAviso,
    CobrancaLembrete,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 6] = [
        TemplateCategory::Confirmacao,
        TemplateCategory::Lembrete,
        TemplateCategory::BemVindo,
        TemplateCategory::ResetSenha,
        TemplateCategory::CobrancaAviso,
        TemplateCategory::CobrancaLembrete,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TemplateCategory::Confirmacao => "CONFIRMACAO",
            TemplateCategory::Lembrete => "LEMBRETE",
            TemplateCategory::BemVindo => "BEM_VINDO",
            TemplateCategory::ResetSenha => "RESET_SENHA",
            TemplateCategory::CobrancaAviso => "COBRANCA_AVISO",
            TemplateCategory::CobrancaLembrete => "COBRANCA_LEMBRETE",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TemplateCategory::Confirmacao => "Confirmação",
            TemplateCategory::Lembrete => "Lembrete",
            TemplateCategory::BemVindo => "Boas-vindas",
            TemplateCategory::ResetSenha => "Reset de Senha",
            TemplateCategory::CobrancaAviso => "Cobrança - Aviso",
            TemplateCategory::CobrancaLembrete => "Cobrança - Lembrete",
        }
    }
}

/// Templates shipped by the backend. The server refuses to delete them; the
/// admin hides the delete action.
pub const SEED_TEMPLATE_CODES: [&str; 6] = [
    "whatsapp-confirmacao",
    "whatsapp-lembrete",
    "email-bem-vindo",
    "email-reset-senha",
    "email-cobranca-aviso",
    "email-cobranca-lembrete",
];

pub fn is_seed_template(code: &str) -> bool {
    SEED_TEMPLATE_CODES.contains(&code)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "exemplo")]
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub channel: Channel,
    #[serde(rename = "categoria")]
    pub category: TemplateCategory,
    #[serde(rename = "assunto", default)]
    pub subject: Option<String>,
    #[serde(rename = "conteudo")]
    pub body: String,
    #[serde(rename = "variaveisDisponiveis", default)]
    pub variables: Vec<TemplateVariable>,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "padrao")]
    pub is_default: bool,
    #[serde(rename = "icone", default)]
    pub icon: Option<String>,

    #[serde(rename = "dtCriacao")]
    pub created_at: String,
    #[serde(rename = "dtAtualizacao", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "userCriacao", default)]
    pub created_by: Option<i64>,
    #[serde(rename = "userAtualizacao", default)]
    pub updated_by: Option<i64>,
}

impl Template {
    pub fn is_seed(&self) -> bool {
        is_seed_template(&self.code)
    }

    pub fn preview(&self) -> TemplatePreview {
        render_preview(
            self.channel,
            self.subject.as_deref(),
            &self.body,
            &self.variables,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplate {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub channel: Channel,
    #[serde(rename = "categoria")]
    pub category: TemplateCategory,
    #[serde(rename = "assunto", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "conteudo")]
    pub body: String,
    #[serde(rename = "variaveisDisponiveis", skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
    #[serde(rename = "icone", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplate {
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,
    #[serde(rename = "assunto", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "conteudo", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "variaveisDisponiveis", skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
    #[serde(rename = "icone", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<CreateTemplate> for UpdateTemplate {
    fn from(create: CreateTemplate) -> Self {
        Self {
            code: Some(create.code),
            name: Some(create.name),
            description: create.description,
            channel: Some(create.channel),
            category: Some(create.category),
            subject: create.subject,
            body: Some(create.body),
            variables: create.variables,
            icon: create.icon,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplatePreviewRequest {
    #[serde(rename = "variaveis", skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, String>>,
}

/// Query parameters accepted by the template listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TemplateQuery {
    pub channel: Option<Channel>,
    pub category: Option<TemplateCategory>,
}

/// What the editor shows next to the form.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePreview {
    pub subject: Option<String>,
    pub body: String,
}

/// Appends the suggestions whose names are not already defined, keeping the
/// existing variables first and in order.
pub fn merge_suggested_variables(
    existing: &[TemplateVariable],
    suggestions: &[TemplateVariable],
) -> Vec<TemplateVariable> {
    let mut merged = existing.to_vec();
    for suggestion in suggestions {
        if !existing.iter().any(|v| v.name == suggestion.name) {
            merged.push(suggestion.clone());
        }
    }
    merged
}
