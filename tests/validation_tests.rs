use anyhow::Result;
use bellory_admin::{
    models::{
        plan::{Plan, PlanFeature, UpdatePlan},
        template::{
            Channel, Template, TemplateCategory, TemplateVariable, UpdateTemplate,
            merge_suggested_variables,
        },
        validation::{
            PlanForm, TemplateForm, normalize_code, validate_plan_form, validate_template_form,
        },
    },
    pricing::PlanPricing,
};
use serde_json::json;

/// Test: Codes keep only lowercase letters, digits, dashes and underscores
#[tokio::test]
async fn test_normalize_code() -> Result<()> {
    assert_eq!(normalize_code("Lembrete VIP!"), "lembretevip");
    assert_eq!(normalize_code("Whats_App-01 ç"), "whats_app-01");
    assert_eq!(normalize_code("email-bem-vindo"), "email-bem-vindo");

    Ok(())
}

/// Test: An empty template form reports every required field
#[tokio::test]
async fn test_empty_template_form_errors() -> Result<()> {
    let form = TemplateForm::default();
    let errors = validate_template_form(&form);

    assert_eq!(errors.get("codigo"), Some(&"Código é obrigatório"));
    assert_eq!(errors.get("nome"), Some(&"Nome é obrigatório"));
    assert_eq!(errors.get("conteudo"), Some(&"Conteúdo é obrigatório"));
    assert!(
        !errors.contains_key("assunto"),
        "WhatsApp templates need no subject"
    );

    let payload = form.to_payload();
    assert!(payload.is_err(), "Invalid forms produce no payload");

    Ok(())
}

/// Test: E-mail templates require a subject
#[tokio::test]
async fn test_email_template_requires_subject() -> Result<()> {
    let mut form = TemplateForm {
        code: "email-promocao".to_string(),
        name: "Promoção".to_string(),
        channel: Channel::Email,
        category: TemplateCategory::BemVindo,
        body: "<p>Olá ${nomeCliente}</p>".to_string(),
        subject: "  ".to_string(),
        ..Default::default()
    };

    let errors = validate_template_form(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("assunto"),
        Some(&"Assunto é obrigatório para e-mail")
    );

    form.subject = "Bem-vindo, ${nomeCliente}".to_string();
    let payload = form.to_payload().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    assert_eq!(payload.subject.as_deref(), Some("Bem-vindo, ${nomeCliente}"));

    Ok(())
}

/// Test: Template payloads are normalized and use the wire names
#[tokio::test]
async fn test_template_payload() -> Result<()> {
    let form = TemplateForm {
        code: " Lembrete VIP ".to_string(),
        name: " Lembrete VIP ".to_string(),
        channel: Channel::Whatsapp,
        category: TemplateCategory::Lembrete,
        subject: "ignorado".to_string(),
        body: "Oi {{nome_cliente}}\n".to_string(),
        ..Default::default()
    };

    let payload = form.to_payload().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = serde_json::to_value(&payload)?;

    assert_eq!(
        body,
        json!({
            "codigo": "lembretevip",
            "nome": "Lembrete VIP",
            "tipo": "WHATSAPP",
            "categoria": "LEMBRETE",
            "conteudo": "Oi {{nome_cliente}}",
            "icone": "MessageSquare"
        })
    );

    let update = serde_json::to_value(UpdateTemplate::from(payload))?;
    assert_eq!(update["codigo"], "lembretevip");
    assert!(update.get("assunto").is_none());

    Ok(())
}

/// Test: Editing a template starts from its saved values
#[tokio::test]
async fn test_template_form_from_template() -> Result<()> {
    let template: Template = serde_json::from_value(json!({
        "id": 5,
        "codigo": "email-cobranca-aviso",
        "nome": "Aviso de cobrança",
        "tipo": "EMAIL",
        "categoria": "COBRANCA_AVISO",
        "assunto": "Cobrança ${numeroCobranca}",
        "conteudo": "<p>${nomeCliente}, sua fatura vence em ${dataVencimento}</p>",
        "variaveisDisponiveis": [
            { "nome": "nomeCliente", "descricao": "Nome do cliente", "exemplo": "Ana" },
            { "nome": "dataVencimento", "descricao": "Vencimento", "exemplo": "15/04/2026" },
            { "nome": "numeroCobranca", "descricao": "Número", "exemplo": "COB-1" }
        ],
        "ativo": true,
        "padrao": true,
        "dtCriacao": "2026-01-01T00:00:00"
    }))?;

    assert!(template.is_seed());

    let form = TemplateForm::from_template(&template);
    assert_eq!(form.icon, "MessageSquare", "Missing icon falls back to the default");
    assert_eq!(form.variables.len(), 3);

    let preview = form.preview();
    assert_eq!(preview.subject.as_deref(), Some("Cobrança COB-1"));
    assert_eq!(preview.body, "<p>Ana, sua fatura vence em 15/04/2026</p>");
    assert_eq!(template.preview(), preview, "Saved and edited previews agree");

    Ok(())
}

/// Test: Suggested variables are appended without duplicating names
#[tokio::test]
async fn test_merge_suggested_variables() -> Result<()> {
    let existing = vec![TemplateVariable {
        name: "nome_cliente".to_string(),
        description: "Cliente".to_string(),
        example: "Carlos".to_string(),
    }];

    let suggestions = Channel::Whatsapp.suggested_variables();
    let merged = merge_suggested_variables(&existing, &suggestions);

    assert_eq!(merged.len(), suggestions.len());
    assert_eq!(merged[0].example, "Carlos", "Existing variables keep their values");
    assert!(merged.iter().skip(1).all(|v| v.name != "nome_cliente"));

    Ok(())
}

/// Test: An empty plan form reports every required field
#[tokio::test]
async fn test_empty_plan_form_errors() -> Result<()> {
    let errors = validate_plan_form(&PlanForm::default());

    assert_eq!(errors.get("codigo"), Some(&"Código é obrigatório"));
    assert_eq!(errors.get("nome"), Some(&"Nome é obrigatório"));
    assert_eq!(errors.get("precoMensal"), Some(&"Preço mensal inválido"));
    assert_eq!(errors.get("precoAnual"), Some(&"Preço anual inválido"));

    Ok(())
}

/// Test: Negative prices are rejected
#[tokio::test]
async fn test_negative_prices_rejected() -> Result<()> {
    let form = PlanForm {
        code: "plus".to_string(),
        name: "Plus".to_string(),
        pricing: PlanPricing::new(Some(-1.0), Some(0.0), None),
        ..Default::default()
    };

    let errors = validate_plan_form(&form);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("precoMensal"));

    Ok(())
}

/// Test: Plan payloads carry synced prices and a whole-number discount
#[tokio::test]
async fn test_plan_payload() -> Result<()> {
    let mut pricing = PlanPricing::default();
    pricing.set_monthly(Some(99.9));
    pricing.set_annual(Some(1000.0));

    let form = PlanForm {
        code: " PLUS ".to_string(),
        name: "Plus".to_string(),
        pricing,
        features: vec![PlanFeature {
            text: "Agenda online".to_string(),
            included: true,
        }],
        ..Default::default()
    };

    let payload = form.to_payload().map_err(|e| anyhow::anyhow!("{:?}", e))?;

    assert_eq!(payload.code, "plus");
    assert_eq!(payload.annual_discount_percent, Some(17), "16.6% rounds to 17");
    assert_eq!(payload.color.as_deref(), Some("#6b7280"));
    assert_eq!(payload.icon.as_deref(), Some("Gift"));
    assert!(payload.limits.is_some(), "Limits are always sent");

    let body = serde_json::to_value(&payload)?;
    assert_eq!(body["precoMensal"], 99.9);
    assert_eq!(body["precoAnual"], 1000.0);
    assert_eq!(body["descontoPercentualAnual"], 17);

    let update = UpdatePlan::from(payload);
    assert_eq!(update.monthly_price, Some(99.9));

    Ok(())
}

/// Test: Editing a plan starts from its saved values
#[tokio::test]
async fn test_plan_form_from_plan() -> Result<()> {
    let plan: Plan = serde_json::from_value(json!({
        "id": 2,
        "codigo": "premium",
        "nome": "Premium",
        "ativo": true,
        "popular": true,
        "cor": "#7c3aed",
        "precoMensal": 199.9,
        "precoAnual": 1919.04,
        "descontoPercentualAnual": 20.0,
        "limites": {
            "maxAgendamentosMes": null,
            "maxUsuarios": 10,
            "maxClientes": null,
            "maxServicos": null,
            "maxUnidades": 3,
            "permiteAgendamentoOnline": true,
            "permiteWhatsapp": true,
            "permiteSite": true,
            "permiteEcommerce": false,
            "permiteRelatoriosAvancados": true,
            "permiteApi": false,
            "permiteIntegracaoPersonalizada": false,
            "suportePrioritario": true,
            "suporte24x7": false
        },
        "ordemExibicao": 3,
        "dtCriacao": "2026-01-01T00:00:00",
        "totalOrganizacoesUsando": 12
    }))?;

    let form = PlanForm::from_plan(&plan);

    assert_eq!(form.color, "#7c3aed");
    assert_eq!(form.icon, "Gift");
    assert_eq!(form.display_order, Some(3));
    assert_eq!(form.pricing.discount(), Some(20.0));
    assert_eq!(form.limits.max_users, Some(10));
    assert_eq!(form.limits.max_appointments_per_month, None, "Null means unlimited");
    assert_eq!(form.limits.enabled_flag_count(), 5);

    Ok(())
}
