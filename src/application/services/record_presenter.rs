//! Maps typed entities to kind-erased cards and forms.

use chrono::NaiveDateTime;

use crate::application::dto::{
    FieldSpec, FormSpec, FormValues, RecordCard, RecordForm, References, SelectOption,
    ShareMessage,
};
use crate::application::services::share_formatter::{ShareFormatter, display_date};
use crate::domain::entities::{
    Entity, Estimate, EstimateDraft, Invoice, InvoiceDraft, Lead, LeadDraft, LeadSource,
    MATERIAL_CATEGORIES, MATERIAL_UNITS, Material, MaterialDraft, Project, ProjectDraft,
    ProjectType, Proposal, ProposalDraft, ResourceKind,
};
use crate::domain::money::{coerce_amount, format_currency, format_number};
use crate::domain::serde_utils::parse_timestamp;
use crate::domain::services::InvoiceTotals;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const LINE_ITEMS_KEY: &str = "line_items";

/// Entity that can be listed as a card and edited through a generic form.
pub trait Presentable: Entity {
    /// Collections whose options this entity's card and form refer to.
    const REFERENCES: &'static [ResourceKind] = &[];

    /// Returns the form layout for the draft.
    fn form_spec() -> FormSpec;

    /// Converts a draft into editable form state.
    fn draft_to_form(draft: &Self::Draft) -> RecordForm;

    /// Builds a draft from form state, coercing numbers and dates.
    fn draft_from_form(form: &RecordForm) -> Self::Draft;

    /// Returns title, subtitle, status and detail lines.
    fn summary(&self, refs: &References) -> CardSummary;

    /// Returns this record as an option of a reference field.
    fn option(&self) -> SelectOption;

    /// Returns share texts for shareable kinds.
    fn share(&self) -> Option<ShareMessage> {
        None
    }

    /// Builds the full card.
    fn card(&self, refs: &References) -> RecordCard {
        let summary = self.summary(refs);
        RecordCard {
            id: self.id().to_string(),
            title: summary.title,
            subtitle: summary.subtitle,
            status: summary.status,
            lines: summary.lines,
            form: Self::draft_to_form(&self.to_draft()),
            share: self.share(),
        }
    }
}

/// Display portion of a card.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct CardSummary {
    pub title: String,
    pub subtitle: Option<String>,
    pub status: Option<String>,
    pub lines: Vec<(String, String)>,
}

impl CardSummary {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        if !subtitle.is_empty() {
            self.subtitle = Some(subtitle);
        }
        self
    }

    fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    fn line(mut self, label: &str, value: impl Into<String>) -> Self {
        self.lines.push((label.to_string(), value.into()));
        self
    }

    fn line_if(self, label: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.line(label, value),
            None => self,
        }
    }
}

/// Returns the form layout of `kind`.
#[must_use]
pub fn form_spec(kind: ResourceKind) -> FormSpec {
    match kind {
        ResourceKind::Projects => Project::form_spec(),
        ResourceKind::Leads => Lead::form_spec(),
        ResourceKind::Estimates => Estimate::form_spec(),
        ResourceKind::Materials => Material::form_spec(),
        ResourceKind::Proposals => Proposal::form_spec(),
        ResourceKind::Invoices => Invoice::form_spec(),
    }
}

/// Returns the empty form of `kind`.
#[must_use]
pub fn blank_form(kind: ResourceKind) -> RecordForm {
    match kind {
        ResourceKind::Projects => Project::draft_to_form(&ProjectDraft::default()),
        ResourceKind::Leads => Lead::draft_to_form(&LeadDraft::default()),
        ResourceKind::Estimates => Estimate::draft_to_form(&EstimateDraft::default()),
        ResourceKind::Materials => Material::draft_to_form(&MaterialDraft::default()),
        ResourceKind::Proposals => Proposal::draft_to_form(&ProposalDraft::default()),
        ResourceKind::Invoices => Invoice::draft_to_form(&InvoiceDraft::default()),
    }
}

/// Returns the reference collections `kind` depends on.
#[must_use]
pub const fn references_of(kind: ResourceKind) -> &'static [ResourceKind] {
    match kind {
        ResourceKind::Projects => Project::REFERENCES,
        ResourceKind::Leads => Lead::REFERENCES,
        ResourceKind::Estimates => Estimate::REFERENCES,
        ResourceKind::Materials => Material::REFERENCES,
        ResourceKind::Proposals => Proposal::REFERENCES,
        ResourceKind::Invoices => Invoice::REFERENCES,
    }
}

fn date_value(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn date_from(values: &FormValues, key: &str) -> Option<NaiveDateTime> {
    parse_timestamp(values.get(key))
}

fn options<const N: usize>(pairs: [(&str, &str); N]) -> Vec<SelectOption> {
    pairs
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect()
}

fn project_type_options() -> Vec<SelectOption> {
    ProjectType::ALL
        .into_iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

fn reference_label(refs: &References, kind: ResourceKind, id: &str, fallback: &str) -> String {
    refs.label(kind, id).unwrap_or(fallback).to_string()
}

impl Presentable for Project {
    fn form_spec() -> FormSpec {
        FormSpec {
            fields: vec![
                FieldSpec::text("name", "Project Name").required(),
                FieldSpec::multiline("description", "Description"),
                FieldSpec::text("address", "Address").required(),
                FieldSpec::text("client_id", "Client ID").required(),
                FieldSpec::select("project_type", "Project Type", project_type_options()).required(),
                FieldSpec::number("estimated_cost", "Estimated Cost"),
                FieldSpec::date("start_date", "Start Date"),
                FieldSpec::date("end_date", "End Date"),
            ],
            line_items: false,
        }
    }

    fn draft_to_form(draft: &ProjectDraft) -> RecordForm {
        RecordForm::from_values(
            FormValues::default()
                .with("name", &draft.name)
                .with("description", draft.description.clone().unwrap_or_default())
                .with("address", &draft.address)
                .with("client_id", &draft.client_id)
                .with("project_type", draft.project_type.as_str())
                .with("estimated_cost", format_number(draft.estimated_cost))
                .with("start_date", date_value(draft.start_date))
                .with("end_date", date_value(draft.end_date)),
        )
    }

    fn draft_from_form(form: &RecordForm) -> ProjectDraft {
        let v = &form.values;
        ProjectDraft {
            name: v.get("name").trim().to_string(),
            description: v.optional("description"),
            address: v.get("address").trim().to_string(),
            client_id: v.get("client_id").trim().to_string(),
            project_type: ProjectType::parse(v.get("project_type")).unwrap_or_default(),
            estimated_cost: coerce_amount(v.get("estimated_cost")),
            start_date: date_from(v, "start_date"),
            end_date: date_from(v, "end_date"),
        }
    }

    fn summary(&self, _refs: &References) -> CardSummary {
        CardSummary::new(&self.name)
            .subtitle(&self.address)
            .status(self.status.label())
            .line("Type", self.project_type.label())
            .line("Estimated", format_currency(self.estimated_cost))
            .line("Actual", format_currency(self.actual_cost))
            .line_if("Start", self.start_date.map(|d| display_date(Some(d))))
            .line_if("End", self.end_date.map(|d| display_date(Some(d))))
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.name)
    }
}

impl Presentable for Lead {
    fn form_spec() -> FormSpec {
        let sources = LeadSource::ALL
            .into_iter()
            .map(|s| SelectOption::new(s.as_str(), s.label()))
            .collect();
        FormSpec {
            fields: vec![
                FieldSpec::text("name", "Name").required(),
                FieldSpec::text("email", "Email").required(),
                FieldSpec::text("phone", "Phone").required(),
                FieldSpec::text("address", "Address").required(),
                FieldSpec::select("project_type", "Project Type", project_type_options()),
                FieldSpec::select("source", "Source", sources),
                FieldSpec::number("estimated_budget", "Estimated Budget"),
                FieldSpec::multiline("description", "Description"),
                FieldSpec::multiline("notes", "Notes"),
            ],
            line_items: false,
        }
    }

    fn draft_to_form(draft: &LeadDraft) -> RecordForm {
        RecordForm::from_values(
            FormValues::default()
                .with("name", &draft.name)
                .with("email", &draft.email)
                .with("phone", &draft.phone)
                .with("address", &draft.address)
                .with("project_type", draft.project_type.as_str())
                .with("source", draft.source.as_str())
                .with("estimated_budget", format_number(draft.estimated_budget))
                .with("description", draft.description.clone().unwrap_or_default())
                .with("notes", draft.notes.clone().unwrap_or_default()),
        )
    }

    fn draft_from_form(form: &RecordForm) -> LeadDraft {
        let v = &form.values;
        LeadDraft {
            name: v.get("name").trim().to_string(),
            email: v.get("email").trim().to_string(),
            phone: v.get("phone").trim().to_string(),
            address: v.get("address").trim().to_string(),
            project_type: ProjectType::parse(v.get("project_type")).unwrap_or_default(),
            description: v.optional("description"),
            source: LeadSource::parse(v.get("source")).unwrap_or_default(),
            estimated_budget: coerce_amount(v.get("estimated_budget")),
            notes: v.optional("notes"),
        }
    }

    fn summary(&self, _refs: &References) -> CardSummary {
        CardSummary::new(&self.name)
            .subtitle(&self.email)
            .status(self.status.label())
            .line("Phone", &self.phone)
            .line("Address", &self.address)
            .line("Source", self.source.label())
            .line("Budget", format_currency(self.estimated_budget))
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.name)
    }
}

impl Presentable for Material {
    fn form_spec() -> FormSpec {
        FormSpec {
            fields: vec![
                FieldSpec::text("name", "Material Name").required(),
                FieldSpec::select("category", "Category", options(MATERIAL_CATEGORIES)).required(),
                FieldSpec::select("unit", "Unit", options(MATERIAL_UNITS)).required(),
                FieldSpec::number("cost_per_unit", "Cost per Unit").required(),
                FieldSpec::text("supplier", "Supplier"),
                FieldSpec::multiline("description", "Description"),
            ],
            line_items: false,
        }
    }

    fn draft_to_form(draft: &MaterialDraft) -> RecordForm {
        RecordForm::from_values(
            FormValues::default()
                .with("name", &draft.name)
                .with("category", &draft.category)
                .with("unit", &draft.unit)
                .with("cost_per_unit", format_number(draft.cost_per_unit))
                .with("supplier", draft.supplier.clone().unwrap_or_default())
                .with("description", draft.description.clone().unwrap_or_default()),
        )
    }

    fn draft_from_form(form: &RecordForm) -> MaterialDraft {
        let v = &form.values;
        MaterialDraft {
            name: v.get("name").trim().to_string(),
            category: v.get("category").to_string(),
            unit: v.get("unit").to_string(),
            cost_per_unit: coerce_amount(v.get("cost_per_unit")),
            supplier: v.optional("supplier"),
            description: v.optional("description"),
        }
    }

    fn summary(&self, _refs: &References) -> CardSummary {
        CardSummary::new(&self.name)
            .subtitle(self.description.clone().unwrap_or_default())
            .status(&self.category)
            .line("Unit", &self.unit)
            .line("Cost", format_currency(self.cost_per_unit))
            .line_if("Supplier", self.supplier.clone())
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.name)
    }
}

impl Presentable for Estimate {
    const REFERENCES: &'static [ResourceKind] = &[ResourceKind::Projects, ResourceKind::Leads];

    fn form_spec() -> FormSpec {
        FormSpec {
            fields: vec![
                FieldSpec::reference("project_id", "Project", ResourceKind::Projects).required(),
                FieldSpec::reference("lead_id", "Lead", ResourceKind::Leads),
                FieldSpec::multiline("description", "Description").required(),
                FieldSpec::number("materials_cost", "Materials Cost"),
                FieldSpec::number("labor_cost", "Labor Cost"),
                FieldSpec::number("overhead_cost", "Overhead Cost"),
                FieldSpec::number("profit_margin", "Profit Margin"),
            ],
            line_items: false,
        }
    }

    fn draft_to_form(draft: &EstimateDraft) -> RecordForm {
        let line_items = if draft.line_items.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&draft.line_items).unwrap_or_default()
        };
        RecordForm::from_values(
            FormValues::default()
                .with("project_id", &draft.project_id)
                .with("lead_id", draft.lead_id.clone().unwrap_or_default())
                .with("description", &draft.description)
                .with("materials_cost", format_number(draft.materials_cost))
                .with("labor_cost", format_number(draft.labor_cost))
                .with("overhead_cost", format_number(draft.overhead_cost))
                .with("profit_margin", format_number(draft.profit_margin))
                .with(LINE_ITEMS_KEY, line_items),
        )
    }

    fn draft_from_form(form: &RecordForm) -> EstimateDraft {
        let v = &form.values;
        EstimateDraft {
            project_id: v.get("project_id").to_string(),
            lead_id: v.optional("lead_id"),
            description: v.get("description").trim().to_string(),
            materials_cost: coerce_amount(v.get("materials_cost")),
            labor_cost: coerce_amount(v.get("labor_cost")),
            overhead_cost: coerce_amount(v.get("overhead_cost")),
            profit_margin: coerce_amount(v.get("profit_margin")),
            line_items: serde_json::from_str(v.get(LINE_ITEMS_KEY)).unwrap_or_default(),
        }
    }

    fn summary(&self, refs: &References) -> CardSummary {
        let project = reference_label(
            refs,
            ResourceKind::Projects,
            &self.project_id,
            "Unknown Project",
        );
        CardSummary::new(&self.description)
            .subtitle(project)
            .status(self.status.label())
            .line("Materials", format_currency(self.materials_cost))
            .line("Labor", format_currency(self.labor_cost))
            .line("Overhead", format_currency(self.overhead_cost))
            .line("Profit", format_currency(self.profit_margin))
            .line("Total", format_currency(self.total_cost))
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(
            &self.id,
            format!("{} ({})", self.description, format_currency(self.total_cost)),
        )
    }
}

impl Presentable for Proposal {
    const REFERENCES: &'static [ResourceKind] = &[ResourceKind::Estimates];

    fn form_spec() -> FormSpec {
        FormSpec {
            fields: vec![
                FieldSpec::reference("estimate_id", "Estimate", ResourceKind::Estimates).required(),
                FieldSpec::text("title", "Title").required(),
                FieldSpec::multiline("content", "Content").required(),
                FieldSpec::multiline("terms", "Terms").required(),
                FieldSpec::date("valid_until", "Valid Until"),
            ],
            line_items: false,
        }
    }

    fn draft_to_form(draft: &ProposalDraft) -> RecordForm {
        RecordForm::from_values(
            FormValues::default()
                .with("estimate_id", &draft.estimate_id)
                .with("title", &draft.title)
                .with("content", &draft.content)
                .with("terms", &draft.terms)
                .with("valid_until", date_value(draft.valid_until)),
        )
    }

    fn draft_from_form(form: &RecordForm) -> ProposalDraft {
        let v = &form.values;
        ProposalDraft {
            estimate_id: v.get("estimate_id").to_string(),
            title: v.get("title").trim().to_string(),
            content: v.get("content").to_string(),
            terms: v.get("terms").to_string(),
            valid_until: date_from(v, "valid_until"),
        }
    }

    fn summary(&self, refs: &References) -> CardSummary {
        let estimate = reference_label(
            refs,
            ResourceKind::Estimates,
            &self.estimate_id,
            "Unknown Estimate",
        );
        CardSummary::new(&self.title)
            .subtitle(self.content.lines().next().unwrap_or_default())
            .status(self.status.label())
            .line("Estimate", estimate)
            .line_if("Valid Until", self.valid_until.map(|d| display_date(Some(d))))
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.title)
    }

    fn share(&self) -> Option<ShareMessage> {
        Some(ShareFormatter::proposal(self))
    }
}

impl Presentable for Invoice {
    const REFERENCES: &'static [ResourceKind] = &[ResourceKind::Projects];

    fn form_spec() -> FormSpec {
        FormSpec {
            fields: vec![
                FieldSpec::text("invoice_number", "Invoice Number"),
                FieldSpec::date("due_date", "Due Date").required(),
                FieldSpec::reference("project_id", "Project", ResourceKind::Projects),
                FieldSpec::text("client_name", "Client Name").required(),
                FieldSpec::text("client_email", "Client Email").required(),
                FieldSpec::multiline("description", "Description").required(),
                FieldSpec::number("tax_rate", "Tax Rate (%)"),
            ],
            line_items: true,
        }
    }

    fn draft_to_form(draft: &InvoiceDraft) -> RecordForm {
        RecordForm {
            values: FormValues::default()
                .with("invoice_number", &draft.invoice_number)
                .with("due_date", date_value(draft.due_date))
                .with("project_id", &draft.project_id)
                .with("client_name", &draft.client_name)
                .with("client_email", &draft.client_email)
                .with("description", &draft.description)
                .with("tax_rate", format_number(draft.tax_rate)),
            items: draft.items.clone(),
        }
    }

    fn draft_from_form(form: &RecordForm) -> InvoiceDraft {
        let v = &form.values;
        InvoiceDraft {
            project_id: v.get("project_id").to_string(),
            client_name: v.get("client_name").trim().to_string(),
            client_email: v.get("client_email").trim().to_string(),
            invoice_number: v.get("invoice_number").trim().to_string(),
            description: v.get("description").to_string(),
            tax_rate: coerce_amount(v.get("tax_rate")),
            due_date: date_from(v, "due_date"),
            items: form.items.clone(),
        }
    }

    fn summary(&self, refs: &References) -> CardSummary {
        let totals = InvoiceTotals::compute(&self.items, self.tax_rate);
        CardSummary::new(&self.invoice_number)
            .subtitle(&self.client_name)
            .status(self.status.label())
            .line_if(
                "Project",
                refs.label(ResourceKind::Projects, &self.project_id)
                    .map(str::to_string),
            )
            .line("Subtotal", format_currency(self.amount))
            .line(
                &format!("Tax ({}%)", format_number(self.tax_rate)),
                format_currency(totals.tax),
            )
            .line("Total", format_currency(self.total_amount))
            .line("Due", display_date(self.due_date))
    }

    fn option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.invoice_number)
    }

    fn share(&self) -> Option<ShareMessage> {
        Some(ShareFormatter::invoice(self))
    }
}
