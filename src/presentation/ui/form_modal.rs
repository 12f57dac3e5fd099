//! Modal create/edit form shared by every resource kind.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use rust_decimal::Decimal;

use super::utils::centered_rect;
use crate::application::dto::{FieldKind, FormSpec, FormValues, RecordForm, References, SelectOption};
use crate::application::services::form_spec;
use crate::domain::entities::{ItemField, LineItem, ResourceKind, estimate_total};
use crate::domain::money::{coerce_amount, format_currency, format_number};
use crate::domain::services::{InvoiceTotals, LineItemCalculator};
use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::widgets::TextInput;

const ITEM_COLUMNS: usize = 3;
const MULTILINE_HEIGHT: u16 = 4;
const FIELD_HEIGHT: u16 = 3;

/// Select or reference field cycled with the keyboard.
#[derive(Debug, Clone)]
struct ChoiceInput {
    label: &'static str,
    options: Vec<SelectOption>,
    value: String,
    /// Reference fields that are not required may be left empty.
    allow_empty: bool,
    focused: bool,
}

impl ChoiceInput {
    fn cycle(&mut self, forward: bool) {
        let mut values: Vec<&str> = Vec::with_capacity(self.options.len() + 1);
        if self.allow_empty {
            values.push("");
        }
        values.extend(self.options.iter().map(|o| o.value.as_str()));
        if values.is_empty() {
            return;
        }

        let len = values.len();
        let next = match values.iter().position(|v| *v == self.value) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.value = values[next].to_string();
    }

    fn display(&self) -> String {
        if self.value.is_empty() {
            return "(none)".to_string();
        }
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map_or_else(|| self.value.clone(), |o| o.label.clone())
    }
}

impl Widget for &ChoiceInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { Color::Cyan } else { Color::Gray };
        let hint = if self.focused { " ◂ C-p  C-n ▸ " } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(self.display(), Style::default().fg(Color::White)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(self.label),
        )
        .render(area, buf);
    }
}

#[derive(Debug, Clone)]
enum FieldInput {
    Text { key: &'static str, input: TextInput },
    Choice { key: &'static str, choice: ChoiceInput },
}

impl FieldInput {
    fn key(&self) -> &'static str {
        match self {
            Self::Text { key, .. } | Self::Choice { key, .. } => key,
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Text { input, .. } => input.value(),
            Self::Choice { choice, .. } => &choice.value,
        }
    }

    fn set_focused(&mut self, focused: bool) {
        match self {
            Self::Text { input, .. } => input.set_focused(focused),
            Self::Choice { choice, .. } => choice.focused = focused,
        }
    }

    fn height(&self) -> u16 {
        match self {
            Self::Text { input, .. } if input.is_multiline() => MULTILINE_HEIGHT,
            _ => FIELD_HEIGHT,
        }
    }
}

/// State of the open form.
#[derive(Debug, Clone)]
pub struct FormModalState {
    kind: ResourceKind,
    id: Option<String>,
    spec: FormSpec,
    /// Values as loaded; keeps keys without a visible field.
    base: FormValues,
    fields: Vec<FieldInput>,
    items: Vec<LineItem>,
    item_inputs: Vec<[TextInput; ITEM_COLUMNS]>,
    focus: usize,
    error: Option<String>,
    submitting: bool,
}

impl FormModalState {
    /// Opens a form for `kind`; `id` is `None` when creating.
    #[must_use]
    pub fn new(
        kind: ResourceKind,
        id: Option<String>,
        form: RecordForm,
        references: &References,
    ) -> Self {
        let spec = form_spec(kind);
        let fields = spec
            .fields
            .iter()
            .map(|field| {
                let value = form.values.get(field.key).to_string();
                match &field.kind {
                    FieldKind::Select(options) => FieldInput::Choice {
                        key: field.key,
                        choice: ChoiceInput {
                            label: field.label,
                            options: options.clone(),
                            value,
                            allow_empty: false,
                            focused: false,
                        },
                    },
                    FieldKind::Reference(target) => FieldInput::Choice {
                        key: field.key,
                        choice: ChoiceInput {
                            label: field.label,
                            options: references.options(*target).to_vec(),
                            value,
                            allow_empty: !field.required,
                            focused: false,
                        },
                    },
                    FieldKind::Multiline => FieldInput::Text {
                        key: field.key,
                        input: TextInput::new(field.label).multiline().with_value(value),
                    },
                    FieldKind::Date => FieldInput::Text {
                        key: field.key,
                        input: TextInput::new(field.label)
                            .placeholder("YYYY-MM-DD")
                            .with_value(value),
                    },
                    FieldKind::Number => FieldInput::Text {
                        key: field.key,
                        input: TextInput::new(field.label)
                            .placeholder("0")
                            .with_value(blank_if_zero(&value)),
                    },
                    FieldKind::Text => FieldInput::Text {
                        key: field.key,
                        input: TextInput::new(field.label).with_value(value),
                    },
                }
            })
            .collect();

        let item_inputs = form.items.iter().map(item_row).collect();

        let mut state = Self {
            kind,
            id,
            spec,
            base: form.values,
            fields,
            items: form.items,
            item_inputs,
            focus: 0,
            error: None,
            submitting: false,
        };
        state.apply_focus();
        state
    }

    /// Resource kind being edited.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Id of the record being edited, `None` when creating.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Popup title such as `New Invoice` or `Edit Project`.
    #[must_use]
    pub fn title(&self) -> String {
        let verb = if self.id.is_some() { "Edit" } else { "New" };
        let noun = self.kind.singular();
        let mut chars = noun.chars();
        let noun = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect::<String>())
            .unwrap_or_default();
        format!("{verb} {noun}")
    }

    /// Current line items with derived amounts.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Last validation or save error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shows a save failure and allows submitting again.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.submitting = false;
    }

    /// Whether a save is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn focus_count(&self) -> usize {
        self.fields.len() + self.item_inputs.len() * ITEM_COLUMNS
    }

    fn apply_focus(&mut self) {
        let focus = self.focus;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == focus);
        }
        let offset = self.fields.len();
        for (row, inputs) in self.item_inputs.iter_mut().enumerate() {
            for (col, input) in inputs.iter_mut().enumerate() {
                input.set_focused(offset + row * ITEM_COLUMNS + col == focus);
            }
        }
    }

    /// Line item row and column under focus.
    fn focused_item(&self) -> Option<(usize, usize)> {
        self.focus
            .checked_sub(self.fields.len())
            .map(|i| (i / ITEM_COLUMNS, i % ITEM_COLUMNS))
    }

    /// Moves focus to the next field or item cell, wrapping around.
    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.apply_focus();
        }
    }

    /// Moves focus to the previous field or item cell, wrapping around.
    pub fn focus_previous(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.apply_focus();
        }
    }

    /// Cycles the focused select or reference field.
    pub fn cycle(&mut self, forward: bool) {
        if let Some(FieldInput::Choice { choice, .. }) = self.fields.get_mut(self.focus) {
            choice.cycle(forward);
        }
    }

    /// Appends a blank line item and focuses its description.
    pub fn add_line_item(&mut self) {
        if !self.spec.line_items {
            return;
        }
        LineItemCalculator::add_item(&mut self.items);
        if let Some(item) = self.items.last() {
            self.item_inputs.push(item_row(item));
        }
        self.focus = self.fields.len() + (self.item_inputs.len() - 1) * ITEM_COLUMNS;
        self.apply_focus();
    }

    /// Removes the focused line item, or the last one when focus is on a field.
    pub fn remove_line_item(&mut self) {
        if !self.spec.line_items || self.items.is_empty() {
            return;
        }
        let row = self
            .focused_item()
            .map_or(self.items.len() - 1, |(row, _)| row);
        LineItemCalculator::remove_item(&mut self.items, row);
        self.item_inputs.remove(row);

        let count = self.focus_count();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
        self.apply_focus();
    }

    /// Applies an editing key to the focused input. Returns `false` if unused.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if let Some((row, col)) = self.focused_item() {
            let Some(input) = self.item_inputs.get_mut(row).and_then(|r| r.get_mut(col)) else {
                return false;
            };
            if !input.handle_key(key) {
                return false;
            }
            let field = match col {
                0 => ItemField::Description(input.value().to_string()),
                1 => ItemField::Quantity(coerce_amount(input.value())),
                _ => ItemField::Rate(coerce_amount(input.value())),
            };
            LineItemCalculator::set_item_field(&mut self.items, row, field);
            return true;
        }

        match self.fields.get_mut(self.focus) {
            Some(FieldInput::Text { input, .. }) => input.handle_key(key),
            Some(FieldInput::Choice { choice, .. }) => match key.code {
                KeyCode::Right | KeyCode::Char(' ') if key.modifiers == KeyModifiers::NONE => {
                    choice.cycle(true);
                    true
                }
                KeyCode::Left => {
                    choice.cycle(false);
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    /// Refreshes reference options after the collections load.
    pub fn set_references(&mut self, references: &References) {
        for (field, spec) in self.fields.iter_mut().zip(&self.spec.fields) {
            if let (FieldInput::Choice { choice, .. }, FieldKind::Reference(target)) =
                (field, &spec.kind)
            {
                choice.options = references.options(*target).to_vec();
            }
        }
    }

    /// Collects the form, keeping values of keys without a visible field.
    #[must_use]
    pub fn to_form(&self) -> RecordForm {
        let mut values = self.base.clone();
        for field in &self.fields {
            values.set(field.key(), field.value());
        }
        RecordForm {
            values,
            items: self.items.clone(),
        }
    }

    /// Returns the form ready to submit, or records which required fields are blank.
    pub fn submit(&mut self) -> Option<RecordForm> {
        if self.submitting {
            return None;
        }
        let form = self.to_form();
        let missing = self.spec.missing_required(&form);
        if !missing.is_empty() {
            self.error = Some(format!("Required: {}", missing.join(", ")));
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(form)
    }

    /// Invoice totals computed from the current items and tax rate.
    #[must_use]
    pub fn totals(&self) -> Option<InvoiceTotals> {
        self.spec.line_items.then(|| {
            let rate = self
                .fields
                .iter()
                .find(|f| f.key() == "tax_rate")
                .map_or(Decimal::ZERO, |f| coerce_amount(f.value()));
            InvoiceTotals::compute(&self.items, rate)
        })
    }

    /// Derived values shown under the fields.
    #[must_use]
    pub fn preview_lines(&self) -> Vec<(&'static str, String)> {
        if let Some(totals) = self.totals() {
            return vec![
                ("Subtotal", format_currency(totals.subtotal)),
                ("Tax", format_currency(totals.tax)),
                ("Total", format_currency(totals.total)),
            ];
        }
        if self.kind == ResourceKind::Estimates {
            let value = |key: &str| {
                self.fields
                    .iter()
                    .find(|f| f.key() == key)
                    .map_or(Decimal::ZERO, |f| coerce_amount(f.value()))
            };
            let total = estimate_total(
                value("materials_cost"),
                value("labor_cost"),
                value("overhead_cost"),
                value("profit_margin"),
            );
            return vec![("Total Cost", format_currency(total))];
        }
        Vec::new()
    }
}

/// Zero amounts start empty so typing does not append to them.
fn blank_if_zero(value: &str) -> &str {
    if coerce_amount(value).is_zero() { "" } else { value }
}

impl HasCommands for FormModalState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let scope = KeyScope::Form;
        let mut commands = vec![
            registry.hint(scope, Action::Submit, "Save"),
            registry.hint(scope, Action::FocusNext, "Next Field"),
        ];
        if matches!(self.fields.get(self.focus), Some(FieldInput::Choice { .. })) {
            commands.push(registry.hint(scope, Action::CycleNext, "Cycle"));
        }
        if self.spec.line_items {
            commands.push(registry.hint(scope, Action::AddLineItem, "Add Item"));
            commands.push(registry.hint(scope, Action::RemoveLineItem, "Remove Item"));
        }
        commands.push(registry.hint(scope, Action::Cancel, "Cancel"));
        commands.into_iter().flatten().collect()
    }
}

fn item_row(item: &LineItem) -> [TextInput; ITEM_COLUMNS] {
    [
        TextInput::new("Description").with_value(item.description()),
        TextInput::new("Qty").with_value(blank_if_zero(&format_number(item.quantity()))),
        TextInput::new("Rate")
            .placeholder("0")
            .with_value(blank_if_zero(&format_number(item.rate()))),
    ]
}

/// Form modal widget.
pub struct FormModal;

impl FormModal {
    fn render_items(state: &FormModalState, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Line Items  C-a add  C-x remove ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (inputs, item) in state.item_inputs.iter().zip(&state.items) {
            if y + FIELD_HEIGHT > inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, FIELD_HEIGHT);
            let [desc, qty, rate, amount] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(14),
            ])
            .areas(row);
            inputs[0].render(desc, buf);
            inputs[1].render(qty, buf);
            inputs[2].render(rate, buf);
            Paragraph::new(format_currency(item.amount()))
                .block(Block::default().borders(Borders::ALL).title("Amount"))
                .style(Style::default().fg(Color::Green))
                .render(amount, buf);
            y += FIELD_HEIGHT;
        }
    }
}

impl Widget for &FormModalState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(80, 90, area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title()))
            .title_bottom(" C-s save  Esc cancel ");
        let inner = block.inner(area);
        block.render(area, buf);

        let preview = self.preview_lines();
        let items_height = if self.spec.line_items {
            u16::try_from(self.item_inputs.len())
                .unwrap_or(u16::MAX)
                .saturating_mul(FIELD_HEIGHT)
                .saturating_add(1)
                .min(inner.height / 2)
        } else {
            0
        };
        let [fields_area, items_area, preview_area, error_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(items_height),
            Constraint::Length(u16::try_from(preview.len()).unwrap_or(0)),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Keep the focused field on screen by skipping fields above it.
        let focus = self.focus.min(self.fields.len().saturating_sub(1));
        let mut first = 0;
        while first < focus {
            let needed: u16 = self.fields[first..=focus].iter().map(FieldInput::height).sum();
            if needed <= fields_area.height {
                break;
            }
            first += 1;
        }

        let mut y = fields_area.y;
        for field in &self.fields[first..] {
            let height = field.height();
            if y + height > fields_area.bottom() {
                break;
            }
            let rect = Rect::new(fields_area.x, y, fields_area.width, height);
            match field {
                FieldInput::Text { input, .. } => input.render(rect, buf),
                FieldInput::Choice { choice, .. } => choice.render(rect, buf),
            }
            y += height;
        }

        if self.spec.line_items {
            FormModal::render_items(self, items_area, buf);
        }

        let preview: Vec<Line> = preview
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                    Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect();
        Paragraph::new(preview).render(preview_area, buf);

        let status = if self.submitting {
            Span::styled("Saving…", Style::default().fg(Color::Yellow))
        } else if let Some(error) = &self.error {
            Span::styled(error.as_str(), Style::default().fg(Color::Red))
        } else {
            Span::raw("")
        };
        Paragraph::new(status).render(error_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::blank_form;

    fn type_text(state: &mut FormModalState, text: &str) {
        for c in text.chars() {
            state.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn focus_key(state: &mut FormModalState, key: &str) {
        let index = state.fields.iter().position(|f| f.key() == key).unwrap();
        state.focus = index;
        state.apply_focus();
    }

    fn invoice_form() -> FormModalState {
        FormModalState::new(
            ResourceKind::Invoices,
            None,
            blank_form(ResourceKind::Invoices),
            &References::default(),
        )
    }

    #[test]
    fn test_invoice_editor_recomputes_totals() {
        let mut state = invoice_form();
        focus_key(&mut state, "tax_rate");
        type_text(&mut state, "8.5");

        state.focus = state.fields.len();
        type_text(&mut state, "Labor");
        state.focus_next();
        state.focus_next();
        type_text(&mut state, "8000");

        state.add_line_item();
        type_text(&mut state, "Cabinets");
        state.focus_next();
        state.focus_next();
        type_text(&mut state, "5000");

        state.add_line_item();
        state.focus_next();
        state.focus_next();
        type_text(&mut state, "2000");

        let totals = state.totals().unwrap();
        assert_eq!(totals.subtotal, Decimal::from(15000));
        assert_eq!(totals.tax, Decimal::from(1275));
        assert_eq!(totals.total, Decimal::from(16275));
        assert_eq!(state.items()[0].description(), "Labor");
    }

    #[test]
    fn test_invalid_numbers_read_as_zero() {
        let mut state = invoice_form();
        state.focus = state.fields.len() + 2;
        type_text(&mut state, "abc");

        assert_eq!(state.items()[0].amount(), Decimal::ZERO);
        assert_eq!(state.totals().unwrap().total, Decimal::ZERO);
    }

    #[test]
    fn test_remove_focused_item_keeps_order() {
        let mut state = invoice_form();
        state.add_line_item();
        type_text(&mut state, "second");
        state.add_line_item();
        type_text(&mut state, "third");

        state.focus = state.fields.len() + ITEM_COLUMNS;
        state.remove_line_item();

        let descriptions: Vec<_> = state.items().iter().map(LineItem::description).collect();
        assert_eq!(descriptions, ["", "third"]);
        assert_eq!(state.item_inputs.len(), 2);
    }

    #[test]
    fn test_submit_reports_missing_required() {
        let mut state = invoice_form();

        assert!(state.submit().is_none());
        let error = state.error().unwrap();
        assert!(error.contains("Client Name"));
        assert!(error.contains("Due Date"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_submit_blocks_double_submission() {
        let mut state = FormModalState::new(
            ResourceKind::Materials,
            None,
            blank_form(ResourceKind::Materials),
            &References::default(),
        );
        focus_key(&mut state, "name");
        type_text(&mut state, "2x4 Stud");
        focus_key(&mut state, "category");
        state.cycle(true);
        focus_key(&mut state, "unit");
        state.cycle(true);
        focus_key(&mut state, "cost_per_unit");
        type_text(&mut state, "4.25");

        let form = state.submit().unwrap();
        assert_eq!(form.values.get("name"), "2x4 Stud");
        assert_eq!(form.values.get("cost_per_unit"), "4.25");
        assert!(state.submit().is_none());

        state.set_error("API error 500");
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_reference_options_cycle_and_refresh() {
        let mut state = FormModalState::new(
            ResourceKind::Proposals,
            None,
            blank_form(ResourceKind::Proposals),
            &References::default(),
        );
        focus_key(&mut state, "estimate_id");
        state.cycle(true);
        assert_eq!(state.to_form().values.get("estimate_id"), "");

        let mut refs = References::default();
        refs.insert(
            ResourceKind::Estimates,
            vec![SelectOption::new("e-1", "Roof ($12,000.00)"), SelectOption::new("e-2", "Deck")],
        );
        state.set_references(&refs);
        state.cycle(true);
        assert_eq!(state.to_form().values.get("estimate_id"), "e-1");
        state.cycle(true);
        state.cycle(true);
        assert_eq!(state.to_form().values.get("estimate_id"), "e-1");
        state.cycle(false);
        assert_eq!(state.to_form().values.get("estimate_id"), "e-2");
    }

    #[test]
    fn test_estimate_preview_sums_costs() {
        let mut state = FormModalState::new(
            ResourceKind::Estimates,
            None,
            blank_form(ResourceKind::Estimates),
            &References::default(),
        );
        for (key, value) in [
            ("materials_cost", "6000"),
            ("labor_cost", "4000"),
            ("overhead_cost", "1000"),
            ("profit_margin", "1000"),
        ] {
            focus_key(&mut state, key);
            type_text(&mut state, value);
        }

        assert_eq!(state.preview_lines(), vec![("Total Cost", "$12,000.00".to_string())]);
    }

    #[test]
    fn test_hidden_values_survive_edit() {
        let mut form = blank_form(ResourceKind::Estimates);
        form.values.set("line_items", r#"[{"sku":"R-1"}]"#);
        let state = FormModalState::new(ResourceKind::Estimates, Some("e-1".into()), form, &References::default());

        assert_eq!(state.to_form().values.get("line_items"), r#"[{"sku":"R-1"}]"#);
        assert_eq!(state.title(), "Edit Estimate");
    }
}
