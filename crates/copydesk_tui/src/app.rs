//! Application state and key handling.

use crate::{Branding, SessionState};
use copydesk_core::{
    ContentType, GenerationForm, GenerationRequest, HistoryRecord, MAX_TARGET_LENGTH,
    MAX_VARIANTS, MIN_TARGET_LENGTH, TemplatePreset, Tone, Variant,
};
use copydesk_error::CopydeskResult;
use copydesk_rate_limit::StudioConfig;
use copydesk_studio::SubmissionOutcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Waiting for the passcode
    Locked,
    /// Editing the generation form
    Form,
    /// Browsing the variants of the last submission
    Results,
}

/// Form field with keyboard focus, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum FormField {
    /// Model selector
    Model,
    /// Sampling temperature
    Temperature,
    /// Number of variants
    Variants,
    /// Free-text topic
    Topic,
    /// Content type selector
    ContentType,
    /// Tone selector
    Tone,
    /// Target length in words
    Length,
    /// Template preset selector
    Template,
    /// Free-text extra instructions
    Extra,
}

impl FormField {
    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Model => "Model",
            FormField::Temperature => "Creativity (temperature)",
            FormField::Variants => "Variants",
            FormField::Topic => "Topic / Product / Offer",
            FormField::ContentType => "Content Type",
            FormField::Tone => "Tone",
            FormField::Length => "Target Length (words)",
            FormField::Template => "Template",
            FormField::Extra => "Extra instructions (optional)",
        }
    }

    /// Whether typed characters edit this field.
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Topic | FormField::Extra)
    }
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// Completed successfully
    Success,
    /// Recoverable problem
    Warning,
    /// Failed operation
    Error,
}

/// Work the runner must perform in response to a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run the pipeline for this form
    Submit(GenerationForm),
    /// Export the variant at this position of the current results
    Export(usize),
    /// Reload the history panel
    RefreshHistory,
}

/// Variants of the last successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// The request that produced them
    pub request: GenerationRequest,
    /// Variants in order
    pub variants: Vec<Variant>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Brand, accent and logo caption
    pub branding: Branding,
    /// Passcode gate
    pub session: SessionState,
    /// Passcode typed so far
    pub passcode_input: String,
    /// Current form values
    pub form: GenerationForm,
    /// Focused form field
    pub focus: FormField,
    /// Selectable model ids
    pub models: Vec<String>,
    /// Temperature increment
    pub temperature_step: f32,
    /// Length increment
    pub length_step: u32,
    /// Last successful submission
    pub results: Option<ResultsView>,
    /// Selected variant in results mode
    pub selected_variant: usize,
    /// Recent history rows
    pub history: Vec<HistoryRecord>,
    /// Why the last history read failed, if it did
    pub history_error: Option<String>,
    /// Status message to display
    pub status_message: String,
    /// Severity of the status message
    pub status_kind: StatusKind,
    /// A submission is running
    pub busy: bool,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create the app with form defaults taken from the studio configuration.
    pub fn new(branding: Branding, session: SessionState, studio: &StudioConfig) -> Self {
        let form = GenerationForm {
            model_id: studio.default_model().to_string(),
            temperature: studio.default_temperature,
            target_length: studio.default_length,
            ..Default::default()
        };
        let mode = if session.is_unlocked() {
            AppMode::Form
        } else {
            AppMode::Locked
        };
        let status_message = match mode {
            AppMode::Locked => "Enter passcode to continue",
            _ => "Fill in a topic and press Enter to generate",
        };

        Self {
            mode,
            branding,
            session,
            passcode_input: String::new(),
            form,
            focus: FormField::Topic,
            models: studio.models.clone(),
            temperature_step: studio.temperature_step,
            length_step: studio.length_step,
            results: None,
            selected_variant: 0,
            history: Vec::new(),
            history_error: None,
            status_message: status_message.to_string(),
            status_kind: StatusKind::Info,
            busy: false,
            should_quit: false,
        }
    }

    /// Set the status line.
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a key press, returning work for the runner if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }
        if self.busy {
            return None;
        }

        match self.mode {
            AppMode::Locked => {
                self.handle_locked_key(key);
                None
            }
            AppMode::Form => self.handle_form_key(key),
            AppMode::Results => self.handle_results_key(key),
        }
    }

    fn handle_locked_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char(c) => self.passcode_input.push(c),
            KeyCode::Backspace => {
                self.passcode_input.pop();
            }
            KeyCode::Enter => {
                let attempt = std::mem::take(&mut self.passcode_input);
                if self.session.try_unlock(&attempt) {
                    self.mode = AppMode::Form;
                    self.set_status(StatusKind::Success, "Unlocked");
                } else {
                    self.set_status(StatusKind::Error, "Incorrect passcode");
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => return Some(Action::Submit(self.form.clone())),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::RefreshHistory);
            }
            KeyCode::Char('v')
                if key.modifiers.contains(KeyModifiers::CONTROL) && self.results.is_some() =>
            {
                self.mode = AppMode::Results;
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Left => self.adjust_focused(false),
            KeyCode::Right => self.adjust_focused(true),
            KeyCode::Backspace if self.focus.is_text() => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if self.focus.is_text() => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<Action> {
        let count = self.results.as_ref().map_or(0, |r| r.variants.len());
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Form,
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_variant = self.selected_variant.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_variant + 1 < count {
                    self.selected_variant += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('e') if count > 0 => {
                return Some(Action::Export(self.selected_variant));
            }
            KeyCode::Char('r') => return Some(Action::RefreshHistory),
            _ => {}
        }
        None
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Topic => Some(&mut self.form.topic),
            FormField::Extra => Some(&mut self.form.extra_instructions),
            _ => None,
        }
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = cycle(self.focus, true);
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_previous(&mut self) {
        self.focus = cycle(self.focus, false);
    }

    /// Step the focused selector or number up or down.
    pub fn adjust_focused(&mut self, forward: bool) {
        match self.focus {
            FormField::Model => {
                if let Some(pos) = self.models.iter().position(|m| *m == self.form.model_id) {
                    let len = self.models.len();
                    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
                    self.form.model_id = self.models[next].clone();
                } else if let Some(first) = self.models.first() {
                    self.form.model_id = first.clone();
                }
            }
            FormField::Temperature => {
                let step = if forward {
                    self.temperature_step
                } else {
                    -self.temperature_step
                };
                let value = (self.form.temperature + step).clamp(0.0, 1.0);
                self.form.temperature = (value * 100.0).round() / 100.0;
            }
            FormField::Variants => {
                self.form.variant_count = if forward {
                    (self.form.variant_count + 1).min(MAX_VARIANTS)
                } else {
                    self.form.variant_count.saturating_sub(1).max(1)
                };
            }
            FormField::ContentType => {
                self.form.content_type = cycle::<ContentType>(self.form.content_type, forward);
            }
            FormField::Tone => self.form.tone = cycle::<Tone>(self.form.tone, forward),
            FormField::Template => {
                self.form.template = cycle::<TemplatePreset>(self.form.template, forward);
            }
            FormField::Length => {
                self.form.target_length = if forward {
                    self.form
                        .target_length
                        .saturating_add(self.length_step)
                        .min(MAX_TARGET_LENGTH)
                } else {
                    self.form
                        .target_length
                        .saturating_sub(self.length_step)
                        .max(MIN_TARGET_LENGTH)
                };
            }
            FormField::Topic | FormField::Extra => {}
        }
    }

    /// Mark a submission as running.
    pub fn begin_submission(&mut self) {
        self.busy = true;
        self.set_status(StatusKind::Info, "Generating…");
    }

    /// Show a rate-limit or other transient notice.
    pub fn push_notice(&mut self, notice: impl Into<String>) {
        self.set_status(StatusKind::Warning, notice);
    }

    /// Record the outcome of a submission.
    ///
    /// Only a fully saved submission replaces the displayed variants; every
    /// failure clears them.
    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.busy = false;
        match outcome {
            SubmissionOutcome::Generated {
                request, variants, ..
            } => {
                let count = variants.len();
                self.results = Some(ResultsView { request, variants });
                self.selected_variant = 0;
                self.mode = AppMode::Results;
                self.set_status(
                    StatusKind::Success,
                    format!("Generated {} variant(s) and saved to history", count),
                );
            }
            SubmissionOutcome::ValidationFailed(err) => {
                self.focus = FormField::Topic;
                self.set_status(StatusKind::Warning, err.kind.to_string());
            }
            failure @ (SubmissionOutcome::GenerationFailed(_)
            | SubmissionOutcome::StoreFailed(_)) => {
                self.results = None;
                self.set_status(StatusKind::Error, failure.to_string());
            }
        }
    }

    /// Record the result of reading history.
    pub fn set_history(&mut self, history: CopydeskResult<Vec<HistoryRecord>>) {
        match history {
            Ok(records) => {
                self.history = records;
                self.history_error = None;
            }
            Err(err) => {
                self.history.clear();
                self.history_error = Some(err.to_string());
            }
        }
    }

    /// The variant at `index` together with its request.
    pub fn variant_for_export(&self, index: usize) -> Option<(&GenerationRequest, &Variant)> {
        let results = self.results.as_ref()?;
        results
            .variants
            .get(index)
            .map(|variant| (&results.request, variant))
    }
}

/// Step through a closed enumeration, wrapping at both ends.
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let all: Vec<T> = T::iter().collect();
    let Some(pos) = all.iter().position(|v| *v == current) else {
        return current;
    };
    let len = all.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    all[next]
}
