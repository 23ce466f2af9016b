//! Application logic: key handling and the call-submission workflow

use crate::backend::{BackendClient, CallAccepted, CallRequest, CallService};
use crate::config::LoanlyConfig;
use crate::error::CallError;
use crate::phone;
use crate::state::{CallForm, Form, Notice, BUTTON_SUBMIT, FIELD_PHONE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Fallback success message when the backend body carries none
const SUCCESS_FALLBACK: &str = "Call on its way! We'll ring you shortly.";

/// Main application
pub struct App {
    pub form: CallForm,
    pub notice: Option<Notice>,
    pub base_url: String,
    backend: Box<dyn CallService>,
}

impl App {
    /// Create the app with the configured backend
    pub fn new() -> Result<Self> {
        let config = LoanlyConfig::load()?;
        let base_url = config.effective_base_url();
        let backend = BackendClient::new(base_url.clone());
        Ok(Self::with_backend(Box::new(backend), base_url))
    }

    fn with_backend(backend: Box<dyn CallService>, base_url: String) -> Self {
        Self {
            form: CallForm::new(),
            notice: None,
            base_url,
            backend,
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            // Submit from anywhere (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit().await;
            }
            KeyCode::Esc => {
                self.form.reset();
                self.notice = None;
            }
            KeyCode::Left => {
                if self.form.is_buttons_row_active() {
                    self.form.prev_button();
                } else if self.form.is_credit_field_active() {
                    self.form.credit.toggle_credit();
                }
            }
            KeyCode::Right => {
                if self.form.is_buttons_row_active() {
                    self.form.next_button();
                } else if self.form.is_credit_field_active() {
                    self.form.credit.toggle_credit();
                }
            }
            KeyCode::Enter => {
                if self.form.is_buttons_row_active() {
                    if self.form.selected_button == BUTTON_SUBMIT {
                        self.submit().await;
                    } else {
                        self.form.reset();
                        self.notice = None;
                    }
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.pop_char();
                }
                self.renormalize_phone();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
                self.renormalize_phone();
            }
            _ => {}
        }
        Ok(())
    }

    /// Keep the phone field in normalized form after every edit
    fn renormalize_phone(&mut self) {
        if self.form.active_field() == FIELD_PHONE {
            let normalized = phone::normalize(self.form.phone.as_text());
            self.form.phone.set_text(normalized);
        }
    }

    /// Submit the call request: validate, call the backend, surface the
    /// outcome, and reset the form on success.
    pub async fn submit(&mut self) {
        // Single-flight: the Submit button is disabled while in flight
        if self.form.is_submitting {
            return;
        }
        self.notice = None;

        match self.try_submit().await {
            Ok(accepted) => {
                let text = accepted
                    .message
                    .unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
                self.notice = Some(Notice::success(text));
                self.form.reset();
            }
            Err(e) => {
                warn!("call request failed: {e}");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    async fn try_submit(&mut self) -> Result<CallAccepted, CallError> {
        let name = self.form.name.as_text().trim().to_string();
        let raw_phone = self.form.phone.as_text();
        if name.is_empty() || raw_phone.is_empty() {
            return Err(CallError::MissingFields);
        }

        let normalized = phone::normalize(raw_phone);
        if !phone::is_canonical(&normalized) {
            return Err(CallError::InvalidPhone);
        }

        let request = CallRequest {
            name,
            phone: normalized,
            credit_type: self.form.credit_type(),
        };

        info!("submitting call request for {}", request.phone);
        self.form.is_submitting = true;
        let result = self.backend.initiate_call(request).await;
        // Back to idle on every path, success or not
        self.form.is_submitting = false;
        result
    }
}
