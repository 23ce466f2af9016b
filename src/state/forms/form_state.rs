//! Call-request form state

use super::field::FormField;
use crate::state::CreditType;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Field indices for [`CallForm`]
pub const FIELD_NAME: usize = 0;
pub const FIELD_PHONE: usize = 1;
pub const FIELD_CREDIT: usize = 2;
pub const FIELD_BUTTONS: usize = 3;

/// Buttons on the action row (0 = Submit, 1 = Clear)
pub const BUTTON_SUBMIT: usize = 0;
pub const BUTTON_CLEAR: usize = 1;
const BUTTON_COUNT: usize = 2;

/// The call-request form: name, phone, credit type, and an action row
#[derive(Debug, Clone)]
pub struct CallForm {
    pub name: FormField,
    pub phone: FormField,
    pub credit: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the action row
    pub selected_button: usize,
    /// True while a submission is in flight; gates the Submit button
    pub is_submitting: bool,
}

impl CallForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Your Name"),
            phone: FormField::text("phone", "Phone Number"),
            credit: FormField::credit("credit_type", "I'm interested in"),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
            is_submitting: false,
        }
    }

    /// Returns true if the action row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FIELD_BUTTONS
    }

    /// Returns true if the credit-type selector is currently active
    pub fn is_credit_field_active(&self) -> bool {
        self.active_field_index == FIELD_CREDIT
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Selected credit product
    pub fn credit_type(&self) -> CreditType {
        self.credit.as_credit()
    }

    /// Reset every field to its default and return to the first field
    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.credit.clear();
        self.active_field_index = 0;
        self.selected_button = BUTTON_SUBMIT;
        self.is_submitting = false;
    }
}

impl Default for CallForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CallForm {
    fn field_count(&self) -> usize {
        4 // name, phone, credit type, action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_BUTTONS);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            FIELD_NAME => Some(&mut self.name),
            FIELD_PHONE => Some(&mut self.phone),
            FIELD_CREDIT => Some(&mut self.credit),
            // Action row has no FormField
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            FIELD_NAME => Some(&self.name),
            FIELD_PHONE => Some(&self.phone),
            FIELD_CREDIT => Some(&self.credit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = CallForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, BUTTON_SUBMIT);
        assert!(!form.is_submitting);
        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.phone.as_text(), "");
        assert_eq!(form.credit_type(), CreditType::CreditCard);
    }

    #[test]
    fn test_default_equals_new() {
        let new = CallForm::new();
        let default = CallForm::default();
        assert_eq!(new.active_field_index, default.active_field_index);
        assert_eq!(new.selected_button, default.selected_button);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(CallForm::new().field_count(), 4);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = CallForm::new();
        for _ in 0..4 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0); // Wrapped back
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = CallForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, FIELD_BUTTONS); // Wrapped to last
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = CallForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, FIELD_BUTTONS);
    }

    #[test]
    fn test_is_buttons_row_active() {
        let mut form = CallForm::new();
        assert!(!form.is_buttons_row_active());
        form.active_field_index = FIELD_BUTTONS;
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_next_button_wraps() {
        let mut form = CallForm::new();
        form.next_button();
        assert_eq!(form.selected_button, BUTTON_CLEAR);
        form.next_button();
        assert_eq!(form.selected_button, BUTTON_SUBMIT);
    }

    #[test]
    fn test_prev_button_wraps() {
        let mut form = CallForm::new();
        form.prev_button();
        assert_eq!(form.selected_button, BUTTON_CLEAR);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = CallForm::new();
        assert_eq!(form.get_field(FIELD_NAME).unwrap().name, "name");
        assert_eq!(form.get_field(FIELD_PHONE).unwrap().name, "phone");
        assert_eq!(form.get_field(FIELD_CREDIT).unwrap().name, "credit_type");
        assert!(form.get_field(FIELD_BUTTONS).is_none()); // action row
        assert!(form.get_field(4).is_none());
    }

    #[test]
    fn test_get_active_field_mut_none_on_buttons_row() {
        let mut form = CallForm::new();
        form.active_field_index = FIELD_BUTTONS;
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = CallForm::new();
        form.name.set_text("Asha".to_string());
        form.phone.set_text("+919876543210".to_string());
        form.credit.toggle_credit();
        form.active_field_index = FIELD_BUTTONS;
        form.selected_button = BUTTON_CLEAR;
        form.is_submitting = true;

        form.reset();

        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.phone.as_text(), "");
        assert_eq!(form.credit_type(), CreditType::CreditCard);
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, BUTTON_SUBMIT);
        assert!(!form.is_submitting);
    }
}
