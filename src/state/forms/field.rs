//! Form field value objects

use crate::state::CreditType;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Credit(CreditType),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new credit-type selector field
    pub fn credit(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Credit(CreditType::default()),
        }
    }

    /// Get the text value (returns empty string for credit fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Credit(_) => "",
        }
    }

    /// Get the credit-type value (returns the default for text fields)
    pub fn as_credit(&self) -> CreditType {
        match &self.value {
            FieldValue::Credit(c) => *c,
            FieldValue::Text(_) => CreditType::default(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Push a character to the field value
    ///
    /// For credit fields a space toggles the selection; other characters
    /// are ignored.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Credit(credit) => {
                if c == ' ' {
                    credit.toggle();
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Credit(_) => {
                // Selector fields don't support backspace
            }
        }
    }

    /// Toggle the credit-type selection (no-op on text fields)
    pub fn toggle_credit(&mut self) {
        if let FieldValue::Credit(credit) = &mut self.value {
            credit.toggle();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Credit(c) => *c = CreditType::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Credit(selected) => [CreditType::CreditCard, CreditType::Loan]
                .iter()
                .map(|option| {
                    let mark = if option == selected { "(•)" } else { "( )" };
                    format!("{mark} {}", option.label())
                })
                .collect::<Vec<_>>()
                .join("   "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_push_and_pop() {
        let mut field = FormField::text("name", "Name");
        field.push_char('A');
        field.push_char('b');
        assert_eq!(field.as_text(), "Ab");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_text_field_set_and_clear() {
        let mut field = FormField::text("phone", "Phone");
        field.set_text("+91987".to_string());
        assert_eq!(field.as_text(), "+91987");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_credit_field_space_toggles() {
        let mut field = FormField::credit("credit_type", "I'm interested in");
        assert_eq!(field.as_credit(), CreditType::CreditCard);
        field.push_char(' ');
        assert_eq!(field.as_credit(), CreditType::Loan);
        field.push_char(' ');
        assert_eq!(field.as_credit(), CreditType::CreditCard);
    }

    #[test]
    fn test_credit_field_ignores_other_chars_and_backspace() {
        let mut field = FormField::credit("credit_type", "I'm interested in");
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.as_credit(), CreditType::CreditCard);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_credit_field_clear_restores_default() {
        let mut field = FormField::credit("credit_type", "I'm interested in");
        field.toggle_credit();
        assert_eq!(field.as_credit(), CreditType::Loan);
        field.clear();
        assert_eq!(field.as_credit(), CreditType::CreditCard);
    }

    #[test]
    fn test_display_value_marks_selection() {
        let mut field = FormField::credit("credit_type", "I'm interested in");
        assert_eq!(field.display_value(), "(•) Credit Card   ( ) Loan");
        field.toggle_credit();
        assert_eq!(field.display_value(), "( ) Credit Card   (•) Loan");
    }

    #[test]
    fn test_toggle_credit_is_noop_on_text() {
        let mut field = FormField::text("name", "Name");
        field.set_text("Asha".to_string());
        field.toggle_credit();
        assert_eq!(field.as_text(), "Asha");
    }
}
