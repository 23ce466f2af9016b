//! Application state definitions

use serde::Serialize;

/// Credit product the caller is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CreditType {
    #[default]
    #[serde(rename = "cc")]
    CreditCard,
    #[serde(rename = "loan")]
    Loan,
}

impl CreditType {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::CreditCard => Self::Loan,
            Self::Loan => Self::CreditCard,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Loan => "Loan",
        }
    }
}

/// Severity of a status-bar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing notification shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_type_default_is_credit_card() {
        assert_eq!(CreditType::default(), CreditType::CreditCard);
    }

    #[test]
    fn test_credit_type_toggle_round_trips() {
        let mut credit = CreditType::CreditCard;
        credit.toggle();
        assert_eq!(credit, CreditType::Loan);
        credit.toggle();
        assert_eq!(credit, CreditType::CreditCard);
    }

    #[test]
    fn test_credit_type_serializes_to_wire_value() {
        assert_eq!(
            serde_json::to_string(&CreditType::CreditCard).unwrap(),
            "\"cc\""
        );
        assert_eq!(serde_json::to_string(&CreditType::Loan).unwrap(), "\"loan\"");
    }

    #[test]
    fn test_credit_type_labels() {
        assert_eq!(CreditType::CreditCard.label(), "Credit Card");
        assert_eq!(CreditType::Loan.label(), "Loan");
    }

    #[test]
    fn test_notice_constructors() {
        let ok = Notice::success("done");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.text, "done");

        let bad = Notice::error("nope");
        assert_eq!(bad.kind, NoticeKind::Error);
        assert_eq!(bad.text, "nope");
    }
}
