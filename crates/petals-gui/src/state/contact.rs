//! Contact form draft.

/// Free-text contact form fields. Pure UI shell: no validation rules and
/// no submission endpoint; submitting logs and clears the draft.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactForm {
    /// Whether every field is still empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.body.is_empty()
    }

    /// Discard the draft.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_is_blank() {
        assert!(ContactForm::default().is_blank());
    }

    #[test]
    fn clear_discards_every_field() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Issue 39".into(),
            body: "Loved the tobacco piece.".into(),
        };
        form.clear();
        assert!(form.is_blank());
    }
}
