//! Institution form state, live input shaping and submit-time validation.
//!
//! The same form backs both the "new institution" dialog and the row edit
//! dialog, so create and update validate identically.

use crate::model::{Institution, InstitutionPayload};

/// Longest name the input accepts.
pub const NOME_MAX_CHARS: usize = 150;

/// Longest student count the input accepts, in digits.
pub const QTD_ALUNOS_MAX_DIGITS: usize = 11;

/// Largest student count the server accepts.
pub const QTD_ALUNOS_MAX: i64 = 99_999_999_999;

const NOME_MIN_CHARS: usize = 3;

const MSG_NOME_TOO_SHORT: &str = "- O nome deve ter pelo menos 3 caracteres!";
const MSG_NOME_PADDED: &str = "- O nome não pode começar ou terminar com espaços!";
const MSG_UF_BLANK: &str = "- UF não pode conter espaços!";
const MSG_UF_INVALID: &str = "- UF deve conter exatamente 2 letras!";
const MSG_QTD_INVALID: &str = "- Quantidade de alunos deve ser um número válido!";

/// Inline message shown under a field while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHint {
    NomeTooShort,
    UfIncomplete,
    UfBlank,
    UfInvalidChars,
}

impl FieldHint {
    pub fn message(&self) -> &'static str {
        match self {
            FieldHint::NomeTooShort => "Por favor, insira, no mínimo, 3 caracteres.",
            FieldHint::UfIncomplete => "Por favor, informe um UF válido com 2 letras.",
            FieldHint::UfBlank => "UF não pode conter espaços.",
            FieldHint::UfInvalidChars => {
                "UF deve conter apenas letras e ter no máximo 2 caracteres."
            }
        }
    }
}

impl std::fmt::Display for FieldHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Every rule a submitted form broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub messages: Vec<&'static str>,
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}

impl std::error::Error for FormErrors {}

/// Raw text of the three form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionForm {
    pub nome: String,
    pub uf: String,
    pub qtd_alunos: String,
}

impl InstitutionForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form for editing an existing row.
    pub fn from_institution(institution: &Institution) -> Self {
        Self {
            nome: institution.nome.clone(),
            uf: institution.uf.clone(),
            qtd_alunos: institution.qtd_alunos.to_string(),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Handles a change of the name input.
    ///
    /// The value is upper-cased and cut at [`NOME_MAX_CHARS`].
    pub fn input_nome(&mut self, raw: &str) -> Option<FieldHint> {
        self.nome = raw.to_uppercase().chars().take(NOME_MAX_CHARS).collect();

        if self.nome.chars().count() < NOME_MIN_CHARS {
            Some(FieldHint::NomeTooShort)
        } else {
            None
        }
    }

    /// Handles a change of the state code input.
    ///
    /// Only up to two letters are taken; anything else leaves the previous
    /// value in place, except whitespace-only input which clears the field.
    pub fn input_uf(&mut self, raw: &str) -> Option<FieldHint> {
        if raw.len() <= 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            self.uf = raw.to_ascii_uppercase();
            if self.uf.len() == 2 {
                None
            } else {
                Some(FieldHint::UfIncomplete)
            }
        } else if raw.trim().is_empty() {
            self.uf.clear();
            Some(FieldHint::UfBlank)
        } else {
            Some(FieldHint::UfInvalidChars)
        }
    }

    /// Handles a change of the student count input, keeping digits only.
    pub fn input_qtd_alunos(&mut self, raw: &str) {
        self.qtd_alunos = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(QTD_ALUNOS_MAX_DIGITS)
            .collect();
    }

    /// Checks every rule and builds the request body.
    ///
    /// All violations are collected rather than stopping at the first one.
    pub fn validate(&self) -> Result<InstitutionPayload, FormErrors> {
        let mut messages = Vec::new();

        let trimmed = self.nome.trim();
        if self.nome.is_empty() || trimmed.chars().count() < NOME_MIN_CHARS {
            messages.push(MSG_NOME_TOO_SHORT);
        }
        if trimmed != self.nome {
            messages.push(MSG_NOME_PADDED);
        }

        if !self.uf.is_empty() && self.uf.trim().is_empty() {
            messages.push(MSG_UF_BLANK);
        } else if self.uf.len() != 2 || !self.uf.chars().all(|c| c.is_ascii_alphabetic()) {
            messages.push(MSG_UF_INVALID);
        }

        let qtd_alunos = match self.qtd_alunos.trim().parse::<i64>() {
            Ok(value) if (0..=QTD_ALUNOS_MAX).contains(&value) => Some(value),
            _ => {
                messages.push(MSG_QTD_INVALID);
                None
            }
        };

        match qtd_alunos {
            Some(qtd_alunos) if messages.is_empty() => Ok(InstitutionPayload {
                nome: self.nome.clone(),
                uf: self.uf.to_ascii_uppercase(),
                qtd_alunos,
            }),
            _ => Err(FormErrors { messages }),
        }
    }
}

/// Formats a student count with pt-BR thousands separators (`1234567` → `1.234.567`).
pub fn format_qtd_alunos(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nome: &str, uf: &str, qtd_alunos: &str) -> InstitutionForm {
        InstitutionForm {
            nome: nome.to_string(),
            uf: uf.to_string(),
            qtd_alunos: qtd_alunos.to_string(),
        }
    }

    #[test]
    fn valid_form_builds_payload() {
        let payload = form("Ana Maria", "SP", "120").validate().unwrap();
        assert_eq!(
            payload,
            InstitutionPayload {
                nome: "Ana Maria".to_string(),
                uf: "SP".to_string(),
                qtd_alunos: 120,
            }
        );
    }

    #[test]
    fn padded_name_is_rejected() {
        let errors = form(" Ana ", "SP", "1").validate().unwrap_err();
        assert_eq!(errors.messages, vec![MSG_NOME_PADDED]);
    }

    #[test]
    fn short_and_padded_name_reports_both() {
        let errors = form(" a ", "SP", "1").validate().unwrap_err();
        assert_eq!(errors.messages, vec![MSG_NOME_TOO_SHORT, MSG_NOME_PADDED]);
    }

    #[test]
    fn uf_rules() {
        assert!(form("Ana Maria", "SP", "1").validate().is_ok());
        for uf in ["S", "S1", "", "SPX", "1A"] {
            let errors = form("Ana Maria", uf, "1").validate().unwrap_err();
            assert_eq!(errors.messages, vec![MSG_UF_INVALID], "uf {uf:?}");
        }
        let errors = form("Ana Maria", "  ", "1").validate().unwrap_err();
        assert_eq!(errors.messages, vec![MSG_UF_BLANK]);
    }

    #[test]
    fn student_count_must_be_an_integer() {
        for qtd in ["", "abc", "1.5", "-3", "100000000000"] {
            let errors = form("Ana Maria", "SP", qtd).validate().unwrap_err();
            assert_eq!(errors.messages, vec![MSG_QTD_INVALID], "qtd {qtd:?}");
        }
    }

    #[test]
    fn largest_student_count_is_accepted() {
        let payload = form("Ana Maria", "SP", "99999999999").validate().unwrap();
        assert_eq!(payload.qtd_alunos, QTD_ALUNOS_MAX);
    }

    #[test]
    fn all_violations_are_combined() {
        let errors = form("", "S", "x").validate().unwrap_err();
        assert_eq!(
            errors.messages,
            vec![MSG_NOME_TOO_SHORT, MSG_UF_INVALID, MSG_QTD_INVALID]
        );
        assert_eq!(
            errors.to_string(),
            format!("{MSG_NOME_TOO_SHORT}\n{MSG_UF_INVALID}\n{MSG_QTD_INVALID}")
        );
    }

    #[test]
    fn nome_input_is_upper_cased_and_capped() {
        let mut f = InstitutionForm::new();
        assert_eq!(f.input_nome("ab"), Some(FieldHint::NomeTooShort));
        assert_eq!(f.nome, "AB");

        assert_eq!(f.input_nome("colégio"), None);
        assert_eq!(f.nome, "COLÉGIO");

        f.input_nome(&"x".repeat(200));
        assert_eq!(f.nome.chars().count(), NOME_MAX_CHARS);
    }

    #[test]
    fn uf_input_accepts_letters_only() {
        let mut f = InstitutionForm::new();
        assert_eq!(f.input_uf("s"), Some(FieldHint::UfIncomplete));
        assert_eq!(f.uf, "S");

        assert_eq!(f.input_uf("sp"), None);
        assert_eq!(f.uf, "SP");

        assert_eq!(f.input_uf("S1"), Some(FieldHint::UfInvalidChars));
        assert_eq!(f.uf, "SP");

        assert_eq!(f.input_uf("spx"), Some(FieldHint::UfInvalidChars));
        assert_eq!(f.uf, "SP");

        assert_eq!(f.input_uf("ß"), Some(FieldHint::UfInvalidChars));
        assert_eq!(f.uf, "SP");

        assert_eq!(f.input_uf("  "), Some(FieldHint::UfBlank));
        assert_eq!(f.uf, "");
    }

    #[test]
    fn qtd_input_strips_non_digits() {
        let mut f = InstitutionForm::new();
        f.input_qtd_alunos("1.234a5");
        assert_eq!(f.qtd_alunos, "12345");

        f.input_qtd_alunos("123456789012345");
        assert_eq!(f.qtd_alunos.len(), QTD_ALUNOS_MAX_DIGITS);
    }

    #[test]
    fn edit_form_is_prefilled() {
        let institution = Institution {
            id: common::InstitutionId::new(),
            nome: "ESCOLA".to_string(),
            uf: "MG".to_string(),
            qtd_alunos: 40,
        };
        let f = InstitutionForm::from_institution(&institution);
        assert_eq!(f, form("ESCOLA", "MG", "40"));
    }

    #[test]
    fn counts_are_formatted_with_dots() {
        assert_eq!(format_qtd_alunos(0), "0");
        assert_eq!(format_qtd_alunos(999), "999");
        assert_eq!(format_qtd_alunos(1000), "1.000");
        assert_eq!(format_qtd_alunos(1234567), "1.234.567");
        assert_eq!(format_qtd_alunos(-12345), "-12.345");
    }
}
