//! Value objects for the institution domain.
//!
//! Each type normalizes its raw input the way records are stored and refuses
//! values that break the field rules.

use serde::{Deserialize, Serialize};

use super::InstitutionError;

/// Minimum name length, counted after trimming.
pub const NOME_MIN_LEN: usize = 3;

/// Maximum name length.
pub const NOME_MAX_LEN: usize = 150;

/// Largest student count accepted (eleven digits).
pub const QTD_ALUNOS_MAX: i64 = 99_999_999_999;

/// Institution name: trimmed, upper-cased, 3 to 150 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nome(String);

impl Nome {
    /// Normalizes and validates a raw name.
    pub fn parse(raw: &str) -> Result<Self, InstitutionError> {
        let normalized = Self::normalize(raw);
        let len = normalized.chars().count();

        if len < NOME_MIN_LEN {
            return Err(InstitutionError::NomeTooShort { len });
        }
        if len > NOME_MAX_LEN {
            return Err(InstitutionError::NomeTooLong { len });
        }
        Ok(Self(normalized))
    }

    /// Applies the storage normalization without validating.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Wraps a value read back from the store.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Nome {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two-letter Brazilian state code, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uf(String);

impl Uf {
    /// Validates and normalizes a raw state code.
    ///
    /// The trimmed input must already be two ASCII letters; case folding
    /// happens afterwards so it cannot change the length.
    pub fn parse(raw: &str) -> Result<Self, InstitutionError> {
        let trimmed = raw.trim();

        let valid = trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(InstitutionError::InvalidUf {
                value: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Applies the storage normalization without validating.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_ascii_uppercase()
    }

    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Returns the state code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of students enrolled, between 0 and [`QTD_ALUNOS_MAX`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QtdAlunos(i64);

impl QtdAlunos {
    /// Validates a student count.
    pub fn new(value: i64) -> Result<Self, InstitutionError> {
        if value < 0 {
            return Err(InstitutionError::NegativeQtdAlunos { value });
        }
        if value > QTD_ALUNOS_MAX {
            return Err(InstitutionError::QtdAlunosTooLarge { value });
        }
        Ok(Self(value))
    }

    pub(crate) fn from_stored(value: i64) -> Self {
        Self(value)
    }

    /// Returns the count as an integer.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QtdAlunos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nome_is_trimmed_and_upper_cased() {
        let nome = Nome::parse("  Escola Estadual ").unwrap();
        assert_eq!(nome.as_str(), "ESCOLA ESTADUAL");
    }

    #[test]
    fn nome_keeps_accented_letters() {
        let nome = Nome::parse("Colégio São João").unwrap();
        assert_eq!(nome.as_str(), "COLÉGIO SÃO JOÃO");
    }

    #[test]
    fn nome_length_is_counted_after_trimming() {
        assert_eq!(
            Nome::parse("  ab  "),
            Err(InstitutionError::NomeTooShort { len: 2 })
        );
        assert!(Nome::parse("abc").is_ok());
    }

    #[test]
    fn nome_length_counts_characters_not_bytes() {
        // 150 two-byte characters
        let long = "é".repeat(NOME_MAX_LEN);
        assert!(Nome::parse(&long).is_ok());

        let too_long = "é".repeat(NOME_MAX_LEN + 1);
        assert_eq!(
            Nome::parse(&too_long),
            Err(InstitutionError::NomeTooLong { len: 151 })
        );
    }

    #[test]
    fn uf_accepts_two_letters_in_any_case() {
        assert_eq!(Uf::parse("SP").unwrap().as_str(), "SP");
        assert_eq!(Uf::parse("rj").unwrap().as_str(), "RJ");
    }

    #[test]
    fn uf_rejects_wrong_length_and_non_letters() {
        for raw in ["S", "SPA", "S1", "", "  ", "Ç1", "ß", "ﬀ", "Çç"] {
            assert!(
                matches!(Uf::parse(raw), Err(InstitutionError::InvalidUf { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn qtd_alunos_rejects_negative_values() {
        assert_eq!(QtdAlunos::new(0).unwrap().value(), 0);
        assert_eq!(QtdAlunos::new(1200).unwrap().value(), 1200);
        assert_eq!(
            QtdAlunos::new(-1),
            Err(InstitutionError::NegativeQtdAlunos { value: -1 })
        );
    }

    #[test]
    fn qtd_alunos_is_capped_at_eleven_digits() {
        assert_eq!(
            QtdAlunos::new(QTD_ALUNOS_MAX).unwrap().value(),
            99_999_999_999
        );
        assert_eq!(
            QtdAlunos::new(QTD_ALUNOS_MAX + 1),
            Err(InstitutionError::QtdAlunosTooLarge {
                value: 100_000_000_000
            })
        );
        assert!(matches!(
            QtdAlunos::new(i64::MAX),
            Err(InstitutionError::QtdAlunosTooLarge { .. })
        ));
    }
}
