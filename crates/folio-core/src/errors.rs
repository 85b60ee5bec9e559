use folio_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by callers, tests and
/// API responses. The change-set engine itself never produces errors; these
/// cover the document boundary, form validation and CLI I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    RequiredFieldEmpty,
    DuplicateLocale,
    UnknownLocale,

    // Document boundary
    /// Bytes are not valid UTF-8 JSON, or do not match the document shape
    InvalidDocument,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::RequiredFieldEmpty => "ERR_REQUIRED_FIELD_EMPTY",
            ExErrorKind::DuplicateLocale => "ERR_DUPLICATE_LOCALE",
            ExErrorKind::UnknownLocale => "ERR_UNKNOWN_LOCALE",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus builder-style
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    locale: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            locale: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(locale) = &self.locale {
            write!(f, " (locale: {})", locale)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Folio operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    // ===== Document Errors =====
    /// Document bytes could not be decoded into the expected shape
    #[error("Invalid {document} document: {reason}")]
    InvalidJson { document: String, reason: String },

    // ===== Validation Errors =====
    /// The same locale appears more than once in a translation list
    #[error("Duplicate translation for locale {locale}")]
    DuplicateLocale { locale: String },

    /// A required field is empty or whitespace-only
    #[error("Required field {field} is empty{}", locale.as_ref().map(|l| format!(" for locale {}", l)).unwrap_or_default())]
    RequiredFieldEmpty {
        field: String,
        locale: Option<String>,
    },

    /// Locale string is empty or not a plausible language tag
    #[error("Unknown locale: {locale:?}")]
    UnknownLocale { locale: String },

    // ===== Generic Errors =====
    /// Filesystem error at the CLI boundary
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from FolioError to the canonical ExError
impl From<FolioError> for ExError {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::InvalidJson { document, reason } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_op(format!("parse_{}", document))
                    .with_message(reason)
            }

            FolioError::DuplicateLocale { locale } => ExError::new(ExErrorKind::DuplicateLocale)
                .with_locale(locale)
                .with_message("Translation list contains the same locale twice"),

            FolioError::RequiredFieldEmpty { field, locale } => {
                let err = ExError::new(ExErrorKind::RequiredFieldEmpty)
                    .with_field(field)
                    .with_message("Required field is empty");
                match locale {
                    Some(locale) => err.with_locale(locale),
                    None => err,
                }
            }

            FolioError::UnknownLocale { locale } => ExError::new(ExErrorKind::UnknownLocale)
                .with_locale(locale)
                .with_message("Locale is not a valid language tag"),

            FolioError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(message),

            FolioError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FolioError
impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::RequiredFieldEmpty, "ERR_REQUIRED_FIELD_EMPTY"),
            (ExErrorKind::DuplicateLocale, "ERR_DUPLICATE_LOCALE"),
            (ExErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_required_field_error_carries_locale() {
        let err: ExError = FolioError::RequiredFieldEmpty {
            field: "title".to_string(),
            locale: Some("ar".to_string()),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::RequiredFieldEmpty);
        assert_eq!(err.field(), Some("title"));
        assert_eq!(err.locale(), Some("ar"));
    }

    #[test]
    fn test_required_field_display_without_locale() {
        let err = FolioError::RequiredFieldEmpty {
            field: "role".to_string(),
            locale: None,
        };
        assert_eq!(err.to_string(), "Required field role is empty");
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let err = ExError::new(ExErrorKind::InvalidDocument)
            .with_op("parse_project")
            .with_message("not JSON");
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_DOCUMENT] in operation 'parse_project': not JSON"
        );
    }

    #[test]
    fn test_display_includes_correlation_ids() {
        let err = ExError::new(ExErrorKind::Io)
            .with_message("missing")
            .with_request_id(RequestId::from("req-1".to_string()))
            .with_trace_id(TraceId::from("session-9".to_string()));
        assert_eq!(
            err.to_string(),
            "[ERR_IO]: missing (request_id: req-1) (trace_id: session-9)"
        );
    }
}
