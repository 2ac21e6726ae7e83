//! Attribute diagnostics and the report sink.
//!
//! Every malformed, missing, or non-standard attribute value found during
//! cleaning is recorded here as a [`Diagnostic`]. Diagnostics are advisory:
//! they never abort parsing of the document, the element, or sibling
//! attributes. The sink is append-only; once recorded, a diagnostic is
//! never retracted.

use std::fmt;

use strum_macros::Display;

/// What went wrong with one attribute occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DiagnosticCode {
    /// Attribute was written without a value where one is required.
    MissingAttrValue,
    /// Value is present but fails the attribute's grammar or keyword rule.
    BadAttributeValue,
    /// Value is a recognized keyword, but only in proprietary dialects
    /// (Netscape/Microsoft extensions).
    ProprietaryAttrValue,
    /// Value is not a legal HTML identifier (must start with a letter and
    /// continue with name characters).
    InvalidIdValue,
}

impl DiagnosticCode {
    /// How loudly this code should be surfaced.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticCode::ProprietaryAttrValue => Severity::Info,
            DiagnosticCode::MissingAttrValue
            | DiagnosticCode::BadAttributeValue
            | DiagnosticCode::InvalidIdValue => Severity::Warning,
        }
    }
}

/// Severity of a diagnostic. All severities are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum Severity {
    /// Worth knowing, not wrong per se (proprietary but recognized markup).
    Info,
    /// The document is malformed at this point.
    Warning,
}

/// One recorded problem with one attribute occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub code: DiagnosticCode,
    /// Name of the element the attribute occurred on.
    pub element: String,
    /// The attribute name for missing-value reports; the offending value
    /// string for all other codes.
    pub subject: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: <{}> {} \"{}\"",
            self.code.severity(),
            self.element,
            self.code,
            self.subject
        )
    }
}

/// Append-only collector of attribute diagnostics for one document.
///
/// There is deliberately no removal API: checkers report and move on, and
/// downstream consumers (summary printing, exit-status policy) read the
/// full list after the cleaning pass completes.
#[derive(Debug, Default)]
pub struct ReportSink {
    diagnostics: Vec<Diagnostic>,
}

impl ReportSink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> ReportSink {
        ReportSink {
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic against an attribute occurrence.
    ///
    /// `subject` is the attribute name for [`DiagnosticCode::MissingAttrValue`]
    /// and the offending value string for every other code.
    pub fn attr_error(&mut self, element: &str, subject: &str, code: DiagnosticCode) {
        self.diagnostics.push(Diagnostic {
            code,
            element: element.to_string(),
            subject: subject.to_string(),
        });
    }

    /// Everything recorded so far, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Just the codes, in report order. Convenient for assertions.
    #[must_use]
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// Number of diagnostics recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_records_in_order() {
        let mut sink = ReportSink::new();
        sink.attr_error("img", "align", DiagnosticCode::MissingAttrValue);
        sink.attr_error("td", "texttop", DiagnosticCode::ProprietaryAttrValue);
        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.codes(),
            vec![
                DiagnosticCode::MissingAttrValue,
                DiagnosticCode::ProprietaryAttrValue
            ]
        );
    }

    #[test]
    fn proprietary_is_lower_severity() {
        assert_eq!(
            DiagnosticCode::ProprietaryAttrValue.severity(),
            Severity::Info
        );
        assert_eq!(
            DiagnosticCode::BadAttributeValue.severity(),
            Severity::Warning
        );
        assert!(Severity::Info < Severity::Warning);
    }

    #[test]
    fn diagnostic_display_names_element_and_subject() {
        let mut sink = ReportSink::new();
        sink.attr_error("p", "top", DiagnosticCode::BadAttributeValue);
        let text = sink.diagnostics()[0].to_string();
        assert!(text.contains("<p>"));
        assert!(text.contains("BadAttributeValue"));
        assert!(text.contains("\"top\""));
    }
}
