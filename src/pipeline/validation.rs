//! Validation engine for extraction specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`ExtractionSpec`](super::spec::ExtractionSpec) and collects every
//! diagnostic into a [`ValidationReport`]. It never stops at the first
//! error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_keywords::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     eprintln!("{report}");
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::*;
use crate::nlp::stopwords::is_supported_language;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: a [`PipelineSpecError`] plus its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.error)?;
        if let Some(hint) = &self.error.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {diagnostic}")?;
        }
        Ok(())
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`ExtractionSpec`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"top_percent"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`ExtractionSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(RequiredFieldsRule));
        engine.add_rule(Box::new(TopPercentRule));
        engine.add_rule(Box::new(RankerParamsRule));
        engine.add_rule(Box::new(TableFormatRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &ExtractionSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            PipelineSpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Input path, column and percentage are required ─────────────────────

struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn name(&self) -> &str {
        "required_fields"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, bool, &str)] = &[
            ("/input/path", spec.input.path.is_some(), "--input"),
            (
                "/input/column",
                spec.input.column.as_deref().is_some_and(|c| !c.is_empty()),
                "--column",
            ),
            (
                "/selection/top_percent",
                spec.selection.top_percent.is_some(),
                "--top-percent",
            ),
        ];

        for &(path, present, flag) in checks {
            if !present {
                out.push(ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::MissingField,
                        path,
                        format!("{} is required", path.rsplit('/').next().unwrap_or(path)),
                    )
                    .with_hint(format!("Pass {flag} or set {path} in the config file")),
                ));
            }
        }

        out
    }
}

// ─── 3. Percentage must be a number in 0..=100 ──────────────────────────────

struct TopPercentRule;

impl ValidationRule for TopPercentRule {
    fn name(&self) -> &str {
        "top_percent"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        match &spec.selection.top_percent {
            Some(value) => match value.resolve() {
                Ok(_) => vec![],
                Err(err) => vec![ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::InvalidValue,
                        "/selection/top_percent",
                        err.to_string(),
                    )
                    .with_hint("Use a number between 0 and 100, e.g. 10"),
                )],
            },
            None => vec![],
        }
    }
}

// ─── 4. Ranker parameters in range ──────────────────────────────────────────

struct RankerParamsRule;

impl RankerParamsRule {
    fn invalid(field: &str, message: String, hint: &str) -> ValidationDiagnostic {
        ValidationDiagnostic::error(
            PipelineSpecError::new(ErrorCode::InvalidValue, format!("/ranker/{field}"), message)
                .with_hint(hint),
        )
    }
}

impl ValidationRule for RankerParamsRule {
    fn name(&self) -> &str {
        "ranker_params"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let ranker = &spec.ranker;
        let mut out = Vec::new();

        if let Some(window) = ranker.window_size {
            if window < 2 {
                out.push(Self::invalid(
                    "window_size",
                    format!("window_size must be at least 2, got {window}"),
                    "Use 2 to link adjacent words",
                ));
            }
        }

        if let Some(ratio) = ranker.ratio {
            if !(ratio > 0.0 && ratio <= 1.0) {
                out.push(Self::invalid(
                    "ratio",
                    format!("ratio must be in (0, 1], got {ratio}"),
                    "The default keeps 20% of graph nodes: 0.2",
                ));
            }
        }

        if let Some(damping) = ranker.damping {
            if !(damping > 0.0 && damping < 1.0) {
                out.push(Self::invalid(
                    "damping",
                    format!("damping must be in (0, 1), got {damping}"),
                    "The usual value is 0.85",
                ));
            }
        }

        if let Some(threshold) = ranker.convergence_threshold {
            if !(threshold.is_finite() && threshold > 0.0) {
                out.push(Self::invalid(
                    "convergence_threshold",
                    format!("convergence_threshold must be positive, got {threshold}"),
                    "The default is 1e-6",
                ));
            }
        }

        if let Some(language) = ranker.language.as_deref() {
            if !is_supported_language(language) {
                out.push(ValidationDiagnostic::warning(
                    PipelineSpecError::new(
                        ErrorCode::InvalidValue,
                        "/ranker/language",
                        format!("unrecognized stopword language {language:?}, using English"),
                    )
                    .with_hint("Use a code such as \"en\", \"de\" or \"fr\""),
                ));
            }
        }

        let positive: &[(&str, Option<usize>)] = &[
            ("max_words", ranker.max_words),
            ("max_iterations", ranker.max_iterations),
            ("min_word_length", ranker.min_word_length),
            ("max_phrase_words", ranker.max_phrase_words),
        ];
        for &(field, value) in positive {
            if value == Some(0) {
                out.push(Self::invalid(
                    field,
                    format!("{field} must be greater than 0"),
                    "Remove the field to use the default, or set a positive value",
                ));
            }
        }

        out
    }
}

// ─── 5. Delimiter and output header well formed ─────────────────────────────

struct TableFormatRule;

impl ValidationRule for TableFormatRule {
    fn name(&self) -> &str {
        "table_format"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if let Some(raw) = spec.input.delimiter.as_deref() {
            if parse_delimiter(raw).is_none() {
                out.push(ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::InvalidValue,
                        "/input/delimiter",
                        format!("delimiter must be a single ASCII character, got {raw:?}"),
                    )
                    .with_hint("Use \",\", \";\", \"|\" or \"tab\""),
                ));
            }
        }

        if spec.output.header.as_deref() == Some("") {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::InvalidValue,
                    "/output/header",
                    "output header must not be empty",
                )
                .with_hint("Remove the field to use \"keywords\""),
            ));
        }

        out
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from the extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    PipelineSpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 5] = [
            ("", &spec.unknown_fields),
            ("/input", &spec.input.unknown_fields),
            ("/ranker", &spec.ranker.unknown_fields),
            ("/selection", &spec.selection.unknown_fields),
            ("/output", &spec.output.unknown_fields),
        ];

        sections
            .into_iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build an ExtractionSpec from JSON.
    fn spec(json: &str) -> ExtractionSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    const MINIMAL: &str = r#"{
        "v": 1,
        "input": { "path": "in.csv", "column": "text" },
        "selection": { "top_percent": 10 }
    }"#;

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(MINIMAL));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "input": { "path": "in.csv", "column": "text", "delimiter": "tab" },
                "ranker": { "window_size": 3, "ratio": 1.0, "damping": 0.5, "max_words": 10 },
                "selection": { "top_percent": "0", "dedupe": true },
                "output": { "path": "out.csv", "header": "kw" },
                "strict": true
            }"#,
        ));
        assert!(report.is_valid(), "{report}");
    }

    #[test]
    fn test_default_rule_order() {
        assert_eq!(
            engine().rule_names(),
            vec![
                "version",
                "required_fields",
                "top_percent",
                "ranker_params",
                "table_format",
                "unknown_fields"
            ]
        );
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version() {
        let mut s = spec(MINIMAL);
        s.v = 2;
        let errs: Vec<_> = engine().validate(&s).errors().cloned().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errs[0].path, "/v");
    }

    // ─── Rule: required_fields ──────────────────────────────────────────

    #[test]
    fn test_empty_spec_reports_every_missing_field() {
        let report = engine().validate(&spec("{}"));
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/input/path", "/input/column", "/selection/top_percent"]
        );
        assert!(report.errors().all(|e| e.code == ErrorCode::MissingField));
    }

    #[test]
    fn test_empty_column_name_is_missing() {
        let report = engine().validate(&spec(
            r#"{ "input": { "path": "a.csv", "column": "" }, "selection": { "top_percent": 5 } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/input/column");
    }

    // ─── Rule: top_percent ──────────────────────────────────────────────

    #[test]
    fn test_out_of_range_percent() {
        for bad in ["101", "-5", "\"ten\"", "\"NaN\""] {
            let json = format!(
                r#"{{ "input": {{ "path": "a.csv", "column": "t" }}, "selection": {{ "top_percent": {bad} }} }}"#
            );
            let report = engine().validate(&spec(&json));
            let errs: Vec<_> = report.errors().collect();
            assert_eq!(errs.len(), 1, "top_percent {bad}");
            assert_eq!(errs[0].code, ErrorCode::InvalidValue);
            assert_eq!(errs[0].path, "/selection/top_percent");
        }
    }

    // ─── Rule: ranker_params ────────────────────────────────────────────

    #[test]
    fn test_ranker_params_all_reported() {
        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t" },
                "selection": { "top_percent": 5 },
                "ranker": {
                    "window_size": 1,
                    "ratio": 0,
                    "damping": 1.0,
                    "convergence_threshold": -1,
                    "max_iterations": 0
                }
            }"#,
        ));
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/ranker/window_size",
                "/ranker/ratio",
                "/ranker/damping",
                "/ranker/convergence_threshold",
                "/ranker/max_iterations",
            ]
        );
    }

    #[test]
    fn test_unknown_language_is_a_warning() {
        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t" },
                "selection": { "top_percent": 5 },
                "ranker": { "language": "eng" }
            }"#,
        ));
        assert!(report.is_valid(), "{report}");
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "/ranker/language");
        assert_eq!(warnings[0].code, ErrorCode::InvalidValue);

        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t" },
                "selection": { "top_percent": 5 },
                "ranker": { "language": "de" }
            }"#,
        ));
        assert!(report.is_empty());
    }

    // ─── Rule: table_format ─────────────────────────────────────────────

    #[test]
    fn test_bad_delimiter_and_header() {
        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t", "delimiter": ";;" },
                "selection": { "top_percent": 5 },
                "output": { "header": "" }
            }"#,
        ));
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/input/delimiter", "/output/header"]);
    }

    // ─── Rule: unknown_fields ───────────────────────────────────────────

    #[test]
    fn test_unknown_fields_warn_when_not_strict() {
        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t", "colum": "x" },
                "selection": { "top_percent": 5 },
                "extra": true
            }"#,
        ));
        assert!(report.is_valid());
        let warnings: Vec<_> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(warnings, vec!["/extra", "/input/colum"]);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(
            r#"{
                "input": { "path": "a.csv", "column": "t" },
                "ranker": { "windows": 3 },
                "selection": { "top_percent": 5 },
                "strict": true
            }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnknownField);
        assert_eq!(errs[0].path, "/ranker/windows");
    }

    // ─── Report ─────────────────────────────────────────────────────────

    #[test]
    fn test_report_display_lists_every_diagnostic() {
        let report = engine().validate(&spec(r#"{ "input": { "path": "a.csv" } }"#));
        let text = report.to_string();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("error: missing_field at /input/column"));
        assert!(text.contains("hint: Pass --top-percent"));
    }

    #[test]
    fn test_custom_rule() {
        struct NoStdout;
        impl ValidationRule for NoStdout {
            fn name(&self) -> &str {
                "no_stdout"
            }
            fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
                if spec.output.path.is_none() {
                    vec![ValidationDiagnostic::warning(PipelineSpecError::new(
                        ErrorCode::MissingField,
                        "/output/path",
                        "writing to stdout",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoStdout));
        let report = engine.validate(&spec(MINIMAL));

        assert!(report.is_valid());
        assert_eq!(report.len(), 1);
    }
}
