use validator::{ValidationErrors, ValidationErrorsKind};

use super::app_error::ValidationIssue;

pub(super) fn collect_validation_issues(
    prefix: Option<String>,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationIssue>,
) {
    for (field, kind) in errors.errors() {
        let path = match &prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| ValidationIssue {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(std::borrow::Cow::to_string)
                        .unwrap_or_else(|| format!("{path} is invalid")),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_issues(Some(path), nested, out);
            }
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect_validation_issues(Some(format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

pub(super) fn order_issues(issues: &mut [ValidationIssue], field_order: &[&str]) {
    let rank = |field: &str| {
        field_order
            .iter()
            .position(|known| *known == field)
            .unwrap_or(field_order.len())
    };

    issues.sort_by(|left, right| {
        rank(&left.field)
            .cmp(&rank(&right.field))
            .then_with(|| left.field.cmp(&right.field))
            .then_with(|| left.code.cmp(&right.code))
    });
}

/// Joins issue messages into the single line shown to API callers.
pub(super) fn summarize_issues(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "Request validation failed".to_string(),
        [issue] => issue.message.clone(),
        many => many
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    }
}
