//! # Report Commands
//!
//! Members flag posts or comments; staff mark the reports resolved. While
//! any report is pending the dashboard shows a marker on the reports tab.

use binaa_core::validation::ReportForm;
use binaa_core::{new_id, CoreError, Report, ReportStatus};
use binaa_db::SlotStore;
use chrono::Utc;
use tracing::info;

use super::{require_session, require_staff};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn file_report<S: SlotStore>(
    state: &mut AppState<S>,
    form: &ReportForm,
) -> ApiResult<Report> {
    let reporter = require_session(state, "report content")?;
    let draft = form.parse()?;

    let report = Report {
        id: new_id(),
        reporter_id: reporter.id,
        target_id: draft.target_id,
        target_type: draft.target_type,
        reason: draft.reason,
        status: ReportStatus::Pending,
        created_at: Utc::now(),
    };

    let mut reports = Vec::with_capacity(state.reports().len() + 1);
    reports.push(report.clone());
    reports.extend_from_slice(state.reports());
    state.set_reports(reports).await?;

    info!(report_id = %report.id, target = ?report.target_type, "Report filed");
    Ok(report)
}

pub async fn resolve_report<S: SlotStore>(
    state: &mut AppState<S>,
    report_id: &str,
) -> ApiResult<Report> {
    require_staff(state, "resolve reports")?;
    let mut report = state
        .reports()
        .iter()
        .find(|r| r.id == report_id)
        .cloned()
        .ok_or_else(|| CoreError::ReportNotFound(report_id.to_string()))?;
    report.status = ReportStatus::Resolved;

    let reports = state
        .reports()
        .iter()
        .map(|r| if r.id == report_id { report.clone() } else { r.clone() })
        .collect();
    state.set_reports(reports).await?;

    info!(report_id, "Report resolved");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{auth, testing};
    use crate::error::ErrorCode;
    use binaa_core::search::has_pending_reports;
    use binaa_core::ReportTarget;

    fn form() -> ReportForm {
        ReportForm {
            target_id: "post-1".to_string(),
            target_type: ReportTarget::Post,
            reason: "إعلان مزعج".to_string(),
        }
    }

    #[tokio::test]
    async fn test_file_then_resolve() {
        let mut state = testing::member_state("samir").await;
        let report = file_report(&mut state, &form()).await.unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert!(has_pending_reports(state.reports()));

        let err = resolve_report(&mut state, &report.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        auth::logout(&mut state).await.unwrap();
        auth::login(&mut state, "ادمن", "123").await.unwrap();
        let resolved = resolve_report(&mut state, &report.id).await.unwrap();
        assert_eq!(resolved.status, ReportStatus::Resolved);
        assert!(!has_pending_reports(state.reports()));
    }

    #[tokio::test]
    async fn test_report_needs_reason() {
        let mut state = testing::member_state("samir").await;
        let blank = ReportForm {
            reason: " ".to_string(),
            ..form()
        };
        let err = file_report(&mut state, &blank).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
