//! # Record and Dashboard Handlers
//!
//! HTTP request handlers for inspection-record intake, the weekly and
//! cyclical dashboards, the locality drill-down, and the notification drain.

use axum::Json;
use chrono::Utc;
use error::{AppError, Result};
use sea_orm::Set;
use summary::{coerce, cycles_sorted, group_by_cycle, group_by_week, select_locality, summaries_sorted_by_week};
use validator::Validate;

use crate::{
    dto::records::{CreateRecordRequest, RecordListResponse, RecordResponse},
    dto::summaries::{CycleSummariesResponse, SelectionResponse, WeeklySummariesResponse},
    notify::{Notification, Notifier},
    AppState,
};

/// List all inspection records in insertion order.
pub async fn list_records_handler(state: &AppState) -> Result<Json<RecordListResponse>> {
    let records = state.records().load(state.notifications.as_ref()).await;
    Ok(Json(RecordListResponse {
        success: true,
        records,
    }))
}

/// Submit one inspection report.
///
/// String-typed numeric fields are coerced here, at the boundary, with a
/// zero fallback; dates must parse and the end date may not precede the
/// start date.
pub async fn create_record_handler(
    state: &AppState,
    req: CreateRecordRequest,
) -> Result<(http::StatusCode, Json<RecordResponse>)> {
    req.validate().map_err(AppError::from)?;

    let start_date = coerce::date(&req.start_date)
        .ok_or_else(|| AppError::validation("Invalid start date"))?;
    let end_date =
        coerce::date(&req.end_date).ok_or_else(|| AppError::validation("Invalid end date"))?;
    if end_date < start_date {
        return Err(AppError::validation(
            "End date must not precede start date",
        ));
    }

    let record = entity::inspection_records::ActiveModel {
        municipality: Set(req.municipality.trim().to_string()),
        locality: Set(req.locality.trim().to_string()),
        cycle: Set(req.cycle.trim().to_string()),
        epidemiological_week: Set(req.epidemiological_week.trim().to_string()),
        work_modality: Set(req.work_modality.trim().to_string()),
        start_date: Set(start_date),
        end_date: Set(end_date),
        total_properties: Set(coerce::count(&req.total_properties)),
        inspections: Set(coerce::count(&req.inspections)),
        deposits_eliminated: Set(coerce::count(&req.deposits_eliminated)),
        deposits_treated: Set(coerce::count(&req.deposits_treated)),
        supervisor: Set(req.supervisor.trim().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let stored = match state.records().append(record).await {
        Ok(stored) => stored,
        Err(e) => {
            state
                .notifications
                .notify(Notification::error("Failed to save inspection record"));
            return Err(e.context("saving inspection record"));
        },
    };

    state
        .notifications
        .notify(Notification::success("Inspection record saved"));

    Ok((
        http::StatusCode::CREATED,
        Json(RecordResponse {
            success: true,
            record:  stored,
        }),
    ))
}

/// Weekly dashboard: summaries ascending by numeric week.
pub async fn weekly_summaries_handler(state: &AppState) -> Result<Json<WeeklySummariesResponse>> {
    let records = state.records().load(state.notifications.as_ref()).await;
    let weeks = summaries_sorted_by_week(group_by_week(&records));

    Ok(Json(WeeklySummariesResponse {
        success: true,
        weeks,
    }))
}

/// Cyclical dashboard: summaries ascending by modality then numeric cycle.
pub async fn cycle_summaries_handler(state: &AppState) -> Result<Json<CycleSummariesResponse>> {
    let records = state.records().load(state.notifications.as_ref()).await;
    let cycles = cycles_sorted(group_by_cycle(&records));

    Ok(Json(CycleSummariesResponse {
        success: true,
        cycles,
    }))
}

/// Locality drill-down: current and historical records for one locality.
///
/// Recomputed from the full record set on every call.
pub async fn locality_handler(state: &AppState, locality: &str) -> Result<Json<SelectionResponse>> {
    let records = state.records().load(state.notifications.as_ref()).await;
    let selection = select_locality(&records, locality);

    Ok(Json(SelectionResponse {
        success: true,
        selection,
    }))
}

/// Drain pending toasts for the rendering layer.
pub async fn notifications_handler(state: &AppState) -> Result<Json<Vec<Notification>>> {
    Ok(Json(state.notifications.drain()))
}
