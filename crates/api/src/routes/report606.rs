//! Report 606 generation routes.
//!
//! Computes DGII Report 606 (purchases of goods and services) lines and
//! totals from caller-supplied expense records. The caller owns record
//! storage and the final filing format; these routes classify and compute.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::AppState;
use contadom_core::expense::{ExpenseFilter, ExpenseRecord};
use contadom_core::fiscal::{DateRange, DocumentKind, FilingPeriod, PaymentMethod};
use contadom_core::report606::{
    Report606Engine, Report606Entry, Report606Summary, SubmissionIssue, submission_issues,
    validate_records,
};

/// Creates the Report 606 routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/606", post(generate_report))
        .route("/reports/606/codes", get(list_codes))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for generating a Report 606.
#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    /// Filing period label in AAAAMM format (e.g., "202501").
    pub period: String,
    /// Reporting range start (defaults to the first day of the period).
    pub start_date: Option<NaiveDate>,
    /// Reporting range end (defaults to the last day of the period).
    pub end_date: Option<NaiveDate>,
    /// Record filter applied before computation.
    #[serde(default)]
    pub filter: ExpenseFilter,
    /// Expense records to build the report from.
    pub expenses: Vec<ExpenseRecord>,
}

/// Response body for a generated Report 606.
#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    /// Report lines, one per selected expense, in input order.
    pub entries: Vec<Report606Entry>,
    /// Aggregate totals over the lines.
    pub summary: Report606Summary,
    /// Submission readiness findings (missing RNC, missing or malformed NCF).
    pub issues: Vec<SubmissionIssue>,
}

/// One DGII catalog code.
#[derive(Debug, Serialize)]
pub struct CatalogCode {
    /// Two-digit DGII code.
    pub code: &'static str,
    /// Classification name.
    pub name: &'static str,
}

/// Response body for the DGII classification catalogs.
#[derive(Debug, Serialize)]
pub struct CodesResponse {
    /// Document type codes.
    pub document_types: Vec<CatalogCode>,
    /// Payment method codes.
    pub payment_methods: Vec<CatalogCode>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/reports/606` - Generate Report 606 lines and totals.
#[axum::debug_handler]
async fn generate_report(
    State(state): State<AppState>,
    Json(payload): Json<GenerateReportRequest>,
) -> impl IntoResponse {
    let period: FilingPeriod = match payload.period.parse() {
        Ok(p) => p,
        Err(e) => {
            warn!(period = %payload.period, error = %e, "Rejected malformed filing period");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_period",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };

    let start = payload.start_date.unwrap_or(period.start_date());
    let end = payload.end_date.unwrap_or(period.end_date());

    let range = match DateRange::new(start, end) {
        Ok(r) => r,
        Err(e) => {
            warn!(%start, %end, "Rejected inverted reporting range");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_date_range",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };

    let max_records = state.config.report.max_records;
    if payload.expenses.len() > max_records {
        warn!(
            count = payload.expenses.len(),
            max_records, "Rejected oversized expense batch"
        );
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(json!({
                "error": "too_many_records",
                "message": format!(
                    "Request contains {} records, maximum is {max_records}",
                    payload.expenses.len()
                )
            })),
        )
            .into_response();
    }

    if let Err(e) = validate_records(&payload.expenses) {
        warn!(error = %e, "Rejected expense batch failing validation");
        let status = StatusCode::from_u16(e.http_status_code())
            .unwrap_or(StatusCode::BAD_REQUEST);
        return (
            status,
            Json(json!({
                "error": e.error_code(),
                "message": e.to_string()
            })),
        )
            .into_response();
    }

    // Record selection happens here, not in the engine: the engine computes
    // over exactly what it is handed.
    let GenerateReportRequest {
        filter, expenses, ..
    } = payload;

    let selected: Vec<ExpenseRecord> = expenses
        .into_iter()
        .filter(|record| range.contains(record.date) && filter.matches(record))
        .collect();

    let report = Report606Engine::generate(&selected, &period.to_string(), range);
    let issues = submission_issues(&report);

    info!(
        period = %period,
        records = selected.len(),
        issues = issues.len(),
        "Report 606 generated"
    );

    (
        StatusCode::OK,
        Json(GenerateReportResponse {
            entries: report.entries,
            summary: report.summary,
            issues,
        }),
    )
        .into_response()
}

/// GET `/reports/606/codes` - List the fixed DGII classification catalogs.
async fn list_codes() -> Json<CodesResponse> {
    let document_types: Vec<CatalogCode> = DocumentKind::all()
        .iter()
        .map(|kind| CatalogCode {
            code: kind.code(),
            name: kind.name(),
        })
        .collect();

    let payment_methods: Vec<CatalogCode> = PaymentMethod::all()
        .iter()
        .map(|method| CatalogCode {
            code: method.code(),
            name: method.name(),
        })
        .collect();

    Json(CodesResponse {
        document_types,
        payment_methods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use contadom_shared::AppConfig;
    use contadom_shared::config::{ReportConfig, ServerConfig};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        test_state_with_max_records(ReportConfig::default().max_records)
    }

    fn test_state_with_max_records(max_records: usize) -> AppState {
        AppState {
            config: Arc::new(AppConfig {
                server: ServerConfig::default(),
                report: ReportConfig { max_records },
            }),
        }
    }

    /// Minimal expense record body: no supplier, no NCF, no explicit codes.
    fn expense_json(date: &str, category: &str, amount: &str) -> serde_json::Value {
        json!({
            "id": "01936b9f-7f3a-7c6e-9a3e-000000000001",
            "date": date,
            "category": category,
            "amount": amount,
            "status": "paid"
        })
    }

    async fn send_report(
        state: AppState,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app = Router::new().merge(routes()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reports/606")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    fn dec_field(value: &serde_json::Value) -> Decimal {
        value.as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn test_generate_report_happy_path() {
        let body = json!({
            "period": "202501",
            "expenses": [
                {
                    "id": "01936b9f-7f3a-7c6e-9a3e-000000000001",
                    "date": "2025-01-10",
                    "supplier": { "name": "Ferretería Central", "tax_id": "101000001" },
                    "category": "Goods",
                    "amount": "1180.00",
                    "document_type": "Invoice",
                    "ncf": "B0100000001",
                    "payment_method": "Cash",
                    "status": "paid"
                },
                {
                    "id": "01936b9f-7f3a-7c6e-9a3e-000000000002",
                    "date": "2025-01-20",
                    "supplier": { "name": "Ayuntamiento del Distrito", "tax_id": "131000002" },
                    "category": "Taxes",
                    "amount": "500.00",
                    "ncf": "B0200000002",
                    "payment_method": "Checks/Transfers/Deposit",
                    "status": "paid"
                }
            ]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["line"], 1);
        assert_eq!(entries[0]["tax_id"], "101000001");
        assert_eq!(entries[0]["supplier_name"], "Ferretería Central");
        assert_eq!(entries[0]["doc_type_code"], "01");
        assert_eq!(entries[0]["payment_method_code"], "01");
        assert_eq!(dec_field(&entries[0]["base_amount"]), dec!(1000));
        assert_eq!(dec_field(&entries[0]["itbis_amount"]), dec!(180));
        assert_eq!(dec_field(&entries[0]["total_amount"]), dec!(1180));

        // "Taxes" is outside the ITBIS catalog: full amount is base.
        assert_eq!(entries[1]["line"], 2);
        assert_eq!(entries[1]["payment_method_code"], "02");
        assert_eq!(dec_field(&entries[1]["base_amount"]), dec!(500));
        assert_eq!(dec_field(&entries[1]["itbis_amount"]), dec!(0));

        let summary = &json["summary"];
        assert_eq!(summary["total_records"], 2);
        assert_eq!(dec_field(&summary["total_base_amount"]), dec!(1500));
        assert_eq!(dec_field(&summary["total_itbis_amount"]), dec!(180));
        assert_eq!(dec_field(&summary["total_amount"]), dec!(1680));
        assert_eq!(summary["period"], "202501");
        assert_eq!(summary["start_date"], "2025-01-01");
        assert_eq!(summary["end_date"], "2025-01-31");

        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_report_empty_batch() {
        let body = json!({ "period": "202501", "expenses": [] });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["entries"].as_array().unwrap().is_empty());
        assert_eq!(json["summary"]["total_records"], 0);
        assert_eq!(dec_field(&json["summary"]["total_amount"]), dec!(0));
        assert_eq!(json["summary"]["period"], "202501");
        assert_eq!(json["summary"]["start_date"], "2025-01-01");
        assert_eq!(json["summary"]["end_date"], "2025-01-31");
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_report_rejects_malformed_period() {
        let body = json!({ "period": "2025-01", "expenses": [] });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_period");
    }

    #[tokio::test]
    async fn test_generate_report_rejects_inverted_range() {
        let body = json!({
            "period": "202501",
            "start_date": "2025-01-31",
            "end_date": "2025-01-01",
            "expenses": []
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_date_range");
    }

    #[tokio::test]
    async fn test_generate_report_rejects_oversized_batch() {
        let body = json!({
            "period": "202501",
            "expenses": [
                expense_json("2025-01-10", "Goods", "100.00"),
                expense_json("2025-01-11", "Goods", "200.00")
            ]
        });

        let (status, json) = send_report(test_state_with_max_records(1), body).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"], "too_many_records");
    }

    #[tokio::test]
    async fn test_generate_report_rejects_negative_amount() {
        let body = json!({
            "period": "202501",
            "expenses": [expense_json("2025-01-10", "Goods", "-5.00")]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "NEGATIVE_AMOUNT");
    }

    #[tokio::test]
    async fn test_generate_report_drops_records_outside_period() {
        let body = json!({
            "period": "202501",
            "expenses": [
                expense_json("2025-01-15", "Goods", "118.00"),
                expense_json("2025-02-05", "Goods", "236.00")
            ]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["date"], "2025-01-15");
        assert_eq!(json["summary"]["total_records"], 1);
        assert_eq!(dec_field(&json["summary"]["total_amount"]), dec!(118));
    }

    #[tokio::test]
    async fn test_generate_report_explicit_range_overrides_period() {
        let body = json!({
            "period": "202501",
            "start_date": "2025-01-01",
            "end_date": "2025-03-31",
            "expenses": [expense_json("2025-02-05", "Goods", "118.00")]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["entries"].as_array().unwrap().len(), 1);
        assert_eq!(json["summary"]["period"], "202501");
        assert_eq!(json["summary"]["start_date"], "2025-01-01");
        assert_eq!(json["summary"]["end_date"], "2025-03-31");
    }

    #[tokio::test]
    async fn test_generate_report_applies_category_filter() {
        let body = json!({
            "period": "202501",
            "filter": { "category": "Services" },
            "expenses": [
                expense_json("2025-01-10", "Goods", "118.00"),
                {
                    "id": "01936b9f-7f3a-7c6e-9a3e-000000000002",
                    "date": "2025-01-12",
                    "supplier": { "name": "Consultores Pérez", "tax_id": "101000003" },
                    "category": "Services",
                    "amount": "590.00",
                    "status": "paid"
                }
            ]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["line"], 1);
        assert_eq!(entries[0]["supplier_name"], "Consultores Pérez");
    }

    #[tokio::test]
    async fn test_generate_report_reports_submission_issues() {
        let body = json!({
            "period": "202501",
            "expenses": [expense_json("2025-01-10", "Goods", "118.00")]
        });

        let (status, json) = send_report(test_state(), body).await;

        assert_eq!(status, StatusCode::OK);

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries[0]["tax_id"], "-");
        assert_eq!(entries[0]["ncf"], "-");
        assert_eq!(entries[0]["doc_type_code"], "01");

        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["line"], 1);
        assert_eq!(issues[0]["kind"], "MISSING_TAX_ID");
        assert_eq!(issues[1]["kind"], "MISSING_NCF");
    }

    #[tokio::test]
    async fn test_list_codes() {
        let app = Router::new().merge(routes()).with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/606/codes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let document_types = json["document_types"].as_array().unwrap();
        assert_eq!(document_types.len(), 12);
        assert_eq!(document_types[0]["code"], "01");
        assert_eq!(document_types[0]["name"], "Invoice");

        let payment_methods = json["payment_methods"].as_array().unwrap();
        assert_eq!(payment_methods.len(), 7);
        assert_eq!(payment_methods[6]["code"], "07");
        assert_eq!(payment_methods[6]["name"], "Mixed");
    }
}
