use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::sanitation::dtos::{CreateIssueReportDto, IssueReportResponseDto};
use crate::features::sanitation::services::SanitationService;
use crate::shared::constants::DEFAULT_REPORT_LIMIT;
use crate::shared::types::{ApiResponse, LimitQuery, Meta};

/// Submit a sanitation issue report
#[utoipa::path(
    post,
    path = "/api/sanitation/report",
    tag = "sanitation",
    request_body = CreateIssueReportDto,
    responses(
        (status = 201, description = "Report stored", body = IssueReportResponseDto),
        (status = 400, description = "Missing required fields or invalid severity"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn submit_report(
    State(service): State<Arc<SanitationService>>,
    AppJson(dto): AppJson<CreateIssueReportDto>,
) -> Result<(StatusCode, Json<IssueReportResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.submit(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(report.into())))
}

/// List recent sanitation reports
#[utoipa::path(
    get,
    path = "/api/sanitation/reports",
    tag = "sanitation",
    params(LimitQuery),
    responses(
        (status = 200, description = "Reports, newest first", body = ApiResponse<Vec<IssueReportResponseDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_reports(
    State(service): State<Arc<SanitationService>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ApiResponse<Vec<IssueReportResponseDto>>>> {
    let reports = service
        .list_reports(query.resolve(DEFAULT_REPORT_LIMIT))
        .await?;
    Ok(Json(envelope(reports.into_iter().map(Into::into).collect())))
}

/// List reports whose location contains the given text (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/sanitation/reports/{location}",
    tag = "sanitation",
    params(
        ("location" = String, Path, description = "Text to look for in the report location, e.g. `Area B`")
    ),
    responses(
        (status = 200, description = "Matching reports, newest first", body = ApiResponse<Vec<IssueReportResponseDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_reports_by_location(
    State(service): State<Arc<SanitationService>>,
    Path(location): Path<String>,
) -> Result<Json<ApiResponse<Vec<IssueReportResponseDto>>>> {
    let reports = service.reports_by_location(&location).await?;
    Ok(Json(envelope(reports.into_iter().map(Into::into).collect())))
}

fn envelope(reports: Vec<IssueReportResponseDto>) -> ApiResponse<Vec<IssueReportResponseDto>> {
    let total = reports.len() as i64;
    ApiResponse::success(Some(reports), None, Some(Meta { total }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::sanitation::routes;
    use crate::features::sanitation::services::SanitationService;
    use crate::shared::test_helpers::InMemoryReportStore;

    fn server() -> TestServer {
        let service = Arc::new(SanitationService::new(Arc::new(
            InMemoryReportStore::default(),
        )));
        TestServer::new(routes(service)).unwrap()
    }

    fn body(location: &str, severity: &str) -> Value {
        json!({
            "location": location,
            "issueType": "Overflowing bin",
            "description": "Not collected for a week",
            "severity": severity,
        })
    }

    #[tokio::test]
    async fn test_submit_returns_created_record() {
        let server = server();

        let response = server
            .post("/api/sanitation/report")
            .json(&body("Area B, Street 5", "High"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let report: Value = response.json();
        assert_eq!(report["location"], "Area B, Street 5");
        assert_eq!(report["issueType"], "Overflowing bin");
        assert_eq!(report["severity"], "High");
        assert_eq!(report["status"], "Pending");
        assert!(report["id"].is_string());
        assert!(report["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_severity() {
        let server = server();

        let response = server
            .post("/api/sanitation/report")
            .json(&body("Area B", "Critical"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_and_blank_fields() {
        let server = server();

        let missing = server
            .post("/api/sanitation/report")
            .json(&json!({ "location": "Area A", "severity": "Low" }))
            .await;
        missing.assert_status(StatusCode::BAD_REQUEST);

        let blank = server
            .post("/api/sanitation/report")
            .json(&body("  ", "Low"))
            .await;
        blank.assert_status(StatusCode::BAD_REQUEST);
        let envelope: Value = blank.json();
        assert_eq!(envelope["success"], false);
    }

    #[tokio::test]
    async fn test_analytics_returns_bare_sorted_list() {
        let server = server();

        for (location, severity) in [("Area C", "High"), ("area a", "Low"), ("Market", "Medium")] {
            server
                .post("/api/sanitation/report")
                .json(&body(location, severity))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/sanitation/analytics").await;

        response.assert_status_ok();
        let rows: Value = response.json();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["area"], "Area A");
        assert_eq!(rows[0]["cleanlinessScore"], 80);
        assert_eq!(rows[0]["riskProbability"], 15);
        assert_eq!(rows[0]["complaintCount"], 1);
        assert_eq!(rows[0]["trend"], "improving");
        assert_eq!(rows[2]["area"], "Other");
    }

    #[tokio::test]
    async fn test_analytics_sample_rows_when_empty() {
        let response = server().get("/api/sanitation/analytics").await;

        response.assert_status_ok();
        let rows: Value = response.json();
        assert_eq!(rows.as_array().unwrap().len(), 5);
        assert_eq!(rows[1]["area"], "Area B");
        assert_eq!(rows[1]["trend"], "declining");
    }

    #[tokio::test]
    async fn test_list_reports_newest_first_with_limit() {
        let server = server();

        for location in ["Area A", "Area B", "Area C"] {
            server
                .post("/api/sanitation/report")
                .json(&body(location, "Low"))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/api/sanitation/reports")
            .add_query_param("limit", 2)
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["meta"]["total"], 2);
        assert_eq!(envelope["data"][0]["location"], "Area C");
        assert_eq!(envelope["data"][1]["location"], "Area B");
    }

    #[tokio::test]
    async fn test_list_reports_with_invalid_limit_uses_default() {
        let server = server();

        server
            .post("/api/sanitation/report")
            .json(&body("Area A", "Low"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/sanitation/reports?limit=abc").await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["success"], true);
        assert_eq!(envelope["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_reports_by_location() {
        let server = server();

        for location in ["Area B, Street 5", "area b market", "Area C"] {
            server
                .post("/api/sanitation/report")
                .json(&body(location, "Medium"))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/sanitation/reports/AREA%20B").await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["meta"]["total"], 2);
        assert_eq!(envelope["data"][0]["location"], "area b market");
    }
}
