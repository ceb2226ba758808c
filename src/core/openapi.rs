use utoipa::{Modify, OpenApi};

use crate::features::sanitation::{
    dtos as sanitation_dtos, handlers as sanitation_handlers, models as sanitation_models,
};
use crate::features::waste::{dtos as waste_dtos, handlers as waste_handlers, models as waste_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Waste classification
        waste_handlers::classify_image,
        waste_handlers::classify_text,
        waste_handlers::get_history,
        // Disposal rules
        waste_handlers::list_disposal_rules,
        waste_handlers::get_disposal_rule,
        // Sanitation
        sanitation_handlers::submit_report,
        sanitation_handlers::get_analytics,
        sanitation_handlers::list_reports,
        sanitation_handlers::get_reports_by_location,
    ),
    components(
        schemas(
            Meta,
            // Waste
            waste_models::WasteCategory,
            waste_models::InputType,
            waste_dtos::ClassifyTextDto,
            waste_dtos::ClassifyImageDto,
            waste_dtos::ClassificationResultDto,
            waste_dtos::ClassificationRecordDto,
            waste_dtos::DisposalRuleResponseDto,
            ApiResponse<Vec<waste_dtos::ClassificationRecordDto>>,
            ApiResponse<Vec<waste_dtos::DisposalRuleResponseDto>>,
            ApiResponse<waste_dtos::DisposalRuleResponseDto>,
            // Sanitation
            sanitation_models::IssueSeverity,
            sanitation_models::ReportStatus,
            sanitation_models::Trend,
            sanitation_dtos::CreateIssueReportDto,
            sanitation_dtos::IssueReportResponseDto,
            sanitation_dtos::AreaAnalyticsDto,
            ApiResponse<Vec<sanitation_dtos::IssueReportResponseDto>>,
        )
    ),
    tags(
        (name = "waste", description = "Waste classification and disposal guidance"),
        (name = "sanitation", description = "Sanitation issue reports and area analytics"),
    ),
    info(
        title = "Waste Sorting API",
        version = "0.1.0",
        description = "API documentation for the waste sorting backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
