//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here through `utoipa-axum` so the OpenAPI document is built
//! from the same handler annotations that serve requests. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        assembly, block, booth, booth_survey, booth_volunteer, booth_vote, candidate, division,
        government, hierarchy, influencer, parliament, party, polygon, potential_candidate, state,
        status,
    },
    model::app::AppState,
};

/// Builds the API router with Swagger UI.
///
/// Reads are public. Writes require a bearer token and an admin role, see
/// [`AuthUser`](crate::server::model::auth::AuthUser).
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Constituency", description = "Constituency administration API"),
        tags(
            (name = state::STATE_TAG, description = "State hierarchy root"),
            (name = division::DIVISION_TAG, description = "Divisions of a state"),
            (
                name = parliament::PARLIAMENT_TAG,
                description = "Parliamentary constituencies of a division"
            ),
            (name = assembly::ASSEMBLY_TAG, description = "Assembly constituencies of a parliament"),
            (name = block::BLOCK_TAG, description = "Blocks of an assembly"),
            (name = booth::BOOTH_TAG, description = "Polling booths of a block"),
            (name = party::PARTY_TAG, description = "Political parties"),
            (name = candidate::CANDIDATE_TAG, description = "Election candidates"),
            (name = government::GOVERNMENT_TAG, description = "Government projects"),
            (name = influencer::INFLUENCER_TAG, description = "Local influencers"),
            (name = status::STATUS_TAG, description = "Record statuses"),
            (name = booth_survey::BOOTH_SURVEY_TAG, description = "Booth surveys"),
            (name = booth_volunteer::BOOTH_VOLUNTEER_TAG, description = "Booth volunteers"),
            (name = booth_vote::BOOTH_VOTE_TAG, description = "Vote counts per candidate and booth"),
            (name = potential_candidate::POTENTIAL_CANDIDATE_TAG, description = "Potential candidates"),
            (name = hierarchy::HIERARCHY_TAG, description = "Cascading hierarchy filter"),
            (name = polygon::DISTRICT_POLYGON_TAG, description = "District boundary polygons"),
            (name = polygon::PARLIAMENT_POLYGON_TAG, description = "Parliament boundary polygons"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(state::list_states, state::create_state))
        .routes(routes!(state::get_state, state::update_state, state::delete_state))
        .routes(routes!(division::list_divisions, division::create_division))
        .routes(routes!(
            division::get_division,
            division::update_division,
            division::delete_division
        ))
        .routes(routes!(parliament::list_parliaments, parliament::create_parliament))
        .routes(routes!(
            parliament::get_parliament,
            parliament::update_parliament,
            parliament::delete_parliament
        ))
        .routes(routes!(assembly::list_assemblies, assembly::create_assembly))
        .routes(routes!(
            assembly::get_assembly,
            assembly::update_assembly,
            assembly::delete_assembly
        ))
        .routes(routes!(block::list_blocks, block::create_block))
        .routes(routes!(block::get_block, block::update_block, block::delete_block))
        .routes(routes!(booth::list_booths, booth::create_booth))
        .routes(routes!(booth::get_booth, booth::update_booth, booth::delete_booth))
        .routes(routes!(booth::list_booths_by_block))
        .routes(routes!(party::list_parties, party::create_party))
        .routes(routes!(party::get_party, party::update_party, party::delete_party))
        .routes(routes!(candidate::list_candidates, candidate::create_candidate))
        .routes(routes!(
            candidate::get_candidate,
            candidate::update_candidate,
            candidate::delete_candidate
        ))
        .routes(routes!(candidate::list_candidates_by_assembly))
        .routes(routes!(government::list_governments, government::create_government))
        .routes(routes!(
            government::get_government,
            government::update_government,
            government::delete_government
        ))
        .routes(routes!(government::list_governments_by_state))
        .routes(routes!(government::list_governments_by_assembly))
        .routes(routes!(influencer::list_influencers, influencer::create_influencer))
        .routes(routes!(
            influencer::get_influencer,
            influencer::update_influencer,
            influencer::delete_influencer
        ))
        .routes(routes!(influencer::list_influencers_by_state))
        .routes(routes!(influencer::list_influencers_by_assembly))
        .routes(routes!(influencer::list_influencers_by_booth))
        .routes(routes!(status::list_statuses, status::create_status))
        .routes(routes!(status::get_status, status::update_status, status::delete_status))
        .routes(routes!(status::toggle_status_active))
        .routes(routes!(booth_survey::list_booth_surveys, booth_survey::create_booth_survey))
        .routes(routes!(
            booth_survey::get_booth_survey,
            booth_survey::update_booth_survey,
            booth_survey::delete_booth_survey
        ))
        .routes(routes!(
            booth_volunteer::list_booth_volunteers,
            booth_volunteer::create_booth_volunteer
        ))
        .routes(routes!(
            booth_volunteer::get_booth_volunteer,
            booth_volunteer::update_booth_volunteer,
            booth_volunteer::delete_booth_volunteer
        ))
        .routes(routes!(booth_vote::list_booth_votes, booth_vote::create_booth_vote))
        .routes(routes!(
            booth_vote::get_booth_vote,
            booth_vote::update_booth_vote,
            booth_vote::delete_booth_vote
        ))
        .routes(routes!(
            potential_candidate::list_potential_candidates,
            potential_candidate::create_potential_candidate
        ))
        .routes(routes!(
            potential_candidate::get_potential_candidate,
            potential_candidate::update_potential_candidate,
            potential_candidate::delete_potential_candidate
        ))
        .routes(routes!(hierarchy::get_hierarchy))
        .routes(routes!(hierarchy::resolve_hierarchy))
        .routes(routes!(polygon::list_district_polygons, polygon::create_district_polygons))
        .routes(routes!(
            polygon::get_district_polygon,
            polygon::update_district_polygon,
            polygon::delete_district_polygon
        ))
        .routes(routes!(polygon::get_district_polygon_collection))
        .routes(routes!(polygon::find_district_polygons_by_name))
        .routes(routes!(polygon::find_district_polygons_by_district))
        .routes(routes!(polygon::list_parliament_polygons, polygon::create_parliament_polygons))
        .routes(routes!(
            polygon::get_parliament_polygon,
            polygon::update_parliament_polygon,
            polygon::delete_parliament_polygon
        ))
        .routes(routes!(polygon::get_parliament_polygon_collection))
        .routes(routes!(polygon::find_parliament_polygons_by_name))
        .routes(routes!(polygon::find_parliament_polygons_by_district))
        .routes(routes!(polygon::find_parliament_polygons_by_vs_code))
        .routes(routes!(polygon::find_district_polygons_containing))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
