//! Home page: site intro pointing visitors at the apps.

use axum::extract::State;
use axum::response::IntoResponse;
use maud::html;

use crate::render::components::{OpenGraphData, cta_block, page_shell, site_header};
use crate::state::AppState;

/// Render the home page.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;
    let description = format!(
        "Weekend ideas by city, crowd and mood from {}.",
        config.site_name
    );
    let canonical = format!("{}/", config.base_url);

    let og = OpenGraphData {
        title: &config.site_name,
        description: &description,
        og_type: "website",
    };

    let body = html! {
        (site_header(&config.site_name, &config.base_url))
        h1 class="page-title" { (config.site_name) }
        p class="subtitle" { (description) }
        (cta_block(&config.cta, &config.site_name))
    };

    page_shell(
        &config.site_name,
        &description,
        &canonical,
        og,
        body,
        &config.site_name,
    )
}
