use axum::{extract::State, response::Html};
use std::fmt::Write;
use sysdwitch_domain::ServiceStatus;
use tracing::{debug, instrument};

use crate::state::AppState;

const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/index.html");
const SERVICES_PLACEHOLDER: &str = "{{services}}";

#[instrument(skip(state), name = "dashboard")]
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let statuses = state.get_all_services_status.execute().await;
    debug!(count = statuses.len(), "Rendering dashboard");
    Html(render_dashboard(&statuses))
}

pub fn render_dashboard(statuses: &[ServiceStatus]) -> String {
    let mut rows = String::with_capacity(statuses.len() * 384);
    for status in statuses {
        render_row(&mut rows, status);
    }
    DASHBOARD_TEMPLATE.replacen(SERVICES_PLACEHOLDER, &rows, 1)
}

fn render_row(out: &mut String, status: &ServiceStatus) {
    let name = escape_html(status.name().as_str());
    let label = escape_html(status.name().display_name());
    let state = escape_html(status.status());
    let (start_disabled, stop_disabled) = if status.is_active() {
        (" disabled", "")
    } else {
        ("", " disabled")
    };

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"
      <li class="service" data-service="{name}">
        <span class="service-name">{label}</span>
        <span class="service-status status-{state}">{state}</span>
        <div class="service-actions">
          <button type="button" class="btn btn-start" data-action="start"{start_disabled}>Start</button>
          <button type="button" class="btn btn-stop" data-action="stop"{stop_disabled}>Stop</button>
        </div>
      </li>"#
    );
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
