use leptos::prelude::*;

use crate::api::HealthReport;

/// Reachability of the analysis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Online,
    Degraded,
    Offline,
}

impl ServiceState {
    pub fn from_report(report: Option<&HealthReport>) -> Self {
        match report {
            Some(r) if r.is_healthy() => ServiceState::Online,
            Some(_) => ServiceState::Degraded,
            None => ServiceState::Offline,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ServiceState::Online => "\u{2713}",
            ServiceState::Degraded => "~",
            ServiceState::Offline => "\u{2717}",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ServiceState::Online => "status-badge status-pass",
            ServiceState::Degraded => "status-badge status-unknown",
            ServiceState::Offline => "status-badge status-fail",
        }
    }
}

/// A single line in the service status list.
#[component]
pub fn ServiceStatusRow(
    #[prop(into)] label: String,
    state: ServiceState,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="health-item">
            <span class=state.class()>{state.icon()}</span>
            <span class="health-name">{label}</span>
            {detail.map(|d| view! { <span class="health-detail">{d}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: &str) -> HealthReport {
        HealthReport {
            status: status.to_string(),
            message: String::new(),
            endpoints: Default::default(),
        }
    }

    #[test]
    fn test_state_from_report() {
        assert_eq!(ServiceState::from_report(Some(&report("healthy"))), ServiceState::Online);
        assert_eq!(ServiceState::from_report(Some(&report("Healthy"))), ServiceState::Online);
        assert_eq!(ServiceState::from_report(Some(&report("degraded"))), ServiceState::Degraded);
        assert_eq!(ServiceState::from_report(None), ServiceState::Offline);
    }
}
