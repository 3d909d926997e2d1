use crate::dashboards::d100_study_overview::api;
use crate::shared::components::{PageHeader, StatCard};
use contracts::dashboards::d100_study_overview::StudyOverviewResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overview dashboard: read-only counts from the backend
#[component]
pub fn StudyOverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<StudyOverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Load once on mount
    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_study_overview().await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let materials = Signal::derive(move || data.get().map(|d| d.materials));
    let chats = Signal::derive(move || data.get().map(|d| d.chats));
    let artifacts = Signal::derive(move || data.get().map(|d| d.generated_artifacts));
    let activity = Signal::derive(move || data.get().map(|d| d.activity_events));

    view! {
        <div style="padding: 20px;">
            <PageHeader title="Overview" subtitle="Your study activity at a glance">
                <></>
            </PageHeader>

            {move || {
                error.get().map(|e| view! {
                    <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })
            }}

            <div
                class="stat-grid"
                style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px;"
            >
                <StatCard label="Materials" icon_name="book" value=materials />
                <StatCard label="Assistant chats" icon_name="chat" value=chats />
                <StatCard label="Generated artifacts" icon_name="spark" value=artifacts />
                <StatCard label="Activity (7 days)" icon_name="activity" value=activity />
            </div>

            {move || {
                data.get().map(|d| view! {
                    <div style="margin-top: 24px; max-width: 360px;">
                        <h3 style="margin-bottom: 8px;">"Artifacts by kind"</h3>
                        {d.artifacts_by_kind.iter().map(|kc| view! {
                            <div style="display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid var(--colorNeutralStroke2);">
                                <span>{kc.kind.label()}</span>
                                <span style="font-weight: bold;">{kc.count}</span>
                            </div>
                        }).collect_view()}
                    </div>
                })
            }}

            {move || {
                (loading.get() && data.get().is_none()).then(|| view! {
                    <div style="margin-top: 16px; color: var(--colorNeutralForeground3);">
                        "Loading..."
                    </div>
                })
            }}
        </div>
    }
}
