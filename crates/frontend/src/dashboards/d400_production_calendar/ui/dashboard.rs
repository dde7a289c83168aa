use leptos::prelude::*;
use thaw::*;

use super::calendar_grid::CalendarGrid;
use super::filter_bar::FilterBar;
use super::project_legend::ProjectLegend;
use crate::dashboards::d400_production_calendar::overdue::use_overdue_evaluation;
use crate::dashboards::d400_production_calendar::state::use_weekly_calendar;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_week_range;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Weekly production calendar.
#[component]
pub fn ProductionCalendarDashboard() -> impl IntoView {
    let calendar = use_weekly_calendar();
    let overdue = use_overdue_evaluation(calendar.days);

    let week_label = Signal::derive(move || {
        calendar
            .query
            .with(|q| Some(format_week_range(q.week_start(), q.week_end())))
    });

    view! {
        <PageFrame page_id="d400_production_calendar--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Production calendar" subtitle=week_label icon_name="calendar">
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Show when=move || overdue.checking.get()>
                        <span class="calendar__checking" title="Checking overdue issues">
                            <Spinner size=SpinnerSize::Tiny />
                            " Checking overdue..."
                        </span>
                    </Show>
                    <ButtonGroup>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| calendar.go_to_previous_week()
                        >
                            {icon("chevron-left")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| calendar.go_to_today()
                        >
                            "Today"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| calendar.go_to_next_week()
                        >
                            {icon("chevron-right")}
                        </Button>
                    </ButtonGroup>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| calendar.refetch()
                        disabled=calendar.loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Flex>
            </PageHeader>

            <FilterBar calendar=calendar />
            <ErrorBanner error=calendar.error />

            <Show when=move || calendar.loading.get()>
                <div class="calendar__loading">
                    <Spinner />
                    " Loading week..."
                </div>
            </Show>

            <Show when=move || calendar.error.with(|e| e.is_none())>
                <ProjectLegend projects=calendar.projects />
                <CalendarGrid days=calendar.days overdue=overdue />
            </Show>
        </PageFrame>
    }
}
