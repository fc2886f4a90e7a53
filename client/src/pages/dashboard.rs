//! Progress dashboard: weekly mood and sleep, activity, upcoming sessions.
//!
//! All figures are sample data until a tracking backend exists.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::line_chart::LineChart;
use crate::util::chart::{ChartFrame, Point, Trend, TrendBadge};

pub const MOOD_SERIES: [Point; 7] = [
    ("Mon", 6.0),
    ("Tue", 7.0),
    ("Wed", 5.0),
    ("Thu", 8.0),
    ("Fri", 7.0),
    ("Sat", 9.0),
    ("Sun", 8.0),
];

pub const SLEEP_SERIES: [Point; 7] = [
    ("Mon", 7.5),
    ("Tue", 6.8),
    ("Wed", 8.0),
    ("Thu", 7.2),
    ("Fri", 6.5),
    ("Sat", 8.5),
    ("Sun", 7.8),
];

const MOOD_TREND: TrendBadge = TrendBadge { trend: Trend::Up, label: "15% better" };
const SLEEP_TREND: TrendBadge = TrendBadge { trend: Trend::Down, label: "5% less" };

/// Share of weekly goals met, in percent.
const ACTIVITY: [(&str, u8); 3] = [("Meditation", 85), ("Journaling", 60), ("Exercises", 40)];

const SESSIONS: [(&str, &str); 2] = [
    ("Guided Meditation", "Tomorrow, 9:00 AM"),
    ("Stress Relief Workshop", "Fri, 11:00 AM"),
];

#[component]
fn ChartCard(title: &'static str, badge: TrendBadge, series: &'static [Point], frame: ChartFrame, dot_radius: f64) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3>{title}</h3>
                <span class=badge.class()>{badge.arrow()} " " {badge.label}</span>
            </div>
            <LineChart series=series frame=frame dot_radius=dot_radius/>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let small = ChartFrame { height: 110.0, ..ChartFrame::default() };

    view! {
        <AppLayout>
            <h1 class="page-title">"Your Progress"</h1>
            <div class="dashboard">
                <ChartCard title="Mood Tracker" badge=MOOD_TREND series=&MOOD_SERIES frame=ChartFrame::default() dot_radius=4.0/>
                <div class="grid grid--2">
                    <ChartCard title="Sleep Quality" badge=SLEEP_TREND series=&SLEEP_SERIES frame=small dot_radius=3.0/>
                    <div class="card">
                        <h3>"Weekly Activity"</h3>
                        {ACTIVITY
                            .iter()
                            .map(|(label, pct)| view! {
                                <div class="activity">
                                    <span>{*label}</span>
                                    <div class="activity__track">
                                        <div class="activity__bar" style=format!("width: {pct}%")></div>
                                    </div>
                                    <span class="activity__value">{format!("{pct}%")}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="card">
                    <h3>"Upcoming Sessions"</h3>
                    {SESSIONS
                        .iter()
                        .map(|(title, when)| view! {
                            <div class="session-row">
                                <span class="icon icon--calendar" aria-hidden="true"></span>
                                <div class="session-row__body">
                                    <h4>{*title}</h4>
                                    <p class="muted">{*when}</p>
                                </div>
                                <button class="button button--outline button--small">"Join"</button>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </AppLayout>
    }
}
