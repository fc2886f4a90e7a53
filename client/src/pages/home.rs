//! Landing page: greeting, quick actions, and the public marketing sections.

use leptos::prelude::*;

use crate::components::homepage_layout::HomepageLayout;
use crate::util::clock;

struct QuickAction {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    href: &'static str,
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { title: "Talk to AI", description: "Share what's on your mind", icon: "message-square", href: "/chat" },
    QuickAction { title: "Track Progress", description: "View your wellness journey", icon: "bar-chart", href: "/dashboard" },
    QuickAction { title: "Journal", description: "Write your thoughts", icon: "book-open", href: "/journal" },
    QuickAction { title: "Get Help", description: "Connect with professionals", icon: "help-circle", href: "/exercises" },
];

const MOODS: [&str; 4] = ["\u{1f60a} Good", "\u{1f610} Neutral", "\u{1f614} Down", "\u{1f630} Anxious"];

const FEATURES: [(&str, &str); 3] = [
    ("Always-on support", "A companion that listens whenever you need to talk, day or night."),
    ("Track your wellbeing", "See how your mood and sleep change over the week."),
    ("Guided exercises", "Breathing, grounding, and CBT techniques in a few minutes a day."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("Writing in the journal every evening helped me notice what drains me.", "Sam, student"),
    ("The breathing exercises got me through a hard week at work.", "Priya, nurse"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    // Filled after mount so server and client render the same markup.
    let greeting = RwSignal::new("Hello");
    Effect::new(move |_| greeting.set(clock::greeting_for_hour(clock::current_hour())));

    view! {
        <HomepageLayout>
            <section class="home__hero">
                <h1>{move || greeting.get()}</h1>
                <p class="muted">"How are you feeling today?"</p>
                <div class="home__moods">
                    {MOODS.iter().map(|mood| view! { <button class="mood-button">{*mood}</button> }).collect_view()}
                </div>
            </section>

            <section class="home__actions">
                <h2>"Quick Actions"</h2>
                <div class="grid grid--2">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|action| {
                            view! {
                                <a href=action.href class="quick-action">
                                    <span class=format!("icon icon--{}", action.icon) aria-hidden="true"></span>
                                    <div>
                                        <h3>{action.title}</h3>
                                        <p class="muted">{action.description}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__inspiration">
                <h2>"Daily Inspiration"</h2>
                <blockquote>
                    "You don't have to control your thoughts. You just have to stop letting them control you."
                </blockquote>
                <cite class="muted">"Dan Millman"</cite>
            </section>

            <section id="features" class="home__features">
                <h2>"Features"</h2>
                <div class="grid grid--3">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p class="muted">{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="testimonials" class="home__testimonials">
                <h2>"Testimonials"</h2>
                {TESTIMONIALS
                    .iter()
                    .map(|(quote, who)| view! {
                        <figure class="testimonial">
                            <blockquote>{*quote}</blockquote>
                            <figcaption class="muted">{*who}</figcaption>
                        </figure>
                    })
                    .collect_view()}
            </section>

            <section id="help" class="home__help">
                <h2>"Today's Recommendation"</h2>
                <h3>"5-Minute Breathing Exercise"</h3>
                <p class="muted">"Take a moment to reset and calm your mind with this quick breathing technique."</p>
                <a href="/exercises" class="button button--primary">"Start Now"</a>
            </section>
        </HomepageLayout>
    }
}
