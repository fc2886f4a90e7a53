//! Guided exercises and the professional-help panel.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::app_layout::AppLayout;
use crate::components::therapist_connect::TherapistConnect;

pub struct Exercise {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
    /// In-app destination, when the exercise has one.
    pub href: Option<&'static str>,
}

pub static EXERCISES: [Exercise; 6] = [
    Exercise {
        title: "Deep Breathing",
        description: "Calm your mind with guided breathing exercises",
        icon: "wind",
        duration: "5 mins",
        href: None,
    },
    Exercise {
        title: "Journaling",
        description: "Express your thoughts and emotions through writing",
        icon: "book-open",
        duration: "10 mins",
        href: Some("/journal"),
    },
    Exercise {
        title: "CBT Techniques",
        description: "Challenge negative thought patterns",
        icon: "brain",
        duration: "15 mins",
        href: None,
    },
    Exercise {
        title: "Mindfulness",
        description: "Bring awareness to the present moment",
        icon: "heart",
        duration: "10 mins",
        href: None,
    },
    Exercise {
        title: "Grounding",
        description: "Connect with your surroundings when anxious",
        icon: "footprints",
        duration: "5 mins",
        href: None,
    },
    Exercise {
        title: "Self-Compassion",
        description: "Practice kindness and understanding toward yourself",
        icon: "leaf",
        duration: "10 mins",
        href: None,
    },
];

#[component]
fn ExerciseCard(exercise: &'static Exercise) -> impl IntoView {
    let body = view! {
        <span class=format!("icon icon--{}", exercise.icon) aria-hidden="true"></span>
        <h3>{exercise.title}</h3>
        <p class="muted">{exercise.description}</p>
        <span class="exercise-card__duration">{exercise.duration}</span>
    };
    match exercise.href {
        Some(href) => view! { <a href=href class="exercise-card">{body}</a> }.into_any(),
        None => view! { <div class="exercise-card" id=exercise.icon>{body}</div> }.into_any(),
    }
}

#[component]
pub fn ExercisesPage() -> impl IntoView {
    view! {
        <AppLayout>
            <h1 class="page-title">"Exercises"</h1>
            <div class="grid grid--3">
                {EXERCISES.iter().map(|exercise| view! { <ExerciseCard exercise=exercise/> }).collect_view()}
            </div>
            <TherapistConnect/>
        </AppLayout>
    }
}
