//! Step-by-step onboarding tour overlay.

use crate::state::AppState;
use cde_utils::shortcuts;
use dioxus::prelude::*;

/// One step of the guided tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub body: &'static str,
}

/// The fixed tour script, in display order. The final step lists the
/// keyboard shortcuts.
pub fn tour_steps() -> &'static [TourStep] {
    &[
        TourStep {
            title: "Welcome to the Climate Data Explorer",
            body: "Explore over a century of monthly temperature records from \
                   weather stations around the world. This short tour shows \
                   you around.",
        },
        TourStep {
            title: "Pick your stations",
            body: "Use the station list on the left to select one or more \
                   stations. Charts, statistics, and AI insights all follow \
                   your selection.",
        },
        TourStep {
            title: "Filter and zoom",
            body: "Narrow the year range, or zoom to a window around a center \
                   year. Switch between annual aggregates and raw monthly \
                   readings; in annual view you can overlay a ±1σ band.",
        },
        TourStep {
            title: "Ask the AI",
            body: "Generate narrative insights about trends and anomalies, or \
                   open the chat sidebar to ask free-form questions about the \
                   selected data.",
        },
        TourStep {
            title: "Keyboard shortcuts",
            body: "",
        },
    ]
}

/// Modal tour overlay. Rendered only while `tour_step` is set; the
/// `?tour=` URL parameter or the `?` shortcut opens it.
#[component]
pub fn Tour() -> Element {
    let mut state = use_context::<AppState>();
    let Some(step_index) = (state.tour_step)() else {
        return rsx! {};
    };

    let steps = tour_steps();
    let step = steps[step_index.min(steps.len() - 1)];
    let last = step_index + 1 >= steps.len();

    let shortcut_rows = shortcuts::bindings().iter().map(|(key, description)| {
        rsx! {
            li { key: "{key}",
                kbd { "{key}" }
                " {description}"
            }
        }
    });

    rsx! {
        div {
            class: "tour-backdrop",
            role: "dialog",
            aria_modal: "true",
            div {
                class: "tour-card",
                p { class: "tour-progress", "Step {step_index + 1} of {steps.len()}" }
                h2 { style: "margin: 0; font-size: 17px;", "{step.title}" }
                if step.body.is_empty() {
                    ul { class: "shortcut-list", {shortcut_rows} }
                } else {
                    p { style: "margin: 0; color: var(--text-dim);", "{step.body}" }
                }
                div {
                    class: "tour-actions",
                    button {
                        class: "btn ghost",
                        onclick: move |_| state.tour_step.set(None),
                        "Skip"
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        if step_index > 0 {
                            button {
                                class: "btn",
                                onclick: move |_| state.tour_step.set(Some(step_index - 1)),
                                "Back"
                            }
                        }
                        button {
                            class: "btn primary",
                            onclick: move |_| {
                                if last {
                                    state.tour_step.set(None);
                                } else {
                                    state.tour_step.set(Some(step_index + 1));
                                }
                            },
                            if last { "Finish" } else { "Next" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_has_at_least_welcome_and_shortcuts() {
        let steps = tour_steps();
        assert!(steps.len() >= 2);
        assert!(steps[0].title.contains("Welcome"));
        // Shortcut step is last and has no prose body
        assert!(steps[steps.len() - 1].body.is_empty());
    }

    #[test]
    fn all_prose_steps_have_titles() {
        for step in tour_steps() {
            assert!(!step.title.is_empty());
        }
    }
}
