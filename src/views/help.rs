use crate::prelude::*;

use crate::{utils::CCStr, views::TitledView, Route};

const DOCUMENTATION_URL: &str = "https://docs.grant-desk.org/";

struct HelpTopic {
    anchor: &'static str,
    title: &'static str,
    body: &'static [&'static str],
    route: Route,
}

fn topics() -> [HelpTopic; 4] {
    [
        HelpTopic {
            anchor: "projects",
            title: "Projects",
            body: &[
                "A project carries a budget and a lifecycle: draft, active, on hold and completed.",
                "Create one from the Projects page and open it to attach contracts.",
            ],
            route: Route::ProjectDashboardView {},
        },
        HelpTopic {
            anchor: "contracts",
            title: "Contracts",
            body: &[
                "Contracts bind a project to a vendor for a fixed amount.",
                "Only signed contracts accept payment requests.",
            ],
            route: Route::ContractListView {},
        },
        HelpTopic {
            anchor: "requests",
            title: "Payment requests",
            body: &[
                "A request is drawn on a signed contract and never exceeds its amount.",
                "Its progress steps show where it stands in the review workflow.",
            ],
            route: Route::RequestListView {},
        },
        HelpTopic {
            anchor: "profile",
            title: "Your profile",
            body: &["Keep your name and email up to date, reviewers use them to reach you."],
            route: Route::EditProfileView {},
        },
    ]
}

#[component]
pub fn HelpView() -> Element {
    log::debug!("HelpView Rendered");
    use_drop(|| log::debug!("HelpView Dropped"));

    let topics = topics();

    rsx! {
        TitledView {
            title: CCStr::from("Help"),
            subtitle: CCStr::from("Getting around Grant Desk"),
            right: rsx! {
                button {
                    class: "btn btn-outline btn-primary",
                    onclick: move |_| {
                        match open::that_detached(DOCUMENTATION_URL) {
                            Ok(()) => alert_info("The documentation opened in your browser"),
                            Err(e) => {
                                log::warn!("Could not open {DOCUMENTATION_URL}: {e}");
                                alert_warn(
                                    format!("Could not open the documentation, it lives at {DOCUMENTATION_URL}"),
                                );
                            }
                        }
                    },
                    "Full documentation"
                }
            },
            div { class: "flex gap-8",
                aside { class: "w-56 shrink-0",
                    ul { class: "menu bg-base-200 rounded-box w-full",
                        for topic in topics.iter() {
                            li { key: "{topic.anchor}",
                                a { href: "#{topic.anchor}", {topic.title} }
                            }
                        }
                    }
                }
                div { class: "grow flex flex-col gap-6",
                    for topic in topics.iter() {
                        div {
                            key: "{topic.anchor}",
                            id: topic.anchor,
                            class: "card card-border bg-base-100",
                            div { class: "card-body",
                                h3 { class: "card-title", {topic.title} }
                                for line in topic.body {
                                    p { {*line} }
                                }
                                div { class: "card-actions justify-end",
                                    Link { class: "btn btn-sm btn-ghost", to: topic.route.clone(), "Go there" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
