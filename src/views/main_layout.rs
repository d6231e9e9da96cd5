use crate::prelude::*;

use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    let controller = use_loading_controller();
    let skeleton = state_management::use_app_config().skeleton;

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "relative min-h-dvh",
            header { class: "bg-base-100 fixed top-0 w-full z-20 shadow-lg shadow-base-content/10",
                NavBar {}
            }
            main { class: "pt-16 pb-16 mx-8", Outlet::<Route> {} }
            LoadingOverlay { controller, options: skeleton }
            footer { class: "absolute bottom-px w-full h-12 px-8 z-0",
                div { class: "h-px border-t border-solid border-gray-500" }
                Footer {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        div { class: "h-12 px-4 flex flex-row gap-2",
            div { class: "text-2xl font-black content-center pr-4", "Grant Desk" }
            NavLink { route: Route::HomeView {}, "Home" }
            NavLink { route: Route::ProjectDashboardView {}, "Projects" }
            NavLink { route: Route::ContractListView {}, "Contracts" }
            NavLink { route: Route::RequestListView {}, "Requests" }
            div { class: "grow" }
            NavLink { route: Route::HelpView {}, "Help" }
            NavLink { route: Route::EditProfileView {}, "Profile" }
            DarkModeToggle {}
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        div { class: "basis-10 content-center flex",
            Link {
                class: "h-full px-4 content-center text-lg text-nowrap font-bold uppercase hover:bg-primary/10",
                active_class: "bg-primary/10 text-primary",
                to: route,
                {children}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "h-full text-primary text-right content-center", "Grant Desk" }
    }
}

#[component]
fn DarkModeToggle() -> Element {
    let dark = matches!(state_management::THEME(), Theme::Dark);
    rsx! {
        label { class: "swap swap-rotate content-center px-2",
            input {
                r#type: "checkbox",
                name: "theme",
                class: "theme-controller",
                value: "dark",
                checked: dark,
                onchange: move |_| {
                    let next = state_management::THEME.peek().toggled();
                    log::debug!("Switching theme to {next:?}");
                    *state_management::THEME.write() = next;
                },
            }
            span { class: "swap-on text-sm font-bold uppercase", "Dark" }
            span { class: "swap-off text-sm font-bold uppercase", "Light" }
        }
    }
}
