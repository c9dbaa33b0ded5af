use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        Sidebar,
    },
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Employer,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresEmployer() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Employer] }
    }
}

fn check_permissions(state: &AuthState, required_permissions: &[Permission]) -> bool {
    state.is_authenticated()
        && required_permissions.iter().all(|perm| match perm {
            Permission::LoggedIn => true,
            Permission::Employer => state.is_employer(),
        })
}

/// App shell for logged in pages: sidebar plus the routed page.
///
/// Redirects to the login page once the stored token turns out to be missing or invalid.
#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read().clone();
    let fetch_completed = !matches!(state, AuthState::Initializing);
    let logged_in = state.is_authenticated();
    let has_required_permissions = check_permissions(&state, &permissions);

    use_effect(use_reactive!(|(logged_in, fetch_completed)| {
        if fetch_completed && !logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "Only employers can open this page".to_string() }
        } else if logged_in {
            div {
                class: "flex min-h-screen",
                Sidebar {  }
                main {
                    class: "flex-1 min-w-0",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
