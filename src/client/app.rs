use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::{helper::stored_token, user::get_profile};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let auth_context = use_context_provider(AuthContext::new);

    // Resolve a token left over from an earlier visit
    #[cfg(feature = "web")]
    {
        let mut auth_context = auth_context;
        let profile = use_resource(|| async move {
            match stored_token() {
                Some(_) => Some(get_profile().await),
                None => None,
            }
        });

        use_effect(move || match &*profile.read_unchecked() {
            Some(Some(Ok(user))) => auth_context.set(AuthState::Authenticated(user.clone())),
            Some(Some(Err(err))) => {
                tracing::debug!("Stored token rejected: {}", err);
                auth_context.logout();
            }
            Some(None) => auth_context.set(AuthState::NotLoggedIn),
            None => (),
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = auth_context;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Schedule sessions, track hours and invoice clients"
        }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
